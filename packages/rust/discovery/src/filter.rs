//! Filename filtering by explicit regex or named preset.

use std::path::Path;

use files2md_shared::{CandidatePath, Files2mdError, PatternSource, PresetsConfig, Result};
use regex::Regex;
use tracing::debug;

/// A compiled filename filter. Matches against the final path component only.
#[derive(Debug, Clone)]
pub struct NameFilter {
    regex: Option<Regex>,
}

impl NameFilter {
    /// A filter that keeps everything.
    pub fn allow_all() -> Self {
        Self { regex: None }
    }

    /// Resolve and compile the pattern. Presets are looked up in `presets`.
    pub fn compile(source: &PatternSource, presets: &PresetsConfig) -> Result<Self> {
        let pattern = match source {
            PatternSource::None => return Ok(Self::allow_all()),
            PatternSource::Preset(preset) => presets.pattern(*preset),
            PatternSource::Regex(pattern) => pattern.as_str(),
        };

        let regex = Regex::new(pattern).map_err(|e| Files2mdError::filter(pattern, e))?;
        debug!(pattern, "compiled filename filter");
        Ok(Self { regex: Some(regex) })
    }

    /// Unanchored search against the file name.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(regex) = &self.regex else {
            return true;
        };
        match path.file_name() {
            Some(name) => regex.is_match(&name.to_string_lossy()),
            None => regex.is_match(&path.to_string_lossy()),
        }
    }

    /// Keep the matching candidates, preserving order.
    pub fn apply(&self, candidates: Vec<CandidatePath>) -> Vec<CandidatePath> {
        candidates
            .into_iter()
            .filter(|c| self.matches(c.as_path()))
            .collect()
    }
}
