//! Core domain types for a files2md run.

use std::path::{Path, PathBuf};

use crate::error::ConversionError;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A built-in filename pattern selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Common source-code extensions and build files.
    Code,
    /// Common documentation and data extensions.
    Docs,
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code => f.write_str("code"),
            Self::Docs => f.write_str("docs"),
        }
    }
}

/// Where the filename filter comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PatternSource {
    /// Keep every candidate.
    #[default]
    None,
    /// A named preset, resolved against `[presets]` in the config.
    Preset(Preset),
    /// An explicit user-supplied regex.
    Regex(String),
}

/// Everything a run needs to know about its inputs. Built once from CLI args.
#[derive(Debug, Clone)]
pub struct InputSpec {
    /// File and directory arguments, in the order given.
    pub paths: Vec<PathBuf>,
    /// Filename filter.
    pub pattern: PatternSource,
    /// Whether directory arguments are walked recursively.
    pub recursive: bool,
}

// ---------------------------------------------------------------------------
// Candidates and results
// ---------------------------------------------------------------------------

/// A file that survived collection and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath(PathBuf);

impl CandidatePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The final path component, or the whole path when there is none.
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.to_string_lossy().into_owned())
    }
}

impl std::fmt::Display for CandidatePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for CandidatePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Markdown produced for one file, ready to place under its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body(pub String);

impl Body {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of converting one candidate. Exactly one per candidate.
#[derive(Debug)]
pub struct ConversionResult {
    /// The originating candidate.
    pub path: CandidatePath,
    /// The rendered body, or why it could not be produced.
    pub outcome: std::result::Result<Body, ConversionError>,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
