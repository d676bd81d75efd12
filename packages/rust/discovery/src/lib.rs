//! Input discovery: turn command-line paths into the ordered list of files to convert.
//!
//! Two steps, always in this order:
//! 1. [`NameFilter::compile`] validates the filename pattern, so a bad regex
//!    fails before the filesystem is touched.
//! 2. [`collect`] expands the path arguments, then the filter narrows the result.

mod collect;
mod filter;

use files2md_shared::{InputSpec, PresetsConfig, Result};
use tracing::{info, instrument};

pub use collect::{Collected, collect};
pub use filter::NameFilter;

/// Collect and filter the candidates for a run.
#[instrument(skip_all, fields(paths = spec.paths.len(), recursive = spec.recursive))]
pub fn discover(spec: &InputSpec, presets: &PresetsConfig) -> Result<Collected> {
    let filter = NameFilter::compile(&spec.pattern, presets)?;
    let mut collected = collect(&spec.paths, spec.recursive)?;

    let before = collected.candidates.len();
    collected.candidates = filter.apply(collected.candidates);

    info!(
        found = before,
        kept = collected.candidates.len(),
        skipped_dirs = collected.skipped.len(),
        "input discovery complete"
    );

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use files2md_shared::{Files2mdError, PatternSource, Preset};

    use super::*;

    fn spec(paths: Vec<PathBuf>, pattern: PatternSource) -> InputSpec {
        InputSpec {
            paths,
            pattern,
            recursive: true,
        }
    }

    #[test]
    fn invalid_regex_fails_before_touching_paths() {
        let spec = spec(
            vec![PathBuf::from("/definitely/not/here")],
            PatternSource::Regex("([".into()),
        );
        let err = discover(&spec, &PresetsConfig::default()).unwrap_err();
        assert!(matches!(err, Files2mdError::Filter { .. }));
    }

    #[test]
    fn code_preset_equals_py_regex_on_python_tree() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("pkg/sub")).unwrap();
        for name in ["setup.py", "pkg/__init__.py", "pkg/sub/core.py", "pkg/sub/util.py"] {
            std::fs::write(tmp.path().join(name), "pass\n").unwrap();
        }

        let presets = PresetsConfig::default();
        let by_preset = discover(
            &spec(vec![tmp.path().into()], PatternSource::Preset(Preset::Code)),
            &presets,
        )
        .unwrap();
        let by_regex = discover(
            &spec(vec![tmp.path().into()], PatternSource::Regex(r"\.py$".into())),
            &presets,
        )
        .unwrap();

        assert_eq!(by_preset.candidates.len(), 4);
        assert_eq!(by_preset.candidates, by_regex.candidates);
    }

    #[test]
    fn filter_applies_to_explicit_files() {
        let tmp = tempfile::tempdir().unwrap();
        let keep = tmp.path().join("notes.md");
        let drop = tmp.path().join("image.png");
        std::fs::write(&keep, "# notes").unwrap();
        std::fs::write(&drop, [0u8, 1, 2]).unwrap();

        let collected = discover(
            &spec(vec![keep.clone(), drop], PatternSource::Preset(Preset::Docs)),
            &PresetsConfig::default(),
        )
        .unwrap();

        assert_eq!(collected.candidates.len(), 1);
        assert_eq!(collected.candidates[0].as_path(), keep.as_path());
    }
}
