//! Path collection: expand file and directory arguments into candidate files.

use std::path::{Path, PathBuf};

use files2md_shared::{CandidatePath, Files2mdError, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Files found for a run, plus the directory arguments that were passed over.
#[derive(Debug, Default)]
pub struct Collected {
    /// Candidate files in argument order, then walk order.
    pub candidates: Vec<CandidatePath>,
    /// Directories given without `--recursive`.
    pub skipped: Vec<PathBuf>,
}

/// Expand `paths` into candidate files.
///
/// Files are taken as-is. Directories are walked (sorted by file name at every
/// level) when `recursive` is set, otherwise skipped with a warning. A path
/// that does not exist aborts collection.
pub fn collect(paths: &[PathBuf], recursive: bool) -> Result<Collected> {
    let mut collected = Collected::default();

    for path in paths {
        let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                Files2mdError::path(path, "no such file or directory")
            }
            _ => Files2mdError::io(path, e),
        })?;

        if meta.is_file() {
            collected.candidates.push(CandidatePath::new(path));
        } else if meta.is_dir() {
            if recursive {
                walk_dir(path, &mut collected.candidates);
            } else {
                warn!(
                    path = %path.display(),
                    "is a directory, skipping (use -r to recurse)"
                );
                collected.skipped.push(path.clone());
            }
        } else {
            warn!(path = %path.display(), "not a regular file or directory, skipping");
        }
    }

    Ok(collected)
}

fn walk_dir(root: &Path, out: &mut Vec<CandidatePath>) {
    let before = out.len();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "unreadable entry, skipping");
                continue;
            }
        };

        // `Path::is_file` follows symlinks, so linked files are included.
        if entry.path().is_file() {
            out.push(CandidatePath::new(entry.path()));
        }
    }

    debug!(root = %root.display(), files = out.len() - before, "walked directory");
}
