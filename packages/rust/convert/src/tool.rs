//! Blocking invocation of external programs.
//!
//! Every call returns a [`ConversionError`] on failure so the caller can keep
//! it scoped to the file being converted.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use files2md_shared::ConversionError;
use tracing::debug;

/// Longest stderr excerpt kept in a [`ConversionError::ToolFailed`].
const MAX_STDERR_CHARS: usize = 500;

/// Run `program` with `args` and return its stdout.
pub fn run<I, S>(program: &str, args: I) -> Result<Vec<u8>, ConversionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::null());
    debug!(?command, "running external tool");

    let output = command.output().map_err(|e| ConversionError::ToolMissing {
        tool: program.to_string(),
        reason: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(ConversionError::ToolFailed {
            tool: program.to_string(),
            status: output.status.to_string(),
            stderr: stderr_excerpt(&output.stderr),
        });
    }

    Ok(output.stdout)
}

fn stderr_excerpt(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim();
    if text.is_empty() {
        return "(no error output)".to_string();
    }
    match text.char_indices().nth(MAX_STDERR_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// Whether an external program could be started, and what it reported.
#[derive(Debug, Clone)]
pub struct ToolStatus {
    /// Program name as configured.
    pub program: String,
    /// First line of its version output, or `None` if it could not be run.
    pub version: Option<String>,
}

impl ToolStatus {
    pub fn is_available(&self) -> bool {
        self.version.is_some()
    }
}

/// Run `program version_arg` and capture the first line it prints.
pub fn probe(program: &str, version_arg: &str) -> ToolStatus {
    let version = Command::new(program)
        .arg(version_arg)
        .stdin(Stdio::null())
        .output()
        .ok()
        .map(|output| {
            // Some tools (pdftoppm) print their version on stderr.
            let stream = if output.stdout.is_empty() {
                output.stderr
            } else {
                output.stdout
            };
            String::from_utf8_lossy(&stream)
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        });

    ToolStatus {
        program: program.to_string(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_tool_missing() {
        let err = run("files2md-test-no-such-program", ["--help"]).unwrap_err();
        match err {
            ConversionError::ToolMissing { tool, .. } => {
                assert_eq!(tool, "files2md-test-no-such-program");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn probe_reports_missing_program() {
        let status = probe("files2md-test-no-such-program", "--version");
        assert!(!status.is_available());
    }

    #[test]
    fn stderr_excerpt_is_bounded() {
        let long = "x".repeat(MAX_STDERR_CHARS * 2);
        let excerpt = stderr_excerpt(long.as_bytes());
        assert_eq!(excerpt.chars().count(), MAX_STDERR_CHARS + 1);
        assert_eq!(stderr_excerpt(b"  \n"), "(no error output)");
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_is_tool_failed() {
        let err = run("sh", ["-c", "echo boom >&2; exit 3"]).unwrap_err();
        match err {
            ConversionError::ToolFailed { stderr, .. } => assert_eq!(stderr, "boom"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_program_returns_stdout() {
        let out = run("sh", ["-c", "printf hello"]).unwrap();
        assert_eq!(out, b"hello");
    }
}
