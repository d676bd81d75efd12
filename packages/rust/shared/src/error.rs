//! Error types for files2md.
//!
//! Library crates use [`Files2mdError`] for failures that abort a run and
//! [`ConversionError`] for failures scoped to a single file.
//! The CLI wraps these with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Run-level error: anything that stops the tool before or while writing output.
#[derive(Debug, thiserror::Error)]
pub enum Files2mdError {
    /// An input path is missing or unusable.
    #[error("path error at {path:?}: {message}")]
    Path { path: PathBuf, message: String },

    /// The filename filter could not be compiled.
    #[error("invalid filename pattern '{pattern}': {source}")]
    Filter {
        pattern: String,
        source: regex::Error,
    },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the output document failed.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, Files2mdError>;

impl Files2mdError {
    /// Create a path error from any displayable message.
    pub fn path(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `regex::Error` with the pattern that produced it.
    pub fn filter(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Filter {
            pattern: pattern.into(),
            source,
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Per-file conversion failure. Rendered inline in the output, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The file could not be read.
    #[error("could not read file: {0}")]
    Read(#[source] std::io::Error),

    /// The file looks like binary data, not text.
    #[error("file appears to be binary")]
    Binary,

    /// PDF text extraction failed.
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// Rasterizing or recognizing a scanned PDF failed.
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// The spreadsheet could not be opened.
    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    /// An external tool is not installed or could not be started.
    #[error("'{tool}' could not be started: {reason}")]
    ToolMissing { tool: String, reason: String },

    /// An external tool ran and reported failure.
    #[error("'{tool}' exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },
}
