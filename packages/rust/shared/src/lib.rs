//! Shared types, error model, and configuration for files2md.
//!
//! This crate is the foundation depended on by all other files2md crates.
//! It provides:
//! - [`Files2mdError`] and [`ConversionError`]: the error taxonomy
//! - Domain types ([`InputSpec`], [`PatternSource`], [`CandidatePath`], [`ConversionResult`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DocxConfig, OcrConfig, OutputConfig, PdfConfig, PresetsConfig, config_dir,
    config_file_path, load_config, load_config_from,
};
pub use error::{ConversionError, Files2mdError, Result};
pub use types::{Body, CandidatePath, ConversionResult, InputSpec, PatternSource, Preset};
