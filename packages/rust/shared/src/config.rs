//! Application configuration for files2md.
//!
//! User config lives at `~/.files2md/files2md.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Files2mdError, Result};
use crate::types::Preset;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "files2md.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".files2md";

/// Source files, scripts, and well-known build files.
const CODE_FILE_PATTERN: &str = r"\.(py|js|java|c|cpp|h|hpp|cs|rb|go|rs|php|html|css|sql|sh|bash|ps1|rkt|hs|scala|ml|elm|clj|ex|exs|erl|fs|fsx|lisp|scm|sml|swift|kt|kts|groovy|pl|pm|t|lua|jl|dart|d|nim|cr|r|R|asm|s|zig|v|ada|f90|f95|f03|f08|pas|cob|cobol|vb|vba|vbs|tcl|hx|m|mm|ts|coffee|ls|cljc|cljs|raku|bf|md|txt)$|^(Makefile|Dockerfile|Rakefile|Gemfile|Vagrantfile|CMakeLists\.txt)$";

/// Prose, office documents, and structured data.
const DOCS_FILE_PATTERN: &str = r"\.(md|txt|rst|adoc|tex|rtf|odt|doc|docx|pdf|epub|csv|tsv|json|xml|yaml|yml|ini|cfg|conf|log|xlsx)$";

// ---------------------------------------------------------------------------
// Config structs (matching files2md.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output document layout.
    #[serde(default)]
    pub output: OutputConfig,

    /// Named filename patterns.
    #[serde(default)]
    pub presets: PresetsConfig,

    /// PDF extraction and OCR fallback.
    #[serde(default)]
    pub pdf: PdfConfig,

    /// DOCX conversion via pandoc.
    #[serde(default)]
    pub docx: DocxConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Heading level used for each attached file (1-5).
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,

    /// Emit an `<!-- file-attachment: ... -->` marker before each heading.
    #[serde(default = "default_true")]
    pub attachment_comments: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            heading_level: default_heading_level(),
            attachment_comments: true,
        }
    }
}

fn default_heading_level() -> u8 {
    2
}
fn default_true() -> bool {
    true
}

/// `[presets]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetsConfig {
    /// Regex selected by `--name-code`.
    #[serde(default = "default_code_pattern")]
    pub code: String,

    /// Regex selected by `--name-docs`.
    #[serde(default = "default_docs_pattern")]
    pub docs: String,
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            code: default_code_pattern(),
            docs: default_docs_pattern(),
        }
    }
}

impl PresetsConfig {
    /// The regex source for a named preset.
    pub fn pattern(&self, preset: Preset) -> &str {
        match preset {
            Preset::Code => &self.code,
            Preset::Docs => &self.docs,
        }
    }
}

fn default_code_pattern() -> String {
    CODE_FILE_PATTERN.into()
}
fn default_docs_pattern() -> String {
    DOCS_FILE_PATTERN.into()
}

/// `[pdf]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Below this many non-whitespace-run characters per page, a PDF counts as scanned.
    #[serde(default = "default_min_chars_per_page")]
    pub min_chars_per_page: usize,

    /// OCR fallback settings.
    #[serde(default)]
    pub ocr: OcrConfig,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_chars_per_page: default_min_chars_per_page(),
            ocr: OcrConfig::default(),
        }
    }
}

fn default_min_chars_per_page() -> usize {
    16
}

/// `[pdf.ocr]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Whether scanned PDFs are rasterized and OCR'd.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Rasterization resolution.
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Tesseract language code(s), e.g. `eng` or `eng+deu`.
    #[serde(default = "default_language")]
    pub language: String,

    /// Rasterizer executable.
    #[serde(default = "default_pdftoppm")]
    pub pdftoppm: String,

    /// OCR engine executable.
    #[serde(default = "default_tesseract")]
    pub tesseract: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dpi: default_dpi(),
            language: default_language(),
            pdftoppm: default_pdftoppm(),
            tesseract: default_tesseract(),
        }
    }
}

fn default_dpi() -> u32 {
    300
}
fn default_language() -> String {
    "eng".into()
}
fn default_pdftoppm() -> String {
    "pdftoppm".into()
}
fn default_tesseract() -> String {
    "tesseract".into()
}

/// `[docx]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocxConfig {
    /// Pandoc executable.
    #[serde(default = "default_pandoc")]
    pub pandoc: String,

    /// Arguments passed after `--from docx --to gfm`.
    #[serde(default = "default_pandoc_args")]
    pub extra_args: Vec<String>,
}

impl Default for DocxConfig {
    fn default() -> Self {
        Self {
            pandoc: default_pandoc(),
            extra_args: default_pandoc_args(),
        }
    }
}

fn default_pandoc() -> String {
    "pandoc".into()
}
fn default_pandoc_args() -> Vec<String> {
    vec![
        "--wrap=none".into(),
        "--standalone".into(),
        "--markdown-headings=atx".into(),
    ]
}

impl AppConfig {
    /// Reject values the rest of the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.output.heading_level) {
            return Err(Files2mdError::config(format!(
                "output.heading_level must be between 1 and 5, got {}",
                self.output.heading_level
            )));
        }
        if self.pdf.ocr.dpi == 0 {
            return Err(Files2mdError::config("pdf.ocr.dpi must be positive"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.files2md/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Files2mdError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.files2md/files2md.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = match config_file_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(error = %e, "no home directory, using default config");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Files2mdError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        Files2mdError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.validate()?;

    tracing::debug!(?path, "loaded config file");
    Ok(config)
}
