//! Per-format conversion of input files to Markdown bodies.
//!
//! This crate provides:
//! - [`Format`]: the closed set of handlers, chosen by extension
//! - [`Converter`]: runs the right handler and never lets a failure escape
//!   the file it belongs to
//! - [`tool`]: blocking invocation of external programs (pandoc, pdftoppm, tesseract)

mod docx;
mod format;
mod ocr;
mod pdf;
mod text;
pub mod tool;
mod xlsx;

use files2md_shared::{
    AppConfig, Body, CandidatePath, ConversionError, ConversionResult, DocxConfig, PdfConfig,
};
use tracing::{debug, instrument, warn};

pub use format::Format;
pub use tool::ToolStatus;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Runtime conversion options, merged from the config file and CLI flags.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// PDF extraction and OCR settings.
    pub pdf: PdfConfig,
    /// Pandoc settings.
    pub docx: DocxConfig,
    /// Heading level of the file sections; sheet headings go one below.
    pub heading_level: u8,
}

impl From<&AppConfig> for ConvertOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            pdf: config.pdf.clone(),
            docx: config.docx.clone(),
            heading_level: config.output.heading_level,
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Converter
// ---------------------------------------------------------------------------

/// Dispatches each candidate to its format handler.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    opts: ConvertOptions,
}

impl Converter {
    pub fn new(opts: ConvertOptions) -> Self {
        Self { opts }
    }

    /// Convert one file. Always returns a result for the candidate, success or not.
    #[instrument(skip_all, fields(path = %path, format = tracing::field::Empty))]
    pub fn convert(&self, path: &CandidatePath) -> ConversionResult {
        let format = Format::from_path(path.as_path());
        tracing::Span::current().record("format", format.name());

        let outcome = self.convert_as(format, path);
        match &outcome {
            Ok(body) => debug!(len = body.as_str().len(), "converted"),
            Err(e) => warn!(error = %e, "conversion failed"),
        }

        ConversionResult {
            path: path.clone(),
            outcome,
        }
    }

    fn convert_as(&self, format: Format, path: &CandidatePath) -> Result<Body, ConversionError> {
        let path = path.as_path();
        match format {
            Format::PlainText => text::convert_text(path),
            Format::Pdf => pdf::convert_pdf(path, &self.opts.pdf),
            Format::Docx => docx::convert_docx(path, &self.opts.docx),
            Format::Xlsx => xlsx::convert_xlsx(path, self.sheet_heading_level()),
        }
    }

    fn sheet_heading_level(&self) -> u8 {
        self.opts.heading_level.saturating_add(1).min(6)
    }

    /// Check which external programs this configuration relies on are installed.
    pub fn probe_tools(&self) -> Vec<ToolStatus> {
        let mut tools = vec![tool::probe(&self.opts.docx.pandoc, "--version")];
        if self.opts.pdf.ocr.enabled {
            tools.push(tool::probe(&self.opts.pdf.ocr.pdftoppm, "-v"));
            tools.push(tool::probe(&self.opts.pdf.ocr.tesseract, "--version"));
        }
        tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_file_converts_to_fenced_block() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hello.py");
        std::fs::write(&path, "print('hi')\n").unwrap();

        let result = Converter::default().convert(&CandidatePath::new(&path));
        let body = result.outcome.unwrap();
        assert_eq!(body.as_str(), "```python\nprint('hi')\n\n```");
    }

    #[test]
    fn missing_file_is_a_per_file_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let result = Converter::default().convert(&CandidatePath::new(tmp.path().join("gone.txt")));
        assert!(matches!(result.outcome, Err(ConversionError::Read(_))));
    }

    #[test]
    fn corrupt_pdf_is_a_per_file_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.7\nthis is not really a pdf").unwrap();

        let result = Converter::default().convert(&CandidatePath::new(&path));
        assert!(!result.is_success());
    }

    #[test]
    fn sheet_headings_sit_below_file_headings() {
        let mut opts = ConvertOptions::default();
        opts.heading_level = 2;
        assert_eq!(Converter::new(opts.clone()).sheet_heading_level(), 3);
        opts.heading_level = 5;
        assert_eq!(Converter::new(opts).sheet_heading_level(), 6);
    }

    #[test]
    fn probe_skips_ocr_tools_when_disabled() {
        let mut opts = ConvertOptions::default();
        opts.pdf.ocr.enabled = false;
        opts.docx.pandoc = "files2md-test-no-such-pandoc".into();

        let tools = Converter::new(opts).probe_tools();
        assert_eq!(tools.len(), 1);
        assert!(!tools[0].is_available());
    }
}
