//! DOCX → GitHub-flavored Markdown via pandoc.

use std::ffi::OsString;
use std::path::Path;

use files2md_markdown::fenced;
use files2md_shared::{Body, ConversionError, DocxConfig};

use crate::tool;

/// Convert with pandoc. The Markdown is fenced so the document's own headings
/// stay out of the aggregate's outline.
pub(crate) fn convert_docx(path: &Path, cfg: &DocxConfig) -> Result<Body, ConversionError> {
    let stdout = tool::run(&cfg.pandoc, pandoc_args(path, cfg))?;
    let markdown = String::from_utf8_lossy(&stdout);
    Ok(Body(fenced(markdown.trim_end(), Some("markdown"))))
}

fn pandoc_args(path: &Path, cfg: &DocxConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["--from", "docx", "--to", "gfm"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.extend(cfg.extra_args.iter().map(OsString::from));
    args.push(path.as_os_str().to_owned());
    args
}
