//! OCR for scanned PDFs: rasterize with `pdftoppm`, recognize with `tesseract`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use files2md_shared::{ConversionError, OcrConfig};
use tracing::debug;

use crate::tool;

/// Recognize every page of `pdf`, in page order.
pub(crate) fn ocr_pdf(pdf: &Path, cfg: &OcrConfig) -> Result<Vec<String>, ConversionError> {
    let scratch = tempfile::Builder::new()
        .prefix("files2md-ocr-")
        .tempdir()
        .map_err(|e| ConversionError::Ocr(format!("cannot create scratch directory: {e}")))?;

    let images = rasterize(pdf, scratch.path(), cfg)?;
    debug!(pages = images.len(), dpi = cfg.dpi, "rasterized PDF");

    images
        .iter()
        .map(|image| recognize(image, cfg))
        .collect()
}

fn rasterize(pdf: &Path, out_dir: &Path, cfg: &OcrConfig) -> Result<Vec<PathBuf>, ConversionError> {
    let prefix = out_dir.join("page");
    let dpi = cfg.dpi.to_string();

    tool::run(
        &cfg.pdftoppm,
        [
            OsStr::new("-r"),
            OsStr::new(&dpi),
            OsStr::new("-png"),
            pdf.as_os_str(),
            prefix.as_os_str(),
        ],
    )?;

    let entries = std::fs::read_dir(out_dir)
        .map_err(|e| ConversionError::Ocr(format!("cannot list rasterized pages: {e}")))?;

    let mut images: Vec<(u32, PathBuf)> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter_map(|path| page_number(&path).map(|n| (n, path)))
        .collect();

    if images.is_empty() {
        return Err(ConversionError::Ocr(format!(
            "'{}' produced no page images",
            cfg.pdftoppm
        )));
    }

    images.sort_by_key(|(n, _)| *n);
    Ok(images.into_iter().map(|(_, path)| path).collect())
}

/// Page number from a `pdftoppm` output name such as `page-07.png`.
fn page_number(path: &Path) -> Option<u32> {
    if path.extension()? != "png" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix("page-")?.parse().ok()
}

fn recognize(image: &Path, cfg: &OcrConfig) -> Result<String, ConversionError> {
    let stdout = tool::run(
        &cfg.tesseract,
        [
            image.as_os_str(),
            OsStr::new("stdout"),
            OsStr::new("-l"),
            OsStr::new(&cfg.language),
        ],
    )?;
    Ok(String::from_utf8_lossy(&stdout).into_owned())
}
