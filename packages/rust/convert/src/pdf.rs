//! PDF text extraction with an OCR fallback for scanned documents.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

use files2md_markdown::fenced;
use files2md_shared::{Body, ConversionError, PdfConfig};
use gag::Gag;
use tracing::{debug, info, warn};

use crate::ocr;

/// Extract a PDF's text, falling back to OCR when the text layer is too thin.
pub(crate) fn convert_pdf(path: &Path, opts: &PdfConfig) -> Result<Body, ConversionError> {
    let bytes = std::fs::read(path).map_err(ConversionError::Read)?;
    let mut pages = extract_pages(&bytes)?;

    let chars = normalized_len(&pages);
    debug!(pages = pages.len(), chars, "extracted PDF text layer");

    if is_sparse(chars, pages.len(), opts.min_chars_per_page) {
        if opts.ocr.enabled {
            info!(
                path = %path.display(),
                chars,
                "text layer too sparse, running OCR"
            );
            pages = ocr::ocr_pdf(path, &opts.ocr)?;
        } else {
            warn!(
                path = %path.display(),
                chars,
                "text layer too sparse and OCR is disabled"
            );
        }
    }

    Ok(Body(fenced(&join_pages(&pages), None)))
}

/// Page-by-page text via `pdf-extract`.
///
/// The crate can panic on malformed fonts and writes diagnostics straight to
/// stdout, so both are contained here.
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ConversionError> {
    let _gag_out = Gag::stdout().ok();
    let _gag_err = Gag::stderr().ok();

    match catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    })) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ConversionError::Pdf(e.to_string())),
        Err(_) => Err(ConversionError::Pdf(
            "extractor panicked, the file is likely malformed".to_string(),
        )),
    }
}

/// Character count after collapsing every whitespace run to one space.
fn normalized_len(pages: &[String]) -> usize {
    pages
        .iter()
        .flat_map(|page| page.split_whitespace())
        .map(|word| word.chars().count() + 1)
        .sum::<usize>()
        .saturating_sub(1)
}

/// Whether the text layer is too thin to be the real content.
fn is_sparse(chars: usize, page_count: usize, min_chars_per_page: usize) -> bool {
    chars == 0 || chars < min_chars_per_page.saturating_mul(page_count.max(1))
}

/// Join pages with a marker line between each pair.
pub(crate) fn join_pages(pages: &[String]) -> String {
    let mut out = String::new();
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            out.push_str(&format!("\n\n--- page {} ---\n\n", i + 1));
        }
        out.push_str(page.trim());
    }
    out
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    use super::*;

    /// Write a PDF with one page per entry; an empty entry gives a blank page.
    fn write_pdf(path: &Path, texts: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in texts {
            let operations = if text.is_empty() {
                vec![]
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    fn config(ocr_enabled: bool) -> PdfConfig {
        let mut config = PdfConfig::default();
        config.ocr.enabled = ocr_enabled;
        config.ocr.pdftoppm = "files2md-test-no-such-pdftoppm".into();
        config.ocr.tesseract = "files2md-test-no-such-tesseract".into();
        config
    }

    #[test]
    fn text_layer_pages_are_joined_with_markers() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("report.pdf");
        write_pdf(
            &path,
            &["Hello world from the first page", "Second page carries more text"],
        );

        let body = convert_pdf(&path, &config(true)).unwrap();
        let body = body.as_str();
        assert!(body.starts_with("```\n"));
        assert!(body.ends_with("\n```"));

        let first = body.find("Hello world from the first page").unwrap();
        let marker = body.find("--- page 2 ---").unwrap();
        let second = body.find("Second page carries more text").unwrap();
        assert!(first < marker && marker < second);
    }

    #[test]
    fn blank_pages_go_to_ocr_when_enabled() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scan.pdf");
        write_pdf(&path, &["", ""]);

        let err = convert_pdf(&path, &config(true)).unwrap_err();
        assert!(
            matches!(&err, ConversionError::ToolMissing { tool, .. } if tool == "files2md-test-no-such-pdftoppm"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn blank_pages_pass_through_when_ocr_is_disabled() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scan.pdf");
        write_pdf(&path, &["", ""]);

        let body = convert_pdf(&path, &config(false)).unwrap();
        assert!(body.as_str().starts_with("```\n"));
        assert!(body.as_str().ends_with("\n```"));
        assert!(!body.as_str().contains("Hello"));
    }

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn normalization_collapses_whitespace() {
        assert_eq!(normalized_len(&pages(&["  a   b\n\n c  "])), 5);
        assert_eq!(normalized_len(&pages(&["ab", "cd"])), 5);
        assert_eq!(normalized_len(&pages(&[" \n\t ", ""])), 0);
    }

    #[test]
    fn sparse_detection() {
        assert!(is_sparse(0, 0, 16));
        assert!(is_sparse(0, 3, 0));
        assert!(is_sparse(40, 3, 16));
        assert!(!is_sparse(48, 3, 16));
        assert!(!is_sparse(1, 1, 0));
    }

    #[test]
    fn pages_are_joined_with_markers() {
        let joined = join_pages(&pages(&["first\n", "\nsecond", "third"]));
        assert_eq!(
            joined,
            "first\n\n--- page 2 ---\n\nsecond\n\n--- page 3 ---\n\nthird"
        );
    }

    #[test]
    fn single_page_has_no_marker() {
        assert_eq!(join_pages(&pages(&["only page"])), "only page");
    }

    #[test]
    fn garbage_bytes_are_a_pdf_error() {
        let err = extract_pages(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ConversionError::Pdf(_)));
    }
}
