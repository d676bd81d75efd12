//! Extension-based handler selection.

use std::path::Path;

/// The handler a file is routed to. Anything unrecognized is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    PlainText,
    Pdf,
    Docx,
    Xlsx,
}

impl Format {
    /// Pick the handler from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::PlainText;
        };

        if ext.eq_ignore_ascii_case("pdf") {
            Self::Pdf
        } else if ext.eq_ignore_ascii_case("docx") {
            Self::Docx
        } else if ext.eq_ignore_ascii_case("xlsx") {
            Self::Xlsx
        } else {
            Self::PlainText
        }
    }

    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(Format::from_path(Path::new("a/report.pdf")), Format::Pdf);
        assert_eq!(Format::from_path(Path::new("letter.docx")), Format::Docx);
        assert_eq!(Format::from_path(Path::new("budget.xlsx")), Format::Xlsx);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(Format::from_path(Path::new("SCAN.PDF")), Format::Pdf);
        assert_eq!(Format::from_path(Path::new("Memo.DocX")), Format::Docx);
    }

    #[test]
    fn everything_else_is_plain_text() {
        for name in ["main.rs", "README", "old.doc", "sheet.xls", ".pdf.bak", "pdf"] {
            assert_eq!(Format::from_path(Path::new(name)), Format::PlainText, "{name}");
        }
    }
}
