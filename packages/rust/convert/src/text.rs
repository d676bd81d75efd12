//! Plain text and source code.

use std::path::Path;

use files2md_markdown::{fenced, language_for};
use files2md_shared::{Body, ConversionError};
use tracing::warn;

/// How much of the file is checked for NUL bytes.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Read a file and wrap it in a language-tagged fence.
pub(crate) fn convert_text(path: &Path) -> Result<Body, ConversionError> {
    let bytes = std::fs::read(path).map_err(ConversionError::Read)?;
    render_text(path, bytes)
}

fn render_text(path: &Path, bytes: Vec<u8>) -> Result<Body, ConversionError> {
    if bytes.iter().take(BINARY_SNIFF_LEN).any(|b| *b == 0) {
        return Err(ConversionError::Binary);
    }

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                path = %path.display(),
                valid_up_to = e.utf8_error().valid_up_to(),
                "not valid UTF-8, decoding lossily"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok(Body(fenced(&text, language_for(path))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_fence_with_language() {
        let body = render_text(Path::new("main.go"), b"package main\n".to_vec()).unwrap();
        assert_eq!(body.as_str(), "```go\npackage main\n\n```");
    }

    #[test]
    fn unknown_extension_has_bare_fence() {
        let body = render_text(Path::new("notes.txt"), b"hello".to_vec()).unwrap();
        assert_eq!(body.as_str(), "```\nhello\n```");
    }

    #[test]
    fn embedded_fences_lengthen_the_outer_fence() {
        let content = "# Title\n\n```sh\nmake\n```\n";
        let body = render_text(Path::new("README.md"), content.as_bytes().to_vec()).unwrap();
        assert!(body.as_str().starts_with("````markdown\n"));
        assert!(body.as_str().ends_with("\n````"));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let body = render_text(Path::new("latin1.txt"), b"caf\xe9".to_vec()).unwrap();
        assert!(body.as_str().contains("caf\u{FFFD}"));
    }

    #[test]
    fn nul_bytes_mean_binary() {
        let err = render_text(Path::new("blob.dat"), vec![0x89, b'P', 0, 0]).unwrap_err();
        assert!(matches!(err, ConversionError::Binary));
    }
}
