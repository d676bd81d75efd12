//! Output document assembler.
//!
//! Writes one section per converted file, in order, straight to the output
//! stream. Each section is flushed as soon as it is written so an interrupted
//! run still leaves every finished section behind.

use std::io::Write;

use files2md_markdown::{comment_safe, heading};
use files2md_shared::{ConversionResult, Files2mdError, OutputConfig, Result};
use tracing::debug;

/// Prefix of the inline notice that replaces a failed file's body.
pub const FAILURE_NOTICE: &str = "> ⚠️ conversion failed:";

/// Separator written between sections.
const SECTION_RULE: &str = "\n\n---\n\n";

/// Layout options for the output document.
#[derive(Debug, Clone)]
pub struct AssembleConfig {
    /// Heading level for each file section.
    pub heading_level: u8,
    /// Emit `<!-- file-attachment: ... -->` before each heading.
    pub attachment_comments: bool,
}

impl From<&OutputConfig> for AssembleConfig {
    fn from(config: &OutputConfig) -> Self {
        Self {
            heading_level: config.heading_level,
            attachment_comments: config.attachment_comments,
        }
    }
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

/// Streams sections to a writer.
pub struct Assembler<W: Write> {
    out: W,
    config: AssembleConfig,
    sections: usize,
}

impl<W: Write> Assembler<W> {
    pub fn new(out: W, config: AssembleConfig) -> Self {
        Self {
            out,
            config,
            sections: 0,
        }
    }

    /// Append the section for one file and flush it.
    pub fn write_section(&mut self, result: &ConversionResult) -> Result<()> {
        if self.sections > 0 {
            self.out
                .write_all(SECTION_RULE.as_bytes())
                .map_err(Files2mdError::Output)?;
        }

        let section = render_section(result, &self.config);
        self.out
            .write_all(section.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(Files2mdError::Output)?;

        self.sections += 1;
        debug!(path = %result.path, ok = result.is_success(), "wrote section");
        Ok(())
    }

    /// Terminate the document with a newline and hand back the writer.
    pub fn finish(mut self) -> Result<W> {
        if self.sections > 0 {
            self.out.write_all(b"\n").map_err(Files2mdError::Output)?;
        }
        self.out.flush().map_err(Files2mdError::Output)?;
        Ok(self.out)
    }
}

/// Marker comment, heading, blank line, then the body or a failure notice.
pub fn render_section(result: &ConversionResult, config: &AssembleConfig) -> String {
    let path = result.path.to_string();
    let mut section = String::new();

    if config.attachment_comments {
        section.push_str(&format!("<!-- file-attachment: {} -->\n", comment_safe(&path)));
    }
    section.push_str(&heading(
        config.heading_level,
        &format!("Attached file: {path}"),
    ));
    section.push_str("\n\n");

    match &result.outcome {
        Ok(body) => section.push_str(body.as_str()),
        Err(e) => section.push_str(&failure_notice(&e.to_string())),
    }

    section
}

/// The notice stays on one line so tool output cannot start headings or fences.
fn failure_notice(reason: &str) -> String {
    let reason: Vec<&str> = reason
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    format!("{FAILURE_NOTICE} {}", reason.join(" "))
}
