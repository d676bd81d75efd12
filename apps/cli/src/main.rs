//! files2md CLI: combine files into a single Markdown document.
//!
//! Each input becomes a headed section: source and text fenced with a
//! language tag, PDFs extracted (with OCR for scans), DOCX through pandoc,
//! XLSX as tables. The document goes to stdout.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
