//! CLI definition, config resolution, tracing setup, and the run command.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use color_eyre::eyre::Result;
use files2md_convert::{ConvertOptions, Converter};
use files2md_core::{ProgressReporter, RunConfig, RunSummary, SilentProgress};
use files2md_shared::{
    AppConfig, CandidatePath, InputSpec, PatternSource, Preset, load_config, load_config_from,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// files2md: combine files into a single Markdown document.
#[derive(Parser)]
#[command(
    name = "files2md",
    version,
    about = "Combine files into a single Markdown document, with recursive directory searching and filename pattern matching.",
    long_about = None,
    group(ArgGroup::new("name_filter").args(["name_code", "name_docs", "name_regex"])),
)]
pub(crate) struct Cli {
    /// Files or directories to process.
    #[arg(value_name = "PATH", required_unless_present = "print_config")]
    pub paths: Vec<PathBuf>,

    /// Recursively search directories for files.
    #[arg(short, long)]
    pub recursive: bool,

    /// Keep only files matching the built-in code pattern.
    #[arg(long)]
    pub name_code: bool,

    /// Keep only files matching the built-in documentation pattern.
    #[arg(long)]
    pub name_docs: bool,

    /// Keep only files whose name matches this regular expression.
    #[arg(long, value_name = "REGEX")]
    pub name_regex: Option<String>,

    /// Heading level for each attached file.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub heading_level: Option<u8>,

    /// Do not OCR PDFs that have no usable text layer.
    #[arg(long)]
    pub no_ocr: bool,

    /// Config file (defaults to ~/.files2md/files2md.toml).
    #[arg(long, env = "FILES2MD_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Hide the progress spinner.
    #[arg(long)]
    pub no_progress: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

impl Cli {
    fn pattern_source(&self) -> PatternSource {
        if let Some(regex) = &self.name_regex {
            PatternSource::Regex(regex.clone())
        } else if self.name_code {
            PatternSource::Preset(Preset::Code)
        } else if self.name_docs {
            PatternSource::Preset(Preset::Docs)
        } else {
            PatternSource::None
        }
    }

    fn input_spec(&self) -> InputSpec {
        InputSpec {
            paths: self.paths.clone(),
            pattern: self.pattern_source(),
            recursive: self.recursive,
        }
    }
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs always go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "files2md=info",
        1 => "files2md=debug",
        _ => "files2md=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Config resolution
// ---------------------------------------------------------------------------

/// Load the config file and apply CLI overrides on top.
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    if let Some(level) = cli.heading_level {
        config.output.heading_level = level;
    }
    if cli.no_ocr {
        config.pdf.ocr.enabled = false;
    }

    config.validate()?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<ExitCode> {
    let config = resolve_config(&cli)?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let run_config = RunConfig::new(cli.input_spec(), &config);
    report_tools(&run_config.convert);

    let reporter: Box<dyn ProgressReporter> = if cli.no_progress {
        Box::new(SilentProgress)
    } else {
        Box::new(CliProgress::new())
    };

    let stdout = std::io::stdout();
    let summary = files2md_core::run(&run_config, stdout.lock(), reporter.as_ref())?;

    print_problems(&summary);

    Ok(if summary.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// With debug logging on, say which external tools are available.
fn report_tools(opts: &ConvertOptions) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    for status in Converter::new(opts.clone()).probe_tools() {
        match &status.version {
            Some(version) => debug!(tool = %status.program, %version, "external tool found"),
            None => warn!(
                tool = %status.program,
                "external tool not found, files that need it will fail"
            ),
        }
    }
}

fn print_problems(summary: &RunSummary) {
    if summary.is_clean() {
        return;
    }

    eprintln!();
    for (path, reason) in &summary.failures {
        eprintln!("  failed:  {path}: {reason}");
    }
    for dir in &summary.skipped {
        eprintln!("  skipped: {} (is a directory, use -r)", dir.display());
    }
    eprintln!(
        "  {} converted, {} failed, {} skipped in {:.1}s",
        summary.converted,
        summary.failures.len(),
        summary.skipped.len(),
        summary.elapsed.as_secs_f64()
    );
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner on stderr.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn collected(&self, total: usize) {
        self.spinner.set_message(format!("Found {total} files"));
    }

    fn file_started(&self, path: &CandidatePath, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Converting [{current}/{total}] {path}"));
        self.spinner.tick();
    }

    fn done(&self, _summary: &RunSummary) {
        self.spinner.finish_and_clear();
    }
}
