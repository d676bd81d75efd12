//! End-to-end run: paths → discovery → convert → assemble → output stream.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use files2md_convert::{ConvertOptions, Converter};
use files2md_discovery::discover;
use files2md_shared::{AppConfig, CandidatePath, InputSpec, PresetsConfig, Result};
use tracing::{info, instrument, warn};

use crate::assembler::{AssembleConfig, Assembler};

/// Everything a run needs, resolved from config file and CLI flags.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Paths, filter, and recursion flag.
    pub input: InputSpec,
    /// Regexes behind `--name-code` / `--name-docs`.
    pub presets: PresetsConfig,
    /// Per-format conversion settings.
    pub convert: ConvertOptions,
    /// Output layout.
    pub assemble: AssembleConfig,
}

impl RunConfig {
    /// Combine the loaded config with the inputs of this invocation.
    pub fn new(input: InputSpec, config: &AppConfig) -> Self {
        Self {
            input,
            presets: config.presets.clone(),
            convert: ConvertOptions::from(config),
            assemble: AssembleConfig::from(&config.output),
        }
    }
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files converted successfully.
    pub converted: usize,
    /// Files whose section holds a failure notice, with the reason.
    pub failures: Vec<(CandidatePath, String)>,
    /// Directory arguments passed over because recursion was off.
    pub skipped: Vec<PathBuf>,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

impl RunSummary {
    /// Sections written to the output, one per candidate.
    pub fn sections(&self) -> usize {
        self.converted + self.failures.len()
    }

    /// True when every file converted and no input was skipped.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }
}

/// Progress callback for reporting run status.
pub trait ProgressReporter {
    /// Called once discovery has produced the candidate list.
    fn collected(&self, total: usize);
    /// Called before each file is converted.
    fn file_started(&self, path: &CandidatePath, current: usize, total: usize);
    /// Called when the run completes.
    fn done(&self, summary: &RunSummary);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn collected(&self, _total: usize) {}
    fn file_started(&self, _path: &CandidatePath, _current: usize, _total: usize) {}
    fn done(&self, _summary: &RunSummary) {}
}

/// Run the full conversion.
///
/// 1. Discovery: compile the filter, collect and filter candidates
/// 2. Convert each candidate in order
/// 3. Stream each section to `out` as soon as it is ready
///
/// Discovery errors abort before anything is written. Conversion failures are
/// rendered inline and counted in the summary.
#[instrument(skip_all, fields(paths = config.input.paths.len()))]
pub fn run<W: Write>(
    config: &RunConfig,
    out: W,
    progress: &dyn ProgressReporter,
) -> Result<RunSummary> {
    let start = Instant::now();

    let collected = discover(&config.input, &config.presets)?;
    let total = collected.candidates.len();
    progress.collected(total);

    let converter = Converter::new(config.convert.clone());
    let mut assembler = Assembler::new(out, config.assemble.clone());
    let mut summary = RunSummary {
        skipped: collected.skipped,
        ..RunSummary::default()
    };

    for (i, candidate) in collected.candidates.iter().enumerate() {
        progress.file_started(candidate, i + 1, total);

        let result = converter.convert(candidate);
        assembler.write_section(&result)?;

        match &result.outcome {
            Ok(_) => summary.converted += 1,
            Err(e) => summary.failures.push((candidate.clone(), e.to_string())),
        }
    }

    assembler.finish()?;
    summary.elapsed = start.elapsed();

    if summary.is_clean() {
        info!(
            files = summary.converted,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "run complete"
        );
    } else {
        warn!(
            converted = summary.converted,
            failed = summary.failures.len(),
            skipped = summary.skipped.len(),
            "run complete with problems"
        );
    }

    progress.done(&summary);
    Ok(summary)
}
