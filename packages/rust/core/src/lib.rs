//! Run orchestration and document assembly for files2md.
//!
//! This crate ties together discovery, per-format conversion, and the
//! assembler into the end-to-end [`pipeline::run`].

pub mod assembler;
pub mod pipeline;

pub use assembler::{AssembleConfig, Assembler};
pub use pipeline::{ProgressReporter, RunConfig, RunSummary, SilentProgress, run};
