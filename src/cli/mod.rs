/// CLI utilities for the tagscan binary
///
/// Modules:
/// - output: Handles the different output formats (text outline, JSON, NDJSON)
/// - parallel: Parallel extraction with Rayon across many files
pub mod output;
pub mod parallel;

pub use output::{OutputFormat, OutputWriter};
pub use parallel::{ExtractionConfig, ParallelExtractor};
