/// tagscan: scope-aware symbol extraction for code outlines
///
/// Scans files or directory trees, extracts structural symbols (classes,
/// methods, functions, constants, variables), and prints them as a text
/// outline, a JSON array, or NDJSON.
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tagscan::cli::{ExtractionConfig, OutputFormat, OutputWriter, ParallelExtractor};

#[derive(Parser)]
#[command(name = "tagscan")]
#[command(about = "Scope-aware symbol extraction for code outlines", long_about = None)]
#[command(version)]
struct Cli {
    /// Files or directories to scan
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Number of parallel threads (defaults to CPU count)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::Ndjson => OutputFormat::Ndjson,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("tagscan=info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = ExtractionConfig::default();
    if let Some(threads) = cli.threads {
        config.num_threads = threads;
    }

    let extractor = ParallelExtractor::new(config);
    let results = extractor.extract_paths(&cli.paths)?;

    let mut writer = OutputWriter::new(cli.format.into());
    for (_path, symbols) in &results {
        writer.write_batch(symbols)?;
    }
    writer.finish()?;

    Ok(())
}
