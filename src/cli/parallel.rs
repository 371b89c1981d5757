/// Parallel extraction engine for bulk operations
///
/// Uses Rayon for parallel file processing. Every file gets its own scan
/// with an independent scope stack and sink, so files are embarrassingly
/// parallel; only the final collection is shared.
use crate::extractors::base::Symbol;
use crate::extractors::ExtractorManager;
use anyhow::{anyhow, Result};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing::warn;
use walkdir::WalkDir;

/// Configuration for parallel extraction
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Number of parallel threads (defaults to CPU count)
    pub num_threads: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
        }
    }
}

/// Extracts many files in parallel, keeping per-file record order.
pub struct ParallelExtractor {
    config: ExtractionConfig,
}

impl ParallelExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extract every supported file under `paths` (files or directories).
    ///
    /// Results come back sorted by path; within one file, records keep
    /// source order. Unreadable files are logged and skipped.
    pub fn extract_paths(&self, paths: &[PathBuf]) -> Result<Vec<(PathBuf, Vec<Symbol>)>> {
        let files = discover_files(paths);
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads)
            .build()
            .map_err(|e| anyhow!("Failed to build thread pool: {}", e))?;

        let mut results: Vec<(PathBuf, Vec<Symbol>)> = pool.install(|| {
            files
                .par_iter()
                .filter_map(|file| {
                    let manager = ExtractorManager::new();
                    let content = match fs::read_to_string(file) {
                        Ok(content) => content,
                        Err(e) => {
                            warn!("skipping unreadable file {}: {}", file.display(), e);
                            return None;
                        }
                    };
                    match manager.extract_symbols(&file.to_string_lossy(), &content) {
                        Ok(symbols) => Some((file.clone(), symbols)),
                        Err(e) => {
                            warn!("extraction failed for {}: {}", file.display(), e);
                            None
                        }
                    }
                })
                .collect()
        });

        results.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(results)
    }
}

/// Expands files and directories into the list of supported files.
fn discover_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let manager = ExtractorManager::new();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
            {
                if manager.is_supported(&entry.path().to_string_lossy()) {
                    files.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            // Explicitly named files bypass the extension filter; the
            // manager will return empty results for unsupported ones.
            files.push(path.clone());
        } else {
            warn!("path does not exist: {}", path.display());
        }
    }

    files
}
