//! ExtractorManager - public API for symbol extraction
//!
//! Routes a file to the language-specific extractor selected by its
//! extension. This is the main entry point for clients that want symbols
//! out of source text.

use crate::extractors::base::Symbol;
use crate::extractors::php::PhpExtractor;
use std::path::Path;

/// Stateless manager that delegates to language-specific extractors.
pub struct ExtractorManager {}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["php"]
    }

    /// True when `file_path` has an extension some extractor handles.
    pub fn is_supported(&self, file_path: &str) -> bool {
        !self.language_from_extension(file_path).is_empty()
    }

    /// Extract symbols from file content using the appropriate extractor.
    ///
    /// Unsupported extensions yield an empty result rather than an error so
    /// directory walks stay quiet on mixed trees.
    pub fn extract_symbols(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<Vec<Symbol>, anyhow::Error> {
        let language = self.language_from_extension(file_path);

        let symbols = match language {
            "php" => {
                PhpExtractor::new(file_path.to_string(), content.to_string()).extract_symbols()
            }
            _ => {
                tracing::debug!("no extractor for file: {}", file_path);
                return Ok(Vec::new());
            }
        };

        tracing::debug!(
            "Extracted {} symbols from {} file: {}",
            symbols.len(),
            language,
            file_path
        );
        Ok(symbols)
    }

    /// Determine language from file extension
    fn language_from_extension(&self, file_path: &str) -> &'static str {
        let path = Path::new(file_path);
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        if PhpExtractor::EXTENSIONS
            .iter()
            .any(|e| extension.eq_ignore_ascii_case(e))
        {
            "php"
        } else {
            ""
        }
    }
}
