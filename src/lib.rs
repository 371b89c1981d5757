//! Tagscan - scope-aware symbol extraction for code outlines
//!
//! Tagscan extracts structural symbols (classes, methods, functions,
//! constants, variables) from source text with a single-pass, brace-depth
//! scanner, so editors and indexers can build a navigable outline without a
//! full parse. Extraction is best-effort: malformed input degrades to fewer
//! records, never to an error.

pub mod cli;
pub mod extractors;

// Re-export common types
pub use extractors::{ExtractorManager, Symbol, SymbolKind, TagSink, VecSink, Visibility};

#[cfg(test)]
pub mod tests;
