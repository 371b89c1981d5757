// Tagscan's extraction engine.
//
// The scope-tracking scanner lives in `driver`/`recognizer`/`scope`/`emit`;
// `source` feeds it comment- and string-elided characters, `patterns` holds
// the context-free rules for unscoped symbol kinds, and `manager` routes
// files to the right language extractor.

pub mod base;
pub mod driver;
pub mod emit;
pub mod manager;
pub mod patterns;
pub mod php;
pub mod recognizer;
pub mod scope;
pub mod source;

// Re-export the base types
pub use base::{Modifier, ModifierSet, ScopeKind, Symbol, SymbolKind, TagSink, VecSink, Visibility};
pub use manager::ExtractorManager;
