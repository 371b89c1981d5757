// PHP extractor.
//
// Wires the scope-tracking scanner to the PHP keyword set and the PHP
// context-free tag patterns (defines, consts, top-level variable
// assignments). Classes and functions/methods come out of the scanner;
// constants and variables come out of the pattern rules.

use crate::extractors::base::{Symbol, SymbolKind, TagSink, VecSink};
use crate::extractors::driver::{LanguageConfig, Scanner};
use crate::extractors::patterns::PatternSet;

pub struct PhpExtractor {
    file_path: String,
    content: String,
    config: LanguageConfig,
}

impl PhpExtractor {
    /// File extensions routed to this extractor.
    pub const EXTENSIONS: [&'static str; 5] = ["php", "php3", "php4", "php5", "phtml"];

    pub fn new(file_path: String, content: String) -> Self {
        Self {
            file_path,
            content,
            config: LanguageConfig {
                language: "php".to_string(),
                patterns: php_patterns(),
            },
        }
    }

    /// Scans the file once and collects every record in source order.
    pub fn extract_symbols(&self) -> Vec<Symbol> {
        let mut sink = VecSink::new();
        self.scan(&mut sink);
        sink.into_symbols()
    }

    /// Scans the file once, publishing records to `sink` as they are found.
    pub fn scan(&self, sink: &mut dyn TagSink) {
        Scanner::new(&self.content, &self.config, &self.file_path).scan(sink);
    }
}

/// Constant/define and simple variable-assignment rules, carried over from
/// the original tagmanager PHP rule table. These run against raw line text,
/// so quoted define names are still visible.
fn php_patterns() -> PatternSet {
    let mut patterns = PatternSet::new();
    patterns
        .add(
            r#"(?i)^[ \t]*define[ \t]*\([ \t]*['"]?([A-Za-z_][A-Za-z0-9_]*)"#,
            1,
            SymbolKind::Constant,
        )
        .expect("define pattern");
    patterns
        .add(
            r"(?i)^[ \t]*const[ \t]+([A-Za-z_][A-Za-z0-9_]*)[ \t]*[=;]",
            1,
            SymbolKind::Constant,
        )
        .expect("const pattern");
    // Plain assignments plus static-property forms: $x, ::$x, Config::$x
    patterns
        .add(
            r"^[ \t]*(?:[A-Za-z_][A-Za-z0-9_]*::|::)?\$([A-Za-z_][A-Za-z0-9_]*)[ \t]*=",
            1,
            SymbolKind::Variable,
        )
        .expect("variable pattern");
    patterns
}
