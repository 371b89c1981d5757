/// Output formatting for the tagscan CLI
///
/// Supports multiple output formats optimized for different consumers:
/// - Text: ctags-style tab-separated outline (for humans and editors)
/// - JSON: Single array, pretty-printed
/// - NDJSON: Newline-delimited JSON, streaming-friendly
use crate::extractors::base::Symbol;
use anyhow::Result;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated outline lines
    Text,

    /// Standard JSON array (pretty-printed)
    Json,

    /// Newline-delimited JSON (streaming)
    Ndjson,
}

pub struct OutputWriter {
    format: OutputFormat,
    writer: Box<dyn Write>,
    buffer: Vec<Symbol>,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            writer: Box::new(io::stdout()),
            buffer: Vec::new(),
        }
    }

    /// Write a batch of symbols
    pub fn write_batch(&mut self, symbols: &[Symbol]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for symbol in symbols {
                    writeln!(self.writer, "{}", text_line(symbol))?;
                }
                self.writer.flush()?;
            }
            OutputFormat::Ndjson => {
                for symbol in symbols {
                    writeln!(self.writer, "{}", serde_json::to_string(symbol)?)?;
                }
                self.writer.flush()?;
            }
            OutputFormat::Json => {
                // Buffered so every file lands in one array
                self.buffer.extend_from_slice(symbols);
            }
        }
        Ok(())
    }

    /// Flush any buffered symbols (JSON mode writes its array here)
    pub fn finish(mut self) -> Result<()> {
        if self.format == OutputFormat::Json {
            writeln!(self.writer, "{}", serde_json::to_string_pretty(&self.buffer)?)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// One ctags-style outline line: name, kind code, line, file, and the scope
/// qualifier when the symbol has one.
fn text_line(symbol: &Symbol) -> String {
    let mut line = format!(
        "{}\t{}\t{}\t{}",
        symbol.name,
        symbol.kind.code(),
        symbol.line_number,
        symbol.file_path
    );
    if let Some(scope_name) = &symbol.scope_name {
        line.push_str(&format!("\tclass:{}", scope_name));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{ScopeKind, SymbolKind};

    fn sample(name: &str, kind: SymbolKind, scope: Option<&str>) -> Symbol {
        Symbol {
            id: "0".into(),
            name: name.into(),
            kind,
            language: "php".into(),
            file_path: "app.php".into(),
            line_number: 3,
            scope_kind: scope.map(|_| ScopeKind::Class),
            scope_name: scope.map(|s| s.to_string()),
            modifiers: Vec::new(),
            visibility: None,
            signature: None,
        }
    }

    #[test]
    fn test_text_line_for_top_level_symbol() {
        let symbol = sample("Foo", SymbolKind::Class, None);
        assert_eq!(text_line(&symbol), "Foo\tc\t3\tapp.php");
    }

    #[test]
    fn test_text_line_carries_scope_qualifier() {
        let symbol = sample("bar", SymbolKind::Method, Some("Foo"));
        assert_eq!(text_line(&symbol), "bar\tm\t3\tapp.php\tclass:Foo");
    }

    #[test]
    fn test_ndjson_round_trips_a_symbol() {
        let symbol = sample("bar", SymbolKind::Method, Some("Foo"));
        let line = serde_json::to_string(&symbol).unwrap();
        let back: Symbol = serde_json::from_str(&line).unwrap();
        assert_eq!(back, symbol);
    }
}
