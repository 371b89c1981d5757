// Extraction driver.
//
// The outer scan loop: pulls characters off the stream, accumulates the
// current logical line, and keeps the brace-depth counter and scope stack in
// sync. Declarations are classified eagerly at each opening brace so a frame
// reserves its depth before the brace is counted; this is what keeps
// single-line bodies (`class Foo { public function bar() {`) from
// desynchronizing the nesting counter.
//
// Extraction is best-effort and never fails: malformed declarations are
// dropped, and any scopes still open at end of input are discarded silently.

use crate::extractors::base::{ScopeKind, TagSink};
use crate::extractors::emit::TagEmitter;
use crate::extractors::patterns::PatternSet;
use crate::extractors::recognizer::{self, DeclarationKind};
use crate::extractors::scope::{ScopeFrame, ScopeStack};
use crate::extractors::source::CharacterStream;
use tracing::debug;

/// Per-language scan configuration, built once per extractor instance and
/// borrowed by every scan. No process-wide registration.
pub struct LanguageConfig {
    pub language: String,
    /// Context-free rules for unscoped symbol kinds
    pub patterns: PatternSet,
}

pub struct Scanner<'a> {
    source: CharacterStream<'a>,
    config: &'a LanguageConfig,
    emitter: TagEmitter,
    scopes: ScopeStack,
    /// Running count of unmatched opening braces
    depth: u32,
    /// Elided text of the current logical line
    line: String,
    /// Offset into `line` just past the last recognized declaration
    line_start: usize,
    /// Line number the current logical line started on
    line_number: u32,
}

impl<'a> Scanner<'a> {
    pub fn new(content: &'a str, config: &'a LanguageConfig, file_path: &str) -> Self {
        Self {
            source: CharacterStream::new(content),
            config,
            emitter: TagEmitter::new(config.language.clone(), file_path.to_string()),
            scopes: ScopeStack::new(),
            depth: 0,
            line: String::new(),
            line_start: 0,
            line_number: 1,
        }
    }

    /// Consumes the source to completion, publishing records in source order.
    pub fn scan(mut self, sink: &mut dyn TagSink) {
        while let Some(c) = self.source.next_char() {
            match c {
                '{' => {
                    // Classify before counting: the frame must reserve the
                    // depth this brace opens.
                    self.try_declaration(sink);
                    self.line.push(' ');
                    self.depth += 1;
                }
                '}' => {
                    self.line.push(' ');
                    if self.depth > 0 {
                        self.depth -= 1;
                        self.scopes.pop_to_depth(self.depth);
                    }
                }
                '\n' => {
                    self.try_declaration(sink);
                    let raw = self.source.take_raw_line();
                    self.apply_patterns(&raw, sink);
                    self.line.clear();
                    self.line_start = 0;
                    self.line_number = self.source.line_number();
                }
                _ => self.line.push(c),
            }
        }

        // Trailing line without a newline terminator
        self.try_declaration(sink);
        let raw = self.source.take_raw_line();
        self.apply_patterns(&raw, sink);

        if self.scopes.depth() > 1 {
            debug!(
                open_scopes = self.scopes.depth() - 1,
                "discarding scopes left open at end of input"
            );
        }
    }

    /// Classifies the unconsumed tail of the current line; on recognition,
    /// emits the record and opens the declaration's scope frame.
    fn try_declaration(&mut self, sink: &mut dyn TagSink) {
        let slice = &self.line[self.line_start..];
        if slice.trim().is_empty() {
            return;
        }

        let Some(decl) = recognizer::classify(slice, self.scopes.top().kind) else {
            return;
        };

        sink.publish(self.emitter.emit(&decl, &self.scopes, self.line_number));

        // A `;`-terminated declaration (abstract or interface-style method
        // signature) opens no body, so it must not reserve a frame.
        if slice.trim_end().ends_with(';') {
            self.line_start = self.line.len();
            return;
        }

        // Interface bodies open a Class-kind frame so their members qualify
        // to the interface name.
        let scope_kind = match decl.kind {
            DeclarationKind::Class | DeclarationKind::Interface => ScopeKind::Class,
            DeclarationKind::Method | DeclarationKind::Function => ScopeKind::Function,
        };
        self.scopes.push(ScopeFrame::new(decl.name, scope_kind, self.depth));
        self.line_start = self.line.len();
    }

    /// Runs the context-free rules over the raw line. They fire only while
    /// the stack is at top level and never push or pop frames.
    fn apply_patterns(&self, raw_line: &str, sink: &mut dyn TagSink) {
        if self.config.patterns.is_empty() || self.scopes.top().kind != ScopeKind::Root {
            return;
        }
        for (name, kind) in self.config.patterns.match_line(raw_line) {
            sink.publish(self.emitter.emit_pattern(&name, kind, self.line_number));
        }
    }
}
