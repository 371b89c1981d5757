// Character stream with comment and string elision.
//
// The scan loop in the driver counts braces naively, so every structural
// character it sees must be syntactically real. This stream strips line
// comments (// and #), block comments, and the contents of single- and
// double-quoted string literals before the driver ever sees them. Newlines
// always pass through, including inside comments and strings, so line
// accounting stays exact.
//
// The raw (pre-elision) text of the current line is kept on the side for
// the context-free pattern rules, which need to see string contents
// (a define('NAME') constant name lives inside the quotes).

use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Code,
    LineComment,
    BlockComment,
    SingleQuote,
    DoubleQuote,
}

/// Streams the characters of one source file, post comment/string elision.
pub struct CharacterStream<'a> {
    chars: Peekable<Chars<'a>>,
    state: LexState,
    line: u32,
    raw_line: String,
}

impl<'a> CharacterStream<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            state: LexState::Code,
            line: 1,
            raw_line: String::new(),
        }
    }

    /// Line number (1-based) of the next character to be returned.
    pub fn line_number(&self) -> u32 {
        self.line
    }

    /// Raw text accumulated for the current line, cleared on take.
    pub fn take_raw_line(&mut self) -> String {
        std::mem::take(&mut self.raw_line)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c != '\n' && c != '\r' {
            self.raw_line.push(c);
        }
        Some(c)
    }

    /// Next syntactically real character, or None at end of input.
    pub fn next_char(&mut self) -> Option<char> {
        while let Some(c) = self.bump() {
            if c == '\n' {
                self.line += 1;
                if self.state == LexState::LineComment {
                    self.state = LexState::Code;
                }
                return Some('\n');
            }

            match self.state {
                LexState::Code => match c {
                    '\r' => {}
                    '/' => match self.chars.peek() {
                        Some('/') => {
                            self.bump();
                            self.state = LexState::LineComment;
                        }
                        Some('*') => {
                            self.bump();
                            self.state = LexState::BlockComment;
                        }
                        _ => return Some('/'),
                    },
                    '#' => self.state = LexState::LineComment,
                    '\'' => {
                        self.state = LexState::SingleQuote;
                        return Some('\'');
                    }
                    '"' => {
                        self.state = LexState::DoubleQuote;
                        return Some('"');
                    }
                    _ => return Some(c),
                },
                LexState::LineComment => {}
                LexState::BlockComment => {
                    if c == '*' && self.chars.peek() == Some(&'/') {
                        self.bump();
                        self.state = LexState::Code;
                    }
                }
                LexState::SingleQuote => match c {
                    '\\' => {
                        if let Some(escaped) = self.bump() {
                            if escaped == '\n' {
                                self.line += 1;
                                return Some('\n');
                            }
                        }
                    }
                    '\'' => {
                        self.state = LexState::Code;
                        return Some('\'');
                    }
                    _ => {}
                },
                LexState::DoubleQuote => match c {
                    '\\' => {
                        if let Some(escaped) = self.bump() {
                            if escaped == '\n' {
                                self.line += 1;
                                return Some('\n');
                            }
                        }
                    }
                    '"' => {
                        self.state = LexState::Code;
                        return Some('"');
                    }
                    _ => {}
                },
            }
        }
        None
    }
}
