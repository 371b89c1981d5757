// Context-free tag patterns.
//
// A declarative facility mapping a regular expression plus capture-group
// index to a symbol kind. Used for symbol kinds that need no scope
// qualification (constants, defines, simple variable assignments); these
// rules never touch the scope stack.

use crate::extractors::base::SymbolKind;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid tag pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("capture group {group} out of range for pattern '{pattern}'")]
    GroupOutOfRange { pattern: String, group: usize },
}

struct PatternRule {
    regex: Regex,
    group: usize,
    kind: SymbolKind,
}

/// An ordered set of regex-to-kind rules, applied per logical line.
#[derive(Default)]
pub struct PatternSet {
    rules: Vec<PatternRule>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule. `group` selects the capture holding the symbol name.
    pub fn add(&mut self, pattern: &str, group: usize, kind: SymbolKind) -> Result<(), PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        if group >= regex.captures_len() {
            return Err(PatternError::GroupOutOfRange {
                pattern: pattern.to_string(),
                group,
            });
        }
        self.rules.push(PatternRule { regex, group, kind });
        Ok(())
    }

    /// Names captured on `line`, one per matching rule, in registration order.
    pub fn match_line(&self, line: &str) -> Vec<(String, SymbolKind)> {
        let mut matches = Vec::new();
        for rule in &self.rules {
            if let Some(captures) = rule.regex.captures(line) {
                if let Some(name) = captures.get(rule.group) {
                    if !name.as_str().is_empty() {
                        matches.push((name.as_str().to_string(), rule.kind));
                    }
                }
            }
        }
        matches
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
