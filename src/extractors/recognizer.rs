// Declaration recognizer.
//
// Classifies one logical line as a class/interface declaration, a
// method/function declaration, or nothing. Keyword matching is
// case-insensitive and token bounded: `functionX` is an identifier, not a
// keyword. Classification is first-match-wins; a line is never two kinds.

use crate::extractors::base::{Modifier, ModifierSet, ScopeKind, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Interface,
    Method,
    Function,
}

/// Transient classification result for one logical line. The name is always
/// non-empty; a recognized keyword with a missing name classifies as no
/// declaration at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub modifiers: ModifierSet,
    pub visibility: Option<Visibility>,
    /// Verbatim parameter-list text, callable kinds only
    pub signature: Option<String>,
}

/// Classifies `line` against the kind of the innermost open scope.
///
/// A `function` keyword inside a class body yields a method; anywhere else
/// (top level, or nested inside another function body) it yields a plain
/// function.
pub fn classify(line: &str, active_scope: ScopeKind) -> Option<Declaration> {
    let mut rest = line;
    let mut modifiers = ModifierSet::new();
    let mut visibility = None;

    loop {
        let (word, tail) = next_token(rest)?;
        match word.to_ascii_lowercase().as_str() {
            "public" => {
                modifiers.insert(Modifier::Public);
                visibility = Some(Visibility::Public);
            }
            "private" => {
                modifiers.insert(Modifier::Private);
                visibility = Some(Visibility::Private);
            }
            "protected" => {
                modifiers.insert(Modifier::Protected);
                visibility = Some(Visibility::Protected);
            }
            "static" => modifiers.insert(Modifier::Static),
            "final" => modifiers.insert(Modifier::Final),
            "abstract" => modifiers.insert(Modifier::Abstract),
            "class" => return classify_class(tail, modifiers),
            "interface" => return classify_interface(tail, modifiers),
            "function" => return classify_function(tail, modifiers, visibility, active_scope),
            _ => return None,
        }
        rest = tail;
    }
}

/// A class header tolerates only `abstract`/`final` ahead of the keyword.
fn classify_class(tail: &str, modifiers: ModifierSet) -> Option<Declaration> {
    if !modifiers.is_class_compatible() {
        return None;
    }

    let name = identifier_prefix(tail.trim_start());
    if name.is_empty() {
        return None;
    }

    Some(Declaration {
        kind: DeclarationKind::Class,
        name: name.to_string(),
        modifiers,
        visibility: None,
        signature: None,
    })
}

/// An interface header carries no modifiers at all.
fn classify_interface(tail: &str, modifiers: ModifierSet) -> Option<Declaration> {
    if !modifiers.is_empty() {
        return None;
    }

    let name = identifier_prefix(tail.trim_start());
    if name.is_empty() {
        return None;
    }

    Some(Declaration {
        kind: DeclarationKind::Interface,
        name: name.to_string(),
        modifiers,
        visibility: None,
        signature: None,
    })
}

fn classify_function(
    tail: &str,
    modifiers: ModifierSet,
    visibility: Option<Visibility>,
    active_scope: ScopeKind,
) -> Option<Declaration> {
    let mut rest = tail.trim_start();

    // Optional by-reference marker: function &foo()
    if let Some(stripped) = rest.strip_prefix('&') {
        rest = stripped.trim_start();
    }

    let name = identifier_prefix(rest);
    if name.is_empty() {
        return None;
    }

    let after_name = rest[name.len()..].trim_start();
    if !after_name.starts_with('(') {
        return None;
    }

    // First balanced paren group, verbatim. An unterminated group on the
    // line degrades to the rest of the line.
    let signature = paren_group(after_name)
        .unwrap_or(after_name)
        .trim_end()
        .to_string();

    let kind = if active_scope == ScopeKind::Class {
        DeclarationKind::Method
    } else {
        DeclarationKind::Function
    };

    Some(Declaration {
        kind,
        name: name.to_string(),
        modifiers,
        visibility,
        signature: Some(signature),
    })
}

/// Splits off the next whitespace-delimited token.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

/// Longest identifier prefix: letter/underscore start, alphanumeric or
/// underscore continuation.
fn identifier_prefix(s: &str) -> &str {
    let mut end = 0;
    for (i, c) in s.char_indices() {
        let valid = if i == 0 {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || c == '_'
        };
        if !valid {
            break;
        }
        end = i + c.len_utf8();
    }
    &s[..end]
}

/// The text of the first balanced paren group, or None if it never closes.
fn paren_group(s: &str) -> Option<&str> {
    let mut depth = 0u32;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
