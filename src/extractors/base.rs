// Base types shared by every extractor: the symbol record model, the
// modifier set, and the sink that finished records are published to.

use serde::{Deserialize, Serialize};

/// A structural symbol (class, method, function, constant, variable)
/// extracted from source text.
///
/// Records are immutable once published; the scope qualifier is a copy of
/// the enclosing frame's name, never a reference into the scope stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Symbol {
    /// Unique identifier for this symbol (md5 of file:name:line)
    pub id: String,
    /// Symbol name as it appears in code
    pub name: String,
    /// Kind of symbol (class, method, etc.)
    pub kind: SymbolKind,
    /// Language this symbol was extracted from
    pub language: String,
    /// File the symbol was found in
    pub file_path: String,
    /// Line number (1-based) of the declaration line
    pub line_number: u32,
    /// Kind of the enclosing scope; None for top-level symbols
    pub scope_kind: Option<ScopeKind>,
    /// Name of the enclosing scope; None for top-level symbols
    pub scope_name: Option<String>,
    /// Declaration modifiers, duplicates collapsed
    pub modifiers: Vec<Modifier>,
    /// Winning access modifier (the last one seen on the line)
    pub visibility: Option<Visibility>,
    /// Verbatim parameter-list text for callable kinds
    pub signature: Option<String>,
}

/// Symbol kinds emitted by the extractors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Class,
    Interface,
    Method,
    Function,
    Constant,
    Variable,
}

impl SymbolKind {
    /// Single-character kind code used by downstream indexers.
    pub fn code(&self) -> char {
        match self {
            SymbolKind::Class => 'c',
            SymbolKind::Interface => 'i',
            SymbolKind::Method => 'm',
            SymbolKind::Function => 'f',
            SymbolKind::Constant => 'd',
            SymbolKind::Variable => 'v',
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "class" => SymbolKind::Class,
            "interface" => SymbolKind::Interface,
            "method" => SymbolKind::Method,
            "function" => SymbolKind::Function,
            "constant" => SymbolKind::Constant,
            _ => SymbolKind::Variable,
        }
    }

    pub fn to_string(&self) -> String {
        match self {
            SymbolKind::Class => "class",
            SymbolKind::Interface => "interface",
            SymbolKind::Method => "method",
            SymbolKind::Function => "function",
            SymbolKind::Constant => "constant",
            SymbolKind::Variable => "variable",
        }
        .to_string()
    }
}

/// Kind of a lexical scope frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Root,
    Class,
    Function,
}

/// Access levels for symbols.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

/// Declaration modifier keywords.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Abstract,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Abstract => "abstract",
        }
    }
}

const ALL_MODIFIERS: [Modifier; 6] = [
    Modifier::Public,
    Modifier::Private,
    Modifier::Protected,
    Modifier::Static,
    Modifier::Final,
    Modifier::Abstract,
];

/// A fixed-capacity set of declaration modifiers.
///
/// Backed by a bitmask so repeated keywords on a garbled modifier list
/// collapse into a single membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierSet {
    bits: u8,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, modifier: Modifier) {
        self.bits |= 1 << modifier as u8;
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.bits & (1 << modifier as u8) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Members in declaration order (access, static, final, abstract).
    pub fn to_vec(&self) -> Vec<Modifier> {
        ALL_MODIFIERS
            .iter()
            .copied()
            .filter(|m| self.contains(*m))
            .collect()
    }

    /// True when the set holds nothing besides `abstract`/`final`, the only
    /// modifiers a class header may carry.
    pub fn is_class_compatible(&self) -> bool {
        let class_bits = (1 << Modifier::Abstract as u8) | (1 << Modifier::Final as u8);
        self.bits & !class_bits == 0
    }
}

/// Receives finished symbol records, in source order within one scan.
pub trait TagSink {
    fn publish(&mut self, symbol: Symbol);
}

/// Sink adapter that collects records into a `Vec` for the library API.
#[derive(Debug, Default)]
pub struct VecSink {
    symbols: Vec<Symbol>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }
}

impl TagSink for VecSink {
    fn publish(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }
}
