// Tag emitter.
//
// Turns a classified declaration plus the active scope stack into a finished
// symbol record. The scope qualifier is copied out of the frame so a record
// stays valid after its frame is popped.

use crate::extractors::base::{ScopeKind, Symbol, SymbolKind};
use crate::extractors::recognizer::{Declaration, DeclarationKind};
use crate::extractors::scope::ScopeStack;

pub struct TagEmitter {
    language: String,
    file_path: String,
}

impl TagEmitter {
    pub fn new(language: String, file_path: String) -> Self {
        Self {
            language,
            file_path,
        }
    }

    /// Materializes a record for a recognized declaration.
    ///
    /// Classes are always recorded at top level, even when lexically nested;
    /// methods are qualified by the nearest enclosing class frame.
    pub fn emit(&self, decl: &Declaration, scopes: &ScopeStack, line_number: u32) -> Symbol {
        let (kind, scope_kind, scope_name) = match decl.kind {
            DeclarationKind::Class => (SymbolKind::Class, None, None),
            DeclarationKind::Interface => (SymbolKind::Interface, None, None),
            DeclarationKind::Method => (
                SymbolKind::Method,
                Some(ScopeKind::Class),
                scopes.enclosing_class().map(|name| name.to_string()),
            ),
            DeclarationKind::Function => (SymbolKind::Function, None, None),
        };

        Symbol {
            id: self.generate_id(&decl.name, line_number),
            name: decl.name.clone(),
            kind,
            language: self.language.clone(),
            file_path: self.file_path.clone(),
            line_number,
            scope_kind,
            scope_name,
            modifiers: decl.modifiers.to_vec(),
            visibility: decl.visibility,
            signature: decl.signature.clone(),
        }
    }

    /// Record for a context-free pattern match (constant, variable).
    pub fn emit_pattern(&self, name: &str, kind: SymbolKind, line_number: u32) -> Symbol {
        Symbol {
            id: self.generate_id(name, line_number),
            name: name.to_string(),
            kind,
            language: self.language.clone(),
            file_path: self.file_path.clone(),
            line_number,
            scope_kind: None,
            scope_name: None,
            modifiers: Vec::new(),
            visibility: None,
            signature: None,
        }
    }

    fn generate_id(&self, name: &str, line: u32) -> String {
        let input = format!("{}:{}:{}", self.file_path, name, line);
        let digest = md5::compute(input.as_bytes());
        format!("{:x}", digest)
    }
}
