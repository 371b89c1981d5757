// Scope stack manager.
//
// One frame per open lexical scope (class body, function body), keyed by the
// brace depth the scope opened at. The stack is Vec-backed: the element below
// a frame is its parent, and index 0 is the root frame that lives for the
// whole scan.

use crate::extractors::base::ScopeKind;
use tracing::debug;

/// One open lexical scope.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeFrame {
    /// Name of the enclosing class or function; empty for the root frame
    pub name: String,
    pub kind: ScopeKind,
    /// Brace depth this frame opened at; its closing brace returns to it
    pub brace_depth: u32,
}

impl ScopeFrame {
    pub fn new(name: String, kind: ScopeKind, brace_depth: u32) -> Self {
        Self {
            name,
            kind,
            brace_depth,
        }
    }

    fn root() -> Self {
        Self {
            name: String::new(),
            kind: ScopeKind::Root,
            brace_depth: 0,
        }
    }
}

/// Stack of open scopes. The root frame is the floor and is never popped.
#[derive(Debug)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            frames: vec![ScopeFrame::root()],
        }
    }

    /// The innermost open scope. Total: falls back to the root frame.
    pub fn top(&self) -> &ScopeFrame {
        self.frames.last().expect("scope stack always holds the root frame")
    }

    pub fn push(&mut self, frame: ScopeFrame) {
        self.frames.push(frame);
    }

    /// Pops the innermost frame. Popping the root is a no-op that returns
    /// None so callers can diagnose a desynchronized brace count.
    pub fn pop(&mut self) -> Option<ScopeFrame> {
        if self.frames.len() == 1 {
            debug!("attempted to pop the root scope frame");
            return None;
        }
        self.frames.pop()
    }

    /// Pops every non-root frame opened at or above `depth`. Called after a
    /// closing brace lowers the brace count back to `depth`.
    pub fn pop_to_depth(&mut self, depth: u32) {
        while self.frames.len() > 1 && self.top().brace_depth >= depth {
            self.frames.pop();
        }
    }

    /// Name of the nearest enclosing class frame, if any.
    pub fn enclosing_class(&self) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .find(|f| f.kind == ScopeKind::Class)
            .map(|f| f.name.as_str())
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_is_root_for_new_stack() {
        let stack = ScopeStack::new();
        assert_eq!(stack.top().kind, ScopeKind::Root);
        assert_eq!(stack.top().name, "");
    }

    #[test]
    fn test_pop_root_is_a_noop() {
        let mut stack = ScopeStack::new();
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().kind, ScopeKind::Root);
    }

    #[test]
    fn test_push_pop_restores_parent() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeFrame::new("Foo".into(), ScopeKind::Class, 0));
        stack.push(ScopeFrame::new("bar".into(), ScopeKind::Function, 1));

        assert_eq!(stack.top().name, "bar");
        assert_eq!(stack.enclosing_class(), Some("Foo"));

        stack.pop();
        assert_eq!(stack.top().name, "Foo");
        assert_eq!(stack.top().kind, ScopeKind::Class);
    }

    #[test]
    fn test_pop_to_depth_closes_nested_frames() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeFrame::new("Foo".into(), ScopeKind::Class, 0));
        stack.push(ScopeFrame::new("bar".into(), ScopeKind::Function, 1));

        stack.pop_to_depth(1);
        assert_eq!(stack.top().name, "Foo");

        stack.pop_to_depth(0);
        assert_eq!(stack.top().kind, ScopeKind::Root);
    }
}
