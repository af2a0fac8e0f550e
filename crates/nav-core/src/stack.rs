//! Push-navigation stack
//!
//! A `NavStack` holds the routes pushed on top of one feature's entry
//! screen, root-first. An empty stack means the entry screen is showing.

use serde::{Deserialize, Serialize};

/// Ordered sequence of pushed routes for one feature.
///
/// Append-only except for the explicit pop/truncate operations. The entry
/// screen itself is not an element; depth 0 means "at the root".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavStack<R> {
    routes: Vec<R>,
}

impl<R> Default for NavStack<R> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<R> NavStack<R> {
    /// Create an empty stack (showing the feature's entry screen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a route onto the stack.
    pub fn push(&mut self, route: R) {
        self.routes.push(route);
    }

    /// Pop the top route, returning it.
    ///
    /// Popping an empty stack is a no-op; the attempt is logged because it
    /// usually means the UI layer raced a back gesture against a render.
    pub fn pop(&mut self) -> Option<R> {
        if self.routes.is_empty() {
            tracing::warn!("pop ignored: navigation stack already at root");
            return None;
        }
        self.routes.pop()
    }

    /// Clear the stack, returning to the entry screen. Idempotent.
    pub fn pop_to_root(&mut self) {
        self.routes.clear();
    }

    /// Replace the whole stack contents (used by deep-link application).
    pub fn set_routes(&mut self, routes: Vec<R>) {
        self.routes = routes;
    }

    /// The currently shown route, or `None` at the entry screen.
    pub fn top(&self) -> Option<&R> {
        self.routes.last()
    }

    /// Number of pushed routes.
    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    /// Whether the stack is at the entry screen.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Whether a back navigation would pop anything.
    pub fn can_go_back(&self) -> bool {
        !self.routes.is_empty()
    }

    /// All pushed routes, root-first.
    pub fn routes(&self) -> &[R] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_append_order() {
        let mut stack = NavStack::new();
        stack.push("a");
        stack.push("b");
        stack.push("c");
        assert_eq!(stack.routes(), &["a", "b", "c"]);
        assert_eq!(stack.top(), Some(&"c"));
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn pop_is_exact_inverse_of_push() {
        let mut stack = NavStack::new();
        stack.push(1);
        let before = stack.clone();
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack, before);
    }

    #[test]
    fn pop_on_empty_stack_is_noop() {
        let mut stack: NavStack<u8> = NavStack::new();
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_to_root_is_idempotent() {
        let mut stack = NavStack::new();
        stack.push("a");
        stack.push("b");
        stack.pop_to_root();
        assert!(stack.is_empty());
        stack.pop_to_root();
        assert!(stack.is_empty());
    }

    #[test]
    fn stack_serializes_round_trip() {
        let mut stack = NavStack::new();
        stack.push("a".to_string());
        stack.push("b".to_string());
        let json = serde_json::to_string(&stack).unwrap();
        let parsed: NavStack<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(stack, parsed);
    }
}
