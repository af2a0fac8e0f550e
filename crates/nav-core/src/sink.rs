//! Upward event channel
//!
//! Features never look up their parent through ambient state. The parent
//! hands each router an `EventSink` at construction time, so the wiring is
//! visible at the call site and a missing sink is a deliberate choice
//! (standalone previews, unit tests), not an injection bug.

use std::fmt;

/// Typed, explicit channel from a feature router to its parent.
///
/// Wraps any `Fn(E)`; in the app shell this is a closure that maps the
/// feature's event into the shell's event envelope and queues it.
pub struct EventSink<E> {
    deliver: Box<dyn Fn(E)>,
}

impl<E> EventSink<E> {
    /// Create a sink from a delivery function.
    pub fn new(deliver: impl Fn(E) + 'static) -> Self {
        Self {
            deliver: Box::new(deliver),
        }
    }

    /// Deliver one event. Invokes the delivery function exactly once.
    pub fn send(&self, event: E) {
        (self.deliver)(event);
    }
}

impl<E> fmt::Debug for EventSink<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventSink")
    }
}
