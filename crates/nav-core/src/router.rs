//! Per-feature navigation state machine
//!
//! A `Router` owns exactly one [`NavStack`] and one [`ModalSlot`] for its
//! feature, plus an optional [`EventSink`] for intents that cross the
//! feature boundary. It is created when the feature is first displayed and
//! dropped with its hosting context; deactivation (e.g. switching tabs)
//! leaves it untouched so returning restores the prior position.

use crate::modal::{ModalSlot, Result as ModalResult};
use crate::sink::EventSink;
use crate::stack::NavStack;

/// Navigation state machine for one feature.
///
/// `R` is the feature's route enum, `M` its modal enum (use
/// [`crate::NoModal`] for features without modals), `E` its outbound
/// event enum.
#[derive(Debug)]
pub struct Router<R, M, E> {
    stack: NavStack<R>,
    modal: ModalSlot<M>,
    sink: Option<EventSink<E>>,
}

impl<R, M, E> Default for Router<R, M, E> {
    fn default() -> Self {
        Self {
            stack: NavStack::new(),
            modal: ModalSlot::new(),
            sink: None,
        }
    }
}

impl<R, M, E> Router<R, M, E> {
    /// Create a router at the initial state: empty stack, no modal, no sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with an upward event sink already wired.
    pub fn with_sink(sink: EventSink<E>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::default()
        }
    }

    /// Register (or rewire) the upward event sink.
    pub fn set_sink(&mut self, sink: EventSink<E>) {
        self.sink = Some(sink);
    }

    /// Push a route. Always succeeds; reachability is not validated.
    pub fn navigate(&mut self, route: R) {
        self.stack.push(route);
    }

    /// Pop the top route. No-op at the entry screen.
    pub fn pop(&mut self) -> Option<R> {
        self.stack.pop()
    }

    /// Return to the feature's entry screen. Idempotent.
    pub fn pop_to_root(&mut self) {
        self.stack.pop_to_root();
    }

    /// Present a modal; rejected if one is already active.
    pub fn present_modal(&mut self, modal: M) -> ModalResult<(), M>
    where
        M: std::fmt::Debug,
    {
        self.modal.present(modal)
    }

    /// Present a modal, displacing any active one.
    pub fn replace_modal(&mut self, modal: M) -> Option<M> {
        self.modal.replace(modal)
    }

    /// Dismiss the active modal. No-op when none is active.
    pub fn dismiss_modal(&mut self) -> Option<M> {
        self.modal.dismiss()
    }

    /// Emit an event to the parent scope.
    ///
    /// Delivered synchronously, exactly once per call. Without a sink the
    /// event is dropped by design so the feature can run standalone.
    pub fn send_event(&self, event: E) {
        match &self.sink {
            Some(sink) => sink.send(event),
            None => tracing::debug!("event dropped: no sink registered"),
        }
    }

    /// The push stack.
    pub fn stack(&self) -> &NavStack<R> {
        &self.stack
    }

    /// Mutable access to the push stack (deep links, restore).
    pub fn stack_mut(&mut self) -> &mut NavStack<R> {
        &mut self.stack
    }

    /// The currently shown route, or `None` at the entry screen.
    pub fn top(&self) -> Option<&R> {
        self.stack.top()
    }

    /// The active modal, if any.
    pub fn modal(&self) -> Option<&M> {
        self.modal.current()
    }

    /// Whether a back navigation would change anything.
    pub fn can_go_back(&self) -> bool {
        self.modal.is_active() || self.stack.can_go_back()
    }

    /// Back navigation: dismiss the modal first, then pop the stack.
    ///
    /// Returns `true` if any state changed.
    pub fn go_back(&mut self) -> bool {
        if self.modal.dismiss().is_some() {
            return true;
        }
        self.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestRoute {
        Detail(u32),
        Related(u32),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestModal {
        Edit(u32),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestEvent {
        NeedsLogin,
    }

    type TestRouter = Router<TestRoute, TestModal, TestEvent>;

    #[test]
    fn starts_at_initial_state() {
        let router = TestRouter::new();
        assert!(router.stack().is_empty());
        assert!(router.modal().is_none());
        assert!(!router.can_go_back());
    }

    #[test]
    fn navigate_appends_in_order() {
        let mut router = TestRouter::new();
        router.navigate(TestRoute::Detail(1));
        router.navigate(TestRoute::Related(1));
        assert_eq!(
            router.stack().routes(),
            &[TestRoute::Detail(1), TestRoute::Related(1)]
        );
        assert_eq!(router.top(), Some(&TestRoute::Related(1)));
    }

    #[test]
    fn go_back_prefers_modal_over_stack() {
        let mut router = TestRouter::new();
        router.navigate(TestRoute::Detail(1));
        router.present_modal(TestModal::Edit(1)).unwrap();

        assert!(router.go_back());
        assert!(router.modal().is_none());
        assert_eq!(router.top(), Some(&TestRoute::Detail(1)));

        assert!(router.go_back());
        assert!(router.stack().is_empty());

        assert!(!router.go_back());
    }

    #[test]
    fn send_event_invokes_sink_exactly_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            EventSink::new(move |e: TestEvent| seen.borrow_mut().push(e))
        };
        let router = TestRouter::with_sink(sink);

        router.send_event(TestEvent::NeedsLogin);
        assert_eq!(*seen.borrow(), vec![TestEvent::NeedsLogin]);
    }

    #[test]
    fn send_event_without_sink_is_silent_and_mutates_nothing() {
        let mut router = TestRouter::new();
        router.navigate(TestRoute::Detail(1));
        router.send_event(TestEvent::NeedsLogin);
        assert_eq!(router.stack().routes(), &[TestRoute::Detail(1)]);
        assert!(router.modal().is_none());
    }

    #[test]
    fn second_modal_is_rejected_and_first_survives() {
        let mut router = TestRouter::new();
        router.present_modal(TestModal::Edit(1)).unwrap();
        assert!(router.present_modal(TestModal::Edit(2)).is_err());
        assert_eq!(router.modal(), Some(&TestModal::Edit(1)));
    }
}
