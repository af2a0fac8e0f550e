//! Login feature
//!
//! Hosted inside the app-scope login modal. The result of the flow is
//! reported as an event, never as a "close me" call - the shell opened the
//! modal, so the shell closes it.

use nav_core::{EventSink, NavStack, NoModal, Router};
use serde::{Deserialize, Serialize};

/// Push destinations inside the Login feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoginRoute {
    /// Completion screen shown after a successful login
    Complete,
}

/// Events Login emits to the app layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoginEvent {
    /// Login finished successfully
    Completed,
    /// The user backed out
    Cancelled,
}

/// Navigation state machine for the Login feature.
#[derive(Debug, Default)]
pub struct LoginRouter {
    inner: Router<LoginRoute, NoModal, LoginEvent>,
}

impl LoginRouter {
    /// Create a router with no sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with the upward sink wired.
    pub fn with_sink(sink: EventSink<LoginEvent>) -> Self {
        Self {
            inner: Router::with_sink(sink),
        }
    }

    /// Push a destination.
    pub fn navigate(&mut self, route: LoginRoute) {
        self.inner.navigate(route);
    }

    /// Pop the top destination.
    pub fn go_back(&mut self) -> bool {
        self.inner.go_back()
    }

    /// Emit an event to the app layer.
    pub fn send_event(&self, event: LoginEvent) {
        self.inner.send_event(event);
    }

    /// The push stack.
    pub fn stack(&self) -> &NavStack<LoginRoute> {
        self.inner.stack()
    }

    /// The currently shown route, or `None` at the start screen.
    pub fn top(&self) -> Option<&LoginRoute> {
        self.inner.top()
    }
}
