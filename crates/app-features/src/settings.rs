//! Settings feature
//!
//! A small feature: one push destination and two outbound events, no
//! modals. Its router uses [`nav_core::NoModal`], so presenting a modal
//! here is not even expressible.

use nav_core::{EventSink, NavStack, NoModal, Router};
use serde::{Deserialize, Serialize};

/// Push destinations inside the Settings feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsRoute {
    /// Detail screen for one settings section
    Detail(String),
}

/// Events Settings emits to the app layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsEvent {
    /// The user asked to go back to the home screen
    OpenHome,
    /// The user tried something that needs an account
    RequireLogin,
}

/// Navigation state machine for the Settings feature.
#[derive(Debug, Default)]
pub struct SettingsRouter {
    inner: Router<SettingsRoute, NoModal, SettingsEvent>,
}

impl SettingsRouter {
    /// Create a router with no sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with the upward sink wired.
    pub fn with_sink(sink: EventSink<SettingsEvent>) -> Self {
        Self {
            inner: Router::with_sink(sink),
        }
    }

    /// Register (or rewire) the upward sink.
    pub fn set_sink(&mut self, sink: EventSink<SettingsEvent>) {
        self.inner.set_sink(sink);
    }

    /// Push a destination.
    pub fn navigate(&mut self, route: SettingsRoute) {
        self.inner.navigate(route);
    }

    /// Pop the top destination.
    pub fn go_back(&mut self) -> bool {
        self.inner.go_back()
    }

    /// Return to the settings menu.
    pub fn pop_to_root(&mut self) {
        self.inner.pop_to_root();
    }

    /// Emit an event to the app layer.
    pub fn send_event(&self, event: SettingsEvent) {
        self.inner.send_event(event);
    }

    /// The push stack.
    pub fn stack(&self) -> &NavStack<SettingsRoute> {
        self.inner.stack()
    }

    /// Mutable push stack (deep links, restore).
    pub fn stack_mut(&mut self) -> &mut NavStack<SettingsRoute> {
        self.inner.stack_mut()
    }

    /// The currently shown route, or `None` at the menu.
    pub fn top(&self) -> Option<&SettingsRoute> {
        self.inner.top()
    }
}
