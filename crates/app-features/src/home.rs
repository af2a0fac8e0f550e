//! Home feature: the item feed and its detail screens

use app_model::ItemId;
use nav_core::modal::Result as ModalResult;
use nav_core::{EventSink, NavStack, Router};
use serde::{Deserialize, Serialize};

/// Push destinations inside the Home feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeRoute {
    /// Detail screen for one item
    ItemDetail(ItemId),
    /// Items related to one item
    RelatedItems(ItemId),
}

/// Modals owned by the Home feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeModal {
    /// Edit sheet for one item
    Edit(ItemId),
    /// Read-only preview overlay for one item
    Preview(ItemId),
}

/// Events Home emits to the app layer.
///
/// Home has no authority over tabs or the login flow; it only states the
/// intent and lets the shell decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeEvent {
    /// The user tried something that needs an account
    RequireLogin,
    /// The user asked for the settings screen
    OpenSettings,
}

/// Navigation state machine for the Home feature.
///
/// Constructed by the shell, which wires the event sink; child screens
/// receive a mutable reference, never a global.
#[derive(Debug, Default)]
pub struct HomeRouter {
    inner: Router<HomeRoute, HomeModal, HomeEvent>,
}

impl HomeRouter {
    /// Create a router with no sink (standalone previews, tests).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with the upward sink wired.
    pub fn with_sink(sink: EventSink<HomeEvent>) -> Self {
        Self {
            inner: Router::with_sink(sink),
        }
    }

    /// Register (or rewire) the upward sink.
    pub fn set_sink(&mut self, sink: EventSink<HomeEvent>) {
        self.inner.set_sink(sink);
    }

    /// Push a destination.
    pub fn navigate(&mut self, route: HomeRoute) {
        self.inner.navigate(route);
    }

    /// Pop the top destination.
    pub fn go_back(&mut self) -> bool {
        self.inner.go_back()
    }

    /// Return to the feed.
    pub fn pop_to_root(&mut self) {
        self.inner.pop_to_root();
    }

    /// Open the edit sheet for an item.
    pub fn show_edit(&mut self, item: ItemId) -> ModalResult<(), HomeModal> {
        self.inner.present_modal(HomeModal::Edit(item))
    }

    /// Open the read-only preview overlay for an item.
    pub fn show_preview(&mut self, item: ItemId) -> ModalResult<(), HomeModal> {
        self.inner.present_modal(HomeModal::Preview(item))
    }

    /// Close the active modal.
    pub fn dismiss_modal(&mut self) -> Option<HomeModal> {
        self.inner.dismiss_modal()
    }

    /// Emit an event to the app layer.
    pub fn send_event(&self, event: HomeEvent) {
        self.inner.send_event(event);
    }

    /// The push stack.
    pub fn stack(&self) -> &NavStack<HomeRoute> {
        self.inner.stack()
    }

    /// Mutable push stack (deep links, restore).
    pub fn stack_mut(&mut self) -> &mut NavStack<HomeRoute> {
        self.inner.stack_mut()
    }

    /// The currently shown route, or `None` at the feed.
    pub fn top(&self) -> Option<&HomeRoute> {
        self.inner.top()
    }

    /// The active modal, if any.
    pub fn modal(&self) -> Option<&HomeModal> {
        self.inner.modal()
    }
}
