//! UserDetail feature: one user's profile, photos, and the like flow
//!
//! The detail context is opened by a parent coordinator, so closing it is
//! also the parent's job: this router only emits `Dismissed`/`Liked` and
//! the parent tears the context down.

use app_model::{LikeKind, PhotoId, User, UserId};
use nav_core::modal::Result as ModalResult;
use nav_core::{EventSink, NavStack, Router};
use serde::{Deserialize, Serialize};

use crate::like_send::LikeSendEvent;

/// Push destinations inside the UserDetail feature.
///
/// Detail -> photo list -> enlarged photo is the canonical in-feature chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserDetailRoute {
    /// Photo list
    Photos,
    /// One photo, enlarged
    PhotoDetail(PhotoId),
}

/// Modals owned by the UserDetail feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserDetailModal {
    /// Like-composition sheet
    LikeCompose,
}

/// Events UserDetail emits to its parent coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserDetailEvent {
    /// The detail screen was closed (back button or similar)
    Dismissed,
    /// A like was sent
    Liked {
        /// Recipient
        user: UserId,
        /// Kind of like
        kind: LikeKind,
    },
}

/// How the profile is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Someone else's profile
    Standard,
    /// The signed-in user's own profile (preview)
    OwnProfile,
}

/// Navigation state machine for the UserDetail feature.
#[derive(Debug)]
pub struct UserDetailRouter {
    /// The displayed user.
    user: User,
    display_mode: DisplayMode,
    liked: bool,
    inner: Router<UserDetailRoute, UserDetailModal, UserDetailEvent>,
}

impl UserDetailRouter {
    /// Create a router for one user's detail context.
    pub fn new(user: User, display_mode: DisplayMode) -> Self {
        Self {
            user,
            display_mode,
            liked: false,
            inner: Router::new(),
        }
    }

    /// Create a router with the upward sink wired.
    pub fn with_sink(user: User, display_mode: DisplayMode, sink: EventSink<UserDetailEvent>) -> Self {
        Self {
            user,
            display_mode,
            liked: false,
            inner: Router::with_sink(sink),
        }
    }

    /// Register (or rewire) the upward sink.
    pub fn set_sink(&mut self, sink: EventSink<UserDetailEvent>) {
        self.inner.set_sink(sink);
    }

    /// The displayed user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// How the profile is shown.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Whether a like was sent in this context.
    pub fn liked(&self) -> bool {
        self.liked
    }

    /// Push a destination.
    pub fn navigate(&mut self, route: UserDetailRoute) {
        self.inner.navigate(route);
    }

    /// Open the photo list.
    pub fn show_photos(&mut self) {
        self.navigate(UserDetailRoute::Photos);
    }

    /// Open one photo enlarged.
    pub fn show_photo_detail(&mut self, photo: PhotoId) {
        self.navigate(UserDetailRoute::PhotoDetail(photo));
    }

    /// Pop the top destination (or close the modal first).
    pub fn go_back(&mut self) -> bool {
        self.inner.go_back()
    }

    /// Open the like-composition sheet.
    pub fn compose_like(&mut self) -> ModalResult<(), UserDetailModal> {
        self.inner.present_modal(UserDetailModal::LikeCompose)
    }

    /// Close the active modal.
    pub fn dismiss_modal(&mut self) -> Option<UserDetailModal> {
        self.inner.dismiss_modal()
    }

    /// Send a like: closes the compose sheet, marks the profile liked,
    /// and reports the like upward.
    pub fn send_like(&mut self, kind: LikeKind) {
        self.inner.dismiss_modal();
        self.liked = true;
        let user = self.user.id;
        self.inner.send_event(UserDetailEvent::Liked { user, kind });
    }

    /// Interpret the compose sheet's result.
    pub fn handle_like_send(&mut self, event: LikeSendEvent) {
        match event {
            LikeSendEvent::Sent(kind) => self.send_like(kind),
            LikeSendEvent::Dismissed => {
                self.inner.dismiss_modal();
            }
        }
    }

    /// Close the detail screen by asking the parent to tear it down.
    pub fn dismiss(&self) {
        self.inner.send_event(UserDetailEvent::Dismissed);
    }

    /// Emit an event to the parent coordinator.
    pub fn send_event(&self, event: UserDetailEvent) {
        self.inner.send_event(event);
    }

    /// The push stack.
    pub fn stack(&self) -> &NavStack<UserDetailRoute> {
        self.inner.stack()
    }

    /// The active modal, if any.
    pub fn modal(&self) -> Option<&UserDetailModal> {
        self.inner.modal()
    }
}
