//! Exclusive modal slot
//!
//! Each scope (app, tab, feature) owns at most one active modal. The slot
//! rejects a second presentation instead of silently dropping the first
//! modal's dismissal path; callers that really want last-write-wins use
//! [`ModalSlot::replace`] and deal with the displaced value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when presenting into an occupied modal slot.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModalError<M: fmt::Debug> {
    /// A modal is already active in this scope; the rejected modal is
    /// handed back so the caller can retry, queue, or drop it explicitly.
    #[error("a modal is already presented in this scope")]
    AlreadyPresented(M),
}

/// Result type for modal operations.
pub type Result<T, M> = std::result::Result<T, ModalError<M>>;

/// Modal type for features that never present modals.
///
/// Uninhabited, so `present` is statically unreachable for such features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoModal {}

/// Holder for the at-most-one active modal of a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalSlot<M> {
    active: Option<M>,
}

impl<M> Default for ModalSlot<M> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<M> ModalSlot<M> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Present a modal.
    ///
    /// Fails if a modal is already active; the rejected modal is returned
    /// inside the error.
    pub fn present(&mut self, modal: M) -> Result<(), M>
    where
        M: fmt::Debug,
    {
        if self.active.is_some() {
            return Err(ModalError::AlreadyPresented(modal));
        }
        self.active = Some(modal);
        Ok(())
    }

    /// Present a modal, displacing any active one.
    ///
    /// Returns the displaced modal so its dismissal path can be honored by
    /// the caller rather than silently abandoned.
    pub fn replace(&mut self, modal: M) -> Option<M> {
        self.active.replace(modal)
    }

    /// Dismiss the active modal, returning it. No-op when empty.
    pub fn dismiss(&mut self) -> Option<M> {
        self.active.take()
    }

    /// The active modal, if any.
    pub fn current(&self) -> Option<&M> {
        self.active.as_ref()
    }

    /// Whether a modal is active.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
