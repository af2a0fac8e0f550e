//! Feature modules for Meridian
//!
//! One module per feature. Each defines three closed enums - the feature's
//! push routes, its modals, and the events it emits upward - plus a typed
//! router built on [`nav_core::Router`]. The enums are deliberately kept
//! per-feature rather than merged into one global set: a feature can only
//! name destinations it owns, and anything else must leave as an event.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod home;
pub mod like_send;
pub mod login;
pub mod settings;
pub mod user_detail;
