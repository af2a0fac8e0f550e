//! Meridian: a navigation-architecture reference implementation
//!
//! A working model of per-feature routing for a tabbed application:
//! features own their push stacks and modals, cross-feature intents leave
//! as events, and an app-level coordinator interprets them. The crates:
//!
//! - [`nav_core`] - stack, modal slot, event sink, router, region registry
//! - [`app_model`] - the domain content routes point at
//! - [`app_features`] - per-feature route/modal/event enums and routers
//! - [`app_shell`] - tabs, app-scope modals, the coordinator, deep links,
//!   screen resolution, and state snapshots

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_features;
pub use app_model;
pub use app_shell;
pub use nav_core;
