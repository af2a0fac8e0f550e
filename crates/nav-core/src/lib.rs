//! Navigation primitives for Meridian
//!
//! This crate provides the building blocks every feature router is made of:
//!
//! - [`stack::NavStack`] - the push-navigation stack for one feature
//! - [`modal::ModalSlot`] - the exclusive modal slot for one scope
//! - [`sink::EventSink`] - the explicit upward channel for feature events
//! - [`router::Router`] - the per-feature navigation state machine
//! - [`region::RegionRegistry`] - the single-active-region bookkeeping
//!
//! All state here is plain data. Mutation is expected to happen on one
//! logical thread; nothing in this crate spawns, blocks, or locks.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod modal;
pub mod region;
pub mod router;
pub mod sink;
pub mod stack;

pub use modal::{ModalError, ModalSlot, NoModal};
pub use region::{RegionError, RegionId, RegionRegistry};
pub use router::Router;
pub use sink::EventSink;
pub use stack::NavStack;
