//! Domain content for Meridian
//!
//! Plain value types the navigation layer points at: users and their
//! photos, catalog items, and like kinds. Route and event payloads embed
//! the identifiers defined here and treat them as opaque.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod item;
pub mod like;
pub mod user;

pub use content::{ContentSource, SampleContent};
pub use item::{Item, ItemId};
pub use like::LikeKind;
pub use user::{Photo, PhotoId, User, UserId};
