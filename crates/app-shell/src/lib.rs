//! App shell for Meridian
//!
//! The layer above the features: tab selection, app-scope modals, and the
//! coordinator that interprets feature events. The shell is the only place
//! that knows more than one feature exists.
//!
//! # Modules
//!
//! - [`tab`] - the tab bar definition
//! - [`modal`] - app-scope modals
//! - [`event`] - the envelope feature events travel in
//! - [`coordinator`] - [`coordinator::MainTabCoordinator`], the app-level
//!   state machine
//! - [`people`] - the browse-to-detail sub-coordinator under the Home tab
//! - [`deeplink`] - URL path to typed destination parsing
//! - [`screen`] - pure resolution of navigation state into screen
//!   descriptions, including not-found placeholders
//! - [`snapshot`] - snapshot/restore of the whole shell's navigation state

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coordinator;
pub mod deeplink;
pub mod event;
pub mod modal;
pub mod people;
pub mod screen;
pub mod snapshot;
pub mod tab;

pub use coordinator::MainTabCoordinator;
pub use deeplink::Destination;
pub use event::AppEvent;
pub use modal::AppModal;
pub use people::PeopleCoordinator;
pub use screen::{
    resolve, HomeScreen, Overlay, Presentation, SettingsScreen, TabScreen, UserDetailScreen,
};
pub use snapshot::ShellSnapshot;
pub use tab::Tab;
