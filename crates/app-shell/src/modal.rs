//! App-scope modals
//!
//! Modals are defined per scope, not per trigger: anything presented over
//! the whole tab bar lives here, whichever feature asked for it.

use serde::{Deserialize, Serialize};

/// Modals presented over the whole app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppModal {
    /// The login flow, shown full-screen
    Login,
    /// Preview of the signed-in user's own profile
    ProfilePreview,
}
