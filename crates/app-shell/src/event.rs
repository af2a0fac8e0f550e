//! Event envelope
//!
//! Feature events are typed per feature; the shell's internal queue needs
//! one carrier type. Each sink handed to a feature wraps that feature's
//! events into this envelope, so delivery order across features is the
//! send order.

use app_features::home::HomeEvent;
use app_features::login::LoginEvent;
use app_features::settings::SettingsEvent;
use app_features::user_detail::UserDetailEvent;
use serde::{Deserialize, Serialize};

/// A feature event tagged with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppEvent {
    /// From the Home feature
    Home(HomeEvent),
    /// From the Settings feature
    Settings(SettingsEvent),
    /// From the Login feature
    Login(LoginEvent),
    /// From a UserDetail context
    UserDetail(UserDetailEvent),
}
