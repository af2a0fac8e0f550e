//! Tab bar definition

use nav_core::RegionId;
use serde::{Deserialize, Serialize};

/// Region hosting the Home tab's navigation stack.
pub const HOME_TAB_REGION: RegionId = RegionId::new("home-tab");

/// Region hosting the Settings tab's navigation stack.
pub const SETTINGS_TAB_REGION: RegionId = RegionId::new("settings-tab");

/// The app's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Home feed
    #[default]
    Home,
    /// Settings
    Settings,
}

impl Tab {
    /// All tabs in bar order.
    pub fn all() -> [Tab; 2] {
        [Tab::Home, Tab::Settings]
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Settings => "Settings",
        }
    }

    /// The hosting region for this tab's navigation stack.
    pub fn region(&self) -> RegionId {
        match self {
            Tab::Home => HOME_TAB_REGION,
            Tab::Settings => SETTINGS_TAB_REGION,
        }
    }
}
