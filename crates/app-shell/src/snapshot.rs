//! Shell state snapshot
//!
//! Captures the navigation state the shell would want back after a scene
//! teardown: tab selection, the app-scope modal, and each feature's stack
//! and modal. Writing snapshots anywhere is the embedder's business; this
//! module only defines the value and the (re)application.

use app_features::home::{HomeModal, HomeRoute};
use app_features::settings::SettingsRoute;
use serde::{Deserialize, Serialize};

use crate::coordinator::MainTabCoordinator;
use crate::modal::AppModal;
use crate::tab::Tab;

/// A point-in-time copy of the shell's navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    /// Selected tab
    pub selected_tab: Tab,
    /// App-scope modal
    pub modal: Option<AppModal>,
    /// Home push stack, root-first
    pub home_stack: Vec<HomeRoute>,
    /// Home feature modal
    pub home_modal: Option<HomeModal>,
    /// Settings push stack, root-first
    pub settings_stack: Vec<SettingsRoute>,
}

impl MainTabCoordinator {
    /// Capture the current navigation state.
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            selected_tab: self.selected_tab(),
            modal: self.modal().copied(),
            home_stack: self.home().stack().routes().to_vec(),
            home_modal: self.home().modal().copied(),
            settings_stack: self.settings().stack().routes().to_vec(),
        }
    }

    /// Reapply a captured navigation state.
    ///
    /// Open contexts are rebuilt the same way live navigation builds them,
    /// so a restored login modal gets a fresh login router.
    pub fn restore(&mut self, snapshot: ShellSnapshot) {
        self.select_tab(snapshot.selected_tab);
        self.home_mut().stack_mut().set_routes(snapshot.home_stack);
        self.settings_mut()
            .stack_mut()
            .set_routes(snapshot.settings_stack);

        self.home_mut().dismiss_modal();
        let reapplied = match snapshot.home_modal {
            Some(HomeModal::Edit(id)) => self.home_mut().show_edit(id),
            Some(HomeModal::Preview(id)) => self.home_mut().show_preview(id),
            None => Ok(()),
        };
        if reapplied.is_err() {
            tracing::error!("snapshot restore: home modal could not be reapplied");
        }

        self.dismiss_modal();
        match snapshot.modal {
            Some(AppModal::Login) => self.present_login(),
            Some(AppModal::ProfilePreview) => self.present_profile_preview(),
            None => {}
        }
    }
}
