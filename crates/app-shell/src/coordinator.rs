//! App-level coordinator
//!
//! Owns the feature routers reachable from the tab bar, the tab selection,
//! and the app-scope modal. Feature events arrive through an internal FIFO
//! queue and are interpreted here; every variant of every feature's event
//! enum has exactly one arm below, checked by the compiler.
//!
//! All mutation happens on the thread that owns the coordinator; nothing
//! here locks or spawns.

use std::sync::mpsc;

use app_features::home::{HomeEvent, HomeRouter};
use app_features::login::{LoginEvent, LoginRouter};
use app_features::settings::{SettingsEvent, SettingsRouter};
use app_features::user_detail::UserDetailEvent;
use app_model::User;
use nav_core::{EventSink, ModalError, ModalSlot, RegionId, RegionRegistry};

use crate::event::AppEvent;
use crate::modal::AppModal;
use crate::people::PeopleCoordinator;
use crate::tab::{Tab, HOME_TAB_REGION, SETTINGS_TAB_REGION};

/// Region hosting whichever app-scope modal is presented.
pub const APP_MODAL_REGION: RegionId = RegionId::new("app-modal");

/// The app-level navigation state machine.
///
/// Created once at process start; [`MainTabCoordinator::start`] builds the
/// children and activates the default tab.
#[derive(Debug)]
pub struct MainTabCoordinator {
    selected_tab: Tab,
    modal: ModalSlot<AppModal>,
    home: HomeRouter,
    settings: SettingsRouter,
    /// Present exactly while `AppModal::Login` is up; the shell opened that
    /// context, so the shell drops it.
    login: Option<LoginRouter>,
    people: PeopleCoordinator,
    regions: RegionRegistry,
    tx: mpsc::Sender<AppEvent>,
    rx: mpsc::Receiver<AppEvent>,
    started: bool,
}

impl Default for MainTabCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl MainTabCoordinator {
    /// Create a coordinator with unwired children. Call `start` next.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            selected_tab: Tab::Home,
            modal: ModalSlot::new(),
            home: HomeRouter::new(),
            settings: SettingsRouter::new(),
            login: None,
            people: PeopleCoordinator::new(),
            regions: RegionRegistry::new(),
            tx,
            rx,
            started: false,
        }
    }

    /// Build the children, wire their sinks, and activate the default tab.
    ///
    /// Calling twice rebuilds the children from scratch; that is a misuse
    /// of the lifecycle and is logged, but not guarded further.
    pub fn start(&mut self) {
        if self.started {
            tracing::warn!("start called twice: recreating child routers");
        }
        self.home = HomeRouter::with_sink(self.home_sink());
        self.settings = SettingsRouter::with_sink(self.settings_sink());
        self.login = None;
        self.people = PeopleCoordinator::new();
        self.modal = ModalSlot::new();
        self.selected_tab = Tab::Home;

        self.regions = RegionRegistry::new();
        let tab_regions = Tab::all().map(|tab| tab.region());
        for region in tab_regions.into_iter().chain([APP_MODAL_REGION]) {
            if let Err(e) = self.regions.register(region) {
                tracing::error!("region setup failed: {e}");
            }
        }
        self.refresh_active_region();
        self.started = true;
        tracing::info!(tab = Tab::Home.title(), "shell started");
    }

    /// Switch tabs. The deactivated tab's router keeps its stack and modal
    /// so returning restores the prior position.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.selected_tab == tab {
            return;
        }
        self.selected_tab = tab;
        self.refresh_active_region();
        tracing::info!(tab = tab.title(), "tab selected");
    }

    /// Drain the event queue in send order, interpreting each event.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.handle(event);
        }
    }

    /// Interpret one feature event.
    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Home(e) => self.handle_home(e),
            AppEvent::Settings(e) => self.handle_settings(e),
            AppEvent::Login(e) => self.handle_login(e),
            AppEvent::UserDetail(e) => self.handle_user_detail(e),
        }
    }

    fn handle_home(&mut self, event: HomeEvent) {
        match event {
            HomeEvent::RequireLogin => self.present_login(),
            HomeEvent::OpenSettings => self.select_tab(Tab::Settings),
        }
    }

    fn handle_settings(&mut self, event: SettingsEvent) {
        match event {
            SettingsEvent::OpenHome => self.select_tab(Tab::Home),
            SettingsEvent::RequireLogin => self.present_login(),
        }
    }

    fn handle_login(&mut self, event: LoginEvent) {
        match event {
            LoginEvent::Completed => self.dismiss_modal(),
            LoginEvent::Cancelled => self.dismiss_modal(),
        }
    }

    fn handle_user_detail(&mut self, event: UserDetailEvent) {
        self.people.handle(event);
    }

    /// Present the login flow as an app-scope modal.
    pub fn present_login(&mut self) {
        match self.modal.present(AppModal::Login) {
            Ok(()) => {
                self.login = Some(LoginRouter::with_sink(self.login_sink()));
                self.refresh_active_region();
            }
            Err(ModalError::AlreadyPresented(rejected)) => {
                tracing::warn!(?rejected, "modal rejected: one is already presented");
            }
        }
    }

    /// Present the own-profile preview as an app-scope modal.
    pub fn present_profile_preview(&mut self) {
        if let Err(ModalError::AlreadyPresented(rejected)) =
            self.modal.present(AppModal::ProfilePreview)
        {
            tracing::warn!(?rejected, "modal rejected: one is already presented");
        } else {
            self.refresh_active_region();
        }
    }

    /// Dismiss the app-scope modal, tearing down the context it hosted.
    pub fn dismiss_modal(&mut self) {
        match self.modal.dismiss() {
            Some(AppModal::Login) => {
                self.login = None;
                self.refresh_active_region();
            }
            Some(AppModal::ProfilePreview) => {
                self.refresh_active_region();
            }
            None => {}
        }
    }

    /// Open a user-detail context under the Home tab.
    pub fn show_user_detail(&mut self, user: User) {
        let sink = self.user_detail_sink();
        self.people.show_user(user, sink);
    }

    // The modal region sits over whichever tab is selected; the tab region
    // is active only while no app-scope modal is up.
    fn refresh_active_region(&mut self) {
        let region = if self.modal.is_active() {
            APP_MODAL_REGION
        } else {
            self.selected_tab.region()
        };
        if let Err(e) = self.regions.activate(region) {
            tracing::error!("region activation failed: {e}");
        }
    }

    fn home_sink(&self) -> EventSink<HomeEvent> {
        let tx = self.tx.clone();
        EventSink::new(move |e| {
            if tx.send(AppEvent::Home(e)).is_err() {
                tracing::debug!("event dropped: shell queue closed");
            }
        })
    }

    fn settings_sink(&self) -> EventSink<SettingsEvent> {
        let tx = self.tx.clone();
        EventSink::new(move |e| {
            if tx.send(AppEvent::Settings(e)).is_err() {
                tracing::debug!("event dropped: shell queue closed");
            }
        })
    }

    fn login_sink(&self) -> EventSink<LoginEvent> {
        let tx = self.tx.clone();
        EventSink::new(move |e| {
            if tx.send(AppEvent::Login(e)).is_err() {
                tracing::debug!("event dropped: shell queue closed");
            }
        })
    }

    fn user_detail_sink(&self) -> EventSink<UserDetailEvent> {
        let tx = self.tx.clone();
        EventSink::new(move |e| {
            if tx.send(AppEvent::UserDetail(e)).is_err() {
                tracing::debug!("event dropped: shell queue closed");
            }
        })
    }

    /// The selected tab.
    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    /// The app-scope modal, if any.
    pub fn modal(&self) -> Option<&AppModal> {
        self.modal.current()
    }

    /// The Home feature's router.
    pub fn home(&self) -> &HomeRouter {
        &self.home
    }

    /// Mutable access to the Home feature's router.
    pub fn home_mut(&mut self) -> &mut HomeRouter {
        &mut self.home
    }

    /// The Settings feature's router.
    pub fn settings(&self) -> &SettingsRouter {
        &self.settings
    }

    /// Mutable access to the Settings feature's router.
    pub fn settings_mut(&mut self) -> &mut SettingsRouter {
        &mut self.settings
    }

    /// The login router, present while the login modal is up.
    pub fn login(&self) -> Option<&LoginRouter> {
        self.login.as_ref()
    }

    /// Mutable access to the login router.
    pub fn login_mut(&mut self) -> Option<&mut LoginRouter> {
        self.login.as_mut()
    }

    /// The browse sub-coordinator.
    pub fn people(&self) -> &PeopleCoordinator {
        &self.people
    }

    /// Mutable access to the browse sub-coordinator.
    pub fn people_mut(&mut self) -> &mut PeopleCoordinator {
        &mut self.people
    }

    /// The region registry.
    pub fn regions(&self) -> &RegionRegistry {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_features::home::HomeRoute;
    use app_features::settings::SettingsRoute;
    use app_model::{Item, LikeKind};

    fn started() -> MainTabCoordinator {
        let mut coordinator = MainTabCoordinator::new();
        coordinator.start();
        coordinator
    }

    #[test]
    fn start_activates_the_home_region() {
        let coordinator = started();
        assert_eq!(coordinator.selected_tab(), Tab::Home);
        assert!(coordinator.regions().is_active(HOME_TAB_REGION));
    }

    #[test]
    fn every_home_event_has_a_distinct_outcome() {
        let mut coordinator = started();
        coordinator.handle(AppEvent::Home(HomeEvent::OpenSettings));
        assert_eq!(coordinator.selected_tab(), Tab::Settings);
        assert_eq!(coordinator.modal(), None);

        let mut coordinator = started();
        coordinator.handle(AppEvent::Home(HomeEvent::RequireLogin));
        assert_eq!(coordinator.selected_tab(), Tab::Home);
        assert_eq!(coordinator.modal(), Some(&AppModal::Login));
        assert!(coordinator.login().is_some());
    }

    #[test]
    fn every_settings_event_has_a_distinct_outcome() {
        let mut coordinator = started();
        coordinator.select_tab(Tab::Settings);

        coordinator.handle(AppEvent::Settings(SettingsEvent::OpenHome));
        assert_eq!(coordinator.selected_tab(), Tab::Home);
        assert_eq!(coordinator.modal(), None);

        coordinator.handle(AppEvent::Settings(SettingsEvent::RequireLogin));
        assert_eq!(coordinator.modal(), Some(&AppModal::Login));
    }

    #[test]
    fn every_login_event_closes_the_modal() {
        for event in [LoginEvent::Completed, LoginEvent::Cancelled] {
            let mut coordinator = started();
            coordinator.present_login();
            coordinator.handle(AppEvent::Login(event));
            assert_eq!(coordinator.modal(), None);
            assert!(coordinator.login().is_none());
        }
    }

    #[test]
    fn login_presentation_while_preview_is_up_is_rejected() {
        let mut coordinator = started();
        coordinator.present_profile_preview();
        coordinator.present_login();
        assert_eq!(coordinator.modal(), Some(&AppModal::ProfilePreview));
        assert!(coordinator.login().is_none());
    }

    #[test]
    fn modal_presentation_moves_the_active_region() {
        let mut coordinator = started();
        coordinator.present_login();
        assert!(coordinator.regions().is_active(APP_MODAL_REGION));

        coordinator.dismiss_modal();
        assert!(coordinator.regions().is_active(HOME_TAB_REGION));
    }

    #[test]
    fn tab_switch_preserves_the_deactivated_routers_state() {
        let mut coordinator = started();
        coordinator.select_tab(Tab::Settings);
        coordinator
            .settings_mut()
            .navigate(SettingsRoute::Detail("Notifications".into()));

        coordinator.select_tab(Tab::Home);
        assert!(coordinator.regions().is_active(HOME_TAB_REGION));

        coordinator.select_tab(Tab::Settings);
        assert_eq!(
            coordinator.settings().stack().routes(),
            &[SettingsRoute::Detail("Notifications".into())]
        );
    }

    #[test]
    fn queued_events_are_handled_in_send_order() {
        let mut coordinator = started();
        coordinator.home().send_event(HomeEvent::OpenSettings);
        coordinator.settings().send_event(SettingsEvent::OpenHome);
        coordinator.process_events();
        // Settings' event was sent last, so Home wins.
        assert_eq!(coordinator.selected_tab(), Tab::Home);
    }

    #[test]
    fn require_login_leaves_the_home_stack_untouched() {
        let mut coordinator = started();
        let item = Item::samples().remove(0);
        coordinator.home_mut().navigate(HomeRoute::ItemDetail(item.id));

        coordinator.home().send_event(HomeEvent::RequireLogin);
        coordinator.process_events();

        assert_eq!(coordinator.modal(), Some(&AppModal::Login));
        assert_eq!(
            coordinator.home().stack().routes(),
            &[HomeRoute::ItemDetail(item.id)]
        );
    }

    #[test]
    fn liked_event_flows_from_detail_to_people() {
        let mut coordinator = started();
        let user = app_model::User::samples().remove(0);
        let user_id = user.id;
        coordinator.show_user_detail(user);

        coordinator
            .people_mut()
            .detail_mut()
            .expect("detail context open")
            .send_like(LikeKind::Standard);
        coordinator.process_events();

        assert!(coordinator.people().detail().is_none());
        assert_eq!(coordinator.people().likes().len(), 1);
        assert_eq!(coordinator.people().likes()[0].user, user_id);
    }

    #[test]
    fn dismissed_event_flows_from_detail_to_people() {
        let mut coordinator = started();
        coordinator.show_user_detail(app_model::User::samples().remove(0));

        coordinator
            .people()
            .detail()
            .expect("detail context open")
            .dismiss();
        coordinator.process_events();

        assert!(coordinator.people().detail().is_none());
        assert!(coordinator.people().likes().is_empty());
    }

    #[test]
    fn restart_recreates_children() {
        let mut coordinator = started();
        coordinator
            .home_mut()
            .navigate(HomeRoute::ItemDetail(Item::samples().remove(0).id));
        coordinator.start();
        assert!(coordinator.home().stack().is_empty());
        assert_eq!(coordinator.selected_tab(), Tab::Home);
    }
}
