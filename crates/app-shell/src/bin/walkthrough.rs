//! Scripted walkthrough of the navigation shell
//!
//! Drives the coordinator through the canonical flows (browse, push,
//! modal, cross-feature event, tab switch) and logs the resulting state
//! after each step. Run with `RUST_LOG=info` for the narration.

use app_features::home::{HomeEvent, HomeRoute};
use app_features::settings::SettingsRoute;
use app_model::{ContentSource, LikeKind, SampleContent};
use app_shell::{deeplink, resolve, MainTabCoordinator, Tab};
use tracing_subscriber::EnvFilter;

fn log_state(step: &str, coordinator: &MainTabCoordinator, content: &SampleContent) {
    let presentation = resolve(coordinator, content);
    tracing::info!(
        step,
        tab = presentation.tab.title(),
        screen = ?presentation.screen,
        overlay = ?presentation.overlay,
        "state"
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let content = SampleContent::new();
    let mut coordinator = MainTabCoordinator::new();
    coordinator.start();
    log_state("start", &coordinator, &content);

    // Push into the Home feature.
    let item = content.items()[0].clone();
    coordinator.home_mut().navigate(HomeRoute::ItemDetail(item.id));
    coordinator
        .home_mut()
        .navigate(HomeRoute::RelatedItems(item.id));
    log_state("home push chain", &coordinator, &content);

    // A feature-scoped modal.
    if coordinator.home_mut().show_edit(item.id).is_err() {
        tracing::warn!("edit sheet rejected");
    }
    log_state("edit sheet", &coordinator, &content);
    coordinator.home_mut().dismiss_modal();

    // Cross-feature event: Home asks for login, the shell decides.
    coordinator.home().send_event(HomeEvent::RequireLogin);
    coordinator.process_events();
    log_state("login required", &coordinator, &content);

    if let Some(login) = coordinator.login() {
        login.send_event(app_features::login::LoginEvent::Completed);
    }
    coordinator.process_events();
    log_state("login completed", &coordinator, &content);

    // Tab switch retains the deactivated tab's stack.
    coordinator.select_tab(Tab::Settings);
    coordinator
        .settings_mut()
        .navigate(SettingsRoute::Detail("Notifications".into()));
    coordinator.select_tab(Tab::Home);
    coordinator.select_tab(Tab::Settings);
    log_state("settings restored", &coordinator, &content);

    // The browse flow under the Home tab.
    coordinator.select_tab(Tab::Home);
    let user = content.users().remove(0);
    coordinator.show_user_detail(user);
    if let Some(detail) = coordinator.people_mut().detail_mut() {
        detail.show_photos();
        if detail.compose_like().is_err() {
            tracing::warn!("like sheet rejected");
        }
        detail.send_like(LikeKind::Special);
    }
    coordinator.process_events();
    tracing::info!(likes = coordinator.people().likes().len(), "likes sent");

    // Deep link straight to a settings section.
    coordinator.open(deeplink::parse("/settings/About"));
    log_state("deep link", &coordinator, &content);
}
