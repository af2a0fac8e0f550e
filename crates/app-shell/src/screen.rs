//! Screen resolution
//!
//! The rendering layer is a pure function of navigation state. This module
//! is that function's contract: it resolves the shell's current state plus
//! a content source into a description of what would be on screen. Routes
//! pointing at records the source no longer has resolve to a `NotFound`
//! placeholder, never an error.

use app_features::home::{HomeModal, HomeRoute};
use app_features::settings::SettingsRoute;
use app_features::user_detail::{UserDetailModal, UserDetailRoute, UserDetailRouter};
use app_model::{ContentSource, Item, Photo, User};

use crate::coordinator::MainTabCoordinator;
use crate::modal::AppModal;
use crate::tab::Tab;

/// What the Home tab shows.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeScreen {
    /// The item feed
    Feed,
    /// One item's detail
    ItemDetail(Item),
    /// Items related to one item
    RelatedItems {
        /// The anchor item
        item: Item,
        /// Its related items
        related: Vec<Item>,
    },
    /// An open user-detail context, covering the grid
    UserDetail(UserDetailScreen),
    /// Placeholder for a missing record
    NotFound,
}

/// What an open user-detail context shows.
#[derive(Debug, Clone, PartialEq)]
pub enum UserDetailScreen {
    /// The profile itself
    Profile(User),
    /// The profile's photo list
    Photos(User),
    /// One photo, enlarged
    PhotoDetail(Photo),
    /// Placeholder for a missing record
    NotFound,
}

/// What the Settings tab shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsScreen {
    /// The settings menu
    Menu,
    /// One section's detail
    SectionDetail(String),
}

/// The selected tab's screen.
#[derive(Debug, Clone, PartialEq)]
pub enum TabScreen {
    /// Home tab content
    Home(HomeScreen),
    /// Settings tab content
    Settings(SettingsScreen),
}

/// What is presented on top of the tab content, if anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// The login flow
    Login,
    /// Preview of the given profile as others see it
    ProfilePreview(User),
    /// The item edit sheet
    EditItem(Item),
    /// The item preview sheet
    PreviewItem(Item),
    /// The like-composition sheet
    LikeCompose,
    /// Placeholder for a missing record behind a sheet
    NotFound,
}

/// The full visible state: tab, its screen, and any overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Selected tab
    pub tab: Tab,
    /// The tab's screen
    pub screen: TabScreen,
    /// Topmost overlay, if any
    pub overlay: Option<Overlay>,
}

/// Resolve the shell's current state into a presentation.
pub fn resolve(coordinator: &MainTabCoordinator, content: &dyn ContentSource) -> Presentation {
    let tab = coordinator.selected_tab();
    let screen = match tab {
        Tab::Home => TabScreen::Home(resolve_home(coordinator, content)),
        Tab::Settings => TabScreen::Settings(resolve_settings(coordinator)),
    };
    Presentation {
        tab,
        screen,
        overlay: resolve_overlay(coordinator, content),
    }
}

fn resolve_home(coordinator: &MainTabCoordinator, content: &dyn ContentSource) -> HomeScreen {
    // An open detail context sits over whatever the Home stack shows.
    if let Some(detail) = coordinator.people().detail() {
        return HomeScreen::UserDetail(resolve_user_detail(detail, content));
    }
    match coordinator.home().top() {
        None => HomeScreen::Feed,
        Some(HomeRoute::ItemDetail(id)) => match content.item(*id) {
            Some(item) => HomeScreen::ItemDetail(item),
            None => HomeScreen::NotFound,
        },
        Some(HomeRoute::RelatedItems(id)) => match content.item(*id) {
            Some(item) => HomeScreen::RelatedItems {
                related: content.related_items(*id),
                item,
            },
            None => HomeScreen::NotFound,
        },
    }
}

fn resolve_user_detail(
    detail: &UserDetailRouter,
    content: &dyn ContentSource,
) -> UserDetailScreen {
    // Resolve through the source rather than the router's copy so a record
    // withdrawn mid-session degrades to the placeholder.
    let Some(user) = content.user(detail.user().id) else {
        return UserDetailScreen::NotFound;
    };
    match detail.stack().top() {
        None => UserDetailScreen::Profile(user),
        Some(UserDetailRoute::Photos) => UserDetailScreen::Photos(user),
        Some(UserDetailRoute::PhotoDetail(id)) => {
            match user.photos.iter().find(|p| p.id == *id) {
                Some(photo) => UserDetailScreen::PhotoDetail(photo.clone()),
                None => UserDetailScreen::NotFound,
            }
        }
    }
}

fn resolve_settings(coordinator: &MainTabCoordinator) -> SettingsScreen {
    match coordinator.settings().top() {
        None => SettingsScreen::Menu,
        Some(SettingsRoute::Detail(section)) => SettingsScreen::SectionDetail(section.clone()),
    }
}

// App-scope modals sit above feature modals; only the topmost is reported.
fn resolve_overlay(
    coordinator: &MainTabCoordinator,
    content: &dyn ContentSource,
) -> Option<Overlay> {
    if let Some(modal) = coordinator.modal() {
        return Some(match modal {
            AppModal::Login => Overlay::Login,
            AppModal::ProfilePreview => Overlay::ProfilePreview(User::own_profile()),
        });
    }
    if coordinator.selected_tab() != Tab::Home {
        return None;
    }
    if let Some(detail) = coordinator.people().detail() {
        return detail.modal().map(|modal| match modal {
            UserDetailModal::LikeCompose => Overlay::LikeCompose,
        });
    }
    coordinator.home().modal().map(|modal| match modal {
        HomeModal::Edit(id) => match content.item(*id) {
            Some(item) => Overlay::EditItem(item),
            None => Overlay::NotFound,
        },
        HomeModal::Preview(id) => match content.item(*id) {
            Some(item) => Overlay::PreviewItem(item),
            None => Overlay::NotFound,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_model::{ItemId, SampleContent, User, UserId};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Content {}

        impl ContentSource for Content {
            fn item(&self, id: ItemId) -> Option<Item>;
            fn related_items(&self, id: ItemId) -> Vec<Item>;
            fn user(&self, id: UserId) -> Option<User>;
            fn users(&self) -> Vec<User>;
        }
    }

    fn started() -> MainTabCoordinator {
        let mut coordinator = MainTabCoordinator::new();
        coordinator.start();
        coordinator
    }

    #[test]
    fn fresh_shell_shows_the_feed() {
        let coordinator = started();
        let content = SampleContent::new();
        let presentation = resolve(&coordinator, &content);
        assert_eq!(presentation.tab, Tab::Home);
        assert_eq!(presentation.screen, TabScreen::Home(HomeScreen::Feed));
        assert_eq!(presentation.overlay, None);
    }

    #[test]
    fn item_detail_resolves_the_record() {
        let mut coordinator = started();
        let content = SampleContent::new();
        let item = content.items()[0].clone();
        coordinator.home_mut().navigate(HomeRoute::ItemDetail(item.id));

        let presentation = resolve(&coordinator, &content);
        assert_eq!(
            presentation.screen,
            TabScreen::Home(HomeScreen::ItemDetail(item))
        );
    }

    #[test]
    fn dangling_item_id_resolves_to_a_placeholder() {
        let mut coordinator = started();
        let id = ItemId::random();
        coordinator.home_mut().navigate(HomeRoute::ItemDetail(id));

        let mut content = MockContent::new();
        content.expect_item().with(eq(id)).returning(|_| None);

        let presentation = resolve(&coordinator, &content);
        assert_eq!(presentation.screen, TabScreen::Home(HomeScreen::NotFound));
    }

    #[test]
    fn app_modal_shadows_the_feature_modal() {
        let mut coordinator = started();
        let content = SampleContent::new();
        let item = content.items()[0].clone();
        coordinator.home_mut().show_edit(item.id).unwrap();
        coordinator.present_login();

        let presentation = resolve(&coordinator, &content);
        assert_eq!(presentation.overlay, Some(Overlay::Login));
    }

    #[test]
    fn edit_sheet_resolves_its_item() {
        let mut coordinator = started();
        let content = SampleContent::new();
        let item = content.items()[1].clone();
        coordinator.home_mut().show_edit(item.id).unwrap();

        let presentation = resolve(&coordinator, &content);
        assert_eq!(presentation.overlay, Some(Overlay::EditItem(item)));
    }

    #[test]
    fn open_detail_context_covers_the_home_tab() {
        let mut coordinator = started();
        let content = SampleContent::new();
        let user = content.users().remove(0);
        coordinator.show_user_detail(user.clone());

        let presentation = resolve(&coordinator, &content);
        assert_eq!(
            presentation.screen,
            TabScreen::Home(HomeScreen::UserDetail(UserDetailScreen::Profile(user)))
        );
        assert_eq!(presentation.overlay, None);
    }

    #[test]
    fn detail_photo_stack_and_compose_sheet_resolve_together() {
        let mut coordinator = started();
        let content = SampleContent::new();
        let user = content.users().remove(0);
        let photo = user.photos[0].clone();
        coordinator.show_user_detail(user);

        let detail = coordinator
            .people_mut()
            .detail_mut()
            .expect("detail context open");
        detail.show_photos();
        detail.show_photo_detail(photo.id);
        detail.compose_like().unwrap();

        let presentation = resolve(&coordinator, &content);
        assert_eq!(
            presentation.screen,
            TabScreen::Home(HomeScreen::UserDetail(UserDetailScreen::PhotoDetail(
                photo
            )))
        );
        assert_eq!(presentation.overlay, Some(Overlay::LikeCompose));
    }

    #[test]
    fn withdrawn_user_resolves_to_a_placeholder() {
        let mut coordinator = started();
        let content = SampleContent::new();
        // A user the source never carried.
        coordinator.show_user_detail(User::new("Gone", 20, "bio"));

        let presentation = resolve(&coordinator, &content);
        assert_eq!(
            presentation.screen,
            TabScreen::Home(HomeScreen::UserDetail(UserDetailScreen::NotFound))
        );
    }

    #[test]
    fn profile_preview_shows_the_own_profile() {
        let mut coordinator = started();
        coordinator.present_profile_preview();

        let content = SampleContent::new();
        let presentation = resolve(&coordinator, &content);
        match presentation.overlay {
            Some(Overlay::ProfilePreview(user)) => assert_eq!(user.name, "You"),
            other => panic!("unexpected overlay: {other:?}"),
        }
    }

    #[test]
    fn settings_section_resolves_by_name() {
        let mut coordinator = started();
        coordinator.select_tab(Tab::Settings);
        coordinator
            .settings_mut()
            .navigate(SettingsRoute::Detail("Notifications".into()));

        let content = SampleContent::new();
        let presentation = resolve(&coordinator, &content);
        assert_eq!(
            presentation.screen,
            TabScreen::Settings(SettingsScreen::SectionDetail("Notifications".into()))
        );
    }
}
