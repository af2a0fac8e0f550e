//! Deep links
//!
//! Maps URL paths onto typed destinations and applies them to the shell.
//! Unknown or malformed paths resolve to [`Destination::NotFound`]; the
//! shell shows a placeholder instead of failing.

use app_features::home::HomeRoute;
use app_features::settings::SettingsRoute;
use app_model::ItemId;
use uuid::Uuid;

use crate::coordinator::MainTabCoordinator;
use crate::tab::Tab;

/// A typed deep-link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The Home feed
    HomeFeed,
    /// One item's detail screen
    HomeItem(ItemId),
    /// The related-items screen under one item
    HomeItemRelated(ItemId),
    /// The settings menu
    Settings,
    /// One settings section
    SettingsSection(String),
    /// The login flow
    Login,
    /// No recognized destination
    NotFound,
}

/// Parse a URL path into a destination.
///
/// Recognized patterns:
///
/// - `/` or `/home`
/// - `/home/items/{id}`
/// - `/home/items/{id}/related`
/// - `/settings`
/// - `/settings/{section}`
/// - `/login`
///
/// Segments are percent-decoded; item ids must be UUIDs.
pub fn parse(path: &str) -> Destination {
    // Queries carry no routing information here.
    let path = path.split('?').next().unwrap_or(path);
    let mut segments = Vec::new();
    for raw in path.split('/').filter(|s| !s.is_empty()) {
        match urlencoding::decode(raw) {
            Ok(decoded) => segments.push(decoded.into_owned()),
            Err(_) => return Destination::NotFound,
        }
    }

    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    match segments.as_slice() {
        [] | ["home"] => Destination::HomeFeed,
        ["home", "items", id] => match parse_item_id(id) {
            Some(id) => Destination::HomeItem(id),
            None => Destination::NotFound,
        },
        ["home", "items", id, "related"] => match parse_item_id(id) {
            Some(id) => Destination::HomeItemRelated(id),
            None => Destination::NotFound,
        },
        ["settings"] => Destination::Settings,
        ["settings", section] => Destination::SettingsSection((*section).to_string()),
        ["login"] => Destination::Login,
        _ => Destination::NotFound,
    }
}

fn parse_item_id(raw: &str) -> Option<ItemId> {
    Uuid::parse_str(raw).ok().map(ItemId::from)
}

impl MainTabCoordinator {
    /// Apply a deep-link destination to the shell.
    ///
    /// Replaces the target tab's stack rather than pushing onto whatever
    /// happened to be there.
    pub fn open(&mut self, destination: Destination) {
        match destination {
            Destination::HomeFeed => {
                self.select_tab(Tab::Home);
                self.home_mut().pop_to_root();
            }
            Destination::HomeItem(id) => {
                self.select_tab(Tab::Home);
                self.home_mut()
                    .stack_mut()
                    .set_routes(vec![HomeRoute::ItemDetail(id)]);
            }
            Destination::HomeItemRelated(id) => {
                self.select_tab(Tab::Home);
                self.home_mut().stack_mut().set_routes(vec![
                    HomeRoute::ItemDetail(id),
                    HomeRoute::RelatedItems(id),
                ]);
            }
            Destination::Settings => {
                self.select_tab(Tab::Settings);
                self.settings_mut().pop_to_root();
            }
            Destination::SettingsSection(section) => {
                self.select_tab(Tab::Settings);
                self.settings_mut()
                    .stack_mut()
                    .set_routes(vec![SettingsRoute::Detail(section)]);
            }
            Destination::Login => {
                self.present_login();
            }
            Destination::NotFound => {
                tracing::warn!("deep link ignored: no recognized destination");
            }
        }
    }
}
