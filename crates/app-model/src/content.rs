//! Content lookup
//!
//! The navigation layer carries identifiers only; screens resolve them
//! against a `ContentSource` when they need the actual records. A missing
//! record is an `Option::None`, never an error - the shell turns it into a
//! placeholder screen.

use crate::item::{Item, ItemId};
use crate::user::{User, UserId};

/// Read access to the content the app displays.
pub trait ContentSource {
    /// Look up an item by id.
    fn item(&self, id: ItemId) -> Option<Item>;

    /// Items related to the given one (everything else, in the sample set).
    fn related_items(&self, id: ItemId) -> Vec<Item>;

    /// Look up a user by id.
    fn user(&self, id: UserId) -> Option<User>;

    /// All browsable users.
    fn users(&self) -> Vec<User>;
}

/// In-memory content source over the bundled sample data.
#[derive(Debug, Clone)]
pub struct SampleContent {
    items: Vec<Item>,
    users: Vec<User>,
}

impl SampleContent {
    /// Build a source from the bundled samples.
    pub fn new() -> Self {
        Self {
            items: Item::samples(),
            users: User::samples(),
        }
    }

    /// Build a source from explicit records (tests, previews).
    pub fn with_records(items: Vec<Item>, users: Vec<User>) -> Self {
        Self { items, users }
    }

    /// The full item list, in feed order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl Default for SampleContent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for SampleContent {
    fn item(&self, id: ItemId) -> Option<Item> {
        self.items.iter().find(|i| i.id == id).cloned()
    }

    fn related_items(&self, id: ItemId) -> Vec<Item> {
        self.items.iter().filter(|i| i.id != id).cloned().collect()
    }

    fn user(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn users(&self) -> Vec<User> {
        self.users.clone()
    }
}
