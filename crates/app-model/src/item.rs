//! Catalog items shown in the Home feed

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// An item in the Home feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// Title shown in lists
    pub title: String,
    /// Longer description shown on the detail screen
    pub description: String,
}

impl Item {
    /// Create an item with a fresh identifier.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::random(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Bundled sample items.
    pub fn samples() -> Vec<Item> {
        vec![
            Item::new("Item 1", "This is the first item."),
            Item::new("Item 2", "This is the second item."),
            Item::new("Item 3", "This is the third item."),
            Item::new("Item 4", "This is the fourth item."),
            Item::new("Item 5", "This is the fifth item."),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_round_trip() {
        let item = Item::new("Title", "Description");
        let json = serde_json::to_string(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, parsed);
    }
}
