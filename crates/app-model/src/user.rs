//! User profiles and their photos

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Opaque identifier of a profile photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoId(Uuid);

impl PhotoId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for PhotoId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// A profile photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Photo {
    /// Photo identifier
    pub id: PhotoId,
    /// Image reference (asset name or URL)
    pub image: String,
    /// Optional caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Photo {
    /// Create a photo with a caption.
    pub fn new(image: impl Into<String>, caption: Option<&str>) -> Self {
        Self {
            id: PhotoId::random(),
            image: image.into(),
            caption: caption.map(str::to_owned),
        }
    }
}

/// A user profile shown in the browse grid and detail screens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u8,
    /// Short self-introduction
    pub bio: String,
    /// Avatar image reference
    pub avatar: String,
    /// Profile photos
    pub photos: Vec<Photo>,
}

impl User {
    /// Create a user with a fresh identifier.
    pub fn new(name: impl Into<String>, age: u8, bio: impl Into<String>) -> Self {
        Self {
            id: UserId::random(),
            name: name.into(),
            age,
            bio: bio.into(),
            avatar: "avatar-placeholder".to_string(),
            photos: Vec::new(),
        }
    }

    /// Attach photos.
    pub fn with_photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = photos;
        self
    }

    /// The signed-in user's own profile, used for the preview modal.
    pub fn own_profile() -> Self {
        User::new("You", 25, "This is how your profile looks to others.").with_photos(vec![
            Photo::new("photo-placeholder", Some("Profile photo")),
        ])
    }

    /// Bundled sample profiles.
    pub fn samples() -> Vec<User> {
        vec![
            User::new(
                "Hana",
                26,
                "Coffee-shop regular and avid reader. Museums on weekends.",
            )
            .with_photos(vec![
                Photo::new("photo-placeholder", Some("At my favorite cafe")),
                Photo::new("photo-placeholder", Some("Gallery visit")),
                Photo::new("photo-placeholder", Some("Trip memories")),
            ]),
            User::new(
                "Taro",
                28,
                "Engineer. Hiking and camping most weekends.",
            )
            .with_photos(vec![
                Photo::new("photo-placeholder", Some("Summit view")),
                Photo::new("photo-placeholder", Some("At the campsite")),
            ]),
            User::new(
                "Misaki",
                24,
                "Music and dance. You'll find me at a live show every weekend.",
            )
            .with_photos(vec![
                Photo::new("photo-placeholder", Some("Festival grounds")),
                Photo::new("photo-placeholder", Some("Dance practice")),
            ]),
            User::new(
                "Kenichi",
                30,
                "Home cook, Italian food especially. Always hunting for good restaurants.",
            )
            .with_photos(vec![
                Photo::new("photo-placeholder", Some("Homemade pasta")),
                Photo::new("photo-placeholder", Some("Hidden-gem trattoria")),
            ]),
            User::new(
                "Sakura",
                27,
                "Travel addict, three trips abroad a year. Planning a Europe tour next.",
            )
            .with_photos(vec![
                Photo::new("photo-placeholder", Some("In Paris")),
                Photo::new("photo-placeholder", Some("Beach resort")),
                Photo::new("photo-placeholder", Some("Roman holiday")),
            ]),
            User::new(
                "Daisuke",
                29,
                "Into all kinds of sports, mostly football and tennis.",
            )
            .with_photos(vec![
                Photo::new("photo-placeholder", Some("Futsal tournament")),
                Photo::new("photo-placeholder", Some("On the court")),
            ]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_users_have_unique_ids() {
        let users = User::samples();
        for (i, a) in users.iter().enumerate() {
            for b in &users[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn user_serializes_round_trip() {
        let user = User::new("Test", 20, "bio").with_photos(vec![Photo::new("img", None)]);
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }
}
