//! Like kinds and their point costs

use serde::{Deserialize, Serialize};

/// Kind of like a user can send from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeKind {
    /// Standard like (1 point)
    Standard,
    /// Special like (3 points)
    Special,
}

impl LikeKind {
    /// Points consumed by sending this like.
    pub fn cost(&self) -> u32 {
        match self {
            LikeKind::Standard => 1,
            LikeKind::Special => 3,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            LikeKind::Standard => "Like",
            LikeKind::Special => "Special Like",
        }
    }
}
