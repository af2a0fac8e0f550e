//! LikeSend feature
//!
//! The like-composition sheet has no navigation of its own; it is pure
//! event surface. The hosting UserDetail context interprets the result.

use app_model::LikeKind;
use serde::{Deserialize, Serialize};

/// Events LikeSend emits to its hosting context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LikeSendEvent {
    /// A like was chosen and sent
    Sent(LikeKind),
    /// The sheet was closed without sending
    Dismissed,
}
