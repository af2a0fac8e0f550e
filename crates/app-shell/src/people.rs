//! Browse-to-detail sub-coordinator
//!
//! The Home tab's browse grid opens user-detail contexts. The context is
//! opened here, so it is closed here: the detail router only reports
//! `Dismissed`/`Liked`, and this coordinator tears the context down.

use app_features::user_detail::{DisplayMode, UserDetailEvent, UserDetailRouter};
use app_model::{LikeKind, User, UserId};
use nav_core::EventSink;

/// A like recorded during this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentLike {
    /// Recipient
    pub user: UserId,
    /// Kind of like
    pub kind: LikeKind,
}

/// Coordinator for the browse grid and the detail contexts it opens.
#[derive(Debug, Default)]
pub struct PeopleCoordinator {
    detail: Option<UserDetailRouter>,
    likes: Vec<SentLike>,
}

impl PeopleCoordinator {
    /// Create a coordinator with no open detail context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a detail context for one user.
    ///
    /// An already-open context is replaced; the grid can only show one
    /// detail at a time.
    pub fn show_user(&mut self, user: User, sink: EventSink<UserDetailEvent>) {
        if self.detail.is_some() {
            tracing::warn!("replacing an open user-detail context");
        }
        self.detail = Some(UserDetailRouter::with_sink(
            user,
            DisplayMode::Standard,
            sink,
        ));
    }

    /// Interpret an event from the open detail context.
    pub fn handle(&mut self, event: UserDetailEvent) {
        match event {
            UserDetailEvent::Dismissed => {
                self.close_detail();
            }
            UserDetailEvent::Liked { user, kind } => {
                tracing::info!(kind = kind.label(), cost = kind.cost(), "like recorded");
                self.likes.push(SentLike { user, kind });
                self.close_detail();
            }
        }
    }

    /// Close the open detail context, if any.
    pub fn close_detail(&mut self) {
        if self.detail.take().is_none() {
            tracing::debug!("close_detail ignored: no open context");
        }
    }

    /// The open detail context.
    pub fn detail(&self) -> Option<&UserDetailRouter> {
        self.detail.as_ref()
    }

    /// Mutable access to the open detail context.
    pub fn detail_mut(&mut self) -> Option<&mut UserDetailRouter> {
        self.detail.as_mut()
    }

    /// Likes sent during this session.
    pub fn likes(&self) -> &[SentLike] {
        &self.likes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn collecting_sink() -> (EventSink<UserDetailEvent>, Rc<RefCell<Vec<UserDetailEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            EventSink::new(move |e| seen.borrow_mut().push(e))
        };
        (sink, seen)
    }

    #[test]
    fn liked_event_records_and_closes_the_context() {
        let (sink, _) = collecting_sink();
        let user = User::samples().remove(0);
        let user_id = user.id;

        let mut people = PeopleCoordinator::new();
        people.show_user(user, sink);
        assert!(people.detail().is_some());

        people.handle(UserDetailEvent::Liked {
            user: user_id,
            kind: LikeKind::Standard,
        });
        assert!(people.detail().is_none());
        assert_eq!(
            people.likes(),
            &[SentLike {
                user: user_id,
                kind: LikeKind::Standard,
            }]
        );
    }

    #[test]
    fn dismissed_event_closes_without_recording() {
        let (sink, _) = collecting_sink();
        let mut people = PeopleCoordinator::new();
        people.show_user(User::samples().remove(1), sink);

        people.handle(UserDetailEvent::Dismissed);
        assert!(people.detail().is_none());
        assert!(people.likes().is_empty());
    }
}
