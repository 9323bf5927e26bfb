//! AppMessage enum for async communication within the application.

use crate::error::{AuthError, ForumResult};
use crate::models::Topic;
use crate::traits::Session;
use crate::view_model::{DetailSnapshot, Mutation, Ticket};

/// Messages sent back by spawned network and auth tasks.
///
/// Every forum result carries the [`Ticket`] it was issued under so the
/// receiving view-model can drop it if the screen was left in between.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Topic collection fetched for the home screen
    TopicsLoaded {
        ticket: Ticket,
        result: ForumResult<Vec<Topic>>,
    },
    /// Create request finished (plus the resync that followed)
    TopicCreated {
        ticket: Ticket,
        result: Mutation<ForumResult<Vec<Topic>>>,
    },
    /// Delete request finished (plus the resync that followed)
    TopicDeleted {
        ticket: Ticket,
        id: i64,
        result: Mutation<ForumResult<Vec<Topic>>>,
    },
    /// Topic and comments fetched for the detail screen
    DetailLoaded {
        ticket: Ticket,
        snapshot: DetailSnapshot,
    },
    CommentAdded {
        ticket: Ticket,
        result: Mutation<DetailSnapshot>,
    },
    CommentDeleted {
        ticket: Ticket,
        id: i64,
        result: Mutation<DetailSnapshot>,
    },
    /// Login or registration succeeded
    SessionStarted { ticket: Ticket, session: Session },
    /// Login or registration was refused
    AuthFailed { ticket: Ticket, err: AuthError },
    SignedOut,
}
