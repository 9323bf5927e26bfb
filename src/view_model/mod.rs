//! Per-screen state holders.
//!
//! A view-model owns the data a screen shows plus the bookkeeping that keeps
//! asynchronous results honest:
//!
//! - a [`MountEpoch`] that hands out [`Ticket`]s; a result carrying a
//!   ticket from an older epoch is dropped,
//! - an [`InFlight`] set that refuses to start an action twice,
//! - an outbox of [`Toast`]s for the shell to display.
//!
//! Every operation is split into a synchronous `begin_*` step, the network
//! work in [`sync`], and a synchronous `apply_*` step, so the shell can run
//! the middle part on a spawned task.

pub mod sync;
pub mod toast;
pub mod topic_detail;
pub mod topic_list;

use std::collections::BTreeSet;

use thiserror::Error;

use crate::error::{ForumError, ValidationError};

pub use sync::{DetailSnapshot, Mutation};
pub use toast::{Toast, ToastQueue, ToastVariant};
pub use topic_detail::{DetailPhase, TopicDetailViewModel};
pub use topic_list::{ForumStats, TopicListViewModel};

/// Identifies the mount a request was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

/// Monotonic mount counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MountEpoch(u64);

impl MountEpoch {
    /// Invalidate every ticket issued so far.
    pub fn bump(&mut self) {
        self.0 += 1;
    }

    pub fn ticket(&self) -> Ticket {
        Ticket { epoch: self.0 }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.epoch == self.0
    }
}

/// A user action that talks to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PendingAction {
    CreateTopic,
    DeleteTopic(i64),
    AddComment,
    DeleteComment(i64),
}

impl PendingAction {
    /// Status line shown while the action runs.
    pub fn label(&self) -> &'static str {
        match self {
            PendingAction::CreateTopic => "Создание темы...",
            PendingAction::DeleteTopic(_) => "Удаление темы...",
            PendingAction::AddComment => "Отправка комментария...",
            PendingAction::DeleteComment(_) => "Удаление комментария...",
        }
    }
}

/// The action is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{action:?} is already in progress")]
pub struct ActionRejected {
    pub action: PendingAction,
}

/// Set of actions currently running.
#[derive(Debug, Default, Clone)]
pub struct InFlight {
    actions: BTreeSet<PendingAction>,
}

impl InFlight {
    pub fn begin(&mut self, action: PendingAction) -> Result<(), ActionRejected> {
        if self.actions.insert(action) {
            Ok(())
        } else {
            Err(ActionRejected { action })
        }
    }

    pub fn finish(&mut self, action: PendingAction) {
        self.actions.remove(&action);
    }

    pub fn contains(&self, action: PendingAction) -> bool {
        self.actions.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PendingAction> + '_ {
        self.actions.iter().copied()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

/// Why a form submission did not start a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Busy(#[from] ActionRejected),

    /// The screen is not in a state that accepts the action.
    #[error("screen is not ready")]
    NotReady,
}

/// What applying an asynchronous result did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Issued under an older mount; nothing changed.
    Stale,
    Succeeded,
    Failed(ForumError),
}

impl ApplyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApplyOutcome::Succeeded)
    }
}
