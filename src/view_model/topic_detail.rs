//! Topic screen state: one topic, its comments and the comment actions.

use tracing::debug;

use super::sync::{self, DetailSnapshot, Mutation};
use super::{ApplyOutcome, InFlight, MountEpoch, PendingAction, SubmitError, Ticket, Toast};
use crate::api::ForumClient;
use crate::error::{validation, ForumResult};
use crate::models::{Comment, NewComment, Topic};

/// Where a mount is in its life.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailPhase {
    /// Nothing mounted.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The id is not in the topic collection.
    NotFound,
    /// The first load failed; carries the user-facing reason.
    Error(String),
}

impl DetailPhase {
    /// `NotFound` and `Error` end the mount; only a new mount leaves them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DetailPhase::NotFound | DetailPhase::Error(_))
    }
}

#[derive(Debug, Default)]
pub struct TopicDetailViewModel {
    topic_id: Option<i64>,
    phase: DetailPhase,
    topic: Option<Topic>,
    comments: Vec<Comment>,
    comments_failed: bool,
    epoch: MountEpoch,
    in_flight: InFlight,
    outbox: Vec<Toast>,
}

impl TopicDetailViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount for `topic_id`, discarding whatever the previous mount held.
    pub fn mount(&mut self, topic_id: i64) -> Ticket {
        self.epoch.bump();
        self.in_flight.clear();
        self.topic_id = Some(topic_id);
        self.phase = DetailPhase::Loading;
        self.topic = None;
        self.comments.clear();
        self.comments_failed = false;
        self.epoch.ticket()
    }

    pub fn unmount(&mut self) {
        self.epoch.bump();
        self.in_flight.clear();
        self.topic_id = None;
        self.phase = DetailPhase::Idle;
        self.topic = None;
        self.comments.clear();
    }

    // -- apply ------------------------------------------------------------

    pub fn apply_topic(&mut self, ticket: Ticket, result: ForumResult<Option<Topic>>) -> ApplyOutcome {
        if !self.epoch.is_current(ticket) {
            debug!("dropping stale topic");
            return ApplyOutcome::Stale;
        }
        if self.phase.is_terminal() {
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(Some(topic)) => {
                self.topic = Some(topic);
                self.phase = DetailPhase::Ready;
                ApplyOutcome::Succeeded
            }
            Ok(None) => {
                debug!(topic_id = ?self.topic_id, "topic not found");
                self.topic = None;
                self.comments.clear();
                self.phase = DetailPhase::NotFound;
                ApplyOutcome::Succeeded
            }
            Err(err) => {
                self.outbox
                    .push(Toast::error("Не удалось загрузить тему").with_detail(err.user_message()));
                if self.phase == DetailPhase::Loading {
                    self.phase = DetailPhase::Error(err.user_message());
                }
                ApplyOutcome::Failed(err)
            }
        }
    }

    pub fn apply_comments(&mut self, ticket: Ticket, result: ForumResult<Vec<Comment>>) -> ApplyOutcome {
        if !self.epoch.is_current(ticket) {
            debug!("dropping stale comments");
            return ApplyOutcome::Stale;
        }
        if self.phase.is_terminal() {
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(comments) => {
                self.comments = comments;
                self.comments_failed = false;
                ApplyOutcome::Succeeded
            }
            Err(err) => {
                self.comments_failed = true;
                self.outbox.push(
                    Toast::error("Не удалось загрузить комментарии")
                        .with_detail(err.user_message()),
                );
                ApplyOutcome::Failed(err)
            }
        }
    }

    /// Apply topic first so a missing topic wins over its comments.
    pub fn apply_snapshot(&mut self, ticket: Ticket, snapshot: DetailSnapshot) -> ApplyOutcome {
        let topic = self.apply_topic(ticket, snapshot.topic);
        let comments = self.apply_comments(ticket, snapshot.comments);
        match (topic, comments) {
            (ApplyOutcome::Failed(err), _) => ApplyOutcome::Failed(err),
            (ApplyOutcome::Stale, _) if !self.epoch.is_current(ticket) => ApplyOutcome::Stale,
            (_, ApplyOutcome::Failed(err)) => ApplyOutcome::Failed(err),
            _ => ApplyOutcome::Succeeded,
        }
    }

    // -- add comment ------------------------------------------------------

    /// Validate the form and claim the add guard.
    pub fn begin_add_comment(
        &mut self,
        author: &str,
        content: &str,
    ) -> Result<(Ticket, NewComment), SubmitError> {
        let topic_id = match (&self.phase, self.topic_id) {
            (DetailPhase::Ready, Some(id)) => id,
            _ => return Err(SubmitError::NotReady),
        };
        validation::require("author", author)?;
        validation::require("content", content)?;
        self.in_flight.begin(PendingAction::AddComment)?;
        Ok((
            self.epoch.ticket(),
            NewComment::new(topic_id, author.trim(), content.trim()),
        ))
    }

    pub fn apply_add_comment(&mut self, ticket: Ticket, result: Mutation<DetailSnapshot>) -> ApplyOutcome {
        if !self.epoch.is_current(ticket) {
            debug!("dropping stale add-comment result");
            return ApplyOutcome::Stale;
        }
        self.in_flight.finish(PendingAction::AddComment);
        match result {
            Mutation::Failed(err) => {
                self.outbox.push(
                    Toast::error("Не удалось добавить комментарий").with_detail(err.user_message()),
                );
                ApplyOutcome::Failed(err)
            }
            Mutation::Applied { resync } => {
                self.outbox.push(Toast::success("Комментарий добавлен!"));
                let _ = self.apply_snapshot(ticket, resync);
                ApplyOutcome::Succeeded
            }
        }
    }

    // -- delete comment ---------------------------------------------------

    pub fn begin_delete_comment(&mut self, id: i64) -> Result<(Ticket, i64), SubmitError> {
        let topic_id = match (&self.phase, self.topic_id) {
            (DetailPhase::Ready, Some(topic_id)) => topic_id,
            _ => return Err(SubmitError::NotReady),
        };
        self.in_flight.begin(PendingAction::DeleteComment(id))?;
        Ok((self.epoch.ticket(), topic_id))
    }

    pub fn apply_delete_comment(
        &mut self,
        ticket: Ticket,
        id: i64,
        result: Mutation<DetailSnapshot>,
    ) -> ApplyOutcome {
        if !self.epoch.is_current(ticket) {
            debug!(id, "dropping stale delete-comment result");
            return ApplyOutcome::Stale;
        }
        self.in_flight.finish(PendingAction::DeleteComment(id));
        match result {
            Mutation::Failed(err) => {
                self.outbox.push(
                    Toast::error("Не удалось удалить комментарий").with_detail(err.user_message()),
                );
                ApplyOutcome::Failed(err)
            }
            Mutation::Applied { resync } => {
                self.outbox.push(Toast::success("Комментарий удален"));
                let _ = self.apply_snapshot(ticket, resync);
                ApplyOutcome::Succeeded
            }
        }
    }

    // -- whole operations -------------------------------------------------

    /// Mount for `topic_id` and load topic and comments.
    pub async fn load(&mut self, client: &ForumClient, topic_id: i64) -> ApplyOutcome {
        let ticket = self.mount(topic_id);
        let snapshot = sync::fetch_detail(client, topic_id).await;
        self.apply_snapshot(ticket, snapshot)
    }

    pub async fn add_comment(
        &mut self,
        client: &ForumClient,
        author: &str,
        content: &str,
    ) -> Result<ApplyOutcome, SubmitError> {
        let (ticket, comment) = self.begin_add_comment(author, content)?;
        let result = sync::add_comment(client, &comment).await;
        Ok(self.apply_add_comment(ticket, result))
    }

    pub async fn delete_comment(
        &mut self,
        client: &ForumClient,
        id: i64,
    ) -> Result<ApplyOutcome, SubmitError> {
        let (ticket, topic_id) = self.begin_delete_comment(id)?;
        let result = sync::delete_comment(client, topic_id, id).await;
        Ok(self.apply_delete_comment(ticket, id, result))
    }

    // -- accessors --------------------------------------------------------

    pub fn topic_id(&self) -> Option<i64> {
        self.topic_id
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comments_failed(&self) -> bool {
        self.comments_failed
    }

    /// "Комментарии (N)"
    pub fn comment_heading(&self) -> String {
        format!("Комментарии ({})", self.comments.len())
    }

    pub fn is_pending(&self, action: PendingAction) -> bool {
        self.in_flight.contains(action)
    }

    pub fn pending(&self) -> impl Iterator<Item = PendingAction> + '_ {
        self.in_flight.iter()
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ForumError, NetworkError, ValidationError};

    fn topic(id: i64) -> Topic {
        Topic {
            id,
            title: "Поход".to_string(),
            author: "Аня".to_string(),
            category: "Фэнтези".to_string(),
            replies: 0,
            views: 0,
            last_post: "Только что".to_string(),
            is_pinned: false,
            created_at: None,
        }
    }

    fn comment(id: i64, topic_id: i64) -> Comment {
        Comment {
            id,
            topic_id,
            author: "Борис".to_string(),
            content: "Привет".to_string(),
            created_at: "2025-10-28T09:05:07".to_string(),
        }
    }

    fn server_error() -> ForumError {
        NetworkError::HttpStatus {
            status: 500,
            message: "boom".to_string(),
        }
        .into()
    }

    fn ready(topic_id: i64, comments: Vec<Comment>) -> TopicDetailViewModel {
        let mut vm = TopicDetailViewModel::new();
        let ticket = vm.mount(topic_id);
        vm.apply_snapshot(
            ticket,
            DetailSnapshot {
                topic: Ok(Some(topic(topic_id))),
                comments: Ok(comments),
            },
        );
        assert_eq!(vm.phase(), &DetailPhase::Ready);
        vm
    }

    #[test]
    fn test_mount_starts_loading() {
        let mut vm = TopicDetailViewModel::new();
        assert_eq!(vm.phase(), &DetailPhase::Idle);
        vm.mount(4);
        assert_eq!(vm.phase(), &DetailPhase::Loading);
        assert_eq!(vm.topic_id(), Some(4));
    }

    #[test]
    fn test_missing_topic_is_not_found_without_toast() {
        let mut vm = TopicDetailViewModel::new();
        let ticket = vm.mount(99);
        let outcome = vm.apply_snapshot(
            ticket,
            DetailSnapshot {
                topic: Ok(None),
                comments: Ok(vec![]),
            },
        );
        assert!(outcome.is_success());
        assert_eq!(vm.phase(), &DetailPhase::NotFound);
        assert!(vm.drain_toasts().is_empty());
    }

    #[test]
    fn test_terminal_phase_ignores_later_results() {
        let mut vm = TopicDetailViewModel::new();
        let ticket = vm.mount(1);
        vm.apply_topic(ticket, Ok(None));
        assert_eq!(vm.apply_topic(ticket, Ok(Some(topic(1)))), ApplyOutcome::Stale);
        assert_eq!(vm.phase(), &DetailPhase::NotFound);
    }

    #[test]
    fn test_first_load_error_is_terminal_with_toast() {
        let mut vm = TopicDetailViewModel::new();
        let ticket = vm.mount(1);
        vm.apply_topic(ticket, Err(server_error()));
        assert!(matches!(vm.phase(), DetailPhase::Error(_)));
        assert_eq!(vm.drain_toasts()[0].description, "Не удалось загрузить тему");
    }

    #[test]
    fn test_comment_failure_toasts_and_keeps_ready() {
        let mut vm = ready(1, vec![comment(1, 1)]);
        let ticket = vm.mount(1);
        vm.apply_snapshot(
            ticket,
            DetailSnapshot {
                topic: Ok(Some(topic(1))),
                comments: Err(server_error()),
            },
        );
        assert_eq!(vm.phase(), &DetailPhase::Ready);
        assert!(vm.comments_failed());
        let toasts = vm.drain_toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description, "Не удалось загрузить комментарии");
    }

    #[test]
    fn test_stale_snapshot_after_remount() {
        let mut vm = TopicDetailViewModel::new();
        let old = vm.mount(1);
        vm.mount(2);
        let outcome = vm.apply_snapshot(
            old,
            DetailSnapshot {
                topic: Ok(Some(topic(1))),
                comments: Ok(vec![comment(5, 1)]),
            },
        );
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert_eq!(vm.phase(), &DetailPhase::Loading);
        assert!(vm.comments().is_empty());
    }

    #[test]
    fn test_comment_heading_counts() {
        let vm = ready(1, vec![]);
        assert_eq!(vm.comment_heading(), "Комментарии (0)");
        let vm = ready(1, vec![comment(1, 1), comment(2, 1)]);
        assert_eq!(vm.comment_heading(), "Комментарии (2)");
    }

    #[test]
    fn test_add_comment_requires_ready_and_fields() {
        let mut vm = TopicDetailViewModel::new();
        vm.mount(1);
        assert_eq!(
            vm.begin_add_comment("Аня", "Привет").unwrap_err(),
            SubmitError::NotReady
        );

        let mut vm = ready(1, vec![]);
        assert_eq!(
            vm.begin_add_comment("Аня", "   ").unwrap_err(),
            SubmitError::Invalid(ValidationError::EmptyField { field: "content" })
        );
        let (_, comment) = vm.begin_add_comment(" Аня ", " Привет ").unwrap();
        assert_eq!(comment, NewComment::new(1, "Аня", "Привет"));
        assert!(matches!(
            vm.begin_add_comment("Аня", "Ещё"),
            Err(SubmitError::Busy(_))
        ));
    }

    #[test]
    fn test_add_comment_applies_resync() {
        let mut vm = ready(1, vec![]);
        let (ticket, _) = vm.begin_add_comment("Аня", "Привет").unwrap();
        let mut updated = topic(1);
        updated.replies = 1;
        let outcome = vm.apply_add_comment(
            ticket,
            Mutation::Applied {
                resync: DetailSnapshot {
                    topic: Ok(Some(updated)),
                    comments: Ok(vec![comment(1, 1)]),
                },
            },
        );
        assert!(outcome.is_success());
        assert_eq!(vm.comments().len(), 1);
        assert_eq!(vm.topic().map(|t| t.replies), Some(1));
        assert!(!vm.is_pending(PendingAction::AddComment));
        assert_eq!(vm.drain_toasts()[0].description, "Комментарий добавлен!");
    }

    #[test]
    fn test_delete_comment_failure() {
        let mut vm = ready(1, vec![comment(7, 1)]);
        let (ticket, topic_id) = vm.begin_delete_comment(7).unwrap();
        assert_eq!(topic_id, 1);
        let outcome = vm.apply_delete_comment(ticket, 7, Mutation::Failed(server_error()));
        assert!(matches!(outcome, ApplyOutcome::Failed(_)));
        assert_eq!(vm.comments().len(), 1);
        assert!(!vm.is_pending(PendingAction::DeleteComment(7)));
        assert_eq!(
            vm.drain_toasts()[0].description,
            "Не удалось удалить комментарий"
        );
    }

    #[test]
    fn test_resync_finding_topic_gone_is_not_found() {
        let mut vm = ready(1, vec![comment(7, 1)]);
        let (ticket, _) = vm.begin_delete_comment(7).unwrap();
        vm.apply_delete_comment(
            ticket,
            7,
            Mutation::Applied {
                resync: DetailSnapshot {
                    topic: Ok(None),
                    comments: Ok(vec![]),
                },
            },
        );
        assert_eq!(vm.phase(), &DetailPhase::NotFound);
    }

    #[test]
    fn test_unmount_releases_guards() {
        let mut vm = ready(1, vec![]);
        let (ticket, _) = vm.begin_add_comment("Аня", "Привет").unwrap();
        vm.unmount();
        assert!(!vm.is_pending(PendingAction::AddComment));
        assert_eq!(
            vm.apply_add_comment(ticket, Mutation::Failed(server_error())),
            ApplyOutcome::Stale
        );
        assert!(vm.drain_toasts().is_empty());
    }
}
