//! Application state and logic.
//!
//! [`App`] owns the screen stack, the per-screen view-models, the open
//! dialog, the toast queue and the channel that spawned tasks report back
//! on. Key handling lives in `handlers`, screen switching in `navigation`
//! and the task spawning in `actions`.

mod actions;
pub mod dialogs;
pub mod forms;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use dialogs::{ConfirmAction, Dialog};
pub use forms::{CommentForm, Form, LoginForm, RegisterForm, TextField, TopicForm};
pub use messages::AppMessage;
pub use types::{Focus, Screen};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::LocalAuthService;
use crate::api::ForumClient;
use crate::config::ForumConfig;
use crate::content::help::FaqAccordion;
use crate::traits::{AuthService, Session};
use crate::view_model::{
    MountEpoch, PendingAction, ToastQueue, TopicDetailViewModel, TopicListViewModel,
};

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Focus within the topic screen
    pub focus: Focus,
    /// Home screen state
    pub topic_list: TopicListViewModel,
    /// Topic screen state
    pub topic_detail: TopicDetailViewModel,
    /// Selected comment on the topic screen
    pub comment_index: usize,
    /// "Добавить комментарий" form
    pub comment_form: CommentForm,
    /// Open modal dialog
    pub dialog: Option<Dialog>,
    /// Inline error of the open auth dialog that is not tied to a field
    pub dialog_error: Option<String>,
    /// A login/registration request is running
    pub auth_pending: bool,
    /// Signed-in user
    pub session: Option<Session>,
    /// Transient notifications
    pub toasts: ToastQueue,
    /// FAQ accordion on the help page
    pub faq: FaqAccordion,
    /// Vertical scroll of the static pages
    pub page_scroll: u16,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Whether the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Receiver for async messages (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    client: ForumClient,
    auth: Arc<dyn AuthService>,
    /// Bumped whenever an auth dialog opens or closes
    auth_epoch: MountEpoch,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("focus", &self.focus)
            .field("dialog", &self.dialog)
            .field("session", &self.session)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create an app over the given client and auth service.
    ///
    /// Nothing is loaded until [`App::start`] is called.
    pub fn new(client: ForumClient, auth: Arc<dyn AuthService>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let session = auth.current_session();
        Self {
            should_quit: false,
            screen: Screen::Home,
            focus: Focus::default(),
            topic_list: TopicListViewModel::new(),
            topic_detail: TopicDetailViewModel::new(),
            comment_index: 0,
            comment_form: CommentForm::new(),
            dialog: None,
            dialog_error: None,
            auth_pending: false,
            session,
            toasts: ToastQueue::new(),
            faq: FaqAccordion::default(),
            page_scroll: 0,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            client,
            auth,
            auth_epoch: MountEpoch::default(),
        }
    }

    /// Production wiring: reqwest transport and the local session stub.
    pub fn from_config(config: &ForumConfig) -> Self {
        Self::new(ForumClient::new(config), Arc::new(LocalAuthService::new()))
    }

    /// Mount the home screen and start loading topics.
    pub fn start(&mut self) {
        self.screen = Screen::Home;
        let ticket = self.topic_list.mount();
        self.spawn_load_topics(ticket);
    }

    pub fn client(&self) -> &ForumClient {
        &self.client
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// The action shown in the status line, if any is running on the
    /// visible screen.
    pub fn pending_action(&self) -> Option<PendingAction> {
        match self.screen {
            Screen::Home => self.topic_list.pending().next(),
            Screen::Topic(_) => self.topic_detail.pending().next(),
            _ => None,
        }
    }

    /// Move view-model notifications into the toast queue.
    pub(crate) fn collect_toasts(&mut self) {
        let mut toasts = self.topic_list.drain_toasts();
        toasts.extend(self.topic_detail.drain_toasts());
        if !toasts.is_empty() {
            self.toasts.extend(toasts);
            self.mark_dirty();
        }
    }

    /// Wait for the next task report. Used by tests driving the app
    /// without a terminal.
    pub async fn next_message(&mut self) -> Option<AppMessage> {
        match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;

    fn test_app() -> App {
        let config = ForumConfig::default();
        let client = ForumClient::with_http(&config, Arc::new(MockHttpClient::new()));
        App::new(client, Arc::new(LocalAuthService::new()))
    }

    #[test]
    fn test_new_app_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Home);
        assert!(app.dialog.is_none());
        assert!(!app.is_signed_in());
        assert!(app.needs_redraw);
        assert!(app.message_rx.is_some());
        assert!(app.pending_action().is_none());
    }
}
