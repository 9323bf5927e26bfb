//! Action handlers for the App.
//!
//! Each action runs the synchronous `begin_*` step of a view-model, spawns
//! the network part on a tokio task and reports the result as an
//! [`AppMessage`]. Validation failures stay on the form and never reach the
//! network.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info};

use crate::view_model::{sync, SubmitError, Ticket};

use super::forms::Form;
use super::{App, AppMessage, ConfirmAction, Dialog, LoginForm, RegisterForm, Screen, TopicForm};

impl App {
    /// Run `task` in the background and send its message back to the loop.
    fn spawn_task<F>(&self, task: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = task.await;
            if tx.send(message).is_err() {
                debug!("app closed before task finished");
            }
        });
    }

    // ========================================================================
    // Loading
    // ========================================================================

    pub(crate) fn spawn_load_topics(&self, ticket: Ticket) {
        let client = self.client.clone();
        self.spawn_task(async move {
            AppMessage::TopicsLoaded {
                ticket,
                result: sync::load_topics(&client).await,
            }
        });
    }

    pub(crate) fn spawn_load_detail(&self, ticket: Ticket, topic_id: i64) {
        let client = self.client.clone();
        self.spawn_task(async move {
            AppMessage::DetailLoaded {
                ticket,
                snapshot: sync::fetch_detail(&client, topic_id).await,
            }
        });
    }

    /// Reload whatever the current screen shows.
    pub fn reload(&mut self) {
        match self.screen {
            Screen::Home => {
                let ticket = self.topic_list.begin_load();
                self.spawn_load_topics(ticket);
            }
            Screen::Topic(id) => self.enter_topic(id),
            _ => {}
        }
        self.mark_dirty();
    }

    // ========================================================================
    // Topics
    // ========================================================================

    /// Open the create-topic dialog, prefilling the author when signed in.
    pub fn open_create_topic(&mut self) {
        let form = match &self.session {
            Some(session) => TopicForm::with_author(session.username.clone()),
            None => TopicForm::new(),
        };
        self.open_dialog(Dialog::CreateTopic(form));
    }

    /// Submit the open create-topic dialog.
    pub fn submit_create_topic(&mut self) {
        let Some(Dialog::CreateTopic(form)) = self.dialog.as_mut() else {
            return;
        };
        match self.topic_list.begin_create(&form.to_new_topic()) {
            Ok((ticket, topic)) => {
                let client = self.client.clone();
                self.spawn_task(async move {
                    AppMessage::TopicCreated {
                        ticket,
                        result: sync::create_topic(&client, &topic).await,
                    }
                });
            }
            Err(SubmitError::Invalid(err)) => form.show_error(&err),
            Err(err) => debug!(%err, "create topic not started"),
        }
        self.mark_dirty();
    }

    /// Ask for confirmation before deleting the selected topic.
    pub fn request_delete_topic(&mut self) {
        if let Some(topic) = self.topic_list.selected_topic() {
            let action = ConfirmAction::DeleteTopic {
                id: topic.id,
                title: topic.title.clone(),
            };
            self.open_dialog(Dialog::Confirm(action));
        }
    }

    fn delete_topic(&mut self, id: i64) {
        match self.topic_list.begin_delete(id) {
            Ok(ticket) => {
                let client = self.client.clone();
                self.spawn_task(async move {
                    AppMessage::TopicDeleted {
                        ticket,
                        id,
                        result: sync::delete_topic(&client, id).await,
                    }
                });
            }
            Err(err) => debug!(id, %err, "delete topic not started"),
        }
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Submit the comment form on the topic screen.
    pub fn submit_comment(&mut self) {
        let started = self
            .topic_detail
            .begin_add_comment(self.comment_form.author.value(), self.comment_form.content.value());
        match started {
            Ok((ticket, comment)) => {
                let client = self.client.clone();
                self.spawn_task(async move {
                    AppMessage::CommentAdded {
                        ticket,
                        result: sync::add_comment(&client, &comment).await,
                    }
                });
            }
            Err(SubmitError::Invalid(err)) => self.comment_form.show_error(&err),
            Err(err) => debug!(%err, "add comment not started"),
        }
        self.mark_dirty();
    }

    /// Ask for confirmation before deleting the selected comment.
    pub fn request_delete_comment(&mut self) {
        if let Some(comment) = self.topic_detail.comments().get(self.comment_index) {
            let action = ConfirmAction::DeleteComment { id: comment.id };
            self.open_dialog(Dialog::Confirm(action));
        }
    }

    fn delete_comment(&mut self, id: i64) {
        match self.topic_detail.begin_delete_comment(id) {
            Ok((ticket, topic_id)) => {
                let client = self.client.clone();
                self.spawn_task(async move {
                    AppMessage::CommentDeleted {
                        ticket,
                        id,
                        result: sync::delete_comment(&client, topic_id, id).await,
                    }
                });
            }
            Err(err) => debug!(id, %err, "delete comment not started"),
        }
    }

    // ========================================================================
    // Confirmation
    // ========================================================================

    /// Answer the open confirmation dialog.
    pub fn answer_confirm(&mut self, yes: bool) {
        if !matches!(self.dialog, Some(Dialog::Confirm(_))) {
            return;
        }
        let Some(Dialog::Confirm(action)) = self.dialog.take() else {
            return;
        };
        if yes {
            match action {
                ConfirmAction::DeleteTopic { id, .. } => self.delete_topic(id),
                ConfirmAction::DeleteComment { id } => self.delete_comment(id),
            }
        }
        self.mark_dirty();
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub fn open_login(&mut self) {
        if !self.is_signed_in() {
            self.open_dialog(Dialog::Login(LoginForm::new()));
        }
    }

    pub fn open_register(&mut self) {
        if !self.is_signed_in() {
            self.open_dialog(Dialog::Register(RegisterForm::new()));
        }
    }

    /// Submit the open login or registration dialog.
    pub fn submit_auth(&mut self) {
        if self.auth_pending {
            return;
        }
        let auth = Arc::clone(&self.auth);
        let ticket = self.auth_epoch.ticket();
        match self.dialog.as_ref() {
            Some(Dialog::Login(form)) => {
                let credentials = form.credentials();
                self.spawn_task(async move {
                    match auth.login(credentials).await {
                        Ok(session) => AppMessage::SessionStarted { ticket, session },
                        Err(err) => AppMessage::AuthFailed { ticket, err },
                    }
                });
            }
            Some(Dialog::Register(form)) => {
                let registration = form.registration();
                self.spawn_task(async move {
                    match auth.register(registration).await {
                        Ok(session) => AppMessage::SessionStarted { ticket, session },
                        Err(err) => AppMessage::AuthFailed { ticket, err },
                    }
                });
            }
            _ => return,
        }
        self.auth_pending = true;
        self.dialog_error = None;
        self.mark_dirty();
    }

    pub fn logout(&mut self) {
        if let Some(session) = &self.session {
            info!(user = %session.username, "signing out");
            let auth = Arc::clone(&self.auth);
            self.spawn_task(async move {
                auth.logout().await;
                AppMessage::SignedOut
            });
        }
    }

    // ========================================================================
    // Dialog helpers
    // ========================================================================

    pub(crate) fn open_dialog(&mut self, dialog: Dialog) {
        self.auth_epoch.bump();
        self.dialog = Some(dialog);
        self.dialog_error = None;
        self.auth_pending = false;
        self.mark_dirty();
    }

    pub fn close_dialog(&mut self) {
        self.auth_epoch.bump();
        self.dialog = None;
        self.dialog_error = None;
        self.auth_pending = false;
        self.mark_dirty();
    }
}
