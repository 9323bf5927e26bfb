//! Key, message and tick handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::error::AuthError;
use crate::view_model::DetailPhase;

use super::forms::{Form, TopicForm};
use super::{App, AppMessage, Dialog, Focus, LoginForm, RegisterForm, Screen};

/// Ticks between spinner frames while an action is pending.
const SPINNER_TICKS: u64 = 2;

impl App {
    // ========================================================================
    // Async messages
    // ========================================================================

    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::TopicsLoaded { ticket, result } => {
                self.topic_list.apply_topics(ticket, result);
            }
            AppMessage::TopicCreated { ticket, result } => {
                let outcome = self.topic_list.apply_create(ticket, result);
                if outcome.is_success() && matches!(self.dialog, Some(Dialog::CreateTopic(_))) {
                    self.close_dialog();
                }
            }
            AppMessage::TopicDeleted { ticket, id, result } => {
                self.topic_list.apply_delete(ticket, id, result);
            }
            AppMessage::DetailLoaded { ticket, snapshot } => {
                self.topic_detail.apply_snapshot(ticket, snapshot);
                self.clamp_comment_index();
            }
            AppMessage::CommentAdded { ticket, result } => {
                if self.topic_detail.apply_add_comment(ticket, result).is_success() {
                    self.comment_form.reset_after_post();
                }
                self.clamp_comment_index();
            }
            AppMessage::CommentDeleted { ticket, id, result } => {
                self.topic_detail.apply_delete_comment(ticket, id, result);
                self.clamp_comment_index();
            }
            AppMessage::SessionStarted { ticket, session } => {
                if !self.auth_epoch.is_current(ticket) {
                    debug!(user = %session.username, "dropping sign-in for a closed dialog");
                    return;
                }
                info!(user = %session.username, "signed in");
                self.session = Some(session);
                self.close_dialog();
            }
            AppMessage::AuthFailed { ticket, err } => {
                if !self.auth_epoch.is_current(ticket) {
                    debug!(code = err.error_code(), "dropping auth failure for a closed dialog");
                    return;
                }
                debug!(code = err.error_code(), "auth rejected");
                self.auth_pending = false;
                self.show_auth_error(&err);
            }
            AppMessage::SignedOut => {
                self.session = None;
            }
        }
        self.collect_toasts();
    }

    fn show_auth_error(&mut self, err: &AuthError) {
        match (self.dialog.as_mut(), err) {
            (Some(Dialog::Login(form)), AuthError::Invalid(v)) => form.show_error(v),
            (Some(Dialog::Register(form)), AuthError::Invalid(v)) => form.show_error(v),
            (Some(_), _) => self.dialog_error = Some(err.user_message()),
            (None, _) => {}
        }
    }

    // ========================================================================
    // Ticks
    // ========================================================================

    /// Advance timers: toast expiry and the pending-action spinner.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.toasts.tick() {
            self.mark_dirty();
        }
        let busy = self.pending_action().is_some()
            || self.auth_pending
            || (matches!(self.screen, Screen::Home) && self.topic_list.is_loading())
            || matches!(self.topic_detail.phase(), DetailPhase::Loading);
        if busy && self.tick_count % SPINNER_TICKS == 0 {
            self.mark_dirty();
        }
    }

    // ========================================================================
    // Keys
    // ========================================================================

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.dialog.is_some() {
            self.handle_dialog_key(key);
        } else if matches!(self.screen, Screen::Topic(_)) && self.focus.is_form() {
            self.handle_comment_form_key(key);
        } else if !self.handle_global_key(key) {
            match self.screen {
                Screen::Home => self.handle_home_key(key),
                Screen::Topic(_) => self.handle_topic_key(key),
                Screen::Help => self.handle_help_key(key),
                Screen::Rules | Screen::News => self.handle_page_key(key),
            }
        }
        self.collect_toasts();
    }

    /// Pasted text goes to whichever field has focus.
    pub fn handle_paste(&mut self, text: &str) {
        let text = text.replace(['\r', '\n'], " ");
        match self.dialog.as_mut() {
            Some(Dialog::Login(form)) => push_to_focused(form, &text),
            Some(Dialog::Register(form)) => push_to_focused(form, &text),
            Some(Dialog::CreateTopic(form)) => push_to_focused(form, &text),
            Some(Dialog::Confirm(_)) => {}
            None => match self.focus {
                Focus::Author => self.comment_form.author.push_str(&text),
                Focus::Content => self.comment_form.content.push_str(&text),
                Focus::Comments => {}
            },
        }
        self.mark_dirty();
    }

    /// Keys available on every screen when no text field has focus.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='4') => self.navigate_nav(c as usize - '0' as usize),
            KeyCode::Char('l') => self.open_login(),
            KeyCode::Char('r') => self.open_register(),
            KeyCode::Char('o') => self.logout(),
            _ => return false,
        }
        true
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.topic_list.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.topic_list.select_next(),
            KeyCode::Enter => self.open_selected_topic(),
            KeyCode::Char('n') => self.open_create_topic(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete_topic(),
            KeyCode::Char('c') => self.topic_list.cycle_filter(),
            KeyCode::Char('x') => self.topic_list.clear_filter(),
            KeyCode::Char('g') | KeyCode::F(5) => self.reload(),
            _ => {}
        }
    }

    fn handle_topic_key(&mut self, key: KeyEvent) {
        let phase = self.topic_detail.phase().clone();
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.go_home(),
            // "Вернуться на главную" is the only control on a dead mount.
            KeyCode::Enter if phase.is_terminal() => self.go_home(),
            KeyCode::Char('g') | KeyCode::F(5) => self.reload(),
            _ if phase != DetailPhase::Ready => {}
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_comment(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_comment(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete_comment(),
            KeyCode::Char('a') | KeyCode::Tab => self.focus = Focus::Author,
            _ => {}
        }
    }

    fn handle_comment_form_key(&mut self, key: KeyEvent) {
        let field = match self.focus {
            Focus::Author => &mut self.comment_form.author,
            Focus::Content => &mut self.comment_form.content,
            Focus::Comments => return,
        };
        match key.code {
            KeyCode::Esc => self.focus = Focus::Comments,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = Focus::Author,
            KeyCode::Enter if self.focus == Focus::Author => self.focus = Focus::Content,
            KeyCode::Enter => self.submit_comment(),
            KeyCode::Backspace => field.backspace(),
            KeyCode::Char(c) => field.push(c),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.faq.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.faq.next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.faq.toggle(),
            _ => self.handle_page_key(key),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_page_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_page_down(),
            KeyCode::PageUp => self.page_scroll = self.page_scroll.saturating_sub(10),
            KeyCode::PageDown => self.page_scroll = self.page_scroll.saturating_add(10),
            KeyCode::Home => self.page_scroll = 0,
            KeyCode::Esc => self.go_home(),
            _ => {}
        }
    }

    // ========================================================================
    // Dialog keys
    // ========================================================================

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match self.dialog.as_mut() {
            Some(Dialog::Confirm(_)) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.answer_confirm(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.answer_confirm(false),
                _ => {}
            },
            Some(Dialog::Login(_)) if ctrl && key.code == KeyCode::Char('r') => {
                self.open_dialog(Dialog::Register(RegisterForm::new()));
            }
            Some(Dialog::Register(_)) if ctrl && key.code == KeyCode::Char('l') => {
                self.open_dialog(Dialog::Login(LoginForm::new()));
            }
            Some(Dialog::Login(form)) => {
                if form_key(form, key) == FormKey::Submit {
                    self.submit_auth();
                }
            }
            Some(Dialog::Register(form)) => {
                if form_key(form, key) == FormKey::Submit {
                    self.submit_auth();
                }
            }
            Some(Dialog::CreateTopic(form)) => {
                if topic_form_key(form, key) == FormKey::Submit {
                    self.submit_create_topic();
                }
            }
            None => {}
        }
        if key.code == KeyCode::Esc && self.dialog.as_ref().is_some_and(Dialog::takes_text) {
            self.close_dialog();
        }
    }
}

/// What a key did to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKey {
    Handled,
    Submit,
}

fn push_to_focused<F: Form>(form: &mut F, text: &str) {
    if let Some(field) = form.focused_field() {
        field.push_str(text);
    }
}

/// Text editing and focus movement shared by the dialog forms.
fn form_key<F: Form>(form: &mut F, key: KeyEvent) -> FormKey {
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Enter if form.is_last_stop() => return FormKey::Submit,
        KeyCode::Enter => form.focus_next(),
        KeyCode::Backspace => {
            if let Some(field) = form.focused_field() {
                field.backspace();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(field) = form.focused_field() {
                field.push(c);
            }
        }
        _ => {}
    }
    FormKey::Handled
}

fn topic_form_key(form: &mut TopicForm, key: KeyEvent) -> FormKey {
    if form.focus() == TopicForm::CATEGORY_STOP {
        match key.code {
            KeyCode::Left => {
                form.prev_category();
                return FormKey::Handled;
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                form.next_category();
                return FormKey::Handled;
            }
            _ => {}
        }
    }
    form_key(form, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::{InMemoryForum, LocalAuthService};
    use crate::api::ForumClient;
    use crate::config::ForumConfig;

    const TOPICS: &str = "http://forum.test/topics";
    const COMMENTS: &str = "http://forum.test/comments";

    fn app_with(forum: &InMemoryForum) -> App {
        let config = ForumConfig::new()
            .with_topics_url(TOPICS)
            .with_comments_url(COMMENTS);
        let client = ForumClient::with_http(&config, Arc::new(forum.clone()));
        App::new(client, Arc::new(LocalAuthService::new()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    async fn settle(app: &mut App) {
        let msg = app.next_message().await.expect("message");
        app.handle_message(msg);
    }

    #[tokio::test]
    async fn test_start_loads_topics() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        forum.seed_topic("Гильдия магов", "Мерлин", "Фэнтези", false);
        let mut app = app_with(&forum);

        app.start();
        settle(&mut app).await;

        assert_eq!(app.topic_list.topics().len(), 1);
        assert!(!app.topic_list.is_loading());
    }

    #[tokio::test]
    async fn test_create_topic_dialog_flow() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        let mut app = app_with(&forum);
        app.start();
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('n'));
        assert!(matches!(app.dialog, Some(Dialog::CreateTopic(_))));

        // Empty title is blocked at the form.
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        match &app.dialog {
            Some(Dialog::CreateTopic(form)) => {
                assert_eq!(form.title.error(), Some("Заполните это поле"));
                assert_eq!(form.focus(), 0);
            }
            other => panic!("expected create dialog, got {:?}", other),
        }
        assert!(forum.request_log().iter().all(|(method, _)| method != "POST"));

        type_text(&mut app, "Тест");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Аня");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.topic_list.is_pending(crate::view_model::PendingAction::CreateTopic));

        settle(&mut app).await;
        assert!(app.dialog.is_none());
        assert_eq!(app.topic_list.topics().len(), 1);
        assert_eq!(app.topic_list.topics()[0].title, "Тест");
        assert!(app.toasts.iter().any(|t| t.description == "Тема создана!"));
    }

    #[tokio::test]
    async fn test_failed_create_keeps_dialog_and_input() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        let mut app = app_with(&forum);
        app.start();
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Тест");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Аня");
        press(&mut app, KeyCode::Tab);
        forum.fail_next(500);
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        match &app.dialog {
            Some(Dialog::CreateTopic(form)) => {
                assert_eq!(form.title.value(), "Тест");
                assert_eq!(form.author.value(), "Аня");
            }
            other => panic!("expected create dialog, got {:?}", other),
        }
        assert!(app.topic_list.topics().is_empty());
        assert!(!app.topic_list.is_pending(crate::view_model::PendingAction::CreateTopic));
        assert!(app
            .toasts
            .iter()
            .any(|t| t.is_error() && t.description == "Не удалось создать тему"));
    }

    #[tokio::test]
    async fn test_delete_topic_requires_confirmation() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        forum.seed_topic("Старая тема", "Мерлин", "Фэнтези", false);
        let mut app = app_with(&forum);
        app.start();
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.dialog.is_none());
        assert_eq!(forum.topics().len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        settle(&mut app).await;
        assert!(forum.topics().is_empty());
        assert!(app.topic_list.topics().is_empty());
    }

    #[tokio::test]
    async fn test_comment_flow_keeps_author() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        let id = forum.seed_topic("Таверна", "Бард", "Средневековье", false);
        let mut app = app_with(&forum);
        app.start();
        settle(&mut app).await;

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Topic(id));
        settle(&mut app).await;
        assert_eq!(app.topic_detail.phase(), &DetailPhase::Ready);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Аня");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Привет, путники");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert_eq!(app.topic_detail.comments().len(), 1);
        assert_eq!(app.comment_form.author.value(), "Аня");
        assert!(app.comment_form.content.is_blank());
        assert_eq!(app.topic_detail.topic().map(|t| t.replies), Some(1));
    }

    #[tokio::test]
    async fn test_typing_q_in_comment_form_does_not_quit() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        forum.seed_topic("Таверна", "Бард", "Средневековье", false);
        let mut app = app_with(&forum);
        app.start();
        settle(&mut app).await;
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.comment_form.author.value(), "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        let mut app = app_with(&forum);

        press(&mut app, KeyCode::Char('l'));
        assert!(matches!(app.dialog, Some(Dialog::Login(_))));
        type_text(&mut app, "hero");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "secret");
        press(&mut app, KeyCode::Enter);
        assert!(app.auth_pending);
        settle(&mut app).await;

        assert!(app.dialog.is_none());
        assert_eq!(app.session.as_ref().map(|s| s.username.as_str()), Some("hero"));

        press(&mut app, KeyCode::Char('o'));
        settle(&mut app).await;
        assert!(!app.is_signed_in());
    }

    #[tokio::test]
    async fn test_register_shows_inline_email_error() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        let mut app = app_with(&forum);

        press(&mut app, KeyCode::Char('l'));
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(matches!(app.dialog, Some(Dialog::Register(_))));

        type_text(&mut app, "hero");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "not-an-email");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        match &app.dialog {
            Some(Dialog::Register(form)) => {
                assert_eq!(form.focus(), 1);
                assert_eq!(form.email.error(), Some("Введите адрес электронной почты"));
            }
            other => panic!("expected register dialog, got {:?}", other),
        }
        assert!(!app.is_signed_in());
        assert!(!app.auth_pending);
    }

    #[tokio::test]
    async fn test_number_keys_switch_pages() {
        let forum = InMemoryForum::new(TOPICS, COMMENTS);
        let mut app = app_with(&forum);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen, Screen::Help);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.faq.open(), Some(0));

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::Home);
        settle(&mut app).await;
        assert!(app.topic_list.has_loaded());
    }
}
