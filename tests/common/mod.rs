//! Common test utilities for integration tests.
//!
//! Fixtures for driving the forum client and the whole app without a
//! terminal: an in-memory backend, app builders, key helpers and a
//! `TestBackend` renderer.
//!
//! # Example
//!
//! ```ignore
//! let forum = common::seeded_forum();
//! let mut app = common::app_for(&forum);
//! app.start();
//! common::settle(&mut app).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use rpg_forum::adapters::{InMemoryForum, LocalAuthService};
use rpg_forum::api::{ForumClient, RetryPolicy};
use rpg_forum::app::App;
use rpg_forum::config::ForumConfig;

pub const TOPICS_URL: &str = "http://forum.test/topics";
pub const COMMENTS_URL: &str = "http://forum.test/comments";

/// Upper bound for waiting on a spawned task.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn test_config() -> ForumConfig {
    ForumConfig::new()
        .with_topics_url(TOPICS_URL)
        .with_comments_url(COMMENTS_URL)
        .with_timeout(Duration::from_millis(500))
}

pub fn forum() -> InMemoryForum {
    InMemoryForum::new(TOPICS_URL, COMMENTS_URL)
}

/// Three topics across two worlds, one pinned, two comments on the first.
pub fn seeded_forum() -> InMemoryForum {
    let forum = forum();
    let tavern = forum.seed_topic("Таверна у дороги", "Мерлин", "Фэнтези", false);
    forum.seed_topic("Станция Орион", "Рипли", "Научная фантастика", false);
    forum.seed_topic("Правила набора", "Модератор", "Фэнтези", true);
    forum.seed_comment(tavern, "Арвен", "Захожу внутрь и сажусь у камина.");
    forum.seed_comment(tavern, "Гимли", "Эля мне!");
    forum
}

/// Client over the in-memory backend with a near-zero retry backoff.
pub fn client_for(forum: &InMemoryForum) -> ForumClient {
    ForumClient::with_http(&test_config(), Arc::new(forum.clone()))
        .with_retry_policy(RetryPolicy::new(1).with_backoff(Duration::from_millis(1)))
}

pub fn app_for(forum: &InMemoryForum) -> App {
    App::new(client_for(forum), Arc::new(LocalAuthService::new()))
}

/// Started app with the first topic load applied.
pub async fn started_app(forum: &InMemoryForum) -> App {
    let mut app = app_for(forum);
    app.start();
    settle(&mut app).await;
    app
}

/// Apply the next task report.
pub async fn settle(app: &mut App) {
    let msg = tokio::time::timeout(SETTLE_TIMEOUT, app.next_message())
        .await
        .expect("task did not report in time")
        .expect("message channel closed");
    app.handle_message(msg);
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(key(code));
}

pub fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render one frame and return the buffer as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| rpg_forum::ui::render(frame, app))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
