//! Navigation methods for the App.
//!
//! Leaving a screen unmounts its view-model, so results still in flight for
//! it are dropped on arrival. Entering a screen mounts it and starts its
//! load.

use tracing::debug;

use super::{App, Focus, Screen};

impl App {
    /// Switch to `screen`, unmounting the one being left.
    pub fn navigate(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        debug!(from = ?self.screen, to = ?screen, "navigate");

        match self.screen {
            Screen::Home => self.topic_list.unmount(),
            Screen::Topic(_) => self.topic_detail.unmount(),
            _ => {}
        }

        match screen {
            Screen::Home => {
                self.screen = Screen::Home;
                let ticket = self.topic_list.mount();
                self.spawn_load_topics(ticket);
            }
            Screen::Topic(id) => self.enter_topic(id),
            page => {
                self.screen = page;
                self.page_scroll = 0;
            }
        }
        self.mark_dirty();
    }

    /// Mount the topic screen for `id` and start loading it.
    pub(crate) fn enter_topic(&mut self, id: i64) {
        self.screen = Screen::Topic(id);
        self.focus = Focus::Comments;
        self.comment_index = 0;
        self.comment_form.content.clear();
        self.comment_form.author.clear_error();
        if self.comment_form.author.is_blank() {
            if let Some(session) = &self.session {
                self.comment_form.author = super::TextField::with_value(session.username.clone());
            }
        }
        let ticket = self.topic_detail.mount(id);
        self.spawn_load_detail(ticket, id);
    }

    /// Open the topic under the home-screen cursor.
    pub fn open_selected_topic(&mut self) {
        if let Some(id) = self.topic_list.selected_topic().map(|t| t.id) {
            self.navigate(Screen::Topic(id));
        }
    }

    /// "Назад к темам" / "Вернуться на главную".
    pub fn go_home(&mut self) {
        self.navigate(Screen::Home);
    }

    /// Header navigation by position (1-based, as bound to the digit keys).
    pub fn navigate_nav(&mut self, position: usize) {
        if let Some(screen) = position
            .checked_sub(1)
            .and_then(|i| Screen::NAV.get(i).copied())
        {
            self.navigate(screen);
        }
    }

    pub fn select_next_comment(&mut self) {
        let len = self.topic_detail.comments().len();
        if len > 0 && self.comment_index + 1 < len {
            self.comment_index += 1;
        }
    }

    pub fn select_prev_comment(&mut self) {
        self.comment_index = self.comment_index.saturating_sub(1);
    }

    /// Keep the comment cursor inside the list after a resync.
    pub(crate) fn clamp_comment_index(&mut self) {
        let len = self.topic_detail.comments().len();
        self.comment_index = self.comment_index.min(len.saturating_sub(1));
    }

    pub fn scroll_page_down(&mut self) {
        self.page_scroll = self.page_scroll.saturating_add(1);
    }

    pub fn scroll_page_up(&mut self) {
        self.page_scroll = self.page_scroll.saturating_sub(1);
    }
}
