//! Editable form state for dialogs and the comment box.
//!
//! Forms hold raw input only. Validation happens in the view-models and the
//! auth service; a rejected field comes back as a [`ValidationError`] and is
//! attached to the matching [`TextField`] for inline display.

use crate::error::ValidationError;
use crate::models::{Category, NewTopic};
use crate::traits::{Credentials, Registration};

/// A single-line text input with an optional inline error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    error: Option<String>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Typing clears the inline error.
    pub fn push(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    pub fn push_str(&mut self, s: &str) {
        self.value.push_str(s);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.value.pop();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Shared behaviour of the dialog forms: a fixed list of fields with one
/// focused at a time.
pub trait Form {
    /// Number of focus stops, including non-text ones.
    fn stops(&self) -> usize;

    fn focus(&self) -> usize;

    fn set_focus(&mut self, focus: usize);

    /// Text field at `index`, if that stop is a text field.
    fn field_mut(&mut self, index: usize) -> Option<&mut TextField>;

    /// Index of the stop that owns a validation error for `field`.
    fn index_of(&self, field: &str) -> Option<usize>;

    fn focus_next(&mut self) {
        let next = (self.focus() + 1) % self.stops();
        self.set_focus(next);
    }

    fn focus_prev(&mut self) {
        let prev = (self.focus() + self.stops() - 1) % self.stops();
        self.set_focus(prev);
    }

    fn is_last_stop(&self) -> bool {
        self.focus() + 1 == self.stops()
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        let focus = self.focus();
        self.field_mut(focus)
    }

    /// Attach `err` to its field and move focus there.
    fn show_error(&mut self, err: &ValidationError) {
        if let Some(index) = self.index_of(err.field()) {
            if let Some(field) = self.field_mut(index) {
                field.set_error(err.user_message());
            }
            self.set_focus(index);
        }
    }
}

// ============================================================================
// Login / registration
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    focus: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.value(), self.password.value())
    }
}

impl Form for LoginForm {
    fn stops(&self) -> usize {
        2
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus.min(self.stops() - 1);
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut TextField> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.password),
            _ => None,
        }
    }

    fn index_of(&self, field: &str) -> Option<usize> {
        match field {
            "username" => Some(0),
            "password" => Some(1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: TextField,
    pub email: TextField,
    pub password: TextField,
    focus: usize,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registration(&self) -> Registration {
        Registration::new(
            self.username.value(),
            self.email.value(),
            self.password.value(),
        )
    }
}

impl Form for RegisterForm {
    fn stops(&self) -> usize {
        3
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus.min(self.stops() - 1);
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut TextField> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            _ => None,
        }
    }

    fn index_of(&self, field: &str) -> Option<usize> {
        match field {
            "username" => Some(0),
            "email" => Some(1),
            "password" => Some(2),
            _ => None,
        }
    }
}

// ============================================================================
// New topic
// ============================================================================

/// Create-topic dialog. The third stop is the category selector.
#[derive(Debug, Clone)]
pub struct TopicForm {
    pub title: TextField,
    pub author: TextField,
    pub category: Category,
    focus: usize,
}

impl TopicForm {
    pub const CATEGORY_STOP: usize = 2;

    pub fn new() -> Self {
        Self {
            title: TextField::new(),
            author: TextField::new(),
            category: Category::ALL[0],
            focus: 0,
        }
    }

    /// Start with the author prefilled, e.g. from the signed-in user.
    pub fn with_author(author: impl Into<String>) -> Self {
        Self {
            author: TextField::with_value(author),
            ..Self::new()
        }
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
    }

    pub fn to_new_topic(&self) -> NewTopic {
        NewTopic::new(
            self.title.value(),
            self.author.value(),
            self.category.label(),
        )
    }
}

impl Default for TopicForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for TopicForm {
    fn stops(&self) -> usize {
        3
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus.min(self.stops() - 1);
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut TextField> {
        match index {
            0 => Some(&mut self.title),
            1 => Some(&mut self.author),
            _ => None,
        }
    }

    fn index_of(&self, field: &str) -> Option<usize> {
        match field {
            "title" => Some(0),
            "author" => Some(1),
            "category" => Some(Self::CATEGORY_STOP),
            _ => None,
        }
    }
}

// ============================================================================
// Comment box
// ============================================================================

/// "Добавить комментарий" form on the topic screen.
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub author: TextField,
    pub content: TextField,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// After a successful post the author is kept for the next comment.
    pub fn reset_after_post(&mut self) {
        self.content.clear();
        self.author.clear_error();
    }

    pub fn show_error(&mut self, err: &ValidationError) {
        match err.field() {
            "author" => self.author.set_error(err.user_message()),
            "content" => self.content.set_error(err.user_message()),
            _ => {}
        }
    }
}
