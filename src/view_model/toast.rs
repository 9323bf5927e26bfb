//! Transient notifications.

use std::collections::VecDeque;

/// Ticks a toast stays on screen (100 ms per tick).
pub const TOAST_TTL_TICKS: u16 = 40;
/// Toasts shown at once; the oldest is dropped first.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    /// Underlying cause, shown dimmed under the description
    pub detail: Option<String>,
    pub variant: ToastVariant,
    ttl: u16,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Успешно".to_string(),
            description: description.into(),
            detail: None,
            variant: ToastVariant::Success,
            ttl: TOAST_TTL_TICKS,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Ошибка".to_string(),
            description: description.into(),
            detail: None,
            variant: ToastVariant::Destructive,
            ttl: TOAST_TTL_TICKS,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }

    pub fn remaining_ticks(&self) -> u16 {
        self.ttl
    }
}

#[derive(Debug, Default, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn extend(&mut self, toasts: impl IntoIterator<Item = Toast>) {
        for toast in toasts {
            self.push(toast);
        }
    }

    /// Age every toast by one tick. Returns true if any expired.
    pub fn tick(&mut self) -> bool {
        let before = self.toasts.len();
        for toast in self.toasts.iter_mut() {
            toast.ttl = toast.ttl.saturating_sub(1);
        }
        self.toasts.retain(|t| t.ttl > 0);
        self.toasts.len() != before
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
