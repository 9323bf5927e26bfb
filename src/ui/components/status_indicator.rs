//! Status Indicator Component
//!
//! One-line spinner, success, error and info indicators used by the status
//! bar, the loading states and the auth dialogs.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    /// Spinner whose frame follows the app tick counter.
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            frame: (tick / 2) as usize,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as a single line
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_PENDING),
            ),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_PENDING)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Success { message } => Line::from(vec![
            Span::styled("● ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(message.clone(), Style::default().fg(COLOR_SUCCESS)),
        ]),
        StatusIndicatorType::Error { message } => Line::from(vec![
            Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Info { message } => {
            Line::from(Span::styled(message.clone(), Style::default().fg(COLOR_DIM)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frames() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(3), '◒');
        assert_eq!(get_spinner_char(4), '◐');
    }

    #[test]
    fn test_spinner_follows_ticks() {
        assert_eq!(
            StatusIndicatorType::spinner("Загрузка...", 5),
            StatusIndicatorType::Spinner {
                message: "Загрузка...".to_string(),
                frame: 2,
            }
        );
    }

    #[test]
    fn test_rendered_text() {
        let line = render_status_indicator(&StatusIndicatorType::error("Тема не найдена"));
        assert_eq!(line.to_string(), "✗ Тема не найдена");
        let line = render_status_indicator(&StatusIndicatorType::spinner("Создание темы...", 0));
        assert_eq!(line.to_string(), "◐ Создание темы...");
    }
}
