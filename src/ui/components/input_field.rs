//! Input Field Component
//!
//! A labelled single-line input with focus highlighting, password masking,
//! a placeholder and an inline error line.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::TextField;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Mask the value (passwords)
    pub is_password: bool,
    /// Shown under the input box
    pub error: Option<&'a str>,
    /// Shown dimmed while the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            error: None,
            placeholder: None,
        }
    }

    /// Label, value and error taken from a form field.
    pub fn for_field(label: &'a str, field: &'a TextField) -> Self {
        Self::new(label, field.value()).error(field.error())
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text inside the box, cursor excluded.
    fn display_value(&self) -> String {
        if self.value.is_empty() {
            return self.placeholder.unwrap_or_default().to_string();
        }
        if self.is_password {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }
}

/// Rows needed: label, a three-row box and the error line if any.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    if config.error.is_some() {
        5
    } else {
        4
    }
}

/// Render an input field and return the height it consumed.
///
/// Rows falling outside `area` are clipped.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let width = area.width.saturating_sub(2);
    let x = area.x + 1;
    let mut y = area.y;

    let label_style = if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        Rect::new(x, y, width, 1).intersection(area),
    );
    y += 1;

    let border_color = if config.error.is_some() {
        COLOR_ERROR
    } else if config.focused {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let text_style = if config.value.is_empty() || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };
    let mut spans = vec![Span::styled(config.display_value(), text_style)];
    if config.focused {
        spans.push(Span::styled("█", Style::default().fg(COLOR_ACCENT)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(block),
        Rect::new(x, y, width, 3).intersection(area),
    );
    y += 3;

    if let Some(error) = config.error {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error, Style::default().fg(COLOR_ERROR)),
            ])),
            Rect::new(x, y, width, 1).intersection(area),
        );
        y += 1;
    }

    y - area.y
}
