//! Toast stack in the top-right corner, newest at the bottom.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::view_model::{Toast, ToastQueue, ToastVariant};

use super::theme::{COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR, COLOR_MUTED, COLOR_SUCCESS};

const TOAST_WIDTH: u16 = 40;

pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let mut y = area.y + 1;
    for toast in toasts.iter() {
        let lines = toast_lines(toast);
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, height);
        let color = variant_color(toast.variant);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(COLOR_DIALOG_BG)),
                ),
            rect,
        );
        y += height;
    }
}

fn variant_color(variant: ToastVariant) -> ratatui::style::Color {
    match variant {
        ToastVariant::Success => COLOR_SUCCESS,
        ToastVariant::Destructive => COLOR_ERROR,
    }
}

pub(crate) fn toast_lines(toast: &Toast) -> Vec<Line<'static>> {
    let icon = if toast.is_error() { "✗ " } else { "✓ " };
    let color = variant_color(toast.variant);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(icon, Style::default().fg(color)),
            Span::styled(
                toast.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            toast.description.clone(),
            Style::default().fg(COLOR_MUTED),
        )),
    ];
    if let Some(detail) = &toast.detail {
        lines.push(Line::from(Span::styled(
            detail.clone(),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines
}
