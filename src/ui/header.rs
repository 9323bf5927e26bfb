//! Portal header: logo, page navigation and the session controls.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::content::PORTAL_TITLE;

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MUTED};

pub const HEADER_HEIGHT: u16 = 2;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = session_line(app, ctx);
    let [left, right] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(session.width() as u16),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(nav_line(app.screen, ctx)), left);
    frame.render_widget(Paragraph::new(session).right_aligned(), right);
}

/// Logo followed by the numbered navigation entries.
pub(crate) fn nav_line(current: Screen, ctx: &LayoutContext) -> Line<'static> {
    let mut spans = vec![
        Span::styled("⚔ ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            PORTAL_TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for (i, nav) in Screen::NAV.iter().enumerate() {
        let style = if current.is_under(*nav) {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        if !ctx.is_extra_small() {
            spans.push(Span::styled(format!("{} ", i + 1), Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(nav.nav_label(), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Вход/Регистрация when signed out, Профиль/Выход when signed in.
pub(crate) fn session_line(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let key = Style::default().fg(COLOR_DIM);
    let label = Style::default().fg(COLOR_MUTED);
    match &app.session {
        Some(session) => {
            let mut spans = vec![Span::styled("◉ ", Style::default().fg(COLOR_ACCENT))];
            if !ctx.is_narrow() {
                spans.push(Span::styled(
                    session.username.clone(),
                    Style::default().fg(COLOR_HEADER),
                ));
                spans.push(Span::raw(" "));
            }
            spans.extend([
                Span::styled("Профиль", label),
                Span::raw("  "),
                Span::styled("o ", key),
                Span::styled("Выход", label),
                Span::raw(" "),
            ]);
            Line::from(spans)
        }
        None => Line::from(vec![
            Span::styled("l ", key),
            Span::styled("Вход", label),
            Span::raw("  "),
            Span::styled("r ", key),
            Span::styled(
                "Регистрация",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]),
    }
}
