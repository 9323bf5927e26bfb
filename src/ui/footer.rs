//! Status bar and portal footer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Dialog, Focus, Screen};
use crate::content::{COPYRIGHT, FOOTER_BLURB, PORTAL_TITLE, SUPPORT_EMAIL};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// One line: the running action if there is one, key hints otherwise.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.pending_action() {
        Some(action) => render_status_indicator(&StatusIndicatorType::spinner(
            action.label(),
            app.tick_count,
        )),
        None => hint_line(app),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hint_line(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match (&app.dialog, app.screen) {
        (Some(Dialog::Confirm(_)), _) => &[("y", "да"), ("n", "нет")],
        (Some(_), _) => &[("Tab", "поле"), ("Enter", "далее"), ("Esc", "закрыть")],
        (None, Screen::Home) => &[
            ("↑↓", "выбор"),
            ("Enter", "открыть"),
            ("n", "новая тема"),
            ("d", "удалить"),
            ("c", "фильтр"),
            ("g", "обновить"),
            ("q", "выход"),
        ],
        (None, Screen::Topic(_)) if app.focus != Focus::Comments => &[
            ("Tab", "поле"),
            ("Enter", "отправить"),
            ("Esc", "к комментариям"),
        ],
        (None, Screen::Topic(_)) => &[
            ("Esc", "назад"),
            ("↑↓", "выбор"),
            ("a", "комментировать"),
            ("d", "удалить"),
            ("g", "обновить"),
        ],
        (None, Screen::Help) => &[("↑↓", "вопрос"), ("Enter", "раскрыть"), ("Esc", "назад")],
        (None, _) => &[("↑↓", "прокрутка"), ("Esc", "назад"), ("q", "выход")],
    };
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(COLOR_ACCENT),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let dim = Style::default().fg(COLOR_DIM);
    if area.height < 3 {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(COPYRIGHT, dim))).centered(),
            area,
        );
        return;
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [about, contact] = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .areas(inner);
    let brand = Line::from(vec![
        Span::styled(
            PORTAL_TITLE,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {}", FOOTER_BLURB), dim),
    ]);
    let copyright = Line::from(Span::styled(COPYRIGHT, dim));
    frame.render_widget(Paragraph::new(vec![brand, copyright]), about);

    let label = if ctx.is_narrow() { "" } else { "Связь: " };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(label, dim),
            Span::styled(SUPPORT_EMAIL, Style::default().fg(COLOR_ACCENT)),
        ]))
        .right_aligned(),
        contact,
    );
}
