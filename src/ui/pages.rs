//! Static pages: rules, help with the FAQ accordion, and news.
//!
//! Each page is a single scrollable paragraph built from `content`.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::help::{self, FaqAccordion};
use crate::content::{news, rules, PageHeader};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_MUTED,
    COLOR_PENDING, COLOR_SELECTED_BG,
};

pub fn render_rules(frame: &mut Frame, area: Rect, scroll: u16) {
    render_page(frame, area, scroll, rules_lines());
}

pub fn render_help(frame: &mut Frame, area: Rect, scroll: u16, faq: &FaqAccordion) {
    render_page(frame, area, scroll, help_lines(faq));
}

pub fn render_news(frame: &mut Frame, area: Rect, scroll: u16) {
    render_page(frame, area, scroll, news_lines());
}

fn render_page(frame: &mut Frame, area: Rect, scroll: u16, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

fn header_lines(header: &PageHeader) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            header.title,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(header.subtitle, Style::default().fg(COLOR_MUTED))).centered(),
        Line::default(),
    ]
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn rules_lines() -> Vec<Line<'static>> {
    let mut lines = header_lines(&rules::HEADER);
    for section in rules::SECTIONS {
        lines.push(section_title(section.title));
        for item in section.items {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(COLOR_ACCENT)),
                Span::raw(item),
            ]));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        rules::PENALTIES_TITLE,
        Style::default()
            .fg(COLOR_ERROR)
            .add_modifier(Modifier::BOLD),
    )));
    for (i, penalty) in rules::PENALTIES.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Style::default().fg(COLOR_DIM)),
            Span::styled(
                penalty.name,
                Style::default()
                    .fg(COLOR_PENDING)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", penalty.description),
            Style::default().fg(COLOR_MUTED),
        )));
    }
    lines
}

pub(crate) fn help_lines(faq: &FaqAccordion) -> Vec<Line<'static>> {
    let mut lines = header_lines(&help::HEADER);
    for guide in help::GUIDES {
        lines.push(Line::from(vec![
            Span::styled("  ▸ ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(guide.title, Style::default().fg(COLOR_HEADER)),
            Span::styled(format!("  {}", guide.description), Style::default().fg(COLOR_DIM)),
        ]));
    }
    lines.push(Line::default());

    lines.push(section_title(help::FAQ_TITLE));
    for (i, entry) in help::FAQ.iter().enumerate() {
        let open = faq.open() == Some(i);
        let marker = if open { "▾" } else { "▸" };
        let mut question = Line::from(vec![
            Span::styled(format!("  {} ", marker), Style::default().fg(COLOR_ACCENT)),
            Span::raw(entry.question),
        ]);
        if faq.cursor() == i {
            question = question.style(Style::default().bg(COLOR_SELECTED_BG));
        }
        lines.push(question);
        if open {
            lines.push(Line::from(Span::styled(
                format!("    {}", entry.answer),
                Style::default().fg(COLOR_MUTED),
            )));
        }
    }
    lines.push(Line::default());

    lines.push(section_title(help::SUPPORT_TITLE));
    lines.push(Line::from(Span::styled(
        help::SUPPORT_TEXT,
        Style::default().fg(COLOR_MUTED),
    )));
    let mut actions = Vec::new();
    for action in help::SUPPORT_ACTIONS {
        actions.push(Span::styled(
            format!("[ {} ]", action),
            Style::default().fg(COLOR_ACCENT),
        ));
        actions.push(Span::raw("  "));
    }
    lines.push(Line::from(actions));
    lines
}

pub(crate) fn news_lines() -> Vec<Line<'static>> {
    let mut lines = header_lines(&news::HEADER);
    for item in news::ITEMS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", item.tag),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(
                item.title,
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", item.date), Style::default().fg(COLOR_DIM)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.body),
            Style::default().fg(COLOR_MUTED),
        )));
        lines.push(Line::default());
    }

    lines.push(section_title(news::SUBSCRIBE_TITLE));
    lines.push(Line::from(Span::styled(
        news::SUBSCRIBE_TEXT,
        Style::default().fg(COLOR_MUTED),
    )));
    for channel in news::SUBSCRIBE_CHANNELS {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(COLOR_ACCENT)),
            Span::raw(channel),
        ]));
    }
    lines
}
