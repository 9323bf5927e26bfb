//! Home screen: hero banner, the active-topic list with its category
//! filter, and the portal statistics.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{HERO_SUBTITLE, HERO_TITLE};
use crate::models::{Category, Topic};
use crate::view_model::{ForumStats, PendingAction, TopicListViewModel};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::layout::{truncate, LayoutContext};
use super::theme::{
    category_color, category_glyph, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER,
    COLOR_MUTED, COLOR_PENDING, COLOR_PINNED, COLOR_SELECTED_BG,
};

pub fn render_home(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let hero_height = if ctx.should_show_hero() { 4 } else { 0 };
    let [hero, main] =
        Layout::vertical([Constraint::Length(hero_height), Constraint::Min(1)]).areas(area);
    if hero_height > 0 {
        render_hero(frame, hero);
    }

    if ctx.should_show_stats_column() {
        let (_, right) = ctx.two_column_widths();
        let [list, side] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(right)]).areas(main);
        render_topic_list(frame, list, app, ctx);
        render_stats(frame, side, &app.topic_list.stats(), false);
    } else {
        let [list, stats] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(4)]).areas(main);
        render_topic_list(frame, list, app, ctx);
        render_stats(frame, stats, &app.topic_list.stats(), true);
    }
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HERO_SUBTITLE, Style::default().fg(COLOR_MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(lines).centered().wrap(Wrap { trim: true }),
        area,
    );
}

/// "Активные темы" with the filter badge and reset hint.
pub(crate) fn list_title(vm: &TopicListViewModel) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " Активные темы ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(filter) = vm.filter() {
        spans.push(Span::styled(
            format!("[{} {}]", category_glyph(filter), filter),
            Style::default().fg(category_color(filter)),
        ));
        spans.push(Span::styled(" x Сбросить фильтр ", Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

fn render_topic_list(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let vm = &app.topic_list;
    let block = Block::default()
        .title(list_title(vm))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let topics = vm.filtered();
    if topics.is_empty() {
        let line = if vm.is_loading() {
            render_status_indicator(&StatusIndicatorType::spinner("Загрузка тем...", app.tick_count))
        } else if vm.load_failed() {
            render_status_indicator(&StatusIndicatorType::error(
                "Не удалось загрузить темы. Нажмите g, чтобы повторить",
            ))
        } else if vm.filter().is_some() {
            render_status_indicator(&StatusIndicatorType::info("В этом мире пока нет тем"))
        } else {
            render_status_indicator(&StatusIndicatorType::info(
                "Тем пока нет. Нажмите n, чтобы создать первую",
            ))
        };
        frame.render_widget(Paragraph::new(line).centered(), inner);
        return;
    }

    let max_title = ctx.max_title_length();
    let items: Vec<ListItem> = topics
        .iter()
        .map(|topic| {
            let deleting = vm.is_pending(PendingAction::DeleteTopic(topic.id));
            topic_item(topic, max_title, deleting)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol("▌");
    let mut state = ListState::default().with_selected(Some(vm.selected_index()));
    frame.render_stateful_widget(list, inner, &mut state);
}

/// Two-line row: badge and title, then author and counters.
fn topic_item(topic: &Topic, max_title: usize, deleting: bool) -> ListItem<'static> {
    let mut first = Vec::new();
    if topic.is_pinned {
        first.push(Span::styled("▲ ", Style::default().fg(COLOR_PINNED)));
    }
    first.push(Span::styled(
        format!("{} {} ", category_glyph(&topic.category), topic.category),
        Style::default().fg(category_color(&topic.category)),
    ));
    first.push(Span::styled(
        truncate(&topic.title, max_title),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    if deleting {
        first.push(Span::styled(
            format!("  {}", PendingAction::DeleteTopic(topic.id).label()),
            Style::default().fg(COLOR_PENDING),
        ));
    }

    let second = Line::from(vec![
        Span::styled(
            format!("  ({}) ", topic.author_initial()),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled(topic.author.clone(), Style::default().fg(COLOR_MUTED)),
        Span::styled(
            format!(
                "  ✉ {}  ◎ {}  {}",
                topic.replies, topic.views, topic.last_post
            ),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    ListItem::new(vec![Line::from(first), second])
}

/// "Статистика портала". Active topics count the unfiltered collection.
pub(crate) fn stats_lines(stats: &ForumStats) -> Vec<(String, &'static str)> {
    vec![
        (stats.players.to_string(), "Игроков"),
        (stats.active_topics.to_string(), "Активных тем"),
        (stats.worlds.to_string(), "Миров"),
        (stats.messages.to_string(), "Сообщений"),
    ]
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &ForumStats, compact: bool) {
    let block = Block::default()
        .title(Span::styled(
            " Статистика портала ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(COLOR_MUTED);

    if compact {
        let mut spans = Vec::new();
        for (value, label) in stats_lines(stats) {
            spans.push(Span::styled(value, value_style));
            spans.push(Span::styled(format!(" {}   ", label), label_style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).centered(), inner);
        return;
    }

    let mut lines = Vec::new();
    for (value, label) in stats_lines(stats) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>6} ", value), value_style),
            Span::styled(label, label_style),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Миры", Style::default().fg(COLOR_HEADER))));
    for category in Category::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", category.glyph()),
                Style::default().fg(category_color(category.label())),
            ),
            Span::styled(category.label(), label_style),
        ]));
    }
    lines.push(Line::from(Span::styled(" c фильтр по миру", Style::default().fg(COLOR_DIM))));
    frame.render_widget(Paragraph::new(lines), inner);
}
