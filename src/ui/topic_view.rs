//! Topic screen: the topic card, its comments and the comment form.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, CommentForm, Focus};
use crate::models::{Comment, Topic};
use crate::view_model::{DetailPhase, PendingAction, TopicDetailViewModel};

use super::components::{
    calculate_input_field_height, render_input_field, render_status_indicator, InputFieldConfig,
    StatusIndicatorType,
};
use super::layout::{wrap_text, LayoutContext};
use super::theme::{
    category_color, category_glyph, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_MUTED, COLOR_PENDING, COLOR_PINNED, COLOR_SELECTED_BG,
};

pub const EMPTY_COMMENTS: &str = "Пока нет комментариев. Будьте первым!";
pub const NOT_FOUND: &str = "Тема не найдена";
pub const BACK_HOME: &str = "Вернуться на главную";

pub fn render_topic(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let vm = &app.topic_detail;
    match vm.phase() {
        DetailPhase::Idle | DetailPhase::Loading => {
            let line = render_status_indicator(&StatusIndicatorType::spinner(
                "Загрузка...",
                app.tick_count,
            ));
            frame.render_widget(Paragraph::new(line).centered(), centered_rows(area, 1));
        }
        DetailPhase::NotFound => render_dead_end(frame, area, NOT_FOUND, None),
        DetailPhase::Error(reason) => {
            render_dead_end(frame, area, "Не удалось загрузить тему", Some(reason.as_str()))
        }
        DetailPhase::Ready => render_ready(frame, area, app, ctx),
    }
}

/// Terminal states: a message and the way back to the list.
fn render_dead_end(frame: &mut Frame, area: Rect, message: &str, detail: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(COLOR_MUTED),
    ))];
    if let Some(detail) = detail {
        lines.push(Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(COLOR_ERROR),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Enter ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("[ {} ]", BACK_HOME),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let height = lines.len() as u16 + 2;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(
        Paragraph::new(lines).centered().block(block),
        centered_rows(area, height),
    );
}

fn render_ready(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let vm = &app.topic_detail;
    let Some(topic) = vm.topic() else {
        return;
    };

    let form_height = comment_form_height(&app.comment_form);
    let [back, card, comments, form] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(if ctx.is_narrow() { 6 } else { 5 }),
        Constraint::Min(3),
        Constraint::Length(form_height),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("← Esc ", Style::default().fg(COLOR_DIM)),
            Span::styled("Назад к темам", Style::default().fg(COLOR_MUTED)),
        ])),
        back,
    );
    render_topic_card(frame, card, topic);
    render_comments(frame, comments, app);
    render_comment_form(frame, form, &app.comment_form, app.focus, vm);
}

pub(crate) fn topic_card_lines(topic: &Topic) -> Vec<Line<'static>> {
    let mut badges = Vec::new();
    if topic.is_pinned {
        badges.push(Span::styled("▲ Закреплено  ", Style::default().fg(COLOR_PINNED)));
    }
    badges.push(Span::styled(
        format!("{} {}", category_glyph(&topic.category), topic.category),
        Style::default().fg(category_color(&topic.category)),
    ));

    vec![
        Line::from(badges),
        Line::from(Span::styled(
            topic.title.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("({}) ", topic.author_initial()),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(topic.author.clone(), Style::default().fg(COLOR_MUTED)),
            Span::styled(
                format!(
                    "   ✉ {} ответов   ◎ {} просмотров",
                    topic.replies, topic.views
                ),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
    ]
}

fn render_topic_card(frame: &mut Frame, area: Rect, topic: &Topic) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(
        Paragraph::new(topic_card_lines(topic))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_comments(frame: &mut Frame, area: Rect, app: &App) {
    let vm = &app.topic_detail;
    let focused = app.focus == Focus::Comments;
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", vm.comment_heading()),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            COLOR_ACCENT
        } else {
            COLOR_BORDER
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if vm.comments().is_empty() {
        let line = if vm.comments_failed() {
            render_status_indicator(&StatusIndicatorType::error(
                "Не удалось загрузить комментарии",
            ))
        } else {
            render_status_indicator(&StatusIndicatorType::info(EMPTY_COMMENTS))
        };
        frame.render_widget(Paragraph::new(line).centered(), inner);
        return;
    }

    let width = inner.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    let mut selected_start = 0;
    for (i, comment) in vm.comments().iter().enumerate() {
        let selected = focused && i == app.comment_index;
        if i == app.comment_index {
            selected_start = lines.len();
        }
        let deleting = vm.is_pending(PendingAction::DeleteComment(comment.id));
        lines.extend(comment_lines(comment, width, selected, deleting));
        lines.push(Line::default());
    }

    // Keep the selected comment in view.
    let visible = inner.height as usize;
    let scroll = selected_start.saturating_sub(visible.saturating_sub(4));
    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);
}

/// Header line plus wrapped content of one comment.
pub(crate) fn comment_lines(
    comment: &Comment,
    width: usize,
    selected: bool,
    deleting: bool,
) -> Vec<Line<'static>> {
    let marker = if selected { "▌" } else { " " };
    let row_style = if selected {
        Style::default().bg(COLOR_SELECTED_BG)
    } else {
        Style::default()
    };
    let initial = comment
        .author
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string());

    let mut header = vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(format!("({}) ", initial), Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            comment.author.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", comment.created_at_display()),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if deleting {
        header.push(Span::styled(
            format!("  {}", PendingAction::DeleteComment(comment.id).label()),
            Style::default().fg(COLOR_PENDING),
        ));
    }

    let mut lines = vec![Line::from(header).style(row_style)];
    for text in wrap_text(&comment.content, width) {
        lines.push(
            Line::from(vec![
                Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                Span::raw(format!("    {}", text)),
            ])
            .style(row_style),
        );
    }
    lines
}

fn comment_form_height(form: &CommentForm) -> u16 {
    let author = InputFieldConfig::for_field("Ваше имя", &form.author);
    let content = InputFieldConfig::for_field("Комментарий", &form.content);
    calculate_input_field_height(&author) + calculate_input_field_height(&content) + 3
}

fn render_comment_form(
    frame: &mut Frame,
    area: Rect,
    form: &CommentForm,
    focus: Focus,
    vm: &TopicDetailViewModel,
) {
    let block = Block::default()
        .title(Span::styled(
            " Добавить комментарий ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focus.is_form() {
            COLOR_ACCENT
        } else {
            COLOR_BORDER
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let author = InputFieldConfig::for_field("Ваше имя", &form.author)
        .placeholder("Введите ваше имя")
        .focused(focus == Focus::Author);
    let content = InputFieldConfig::for_field("Комментарий", &form.content)
        .placeholder("Напишите ваш комментарий...")
        .focused(focus == Focus::Content);

    let mut y = inner.y;
    let remaining = |y: u16| inner.height.saturating_sub(y - inner.y);
    y += render_input_field(
        frame,
        Rect::new(inner.x, y, inner.width, remaining(y)),
        &author,
    );
    y += render_input_field(
        frame,
        Rect::new(inner.x, y, inner.width, remaining(y)),
        &content,
    );

    let button = if vm.is_pending(PendingAction::AddComment) {
        render_status_indicator(&StatusIndicatorType::info(PendingAction::AddComment.label()))
    } else {
        Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                "[ Отправить ]",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if focus.is_form() { "" } else { "   a написать" },
                Style::default().fg(COLOR_DIM),
            ),
        ])
    };
    if remaining(y) > 0 {
        frame.render_widget(Paragraph::new(button), Rect::new(inner.x, y, inner.width, 1));
    }
}

/// A band of `height` rows in the vertical middle of `area`.
fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
