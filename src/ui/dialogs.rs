//! Modal dialogs: login, registration, new topic and confirmation.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ConfirmAction, Dialog, Form, LoginForm, RegisterForm, TopicForm};
use crate::view_model::PendingAction;

use super::components::{
    calculate_input_field_height, render_dialog_frame, render_input_field,
    render_status_indicator, DialogFrameConfig, InputFieldConfig, StatusIndicatorType,
};
use super::layout::LayoutContext;
use super::theme::{
    category_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_MUTED,
};

pub fn render_dialog(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    dialog: &Dialog,
    ctx: &LayoutContext,
) {
    match dialog {
        Dialog::Login(form) => render_login(frame, area, app, form, ctx),
        Dialog::Register(form) => render_register(frame, area, app, form, ctx),
        Dialog::CreateTopic(form) => render_create_topic(frame, area, app, form, ctx),
        Dialog::Confirm(action) => render_confirm(frame, area, dialog.title(), action, ctx),
    }
}

/// Stacks input fields top to bottom inside a dialog.
struct FieldStack<'f, 'a> {
    frame: &'f mut Frame<'a>,
    area: Rect,
    y: u16,
}

impl<'f, 'a> FieldStack<'f, 'a> {
    fn new(frame: &'f mut Frame<'a>, area: Rect) -> Self {
        Self {
            frame,
            area,
            y: area.y,
        }
    }

    fn remaining(&self) -> u16 {
        self.area.height.saturating_sub(self.y - self.area.y)
    }

    fn field(&mut self, config: &InputFieldConfig) {
        let rect = Rect::new(self.area.x, self.y, self.area.width, self.remaining());
        self.y += render_input_field(self.frame, rect, config);
    }

    fn line(&mut self, line: Line<'static>) {
        if self.remaining() == 0 {
            return;
        }
        self.frame.render_widget(
            Paragraph::new(line).centered(),
            Rect::new(self.area.x, self.y, self.area.width, 1),
        );
        self.y += 1;
    }
}

fn fields_height(fields: &[InputFieldConfig]) -> u16 {
    fields.iter().map(calculate_input_field_height).sum()
}

/// Submit button, or the spinner while the request runs.
fn submit_line(label: &str, pending: Option<&str>, tick: u64) -> Line<'static> {
    match pending {
        Some(message) => render_status_indicator(&StatusIndicatorType::spinner(message, tick)),
        None => Line::from(vec![
            Span::styled("Enter ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("[ {} ]", label),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    }
}

fn switch_line(question: &str, key: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", question), Style::default().fg(COLOR_MUTED)),
        Span::styled(format!("{} ", key), Style::default().fg(COLOR_DIM)),
        Span::styled(action.to_string(), Style::default().fg(COLOR_ACCENT)),
    ])
}

fn error_line(app: &App) -> Option<Line<'static>> {
    app.dialog_error
        .as_ref()
        .map(|message| render_status_indicator(&StatusIndicatorType::error(message.clone())))
}

pub(crate) fn login_fields(form: &LoginForm) -> [InputFieldConfig<'_>; 2] {
    let focus = form.focus();
    [
        InputFieldConfig::for_field("Логин", &form.username)
            .placeholder("Введите логин")
            .focused(focus == 0),
        InputFieldConfig::for_field("Пароль", &form.password)
            .placeholder("Введите пароль")
            .password(true)
            .focused(focus == 1),
    ]
}

fn render_login(frame: &mut Frame, area: Rect, app: &App, form: &LoginForm, ctx: &LayoutContext) {
    let fields = login_fields(form);
    let error = error_line(app);
    let height = fields_height(&fields) + 3 + error.is_some() as u16;
    let config = DialogFrameConfig::new("Вход в портал", height).hint("Esc закрыть");
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let mut stack = FieldStack::new(frame, inner);
    for field in &fields {
        stack.field(field);
    }
    if let Some(error) = error {
        stack.line(error);
    }
    stack.line(Line::default());
    let pending = app.auth_pending.then_some("Вход...");
    stack.line(submit_line("Войти", pending, app.tick_count));
    stack.line(switch_line("Нет аккаунта?", "Ctrl+R", "Зарегистрироваться"));
}

pub(crate) fn register_fields(form: &RegisterForm) -> [InputFieldConfig<'_>; 3] {
    let focus = form.focus();
    [
        InputFieldConfig::for_field("Логин", &form.username)
            .placeholder("Выберите логин")
            .focused(focus == 0),
        InputFieldConfig::for_field("Email", &form.email)
            .placeholder("your@email.com")
            .focused(focus == 1),
        InputFieldConfig::for_field("Пароль", &form.password)
            .placeholder("Создайте пароль")
            .password(true)
            .focused(focus == 2),
    ]
}

fn render_register(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    form: &RegisterForm,
    ctx: &LayoutContext,
) {
    let fields = register_fields(form);
    let error = error_line(app);
    let height = fields_height(&fields) + 3 + error.is_some() as u16;
    let config = DialogFrameConfig::new("Регистрация героя", height).hint("Esc закрыть");
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let mut stack = FieldStack::new(frame, inner);
    for field in &fields {
        stack.field(field);
    }
    if let Some(error) = error {
        stack.line(error);
    }
    stack.line(Line::default());
    let pending = app.auth_pending.then_some("Регистрация...");
    stack.line(submit_line("Создать аккаунт", pending, app.tick_count));
    stack.line(switch_line("Уже есть аккаунт?", "Ctrl+L", "Войти"));
}

/// "Категория" selector row.
pub(crate) fn category_line(form: &TopicForm) -> Line<'static> {
    let focused = form.focus() == TopicForm::CATEGORY_STOP;
    let arrow = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    let mut value = Style::default().fg(category_color(form.category.label()));
    if focused {
        value = value.add_modifier(Modifier::BOLD);
    }
    Line::from(vec![
        Span::styled("◀ ", arrow),
        Span::styled(
            format!("{} {}", form.category.glyph(), form.category.label()),
            value,
        ),
        Span::styled(" ▶", arrow),
    ])
}

fn render_create_topic(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    form: &TopicForm,
    ctx: &LayoutContext,
) {
    let focus = form.focus();
    let fields = [
        InputFieldConfig::for_field("Название", &form.title)
            .placeholder("О чем будет тема?")
            .focused(focus == 0),
        InputFieldConfig::for_field("Автор", &form.author)
            .placeholder("Ваше имя")
            .focused(focus == 1),
    ];
    let height = fields_height(&fields) + 5;
    let config = DialogFrameConfig::new("Новая тема", height)
        .hint("←→ категория  Esc закрыть")
        .max_width(72);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let label_style = if focus == TopicForm::CATEGORY_STOP {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_MUTED)
    };

    let mut stack = FieldStack::new(frame, inner);
    for field in &fields {
        stack.field(field);
    }
    stack.line(Line::from(Span::styled("Категория", label_style)));
    stack.line(category_line(form));
    stack.line(Line::default());
    let pending = app
        .topic_list
        .is_pending(PendingAction::CreateTopic)
        .then(|| PendingAction::CreateTopic.label());
    stack.line(submit_line("Создать тему", pending, app.tick_count));
}

fn render_confirm(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    action: &ConfirmAction,
    ctx: &LayoutContext,
) {
    let config = DialogFrameConfig::new(title, 5).hint("y да  n нет");
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let lines = vec![
        Line::from(Span::styled(
            action.prompt(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(action.detail(), Style::default().fg(COLOR_MUTED))),
        Line::default(),
        Line::from(vec![
            Span::styled("y ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                "[ Удалить ]",
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("n ", Style::default().fg(COLOR_DIM)),
            Span::styled("[ Отмена ]", Style::default().fg(COLOR_MUTED)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true }),
        inner,
    );
}
