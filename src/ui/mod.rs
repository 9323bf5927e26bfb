//! UI rendering for the forum client.
//!
//! The whole frame is redrawn from [`App`] state: header, the current
//! screen, the status bar and footer, then the open dialog and the toasts
//! on top.

pub mod components;
mod dialogs;
mod footer;
mod header;
mod home;
pub mod layout;
mod pages;
pub mod theme;
mod toasts;
mod topic_view;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, Screen};

use layout::LayoutContext;

/// Render the user interface
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let [header_area, body, status_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(ctx.footer_height()),
    ])
    .areas(area);

    header::render_header(frame, header_area, app, &ctx);
    render_screen(frame, body, app, &ctx);
    footer::render_status_bar(frame, status_area, app);
    footer::render_footer(frame, footer_area, &ctx);

    if let Some(dialog) = &app.dialog {
        dialogs::render_dialog(frame, area, app, dialog, &ctx);
    }
    toasts::render_toasts(frame, area, &app.toasts);
}

fn render_screen(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    match app.screen {
        Screen::Home => home::render_home(frame, area, app, ctx),
        Screen::Topic(_) => topic_view::render_topic(frame, area, app, ctx),
        Screen::Rules => pages::render_rules(frame, area, app.page_scroll),
        Screen::Help => pages::render_help(frame, area, app.page_scroll, &app.faq),
        Screen::News => pages::render_news(frame, area, app.page_scroll),
    }
}
