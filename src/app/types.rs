//! Type definitions for the application state.
//!
//! Contains enums used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which part of the topic screen takes key input

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing page with the topic list
    #[default]
    Home,
    /// One topic and its comments
    Topic(i64),
    Rules,
    Help,
    News,
}

impl Screen {
    /// Header navigation entries, in display order.
    pub const NAV: [Screen; 4] = [Screen::Home, Screen::Rules, Screen::Help, Screen::News];

    /// Label shown in the header navigation.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Screen::Home | Screen::Topic(_) => "Главная",
            Screen::Rules => "Правила",
            Screen::Help => "Помощь",
            Screen::News => "Новости",
        }
    }

    /// Whether this screen highlights `nav` in the header.
    ///
    /// The topic screen lives under Главная.
    pub fn is_under(&self, nav: Screen) -> bool {
        match (self, nav) {
            (Screen::Topic(_), Screen::Home) => true,
            _ => *self == nav,
        }
    }

    /// Static pages scroll as a whole.
    pub fn is_static_page(&self) -> bool {
        matches!(self, Screen::Rules | Screen::Help | Screen::News)
    }
}

/// Represents which part of the topic screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Comment list (selection, delete)
    #[default]
    Comments,
    /// "Ваше имя" field of the comment form
    Author,
    /// "Комментарий" field of the comment form
    Content,
}

impl Focus {
    /// Next stop when Tab is pressed.
    pub fn next(self) -> Self {
        match self {
            Focus::Comments => Focus::Author,
            Focus::Author => Focus::Content,
            Focus::Content => Focus::Comments,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, Focus::Author | Focus::Content)
    }
}
