//! Compiled-in text for the static pages and the page chrome.

pub mod help;
pub mod news;
pub mod rules;

pub const PORTAL_TITLE: &str = "RPG Форум";
pub const HERO_TITLE: &str = "Добро пожаловать в семью";
pub const HERO_SUBTITLE: &str = "Ты попал на сайт нашей семьи, здесь ты сможешь найти все что тебе нужно. Оставайся с нами, тут интересно";

pub const FOOTER_BLURB: &str = "Портал для любителей ролевых игр";
pub const SUPPORT_EMAIL: &str = "support@rpgforum.com";
pub const COPYRIGHT: &str = "© 2025 RPG Форум. Все права защищены.";

/// A page heading with the line under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
}
