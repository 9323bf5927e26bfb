//! Color theme constants for the forum UI
//!
//! Defines the dark palette used throughout the UI and the per-world colors
//! of the topic categories.

use ratatui::style::Color;

use crate::models::Category;

// ============================================================================
// Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - the portal's purple glow
pub const COLOR_ACCENT: Color = Color::Rgb(155, 135, 245);

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Secondary text (authors, counters)
pub const COLOR_MUTED: Color = Color::Gray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(35, 30, 60);

/// Pinned topic marker
pub const COLOR_PINNED: Color = Color::Rgb(250, 204, 21);

// ============================================================================
// Status Colors
// ============================================================================

/// Success state - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Destructive state - red
pub const COLOR_ERROR: Color = Color::Red;

/// Pending action spinner
pub const COLOR_PENDING: Color = Color::Yellow;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialog boxes and toasts
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Category Colors
// ============================================================================

/// Color of a category badge. Labels outside the fixed set are neutral.
pub fn category_color(label: &str) -> Color {
    match Category::from_label(label) {
        Some(Category::Fantasy) => Color::Rgb(168, 85, 247),
        Some(Category::SciFi) => Color::Rgb(59, 130, 246),
        Some(Category::PostApocalypse) => Color::Rgb(249, 115, 22),
        Some(Category::Medieval) => Color::Rgb(234, 179, 8),
        Some(Category::Modern) => Color::Rgb(34, 197, 94),
        None => COLOR_MUTED,
    }
}

/// Glyph of a category badge. Labels outside the fixed set get a dot.
pub fn category_glyph(label: &str) -> char {
    Category::from_label(label).map_or('·', |c| c.glyph())
}
