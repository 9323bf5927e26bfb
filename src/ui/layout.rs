//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the screens ask: how wide a dialog is, whether the statistics
//! panel fits beside the topic list, how much of a title to show.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// if ctx.should_show_stats_column() {
///     let (list, stats) = ctx.two_column_widths();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Layout Mode Decisions
    // ========================================================================

    /// The statistics panel sits beside the topic list on wide terminals
    /// and under it otherwise.
    pub fn should_show_stats_column(&self) -> bool {
        self.width >= breakpoints::SM_WIDTH
    }

    /// The hero banner is dropped on short terminals.
    pub fn should_show_hero(&self) -> bool {
        !self.is_short()
    }

    /// List and statistics column widths.
    pub fn two_column_widths(&self) -> (u16, u16) {
        let right = if self.width < breakpoints::MD_WIDTH {
            30
        } else {
            ((self.width * 25) / 100).min(40)
        };
        (self.width.saturating_sub(right), right)
    }

    /// Footer rows: the full three-column footer needs room.
    pub fn footer_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            3
        }
    }

    // ========================================================================
    // Text Truncation Helpers
    // ========================================================================

    pub fn max_title_length(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 20,
            SizeCategory::Small => 36,
            SizeCategory::Medium => 60,
            SizeCategory::Large => 90,
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Truncate to `max` display columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Greedy word wrap by display width. Words wider than `width` are split;
/// explicit newlines are kept.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut used = 0;
        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();
            while word.width() > width {
                let (head, rest) = split_at_width(&word, width);
                if rest.is_empty() {
                    // A single char wider than the column.
                    break;
                }
                if used > 0 {
                    lines.push(std::mem::take(&mut current));
                    used = 0;
                }
                lines.push(head);
                word = rest;
            }
            let word_width = word.width();
            if used > 0 && used + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            if used > 0 {
                current.push(' ');
                used += 1;
            }
            used += word_width;
            current.push_str(&word);
        }
        lines.push(current);
    }
    lines
}

/// Longest prefix fitting in `width` columns, at least one char.
fn split_at_width(word: &str, width: usize) -> (String, String) {
    let mut used = 0;
    let mut cut = word.len();
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && i > 0 {
            cut = i;
            break;
        }
        used += w;
    }
    (word[..cut].to_string(), word[cut..].to_string())
}

// ============================================================================
// Tests
// ============================================================================
