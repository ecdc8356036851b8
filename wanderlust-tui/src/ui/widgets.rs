//! Small text helpers shared by the page renderers.

use std::ops::Range;

use ratatui::style::Style;
use ratatui::text::Span;

use crate::theme;

/// Inline bar such as `[=======   ]` for a 0..=1 fraction.
pub fn slider(frac: f64, width: usize) -> String {
    let filled = (frac.clamp(0.0, 1.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Cut to `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Rows to show so the cursor stays on screen.
pub fn visible_window(cursor: usize, len: usize, height: usize) -> Range<usize> {
    if height == 0 || len == 0 {
        return 0..0;
    }
    let start = cursor.saturating_sub(height - 1).min(len.saturating_sub(height));
    start..(start + height).min(len)
}

/// `[x] Label` / `[ ] Label` chip for a multi-select vocabulary entry.
pub fn chip(label: &str, selected: bool, focused: bool) -> Span<'static> {
    let mark = if selected { "[x]" } else { "[ ]" };
    let style: Style = if focused {
        theme::cursor()
    } else if selected {
        theme::accent()
    } else {
        theme::muted()
    };
    Span::styled(format!("{mark} {label} "), style)
}

/// `★ 4.8 (1243)` for a catalog rating.
pub fn rating(rating: f32, reviews: u32) -> Span<'static> {
    Span::styled(
        format!("★ {rating:.1} ({reviews})"),
        Style::default().fg(theme::rating_color(rating)),
    )
}
