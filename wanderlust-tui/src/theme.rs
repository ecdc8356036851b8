//! Sunset theme tokens for the Wanderlust TUI
//!
//! # Color Palette
//! - **Background**: Deep navy (base layer)
//! - **Accent**: Warm coral (focus, highlights, prices)
//! - **Positive**: Sea green (ratings, confirmations)
//! - **Negative**: Brick red (dominant budget categories)
//! - **Warning**: Amber (ignored input, alerts)
//! - **Neutral**: Sky blue (section labels, tags)
//! - **Muted**: Slate (secondary text, hints)

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(16, 22, 38);
pub const ACCENT: Color = Color::Rgb(255, 127, 80);
pub const POSITIVE: Color = Color::Rgb(46, 204, 143);
pub const NEGATIVE: Color = Color::Rgb(214, 69, 65);
pub const WARNING: Color = Color::Rgb(255, 191, 0);
pub const NEUTRAL: Color = Color::Rgb(110, 180, 235);
pub const MUTED: Color = Color::Rgb(130, 140, 160);
pub const TEXT: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

/// Row under the cursor.
pub fn cursor() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Color for a 0–5 star rating.
pub fn rating_color(rating: f32) -> Color {
    match rating {
        r if r >= 4.8 => POSITIVE,
        r if r >= 4.5 => ACCENT,
        r if r >= 4.0 => NEUTRAL,
        _ => MUTED,
    }
}

/// Color for a category's share of the budget, in percent.
pub fn share_color(percentage: f64) -> Color {
    match percentage {
        p if p >= 40.0 => NEGATIVE,
        p if p >= 25.0 => WARNING,
        p if p > 0.0 => NEUTRAL,
        _ => MUTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_follows_focus() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }

    #[test]
    fn rating_gradient() {
        assert_eq!(rating_color(4.9), POSITIVE);
        assert_eq!(rating_color(4.6), ACCENT);
        assert_eq!(rating_color(4.2), NEUTRAL);
        assert_eq!(rating_color(3.0), MUTED);
    }

    #[test]
    fn share_gradient() {
        assert_eq!(share_color(45.0), NEGATIVE);
        assert_eq!(share_color(37.2), WARNING);
        assert_eq!(share_color(4.7), NEUTRAL);
        assert_eq!(share_color(0.0), MUTED);
    }
}
