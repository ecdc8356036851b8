//! Bottom status bar — current path, page hints, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, Page, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(format!(" {} ", app.route), theme::accent()));

    // Page hints
    let hints: Vec<String> = (0..Page::COUNT)
        .filter_map(Page::from_index)
        .map(|p| format!("{}:{}", p.index() + 1, p.label()))
        .collect();
    spans.push(Span::styled(hints.join(" "), theme::muted()));
    spans.push(Span::styled(" ?:Help", theme::muted()));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
