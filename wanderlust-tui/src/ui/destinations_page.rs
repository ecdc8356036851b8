//! Page 2 — Destinations: search box, tag chips, filtered list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use wanderlust_core::domain::DESTINATION_TAGS;

use crate::app::{AppState, TextTarget};
use crate::theme;
use crate::ui::widgets::{chip, truncate, visible_window};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.destinations;
    let editing = app.editing == Some(TextTarget::DestinationSearch);
    let mut lines: Vec<Line> = Vec::new();

    // Search line
    let cursor = if editing { "▏" } else { "" };
    lines.push(Line::from(vec![
        Span::styled("Search: ", theme::muted()),
        Span::styled(
            format!("{}{cursor}", state.filter.search),
            if editing { theme::accent_bold() } else { theme::accent() },
        ),
    ]));

    // Tag chips
    let mut chips = vec![Span::styled("Tags:   ", theme::muted())];
    for (i, tag) in DESTINATION_TAGS.iter().enumerate() {
        let selected = state.filter.tags.iter().any(|t| t == tag);
        chips.push(chip(tag, selected, i == state.tag_cursor));
    }
    lines.push(Line::from(chips));
    lines.push(Line::from(""));

    let visible = app.visible_destinations();
    lines.push(Line::from(vec![
        Span::styled(format!("{} destinations", visible.len()), theme::accent()),
        Span::styled(
            "  [/]search [h/l]tag [Space]toggle [c]clear [Enter]open",
            theme::muted(),
        ),
    ]));

    if visible.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No destinations match your filters. Press c to clear them.",
            theme::warning(),
        )));
    } else {
        let height = area.height.saturating_sub(lines.len() as u16) as usize;
        let description_width = area.width.saturating_sub(50) as usize;
        for i in visible_window(state.cursor, visible.len(), height) {
            let dest = visible[i];
            let style = if i == state.cursor {
                theme::cursor()
            } else {
                theme::text()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<16}", dest.name), style),
                Span::styled(format!(" {:<14}", dest.country), theme::muted()),
                Span::styled(format!(" {:<22}", dest.tags.join(", ")), theme::neutral()),
                Span::styled(truncate(&dest.description, description_width), theme::muted()),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}
