//! Page 4 — Stays: accommodation filters and results.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use wanderlust_core::domain::ACCOMMODATION_TYPES;

use crate::app::{AppState, TextTarget};
use crate::theme;
use crate::ui::widgets::{chip, rating, slider, truncate, visible_window};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.stays;
    let ceiling = app.settings.accommodations.price_ceiling;
    let editing = app.editing == Some(TextTarget::StaySearch);
    let mut lines: Vec<Line> = Vec::new();

    let cursor = if editing { "▏" } else { "" };
    lines.push(Line::from(vec![
        Span::styled("Search:      ", theme::muted()),
        Span::styled(
            format!("{}{cursor}", state.filter.search),
            if editing { theme::accent_bold() } else { theme::accent() },
        ),
    ]));

    let destination = state
        .filter
        .destination
        .as_ref()
        .and_then(|id| app.catalog.destination(id.as_str()))
        .map_or_else(|| "All destinations".to_string(), |d| d.display_name());
    lines.push(Line::from(vec![
        Span::styled("Destination: ", theme::muted()),
        Span::styled(destination, theme::neutral()),
    ]));

    let frac = if ceiling == 0 {
        0.0
    } else {
        state.filter.price.max as f64 / ceiling as f64
    };
    lines.push(Line::from(vec![
        Span::styled("Price:       ", theme::muted()),
        Span::styled(slider(frac, 20), theme::accent()),
        Span::styled(
            format!(" ${} - ${} per night", state.filter.price.min, state.filter.price.max),
            theme::text(),
        ),
    ]));

    let mut chips = vec![Span::styled("Type:        ", theme::muted())];
    for (i, kind) in ACCOMMODATION_TYPES.iter().enumerate() {
        let selected = state.filter.types.iter().any(|t| t == kind);
        chips.push(chip(kind, selected, i == state.type_cursor));
    }
    lines.push(Line::from(chips));
    lines.push(Line::from(""));

    let visible = app.visible_stays();
    lines.push(Line::from(vec![
        Span::styled(format!("{} properties found", visible.len()), theme::accent()),
        Span::styled(
            "  [/]search [d]destination [[ ]]max price [h/l]type [Space]toggle [c]clear",
            theme::muted(),
        ),
    ]));

    if visible.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No accommodations match your filters. Press c to clear them.",
            theme::warning(),
        )));
    } else {
        let height = area.height.saturating_sub(lines.len() as u16) as usize;
        let amenity_width = area.width.saturating_sub(78) as usize;
        for i in visible_window(state.cursor, visible.len(), height) {
            let a = visible[i];
            let style = if i == state.cursor {
                theme::cursor()
            } else {
                theme::text()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<30}", truncate(&a.name, 30)), style),
                Span::styled(format!(" {:<11}", a.kind), theme::neutral()),
                Span::styled(format!(" ${:>5}", a.price_per_night), theme::accent()),
                Span::raw("  "),
                rating(a.rating, a.review_count),
                Span::styled(
                    format!("  {}", truncate(&a.amenities.join(", "), amenity_width)),
                    theme::muted(),
                ),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}
