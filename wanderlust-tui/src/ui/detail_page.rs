//! Destination detail — tabbed content with a "Plan Your Trip" sidebar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use wanderlust_core::domain::Destination;

use crate::app::{AppState, DetailTab};
use crate::theme;
use crate::ui::widgets::rating;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, dest: &Destination) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    render_tabs(f, rows[0], app.detail.tab);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[1]);

    let body = match app.detail.tab {
        DetailTab::Overview => overview(app, dest),
        DetailTab::Attractions => attractions(dest),
        DetailTab::Accommodations => stays(app, dest),
        DetailTab::Experiences => experiences(app, dest),
        DetailTab::PracticalInfo => practical_info(dest),
    };
    f.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), columns[0]);

    render_sidebar(f, columns[1], dest);
}

fn render_tabs(f: &mut Frame, area: Rect, active: DetailTab) {
    let mut spans = Vec::new();
    for tab in DetailTab::ALL {
        let style = if tab == active {
            theme::cursor()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("[h/l]tab", theme::muted()));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn overview<'a>(app: &AppState, dest: &'a Destination) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(format!("About {}", dest.name), theme::accent_bold())),
        Line::from(Span::styled(dest.description.as_str(), theme::text())),
        Line::from(""),
        Line::from(Span::styled(dest.overview_blurb(), theme::text())),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "The best time to visit is during {} when the weather is ideal for exploring.",
                dest.best_time_to_visit
            ),
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled("Highlights", theme::neutral())),
    ];
    for (i, h) in dest.highlights.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", i + 1), theme::accent()),
            Span::styled(h.title.as_str(), theme::text()),
        ]));
    }

    let popular: Vec<_> = app
        .catalog
        .experiences_for(dest.id.as_str())
        .into_iter()
        .take(4)
        .collect();
    if !popular.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Popular Experiences", theme::neutral())));
        for exp in popular {
            lines.push(Line::from(vec![
                Span::styled(format!(" {}", exp.title), theme::text()),
                Span::styled(format!("  ${}", exp.price), theme::accent()),
                Span::styled(format!("  {}", exp.duration), theme::muted()),
            ]));
        }
    }
    lines
}

fn attractions(dest: &Destination) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for h in &dest.highlights {
        lines.push(Line::from(Span::styled(h.title.as_str(), theme::accent_bold())));
        lines.push(Line::from(Span::styled(
            format!("  {}", h.description),
            theme::muted(),
        )));
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled("No attractions listed yet.", theme::muted())));
    }
    lines
}

fn stays<'a>(app: &'a AppState, dest: &Destination) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for a in app.catalog.accommodations_for(dest.id.as_str()) {
        lines.push(Line::from(vec![
            Span::styled(a.name.as_str(), theme::accent_bold()),
            Span::styled(format!("  {}", a.kind), theme::neutral()),
            Span::styled(format!("  ${}/night  ", a.price_per_night), theme::accent()),
            rating(a.rating, a.review_count),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} · {}", a.location, a.amenities.join(", ")),
            theme::muted(),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No accommodations listed for {} yet.", dest.name),
            theme::muted(),
        )));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("[s] browse all stays here", theme::muted())));
    }
    lines
}

fn experiences<'a>(app: &'a AppState, dest: &Destination) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for e in app.catalog.experiences_for(dest.id.as_str()) {
        lines.push(Line::from(vec![
            Span::styled(e.title.as_str(), theme::accent_bold()),
            Span::styled(format!("  {}", e.category), theme::neutral()),
            Span::styled(format!("  ${}  ", e.price), theme::accent()),
            rating(e.rating, e.review_count),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} · {}", e.duration, e.description),
            theme::muted(),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No experiences listed for {} yet.", dest.name),
            theme::muted(),
        )));
    }
    lines
}

fn practical_info(dest: &Destination) -> Vec<Line<'_>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<20}"), theme::muted()),
            Span::styled(value, theme::text()),
        ])
    };
    vec![
        row("Country", dest.country.clone()),
        row("Best time to visit", dest.best_time_to_visit.clone()),
        row("Recommended stay", dest.recommended_stay.clone()),
        row("Daily budget", dest.budget.clone()),
        row("Emergency", dest.emergency_number().to_string()),
        row("Travel style", dest.tags.join(", ")),
    ]
}

fn render_sidebar(f: &mut Frame, area: Rect, dest: &Destination) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::muted())
        .title(" Plan Your Trip ")
        .title_style(theme::accent_bold());

    let lines = vec![
        Line::from(Span::styled("[a] Add to Itinerary", theme::accent_bold())),
        Line::from(Span::styled("[s] Find stays", theme::accent())),
        Line::from(""),
        Line::from(Span::styled("Recommended Stay", theme::muted())),
        Line::from(Span::styled(dest.recommended_stay.as_str(), theme::text())),
        Line::from(Span::styled("Daily Budget", theme::muted())),
        Line::from(Span::styled(dest.budget.as_str(), theme::text())),
        Line::from(Span::styled("Best Time to Visit", theme::muted())),
        Line::from(Span::styled(dest.best_time_to_visit.as_str(), theme::text())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Emergency: {}", dest.emergency_number()),
            theme::warning(),
        )),
        Line::from(""),
        Line::from(Span::styled("[Esc] back to destinations", theme::muted())),
    ];

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
