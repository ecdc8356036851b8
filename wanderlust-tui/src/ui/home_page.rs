//! Page 1 — Home: featured destinations, featured experiences, testimonials.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;
use crate::ui::widgets::{rating, truncate};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_featured(f, columns[0], app);
    render_side(f, columns[1], app);
}

fn render_featured(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Discover Your Next Adventure", theme::accent_bold())),
        Line::from(Span::styled(
            "Explore destinations, plan day by day, and keep the budget honest.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Featured Destinations", theme::neutral())),
    ];

    for (i, dest) in app.catalog.featured_destinations().iter().enumerate() {
        let style = if i == app.home.cursor {
            theme::cursor()
        } else {
            theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<14}", dest.name), style),
            Span::styled(format!(" {:<14}", dest.country), theme::muted()),
            Span::styled(format!(" {}", dest.tags.join(" · ")), theme::neutral()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [j/k]move [Enter]open [p]plan a trip [g]go to path",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

fn render_side(f: &mut Frame, area: Rect, app: &AppState) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Featured Experiences",
        theme::neutral(),
    ))];

    for exp in app.catalog.experiences.iter().take(4) {
        let place = app
            .catalog
            .destination(exp.destination_id.as_str())
            .map_or("", |d| d.name.as_str());
        lines.push(Line::from(vec![
            Span::styled(truncate(&exp.title, width.saturating_sub(20)), theme::text()),
            Span::styled(format!("  ${}", exp.price), theme::accent()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("  {place} · {} · ", exp.duration), theme::muted()),
            rating(exp.rating, exp.review_count),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("What Travelers Say", theme::neutral())));
    for t in &app.catalog.testimonials {
        lines.push(Line::from(vec![
            Span::styled(t.stars(), theme::warning()),
            Span::styled(format!("  {} — {}", t.name, t.trip), theme::muted()),
        ]));
        lines.push(Line::from(Span::styled(format!("  \"{}\"", t.text), theme::text())));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
