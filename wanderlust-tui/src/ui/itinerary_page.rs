//! Page 3 — Itinerary: trip header, destination picker, day list, items of the selected day.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use wanderlust_core::itinerary::{DayPlan, ItemKind};

use crate::app::{AppState, TextTarget};
use crate::theme;
use crate::ui::widgets::{truncate, visible_window};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_header(f, rows[0], app);

    if app.itinerary.show_selector {
        render_picker(f, rows[1], app);
    } else {
        render_days(f, rows[1], app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let it = &app.itinerary;
    let name_style = if it.editing_name {
        theme::accent_bold().add_modifier(Modifier::UNDERLINED)
    } else {
        theme::accent_bold()
    };
    let destination = it
        .destination
        .as_ref()
        .and_then(|id| app.catalog.destination(id.as_str()))
        .map_or_else(|| "No destination selected".to_string(), |d| d.display_name());

    let lines = vec![
        Line::from(vec![
            Span::styled(it.trip_name.as_str(), name_style),
            Span::styled(format!("   {}", it.duration_label()), theme::neutral()),
            Span::styled(format!("   {} activities", it.item_count()), theme::muted()),
        ]),
        Line::from(Span::styled(destination, theme::muted())),
        Line::from(Span::styled(
            "[r]ename [c]hange destination [d]add day [D]remove day [H/L]move day [n]renumber [t]date",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_picker(f: &mut Frame, area: Rect, app: &AppState) {
    let query = &app.planner.picker_query;
    let caret = if app.editing == Some(TextTarget::PickerQuery) {
        "▏"
    } else {
        ""
    };
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Where are you going?", theme::accent_bold())),
        Line::from(vec![
            Span::styled("Search: ", theme::muted()),
            Span::styled(format!("{query}{caret}"), theme::accent()),
        ]),
        Line::from(""),
    ];

    let results = app.picker_results();
    if results.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No destinations found matching \"{query}\""),
            theme::warning(),
        )));
    } else {
        let height = area.height.saturating_sub(5) as usize;
        for i in visible_window(app.planner.picker_cursor, results.len(), height) {
            let d = results[i];
            let style = if i == app.planner.picker_cursor {
                theme::cursor()
            } else {
                theme::text()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<16}", d.name), style),
                Span::styled(format!(" {}", d.country), theme::muted()),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[/]search [j/k]move [Enter]select [Esc]close",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

fn render_days(f: &mut Frame, area: Rect, app: &AppState) {
    if app.itinerary.days.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Your itinerary is empty.", theme::text())),
            Line::from(Span::styled(
                "Press d to add the first day of your trip.",
                theme::muted(),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(area);

    let day_lines: Vec<Line> = app
        .itinerary
        .days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let style = if i == app.planner.day_cursor {
                theme::cursor()
            } else {
                theme::text()
            };
            Line::from(vec![
                Span::styled(format!(" {:<7}", day.title()), style),
                Span::styled(format!(" {:<12}", day.date_label()), theme::muted()),
                Span::styled(format!(" {:>2}", day.items.len()), theme::neutral()),
            ])
        })
        .collect();
    let days_block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::muted());
    f.render_widget(Paragraph::new(day_lines).block(days_block), columns[0]);

    if let Some(day) = app.itinerary.days.get(app.planner.day_cursor) {
        render_items(f, columns[1], app, day);
    }
}

fn kind_style(kind: ItemKind) -> Style {
    match kind {
        ItemKind::Activity => theme::accent(),
        ItemKind::Transport => theme::neutral(),
        ItemKind::Accommodation => theme::positive(),
    }
}

fn render_items(f: &mut Frame, area: Rect, app: &AppState, day: &DayPlan) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!(" {}", day.title()), theme::accent_bold()),
            Span::styled(format!("  {}", day.date_label()), theme::muted()),
        ]),
        Line::from(Span::styled(
            " [a]add activity [e]edit [x]remove [j/k]move",
            theme::muted(),
        )),
        Line::from(""),
    ];

    if day.items.is_empty() {
        lines.push(Line::from(Span::styled(
            " No activities planned for this day",
            theme::muted(),
        )));
    }

    for (i, item) in day.items.iter().enumerate() {
        let selected = i == app.planner.item_cursor;
        let title_style = if selected {
            theme::cursor()
        } else {
            theme::text()
        };
        let mut spans = vec![
            Span::styled(format!(" {} ", item.time_label()), theme::warning()),
            Span::styled(format!("{:<14}", format!("[{}]", item.kind)), kind_style(item.kind)),
            Span::styled(item.title.as_str(), title_style),
        ];
        if !item.location.is_empty() {
            spans.push(Span::styled(format!("  @ {}", item.location), theme::muted()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("       {}", truncate(&item.description, width.saturating_sub(7))),
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
