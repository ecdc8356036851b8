//! Page 5 — Budget: trip details, expenses by category, summary and breakdown.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use wanderlust_core::budget::{format_amount, format_percentage};

use crate::app::{AppState, TextTarget};
use crate::theme;
use crate::ui::widgets::{slider, truncate};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_expenses(f, columns[0], app);
    render_summary(f, columns[1], app);
}

fn render_expenses(f: &mut Frame, area: Rect, app: &AppState) {
    let b = &app.budget;
    let editing = app.editing == Some(TextTarget::BudgetDestination);
    let destination = if b.destination.is_empty() && !editing {
        "(not set)".to_string()
    } else if editing {
        format!("{}▏", b.destination)
    } else {
        b.destination.clone()
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Destination: ", theme::muted()),
            Span::styled(destination, if editing { theme::accent_bold() } else { theme::text() }),
        ]),
        Line::from(vec![
            Span::styled("Travelers: ", theme::muted()),
            Span::styled(format!("{:<4}", b.travelers), theme::accent()),
            Span::styled("Days: ", theme::muted()),
            Span::styled(format!("{:<4}", b.days), theme::accent()),
            Span::styled("Currency: ", theme::muted()),
            Span::styled(b.currency.label(), theme::accent()),
        ]),
        Line::from(Span::styled(
            "[e]destination [+/-]travelers [</>]days [c]urrency [a]dd [x]remove [j/k]move",
            theme::muted(),
        )),
        Line::from(""),
    ];

    let desc_width = area.width.saturating_sub(20) as usize;
    let mut row = 0usize;
    for category in &b.categories {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<24}", category.name), theme::neutral()),
            Span::styled(format_amount(category.total()), theme::accent_bold()),
        ]));
        if category.expenses.is_empty() {
            lines.push(Line::from(Span::styled("  no expenses", theme::muted())));
        }
        for expense in &category.expenses {
            let style = if row == app.budget_view.cursor {
                theme::cursor()
            } else {
                theme::text()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", truncate(&expense.description, desc_width), width = desc_width),
                    style,
                ),
                Span::styled(format!(" {:>10}", format_amount(expense.amount)), theme::accent()),
            ]));
            row += 1;
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_summary(f: &mut Frame, area: Rect, app: &AppState) {
    let b = &app.budget;
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::muted())
        .title(" Budget Summary ")
        .title_style(theme::accent_bold());

    let figure = |label: &'static str, value: f64| {
        Line::from(vec![
            Span::styled(format!("{label:<22}"), theme::muted()),
            Span::styled(format_amount(value), theme::text()),
        ])
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{:<22}", "Total Budget"), theme::muted()),
            Span::styled(
                format!("{} {}", format_amount(b.total()), b.currency),
                theme::accent_bold(),
            ),
        ]),
        figure("Per Person", b.per_person()),
        figure("Per Day", b.per_day()),
        figure("Per Person Per Day", b.per_person_per_day()),
        Line::from(""),
        Line::from(Span::styled("Breakdown", theme::neutral())),
    ];

    for row in b.breakdown() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", row.name), theme::text()),
            Span::styled(
                slider(row.percentage / 100.0, 12),
                Style::default().fg(theme::share_color(row.percentage)),
            ),
            Span::styled(format!(" {:>6}", format_percentage(row.percentage)), theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
