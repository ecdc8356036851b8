//! Popups drawn over the current page: welcome, go-to, item editor,
//! day date and the add-expense form.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use wanderlust_core::domain::DayId;
use wanderlust_core::itinerary::{DraftField, ItemDraft};

use crate::app::{AppState, ExpenseField};
use crate::theme;
use crate::ui::centered_rect;

fn popup_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {title} "))
        .title_style(theme::accent_bold())
        .style(Style::default().bg(theme::BACKGROUND))
}

/// One "label: value" row of a form, highlighted when focused.
fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let value_style = if focused {
        theme::accent_bold()
    } else {
        theme::text()
    };
    let caret = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(marker.to_string(), theme::accent()),
        Span::styled(format!("{label:<13}"), theme::muted()),
        Span::styled(format!("{value}{caret}"), value_style),
    ])
}

pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Wanderlust", theme::accent_bold())),
        Line::from(Span::styled(
            "Discover your next adventure",
            theme::neutral(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Browse destinations, plan day-by-day itineraries,",
            theme::text(),
        )),
        Line::from(Span::styled(
            "compare stays and work out what the trip will cost.",
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "1-5 switch pages   ? help   q quit",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to start", theme::accent())),
    ];

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(popup_block("Welcome"));
    f.render_widget(para, popup);
}

pub fn render_goto(f: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(60, 25, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(vec![
            Span::styled("Path: ", theme::muted()),
            Span::styled(format!("{input}▏"), theme::accent_bold()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "/  /destinations  /destinations/<id>  /itinerary?destination=<id>",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "/accommodations  /budget-calculator",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter]go  [Esc]cancel", theme::neutral())),
    ];

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(popup_block("Go to"));
    f.render_widget(para, popup);
}

pub fn render_item_editor(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    day: &DayId,
    draft: &ItemDraft,
) {
    let popup = centered_rect(70, 50, area);
    f.render_widget(Clear, popup);

    let title = match app.itinerary.day(day) {
        Some(plan) => format!("Edit activity - {}", plan.title()),
        None => "Edit activity".to_string(),
    };

    let mut lines: Vec<Line> = vec![Line::from("")];
    for field in DraftField::ALL {
        let value = match field {
            DraftField::Time => draft.time_text.clone(),
            DraftField::Kind => format!("◂ {} ▸", draft.item.kind.label()),
            DraftField::Title => draft.item.title.clone(),
            DraftField::Location => draft.item.location.clone(),
            DraftField::Description => draft.item.description.clone(),
        };
        lines.push(field_line(field.label(), value, field == draft.field));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Time as HH:MM. Type field: any key cycles, Backspace goes back.",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        "[Tab/↓]next [Shift+Tab/↑]prev [Enter]save [Esc]cancel",
        theme::neutral(),
    )));

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(popup_block(&title));
    f.render_widget(para, popup);
}

pub fn render_day_date(f: &mut Frame, area: Rect, app: &AppState, day: &DayId, input: &str) {
    let popup = centered_rect(50, 25, area);
    f.render_widget(Clear, popup);

    let title = match app.itinerary.day(day) {
        Some(plan) => format!("Date for {}", plan.title()),
        None => "Date".to_string(),
    };

    let lines = vec![
        Line::from(""),
        field_line("Date", input.to_string(), true),
        Line::from(""),
        Line::from(Span::styled(
            "YYYY-MM-DD, empty to clear",
            theme::muted(),
        )),
        Line::from(Span::styled("[Enter]set  [Esc]cancel", theme::neutral())),
    ];

    f.render_widget(Paragraph::new(lines).block(popup_block(&title)), popup);
}

pub fn render_expense_form(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let draft = &app.budget.draft;
    let field = app.budget_view.field;
    let category = app
        .budget
        .category(&draft.category)
        .map_or_else(|| "Select category".to_string(), |c| c.name.clone());

    let lines = vec![
        Line::from(""),
        field_line(
            "Category",
            format!("◂ {category} ▸"),
            field == ExpenseField::Category,
        ),
        field_line(
            "Description",
            draft.description.clone(),
            field == ExpenseField::Description,
        ),
        field_line(
            "Amount",
            app.budget_view.amount_text.clone(),
            field == ExpenseField::Amount,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "All fields are required; the amount must be above zero.",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "[Tab/↑↓]field [h/l]category [Enter]add [Esc]cancel",
            theme::neutral(),
        )),
    ];

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(popup_block(&format!("Add expense ({})", app.budget.currency)));
    f.render_widget(para, popup);
}
