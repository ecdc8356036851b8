//! Top-level UI layout — one page per route, status bar, overlays on top.

pub mod budget_page;
pub mod destinations_page;
pub mod detail_page;
pub mod help;
pub mod home_page;
pub mod itinerary_page;
pub mod not_found;
pub mod overlays;
pub mod stays_page;
pub mod status_bar;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use wanderlust_core::route::Route;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_page(f, main_area, app);
    status_bar::render(f, status_area, app);

    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::Help => help::render(f, main_area),
        Overlay::GoTo(input) => overlays::render_goto(f, main_area, input),
        Overlay::ItemEditor { day, draft } => {
            overlays::render_item_editor(f, main_area, app, day, draft)
        }
        Overlay::DayDate { day, input } => overlays::render_day_date(f, main_area, app, day, input),
        Overlay::ExpenseForm => overlays::render_expense_form(f, main_area, app),
        Overlay::None => {}
    }
}

/// Draw the page for the current route inside a titled border.
fn draw_page(f: &mut Frame, area: Rect, app: &AppState) {
    let title = match (app.page(), &app.route) {
        (_, Route::DestinationDetail(_)) => match app.current_destination() {
            Some(d) => format!(" {} ", d.display_name()),
            None => " Page Not Found ".to_string(),
        },
        (Some(page), _) => format!(" {} [{}] ", page.label(), page.index() + 1),
        (None, route) => format!(" {} ", route.title()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(title)
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.route {
        Route::Home => home_page::render(f, inner, app),
        Route::Destinations => destinations_page::render(f, inner, app),
        Route::DestinationDetail(_) => match app.current_destination() {
            Some(dest) => detail_page::render(f, inner, app, dest),
            None => not_found::render(f, inner),
        },
        Route::Itinerary { .. } => itinerary_page::render(f, inner, app),
        Route::Accommodations => stays_page::render(f, inner, app),
        Route::BudgetCalculator => budget_page::render(f, inner, app),
        Route::NotFound(_) => not_found::render(f, inner),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
