//! Drives the app through key events and renders each page into a
//! `TestBackend`, checking what ends up on screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use wanderlust_core::catalog::Catalog;
use wanderlust_core::route::Route;
use wanderlust_core::settings::Settings;
use wanderlust_tui::app::{AppState, Overlay};
use wanderlust_tui::{handle_key, ui};

fn app() -> AppState {
    AppState::new(Catalog::builtin(), Settings::default())
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::from(code));
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render one frame and return the screen as text, one line per row.
fn screen(app: &AppState) -> String {
    let backend = TestBackend::new(140, 45);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn welcome_then_home() {
    let mut app = app();
    app.overlay = Overlay::Welcome;
    assert!(screen(&app).contains("Press any key to start"));

    press(&mut app, KeyCode::Enter);
    let s = screen(&app);
    assert!(s.contains("Discover Your Next Adventure"));
    assert!(s.contains("Featured Destinations"));
    assert!(s.contains("Bali"));
}

#[test]
fn every_page_renders() {
    let mut app = app();
    for (key, expected) in [
        ('1', "Featured Destinations"),
        ('2', "Paris"),
        ('3', "Where are you going?"),
        ('4', "properties found"),
        ('5', "Budget Summary"),
    ] {
        press(&mut app, KeyCode::Char(key));
        let s = screen(&app);
        assert!(s.contains(expected), "page {key} missing {expected:?}");
        assert!(s.contains(&app.route.path()));
    }
}

#[test]
fn unknown_destination_shows_not_found() {
    let mut app = app();
    press(&mut app, KeyCode::Char('g'));
    type_text(&mut app, "/destinations/atlantis");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route, Route::DestinationDetail("atlantis".into()));
    let s = screen(&app);
    assert!(s.contains("Lost in Adventure?"));
    assert!(s.contains("Page Not Found"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route, Route::Home);
}

#[test]
fn unknown_path_shows_not_found() {
    let mut app = app();
    press(&mut app, KeyCode::Char('g'));
    type_text(&mut app, "/nowhere");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route, Route::NotFound("/nowhere".into()));
    assert!(screen(&app).contains("Lost in Adventure?"));
}

#[test]
fn plan_trip_from_detail_page() {
    let mut app = app();
    app.navigate(Route::DestinationDetail("santorini".into()));
    assert!(screen(&app).contains("Santorini"));

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(
        app.route,
        Route::Itinerary {
            destination: Some("santorini".into())
        }
    );

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('a'));
    let s = screen(&app);
    assert!(s.contains("Santorini, Greece"));
    assert!(s.contains("Day 1"));
    assert!(s.contains("New Activity"));
}

#[test]
fn item_editor_and_help_overlays_render() {
    let mut app = app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Esc);
    assert!(screen(&app).contains("Your itinerary is empty."));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('e'));
    let s = screen(&app);
    assert!(s.contains("Edit activity"));
    assert!(s.contains("Location"));
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('?'));
    let s = screen(&app);
    assert!(s.contains("Global Navigation"));
    assert!(s.contains("Renumber days by position"));
}

#[test]
fn budget_expense_shows_in_summary() {
    let mut app = app();
    press(&mut app, KeyCode::Char('5'));
    assert!(screen(&app).contains("$2150.00"));

    press(&mut app, KeyCode::Char('a'));
    assert!(screen(&app).contains("Add expense"));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Ferry");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "50");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.overlay, Overlay::None);
    let s = screen(&app);
    assert!(s.contains("Ferry"));
    assert!(s.contains("$2200.00"));
}
