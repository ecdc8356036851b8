//! Keyboard input dispatch — overlays → text entry → global keys → page handlers.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use wanderlust_core::budget::{format_amount, ExpenseDraft};
use wanderlust_core::domain::{ACCOMMODATION_TYPES, DESTINATION_TAGS};
use wanderlust_core::itinerary::ItemDraft;
use wanderlust_core::route::Route;

use crate::app::{AppState, ExpenseField, Overlay, Page, TextTarget};

/// Handle one key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::GoTo(_) => {
            handle_goto_overlay(app, key);
            return;
        }
        Overlay::ItemEditor { .. } => {
            handle_item_editor(app, key);
            return;
        }
        Overlay::DayDate { .. } => {
            handle_day_date(app, key);
            return;
        }
        Overlay::ExpenseForm => {
            handle_expense_form(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Text entry captures everything until Enter/Esc.
    if let Some(target) = app.editing {
        handle_text_entry(app, target, key);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(page) = Page::from_index(index) {
                app.navigate(page.route());
            }
            return;
        }
        KeyCode::Tab => {
            let current = app.page().unwrap_or(Page::Home);
            let target = if key.modifiers.contains(KeyModifiers::SHIFT) {
                current.prev()
            } else {
                current.next()
            };
            app.navigate(target.route());
            return;
        }
        KeyCode::BackTab => {
            let current = app.page().unwrap_or(Page::Home);
            app.navigate(current.prev().route());
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('g') => {
            app.overlay = Overlay::GoTo(String::new());
            return;
        }
        _ => {}
    }

    // 4. Page-specific keys.
    match &app.route {
        Route::Home => handle_home_key(app, key),
        Route::Destinations => handle_destinations_key(app, key),
        Route::DestinationDetail(_) => handle_detail_key(app, key),
        Route::Itinerary { .. } => handle_itinerary_key(app, key),
        Route::Accommodations => handle_stays_key(app, key),
        Route::BudgetCalculator => handle_budget_key(app, key),
        Route::NotFound(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.navigate(Route::Home);
            }
        }
    }
    app.clamp_cursors();
}

fn move_cursor(cursor: &mut usize, len: usize, key: KeyCode) {
    match key {
        KeyCode::Char('j') | KeyCode::Down => {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *cursor = cursor.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_goto_overlay(app: &mut AppState, key: KeyEvent) {
    let Overlay::GoTo(input) = &mut app.overlay else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.overlay = Overlay::None,
        KeyCode::Enter => {
            let route = Route::parse(input);
            app.overlay = Overlay::None;
            if let Route::NotFound(path) = &route {
                app.set_warning(format!("No page at {path}"));
            }
            app.navigate(route);
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) => input.push(c),
        _ => {}
    }
}

fn handle_text_entry(app: &mut AppState, target: TextTarget, key: KeyEvent) {
    let buffer = match target {
        TextTarget::DestinationSearch => &mut app.destinations.filter.search,
        TextTarget::StaySearch => &mut app.stays.filter.search,
        TextTarget::PickerQuery => &mut app.planner.picker_query,
        TextTarget::TripName => &mut app.itinerary.trip_name,
        TextTarget::BudgetDestination => &mut app.budget.destination,
    };
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.editing = None;
            if target == TextTarget::TripName {
                app.itinerary.editing_name = false;
            }
        }
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char(c) => buffer.push(c),
        _ => {}
    }
    app.clamp_cursors();
}

// ── Home ────────────────────────────────────────────────────────────

fn handle_home_key(app: &mut AppState, key: KeyEvent) {
    let featured = app.catalog.featured_destinations().len();
    match key.code {
        KeyCode::Enter => {
            let id = app
                .catalog
                .featured_destinations()
                .get(app.home.cursor)
                .map(|d| d.id.clone());
            if let Some(id) = id {
                app.navigate(Route::DestinationDetail(id));
            }
        }
        KeyCode::Char('p') => app.navigate(Page::Itinerary.route()),
        code => move_cursor(&mut app.home.cursor, featured, code),
    }
}

// ── Destinations ────────────────────────────────────────────────────

fn handle_destinations_key(app: &mut AppState, key: KeyEvent) {
    let visible = app.visible_destinations().len();
    match key.code {
        KeyCode::Char('/') => app.editing = Some(TextTarget::DestinationSearch),
        KeyCode::Char('h') | KeyCode::Left => {
            app.destinations.tag_cursor = app.destinations.tag_cursor.saturating_sub(1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.destinations.tag_cursor + 1 < DESTINATION_TAGS.len() {
                app.destinations.tag_cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            let tag = DESTINATION_TAGS[app.destinations.tag_cursor];
            app.destinations.filter.toggle_tag(tag);
        }
        KeyCode::Char('c') => {
            app.destinations.filter = Default::default();
            app.set_status("Filters cleared");
        }
        KeyCode::Enter => {
            let id = app
                .visible_destinations()
                .get(app.destinations.cursor)
                .map(|d| d.id.clone());
            if let Some(id) = id {
                app.navigate(Route::DestinationDetail(id));
            }
        }
        code => move_cursor(&mut app.destinations.cursor, visible, code),
    }
}

// ── Destination detail ──────────────────────────────────────────────

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    if app.current_destination().is_none() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.navigate(Route::Home);
        }
        return;
    }
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.detail.tab = app.detail.tab.prev(),
        KeyCode::Char('l') | KeyCode::Right => app.detail.tab = app.detail.tab.next(),
        KeyCode::Char('a') => {
            if let Some(dest) = app.current_destination() {
                let id = dest.id.clone();
                let name = dest.name.clone();
                app.navigate(Route::Itinerary {
                    destination: Some(id),
                });
                app.set_status(format!("Planning a trip to {name}"));
            }
        }
        KeyCode::Char('s') => {
            if let Some(id) = app.current_destination().map(|d| d.id.clone()) {
                app.reset_stay_filters();
                app.stays.filter.destination = Some(id);
                app.navigate(Route::Accommodations);
            }
        }
        KeyCode::Esc | KeyCode::Backspace => app.navigate(Route::Destinations),
        _ => {}
    }
}

// ── Itinerary ───────────────────────────────────────────────────────

/// Destination picker, open over the day list. Typing starts with `/`.
fn handle_picker(app: &mut AppState, key: KeyEvent) {
    let results = app.picker_results().len();
    match key.code {
        KeyCode::Char('/') => app.editing = Some(TextTarget::PickerQuery),
        KeyCode::Esc => app.itinerary.show_selector = false,
        KeyCode::Enter => {
            let id = app
                .picker_results()
                .get(app.planner.picker_cursor)
                .map(|d| d.id.clone());
            if let Some(id) = id {
                app.itinerary.select_destination(&app.catalog, id.as_str());
                app.planner.picker_query.clear();
                app.planner.picker_cursor = 0;
            }
        }
        KeyCode::Backspace => {
            app.planner.picker_query.pop();
        }
        code => move_cursor(&mut app.planner.picker_cursor, results, code),
    }
}

fn handle_itinerary_key(app: &mut AppState, key: KeyEvent) {
    if app.itinerary.show_selector {
        handle_picker(app, key);
        return;
    }
    let day_count = app.itinerary.days.len();
    let selected = app.selected_day();
    match key.code {
        KeyCode::Char('c') => app.itinerary.show_selector = true,
        KeyCode::Char('r') => {
            app.itinerary.editing_name = true;
            app.editing = Some(TextTarget::TripName);
        }
        KeyCode::Char('d') => {
            app.itinerary.add_day();
            app.planner.day_cursor = app.itinerary.days.len() - 1;
            app.planner.item_cursor = 0;
        }
        KeyCode::Char('D') => {
            if let Some(day) = selected {
                let title = app.itinerary.day(&day).map(|d| d.title()).unwrap_or_default();
                app.itinerary.remove_day(&day);
                app.set_status(format!("Removed {title}"));
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.planner.day_cursor = app.planner.day_cursor.saturating_sub(1);
            app.planner.item_cursor = 0;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.planner.day_cursor + 1 < day_count {
                app.planner.day_cursor += 1;
                app.planner.item_cursor = 0;
            }
        }
        KeyCode::Char('H') | KeyCode::Char('L') => {
            let forward = key.code == KeyCode::Char('L');
            let cursor = app.planner.day_cursor;
            let target = if forward {
                cursor + 1
            } else {
                cursor.wrapping_sub(1)
            };
            if let (Some(from), Some(to)) = (
                app.itinerary.days.get(cursor).map(|d| d.id.clone()),
                app.itinerary.days.get(target).map(|d| d.id.clone()),
            ) {
                app.itinerary.move_day(&from, &to);
                app.planner.day_cursor = target;
            }
        }
        KeyCode::Char('n') => {
            app.itinerary.renumber_days();
            app.set_status("Days renumbered");
        }
        KeyCode::Char('t') => {
            if let Some(day) = selected {
                let input = app
                    .itinerary
                    .day(&day)
                    .and_then(|d| d.date)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                app.overlay = Overlay::DayDate { day, input };
            }
        }
        KeyCode::Char('a') => {
            if let Some(day) = selected {
                if app.itinerary.add_item(&day).is_some() {
                    let items = app.itinerary.day(&day).map_or(0, |d| d.items.len());
                    app.planner.item_cursor = items.saturating_sub(1);
                }
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(day) = selected {
                let item = app
                    .itinerary
                    .day(&day)
                    .and_then(|d| d.items.get(app.planner.item_cursor));
                if let Some(item) = item {
                    let draft = ItemDraft::begin(item);
                    app.overlay = Overlay::ItemEditor { day, draft };
                }
            }
        }
        KeyCode::Char('x') => {
            if let Some(day) = selected {
                let item_id = app
                    .itinerary
                    .day(&day)
                    .and_then(|d| d.items.get(app.planner.item_cursor))
                    .map(|i| i.id.clone());
                if let Some(item_id) = item_id {
                    app.itinerary.remove_item(&day, &item_id);
                }
            }
        }
        code => {
            let items = app
                .itinerary
                .days
                .get(app.planner.day_cursor)
                .map_or(0, |d| d.items.len());
            move_cursor(&mut app.planner.item_cursor, items, code);
        }
    }
}

fn handle_item_editor(app: &mut AppState, key: KeyEvent) {
    let Overlay::ItemEditor { draft, .. } = &mut app.overlay else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.set_status("Edit cancelled");
        }
        KeyCode::Enter => {
            if let Overlay::ItemEditor { day, draft } =
                std::mem::replace(&mut app.overlay, Overlay::None)
            {
                app.itinerary.save_draft(&day, draft);
                app.set_status("Item saved");
            }
        }
        KeyCode::Tab | KeyCode::Down => draft.next_field(),
        KeyCode::BackTab | KeyCode::Up => draft.prev_field(),
        KeyCode::Backspace => draft.pop_char(),
        KeyCode::Char(c) => draft.push_char(c),
        _ => {}
    }
}

fn handle_day_date(app: &mut AppState, key: KeyEvent) {
    let Overlay::DayDate { input, .. } = &mut app.overlay else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.overlay = Overlay::None,
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) => input.push(c),
        KeyCode::Enter => {
            let Overlay::DayDate { day, input } =
                std::mem::replace(&mut app.overlay, Overlay::None)
            else {
                return;
            };
            let text = input.trim();
            if text.is_empty() {
                app.itinerary.set_day_date(&day, None);
                return;
            }
            match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                Ok(date) => app.itinerary.set_day_date(&day, Some(date)),
                Err(_) => app.set_warning(format!("Not a date: {text} (use YYYY-MM-DD)")),
            }
        }
        _ => {}
    }
}

// ── Stays ───────────────────────────────────────────────────────────

fn handle_stays_key(app: &mut AppState, key: KeyEvent) {
    let visible = app.visible_stays().len();
    let step = app.settings.accommodations.price_step;
    let ceiling = app.settings.accommodations.price_ceiling;
    match key.code {
        KeyCode::Char('/') => app.editing = Some(TextTarget::StaySearch),
        KeyCode::Char(']') => app.stays.filter.price.nudge_max(1, step, ceiling),
        KeyCode::Char('[') => app.stays.filter.price.nudge_max(-1, step, ceiling),
        KeyCode::Char('h') | KeyCode::Left => {
            app.stays.type_cursor = app.stays.type_cursor.saturating_sub(1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.stays.type_cursor + 1 < ACCOMMODATION_TYPES.len() {
                app.stays.type_cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            let kind = ACCOMMODATION_TYPES[app.stays.type_cursor];
            app.stays.filter.toggle_type(kind);
        }
        KeyCode::Char('d') => {
            // Cycle: all destinations → each destination in catalog order → all.
            let ids: Vec<_> = app.catalog.destinations.iter().map(|d| d.id.clone()).collect();
            let next = match &app.stays.filter.destination {
                None => ids.first().cloned(),
                Some(current) => ids
                    .iter()
                    .position(|id| id == current)
                    .and_then(|i| ids.get(i + 1).cloned()),
            };
            app.stays.filter.destination = next;
        }
        KeyCode::Char('c') => {
            app.reset_stay_filters();
            app.set_status("Filters cleared");
        }
        code => move_cursor(&mut app.stays.cursor, visible, code),
    }
}

// ── Budget ──────────────────────────────────────────────────────────

fn handle_budget_key(app: &mut AppState, key: KeyEvent) {
    let rows = app.budget_rows();
    match key.code {
        KeyCode::Char('a') => {
            app.budget_view.field = ExpenseField::Category;
            app.budget_view.amount_text.clear();
            app.overlay = Overlay::ExpenseForm;
        }
        KeyCode::Char('x') => {
            if let Some((category, expense)) = rows.get(app.budget_view.cursor) {
                app.budget.remove_expense(category.as_str(), expense);
            }
        }
        KeyCode::Char('+') => app.budget.set_travelers(app.budget.travelers as i64 + 1),
        KeyCode::Char('-') => app.budget.set_travelers(app.budget.travelers as i64 - 1),
        KeyCode::Char('>') => app.budget.set_days(app.budget.days as i64 + 1),
        KeyCode::Char('<') => app.budget.set_days(app.budget.days as i64 - 1),
        KeyCode::Char('c') => app.budget.currency = app.budget.currency.next(),
        KeyCode::Char('e') => app.editing = Some(TextTarget::BudgetDestination),
        code => move_cursor(&mut app.budget_view.cursor, rows.len(), code),
    }
}

fn handle_expense_form(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.budget.draft = ExpenseDraft::default();
        }
        KeyCode::Tab | KeyCode::Down => app.budget_view.field = app.budget_view.field.next(),
        KeyCode::BackTab | KeyCode::Up => app.budget_view.field = app.budget_view.field.prev(),
        KeyCode::Enter => {
            app.budget.draft.amount = app.budget_view.amount_text.trim().parse().unwrap_or(0.0);
            let amount = app.budget.draft.amount;
            match app.budget.add_expense() {
                Some(_) => {
                    app.overlay = Overlay::None;
                    app.budget_view.amount_text.clear();
                    app.set_status(format!("Added {}", format_amount(amount)));
                }
                None => app.set_warning("Choose a category, describe it and enter an amount above 0"),
            }
        }
        _ => match app.budget_view.field {
            ExpenseField::Category => cycle_category(app, key.code),
            ExpenseField::Description => edit_text(&mut app.budget.draft.description, key.code),
            ExpenseField::Amount => {
                if let KeyCode::Char(c) = key.code {
                    if !(c.is_ascii_digit() || c == '.') {
                        return;
                    }
                }
                edit_text(&mut app.budget_view.amount_text, key.code)
            }
        },
    }
}

fn cycle_category(app: &mut AppState, code: KeyCode) {
    let ids: Vec<String> = app
        .budget
        .categories
        .iter()
        .map(|c| c.id.as_str().to_string())
        .collect();
    if ids.is_empty() {
        return;
    }
    let current = ids.iter().position(|id| *id == app.budget.draft.category);
    let next = match (code, current) {
        (KeyCode::Char('h') | KeyCode::Left, Some(i)) => (i + ids.len() - 1) % ids.len(),
        (KeyCode::Char('h') | KeyCode::Left, None) => ids.len() - 1,
        (KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' '), Some(i)) => (i + 1) % ids.len(),
        (KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' '), None) => 0,
        _ => return,
    };
    app.budget.draft.category = ids[next].clone();
}

fn edit_text(buffer: &mut String, code: KeyCode) {
    match code {
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char(c) => buffer.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wanderlust_core::catalog::Catalog;
    use wanderlust_core::settings::Settings;

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

    #[test]
    fn quit_on_q() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn digits_switch_pages() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.route, Route::BudgetCalculator);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.route, Route::Destinations);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.page(), Some(Page::Itinerary));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.route, Route::Destinations);
    }

    #[test]
    fn welcome_swallows_first_key() {
        let mut app = app();
        app.overlay = Overlay::Welcome;
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn search_mode_captures_q() {
        let mut app = app();
        app.navigate(Route::Destinations);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "quito");
        assert!(app.running);
        assert_eq!(app.destinations.filter.search, "quito");
        press(&mut app, KeyCode::Enter);
        assert!(app.editing.is_none());
        assert!(app.visible_destinations().is_empty());
    }

    #[test]
    fn tag_toggle_filters() {
        let mut app = app();
        app.navigate(Route::Destinations);
        // Cursor to "Adventure" (index 4) and toggle it.
        for _ in 0..4 {
            press(&mut app, KeyCode::Char('l'));
        }
        press(&mut app, KeyCode::Char(' '));
        let ids: Vec<_> = app.visible_destinations().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["capetown", "rio"]);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.visible_destinations().len(), 12);
    }

    #[test]
    fn goto_route() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        type_text(&mut app, "/destinations/kyoto");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::DestinationDetail("kyoto".into()));

        press(&mut app, KeyCode::Char('g'));
        type_text(&mut app, "/nope");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::NotFound("/nope".into()));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn detail_add_to_itinerary() {
        let mut app = app();
        app.navigate(Route::DestinationDetail("bali".into()));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.detail.tab, crate::app::DetailTab::Attractions);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(
            app.route,
            Route::Itinerary {
                destination: Some("bali".into())
            }
        );
        assert_eq!(app.itinerary.trip_name, "Trip to Bali");
    }

    #[test]
    fn picker_search_and_select() {
        let mut app = app();
        app.navigate(Page::Itinerary.route());
        assert!(app.itinerary.show_selector);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "japan");
        assert_eq!(app.picker_results().len(), 2);
        press(&mut app, KeyCode::Enter);
        assert!(app.editing.is_none());
        assert!(app.itinerary.show_selector);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.itinerary.trip_name, "Trip to Tokyo");
        assert!(!app.itinerary.show_selector);
    }

    #[test]
    fn global_keys_pass_through_open_picker() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert!(app.itinerary.show_selector);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.route, Route::Accommodations);
        assert!(app.planner.picker_query.is_empty());

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn picker_query_captures_digits_while_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "q1");
        assert!(app.running);
        assert_eq!(app.page(), Some(Page::Itinerary));
        assert_eq!(app.planner.picker_query, "q1");
    }

    #[test]
    fn build_and_reorder_days() {
        let mut app = app();
        app.navigate(Route::Itinerary {
            destination: Some("rome".into()),
        });
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.itinerary.days[1].items.len(), 1);

        // Move day 2 to the front.
        press(&mut app, KeyCode::Char('H'));
        let ids: Vec<_> = app.itinerary.days.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["day-2", "day-1"]);
        assert_eq!(app.planner.day_cursor, 0);
        assert_eq!(app.itinerary.days[0].day, 2);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.itinerary.days[0].day, 1);
    }

    #[test]
    fn edit_item_save_and_cancel() {
        let mut app = app();
        app.navigate(Route::Itinerary {
            destination: Some("paris".into()),
        });
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Char('e'));
        // Time field first: replace 09:00 with 10:30.
        for _ in 0..5 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "10:30");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.itinerary.days[0].items[0].time_label(), "10:30");

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.itinerary.days[0].items[0].title, "New Activity");
    }

    #[test]
    fn set_day_date() {
        let mut app = app();
        app.navigate(Route::Itinerary {
            destination: Some("paris".into()),
        });
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('t'));
        type_text(&mut app, "2025-04-01");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.itinerary.days[0].date_label(), "2025-04-01");

        press(&mut app, KeyCode::Char('t'));
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.itinerary.days[0].date_label(), "2025-04-01");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn expense_form_rejects_then_accepts() {
        let mut app = app();
        app.navigate(Route::BudgetCalculator);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::ExpenseForm);
        assert_eq!(app.budget.total(), 2150.0);

        // Category: first entry.
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Train");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "4a5.5");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.budget.category_total("transportation"), 845.5);
        assert_eq!(app.budget.draft, ExpenseDraft::default());
    }

    #[test]
    fn budget_steppers_floor_at_one() {
        let mut app = app();
        app.navigate(Route::BudgetCalculator);
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.budget.travelers, 1);
        press(&mut app, KeyCode::Char('>'));
        assert_eq!(app.budget.days, 8);
    }

    #[test]
    fn stays_price_slider_respects_settings() {
        let mut app = app();
        app.navigate(Route::Accommodations);
        let before = app.visible_stays().len();
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.stays.filter.price.max, 1000);
        for _ in 0..4 {
            press(&mut app, KeyCode::Char('['));
        }
        assert_eq!(app.stays.filter.price.max, 800);
        assert!(app.visible_stays().len() <= before);
    }

    #[test]
    fn stays_slider_starts_and_resets_at_configured_ceiling() {
        let mut settings = Settings::default();
        settings.accommodations.price_ceiling = 2000;
        settings.accommodations.price_step = 100;
        let mut app = AppState::new(Catalog::builtin(), settings);
        assert_eq!(app.stays.filter.price.max, 2000);

        app.navigate(Route::Accommodations);
        let all = app.visible_stays().len();
        assert_eq!(all, app.catalog.accommodations.len());
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.stays.filter.price.max, 1900);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.stays.filter.price.max, 2000);

        app.navigate(Route::DestinationDetail("bali".into()));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.route, Route::Accommodations);
        assert_eq!(app.stays.filter.price.max, 2000);
        assert_eq!(app.stays.filter.destination.as_ref().map(|d| d.as_str()), Some("bali"));
    }
}
