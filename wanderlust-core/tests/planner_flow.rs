//! End-to-end flows across catalog, routes, itinerary and budget.

use wanderlust_core::budget::{format_amount, format_percentage, ExpenseDraft};
use wanderlust_core::filter::{search_destinations, AccommodationFilter};
use wanderlust_core::itinerary::{ItemDraft, ItemKind};
use wanderlust_core::{Catalog, Itinerary, Route, Settings};

#[test]
fn detail_page_to_itinerary() {
    let catalog = Catalog::builtin();

    let Route::DestinationDetail(id) = Route::parse("/destinations/santorini") else {
        panic!("expected detail route");
    };
    let dest = catalog.destination(id.as_str()).expect("santorini in catalog");

    // "Add to itinerary" navigates with the destination preselected.
    let next = Route::Itinerary {
        destination: Some(dest.id.clone()),
    };
    assert_eq!(next.path(), "/itinerary?destination=santorini");

    let Route::Itinerary { destination } = Route::parse(&next.path()) else {
        panic!("expected itinerary route");
    };
    let mut trip = Itinerary::for_destination(&catalog, destination.as_ref().map(|d| d.as_str()));
    assert_eq!(trip.trip_name, "Trip to Santorini");

    let day1 = trip.add_day();
    let day2 = trip.add_day();
    let item = trip.add_item(&day2).unwrap();

    let mut draft = ItemDraft::begin(trip.day(&day2).unwrap().item(&item).unwrap());
    draft.item.title = "Ferry to Oia".into();
    draft.item.kind = ItemKind::Transport;
    draft.time_text = "08:30".into();
    trip.save_draft(&day2, draft);

    trip.move_day(&day2, &day1);
    assert_eq!(trip.days[0].id, day2);
    assert_eq!(trip.days[0].title(), "Day 2");
    assert_eq!(trip.days[0].items[0].title, "Ferry to Oia");
    assert_eq!(trip.days[0].items[0].time_label(), "08:30");
    assert_eq!(trip.item_count(), 1);
}

#[test]
fn unknown_detail_id_has_no_destination() {
    let catalog = Catalog::builtin();
    let Route::DestinationDetail(id) = Route::parse("/destinations/atlantis") else {
        panic!("expected detail route");
    };
    assert!(catalog.destination(id.as_str()).is_none());
}

#[test]
fn selector_search() {
    let catalog = Catalog::builtin();
    let hits: Vec<_> = search_destinations(&catalog.destinations, "ital")
        .into_iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(hits, vec!["rome"]);
    assert!(search_destinations(&catalog.destinations, "zzz").is_empty());
}

#[test]
fn stays_filter_with_settings_ceiling() {
    let catalog = Catalog::builtin();
    let settings = Settings::from_toml("[accommodations]\nprice_ceiling = 2000\n").unwrap();

    let mut filter = AccommodationFilter::default();
    let default_count = filter.apply(&catalog.accommodations).len();
    filter
        .price
        .nudge_max(20, settings.accommodations.price_step, settings.accommodations.price_ceiling);
    assert_eq!(filter.price.max, 2000);
    assert_eq!(filter.apply(&catalog.accommodations).len(), default_count + 1);
}

#[test]
fn budget_from_settings() {
    let settings = Settings::from_toml("[budget]\ntravelers = 4\ndays = 5\ncurrency = \"JPY\"\n").unwrap();
    let mut budget = settings.new_budget();
    assert_eq!(format_amount(budget.total()), "$2150.00");
    assert_eq!(format_amount(budget.per_person()), "$537.50");
    assert_eq!(format_amount(budget.per_day()), "$430.00");

    budget.draft = ExpenseDraft {
        category: "activities".into(),
        description: "Sumo tickets".into(),
        amount: 150.0,
    };
    budget.add_expense().unwrap();
    assert_eq!(budget.category_total("activities"), 350.0);
    assert_eq!(format_percentage(budget.category_percentage("activities")), "15.2%");
}
