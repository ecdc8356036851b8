//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Renderers borrow it immutably; the input
//! handlers are the only writers.

use wanderlust_core::budget::BudgetCalculator;
use wanderlust_core::catalog::Catalog;
use wanderlust_core::domain::{Accommodation, CategoryId, DayId, Destination, ExpenseId};
use wanderlust_core::filter::{
    search_destinations, AccommodationFilter, DestinationFilter, PriceRange,
};
use wanderlust_core::itinerary::{ItemDraft, Itinerary};
use wanderlust_core::route::Route;
use wanderlust_core::settings::Settings;

/// Which numbered page is shown. Detail and not-found pages are reached
/// through routes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Destinations,
    Itinerary,
    Stays,
    Budget,
}

impl Page {
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Destinations => 1,
            Page::Itinerary => 2,
            Page::Stays => 3,
            Page::Budget => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Page::Home),
            1 => Some(Page::Destinations),
            2 => Some(Page::Itinerary),
            3 => Some(Page::Stays),
            4 => Some(Page::Budget),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Destinations => "Destinations",
            Page::Itinerary => "Itinerary",
            Page::Stays => "Stays",
            Page::Budget => "Budget",
        }
    }

    pub fn next(self) -> Page {
        Page::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Page::Home)
    }

    pub fn prev(self) -> Page {
        Page::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(Page::Home)
    }

    pub fn route(self) -> Route {
        match self {
            Page::Home => Route::Home,
            Page::Destinations => Route::Destinations,
            Page::Itinerary => Route::Itinerary { destination: None },
            Page::Stays => Route::Accommodations,
            Page::Budget => Route::BudgetCalculator,
        }
    }

    /// The page a route belongs to. A detail route counts as Destinations.
    pub fn of(route: &Route) -> Option<Page> {
        match route {
            Route::Home => Some(Page::Home),
            Route::Destinations | Route::DestinationDetail(_) => Some(Page::Destinations),
            Route::Itinerary { .. } => Some(Page::Itinerary),
            Route::Accommodations => Some(Page::Stays),
            Route::BudgetCalculator => Some(Page::Budget),
            Route::NotFound(_) => None,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Tabs on the destination detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Attractions,
    Accommodations,
    Experiences,
    PracticalInfo,
}

impl DetailTab {
    pub const ALL: [DetailTab; 5] = [
        DetailTab::Overview,
        DetailTab::Attractions,
        DetailTab::Accommodations,
        DetailTab::Experiences,
        DetailTab::PracticalInfo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Attractions => "Attractions",
            DetailTab::Accommodations => "Accommodations",
            DetailTab::Experiences => "Experiences",
            DetailTab::PracticalInfo => "Practical Info",
        }
    }

    fn position(self) -> usize {
        DetailTab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> DetailTab {
        DetailTab::ALL[(self.position() + 1) % DetailTab::ALL.len()]
    }

    pub fn prev(self) -> DetailTab {
        let n = DetailTab::ALL.len();
        DetailTab::ALL[(self.position() + n - 1) % n]
    }
}

/// A single-line text field that captures keys until Enter/Esc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    DestinationSearch,
    StaySearch,
    PickerQuery,
    TripName,
    BudgetDestination,
}

/// Field focus in the add-expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Description,
    Amount,
}

impl ExpenseField {
    pub fn next(self) -> ExpenseField {
        match self {
            ExpenseField::Category => ExpenseField::Description,
            ExpenseField::Description => ExpenseField::Amount,
            ExpenseField::Amount => ExpenseField::Category,
        }
    }

    pub fn prev(self) -> ExpenseField {
        match self {
            ExpenseField::Category => ExpenseField::Amount,
            ExpenseField::Description => ExpenseField::Category,
            ExpenseField::Amount => ExpenseField::Description,
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
    /// Free-form route entry, e.g. `/destinations/kyoto`.
    GoTo(String),
    /// Editing one itinerary item. The stored item is untouched until save.
    ItemEditor { day: DayId, draft: ItemDraft },
    /// `YYYY-MM-DD` entry for a day's date.
    DayDate { day: DayId, input: String },
    ExpenseForm,
}

#[derive(Debug, Default)]
pub struct HomeState {
    pub cursor: usize,
}

#[derive(Debug, Default)]
pub struct DestinationsState {
    pub filter: DestinationFilter,
    pub cursor: usize,
    /// Index into the tag vocabulary.
    pub tag_cursor: usize,
}

#[derive(Debug, Default)]
pub struct DetailState {
    pub tab: DetailTab,
}

#[derive(Debug, Default)]
pub struct PlannerState {
    pub day_cursor: usize,
    pub item_cursor: usize,
    pub picker_query: String,
    pub picker_cursor: usize,
}

#[derive(Debug, Default)]
pub struct StaysState {
    pub filter: AccommodationFilter,
    pub cursor: usize,
    /// Index into the accommodation type vocabulary.
    pub type_cursor: usize,
}

impl StaysState {
    /// Unfiltered stays with the price slider at `ceiling`.
    pub fn open(ceiling: u32) -> Self {
        Self {
            filter: unfiltered_stays(ceiling),
            ..Self::default()
        }
    }
}

fn unfiltered_stays(ceiling: u32) -> AccommodationFilter {
    AccommodationFilter {
        price: PriceRange {
            min: 0,
            max: ceiling,
        },
        ..AccommodationFilter::default()
    }
}

#[derive(Debug, Default)]
pub struct BudgetViewState {
    /// Flat index over every expense row.
    pub cursor: usize,
    pub field: ExpenseField,
    /// Raw amount text; parsed on submit.
    pub amount_text: String,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub route: Route,
    pub running: bool,

    // Data
    pub catalog: Catalog,
    pub settings: Settings,

    // Page states
    pub home: HomeState,
    pub destinations: DestinationsState,
    pub detail: DetailState,
    pub itinerary: Itinerary,
    pub planner: PlannerState,
    pub stays: StaysState,
    pub budget: BudgetCalculator,
    pub budget_view: BudgetViewState,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,
    pub editing: Option<TextTarget>,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let mut itinerary = Itinerary::new();
        itinerary.auto_renumber = settings.itinerary.auto_renumber;
        let budget = settings.new_budget();
        let stays = StaysState::open(settings.accommodations.price_ceiling);
        Self {
            route: Route::Home,
            running: true,
            catalog,
            settings,
            home: HomeState::default(),
            destinations: DestinationsState::default(),
            detail: DetailState::default(),
            itinerary,
            planner: PlannerState::default(),
            stays,
            budget,
            budget_view: BudgetViewState::default(),
            status_message: None,
            overlay: Overlay::None,
            editing: None,
        }
    }

    pub fn page(&self) -> Option<Page> {
        Page::of(&self.route)
    }

    /// Switch routes and apply what the target page does on entry.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.route, to = %route, "navigate");
        match &route {
            Route::DestinationDetail(_) => self.detail.tab = DetailTab::Overview,
            Route::Itinerary {
                destination: Some(id),
            } => self.preselect_destination(id.as_str()),
            _ => {}
        }
        self.editing = None;
        self.route = route;
    }

    fn preselect_destination(&mut self, id: &str) {
        if self.itinerary.days.is_empty() && self.itinerary.destination.is_none() {
            let auto_renumber = self.itinerary.auto_renumber;
            self.itinerary = Itinerary::for_destination(&self.catalog, Some(id));
            self.itinerary.auto_renumber = auto_renumber;
        } else if self.catalog.destination(id).is_some() {
            self.itinerary.select_destination(&self.catalog, id);
        }
        self.planner = PlannerState::default();
    }

    /// The destination behind a detail route, if it exists.
    pub fn current_destination(&self) -> Option<&Destination> {
        match &self.route {
            Route::DestinationDetail(id) => self.catalog.destination(id.as_str()),
            _ => None,
        }
    }

    pub fn visible_destinations(&self) -> Vec<&Destination> {
        self.destinations.filter.apply(&self.catalog.destinations)
    }

    pub fn visible_stays(&self) -> Vec<&Accommodation> {
        self.stays.filter.apply(&self.catalog.accommodations)
    }

    pub fn picker_results(&self) -> Vec<&Destination> {
        search_destinations(&self.catalog.destinations, &self.planner.picker_query)
    }

    pub fn selected_day(&self) -> Option<DayId> {
        self.itinerary
            .days
            .get(self.planner.day_cursor)
            .map(|d| d.id.clone())
    }

    /// Every expense in display order, as `(category, expense)` keys.
    pub fn budget_rows(&self) -> Vec<(CategoryId, ExpenseId)> {
        self.budget
            .categories
            .iter()
            .flat_map(|c| c.expenses.iter().map(move |e| (c.id.clone(), e.id.clone())))
            .collect()
    }

    /// Keep every list cursor inside its list after a mutation.
    pub fn clamp_cursors(&mut self) {
        fn clamp(cursor: &mut usize, len: usize) {
            *cursor = (*cursor).min(len.saturating_sub(1));
        }
        let featured = self.catalog.featured_destinations().len();
        clamp(&mut self.home.cursor, featured);
        let dests = self.visible_destinations().len();
        clamp(&mut self.destinations.cursor, dests);
        let stays = self.visible_stays().len();
        clamp(&mut self.stays.cursor, stays);
        let picks = self.picker_results().len();
        clamp(&mut self.planner.picker_cursor, picks);
        let days = self.itinerary.days.len();
        clamp(&mut self.planner.day_cursor, days);
        let items = self
            .itinerary
            .days
            .get(self.planner.day_cursor)
            .map_or(0, |d| d.items.len());
        clamp(&mut self.planner.item_cursor, items);
        let rows = self.budget_rows().len();
        clamp(&mut self.budget_view.cursor, rows);
    }

    /// Drop every stay filter; the price slider returns to the configured ceiling.
    pub fn reset_stay_filters(&mut self) {
        self.stays.filter = unfiltered_stays(self.settings.accommodations.price_ceiling);
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
