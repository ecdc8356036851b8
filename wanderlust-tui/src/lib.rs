//! Wanderlust TUI — terminal trip planner.
//!
//! One page per route:
//! 1. Home — featured destinations
//! 2. Destinations — search and tag filters, detail pages with tabs
//! 3. Itinerary — day-by-day planner with reorderable days
//! 4. Stays — accommodation search with price slider and type filters
//! 5. Budget — expenses by category with per-person and per-day figures

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
