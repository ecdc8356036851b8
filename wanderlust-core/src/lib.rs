//! Wanderlust Core — travel catalog, itinerary builder, budget calculator.
//!
//! This crate holds everything the front ends share:
//! - Domain records (destinations, stays, experiences, testimonials)
//! - The static catalog and its TOML loader
//! - Destination and accommodation filters
//! - Itinerary state with day reordering and item CRUD
//! - Budget categories, expenses and derived totals
//! - Route parsing and user settings
//!
//! Everything here is synchronous and owned by a single caller.

pub mod budget;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod itinerary;
pub mod route;
pub mod settings;

pub use budget::{BudgetCalculator, Currency};
pub use catalog::{Catalog, CatalogError};
pub use itinerary::Itinerary;
pub use route::Route;
pub use settings::{Settings, SettingsError};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: state containers can move to another thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Catalog>();
        require_sync::<Catalog>();
        require_send::<Itinerary>();
        require_sync::<Itinerary>();
        require_send::<BudgetCalculator>();
        require_sync::<BudgetCalculator>();
        require_send::<Settings>();
        require_sync::<Settings>();
        require_send::<Route>();
        require_sync::<Route>();
        require_send::<filter::DestinationFilter>();
        require_sync::<filter::AccommodationFilter>();
    }
}
