//! Catalog domain types for Wanderlust

pub mod accommodation;
pub mod destination;
pub mod experience;
pub mod ids;

pub use accommodation::{Accommodation, ACCOMMODATION_TYPES};
pub use destination::{Destination, Highlight, DEFAULT_EMERGENCY_NUMBER};
pub use experience::{Experience, Testimonial};
pub use ids::{
    AccommodationId, CategoryId, DayId, DestinationId, ExpenseId, ExperienceId, ItemId,
};

/// Destination tags offered as filters, in display order.
pub const DESTINATION_TAGS: [&str; 8] = [
    "Beach",
    "Mountain",
    "Urban",
    "Cultural",
    "Adventure",
    "Relaxation",
    "Food",
    "Historical",
];
