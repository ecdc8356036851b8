use serde::{Deserialize, Serialize};

use super::ids::{AccommodationId, DestinationId};

/// Accommodation types offered as filters, in display order.
pub const ACCOMMODATION_TYPES: [&str; 6] =
    ["Hotel", "Hostel", "Apartment", "Resort", "Villa", "Guesthouse"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: AccommodationId,
    pub destination_id: DestinationId,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    /// One of [`ACCOMMODATION_TYPES`].
    #[serde(rename = "type")]
    pub kind: String,
    pub price_per_night: u32,
    pub rating: f32,
    pub review_count: u32,
    pub amenities: Vec<String>,
}
