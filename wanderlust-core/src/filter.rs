//! Catalog filters — pure predicates, linear scan, catalog order preserved.
//!
//! Every filter is an AND of independent checks:
//! - case-insensitive substring search over name-like fields
//! - tag/type membership (empty selection matches everything)
//! - inclusive price range (accommodations only)

use serde::{Deserialize, Serialize};

use crate::domain::{Accommodation, Destination, DestinationId};

/// Upper bound of the price slider.
pub const PRICE_CEILING: u32 = 1000;
/// Price slider step.
pub const PRICE_STEP: u32 = 50;

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Toggle an entry in an ordered selection: remove if present, append otherwise.
pub fn toggle_selection(selection: &mut Vec<String>, value: &str) {
    if let Some(pos) = selection.iter().position(|v| v == value) {
        selection.remove(pos);
    } else {
        selection.push(value.to_string());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationFilter {
    pub search: String,
    pub tags: Vec<String>,
}

impl DestinationFilter {
    pub fn matches(&self, destination: &Destination) -> bool {
        let search_match = contains_ignore_case(&destination.name, &self.search)
            || contains_ignore_case(&destination.country, &self.search);
        let tag_match =
            self.tags.is_empty() || destination.tags.iter().any(|t| self.tags.contains(t));
        search_match && tag_match
    }

    pub fn apply<'a>(&self, destinations: &'a [Destination]) -> Vec<&'a Destination> {
        destinations.iter().filter(|d| self.matches(d)).collect()
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle_selection(&mut self.tags, tag);
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.tags.is_empty()
    }
}

/// Inclusive `[min, max]` nightly price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: PRICE_CEILING,
        }
    }
}

impl PriceRange {
    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }

    /// Move the upper bound by `steps` slider steps, clamped to `[min, ceiling]`.
    pub fn nudge_max(&mut self, steps: i32, step: u32, ceiling: u32) {
        let delta = steps.unsigned_abs().saturating_mul(step);
        self.max = if steps >= 0 {
            self.max.saturating_add(delta).min(ceiling)
        } else {
            self.max.saturating_sub(delta).max(self.min)
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationFilter {
    pub search: String,
    /// `None` means all destinations.
    pub destination: Option<DestinationId>,
    pub price: PriceRange,
    pub types: Vec<String>,
}

impl AccommodationFilter {
    pub fn matches(&self, accommodation: &Accommodation) -> bool {
        let search_match = contains_ignore_case(&accommodation.name, &self.search)
            || contains_ignore_case(&accommodation.location, &self.search);
        let destination_match = self
            .destination
            .as_ref()
            .map_or(true, |id| &accommodation.destination_id == id);
        let price_match = self.price.contains(accommodation.price_per_night);
        let type_match = self.types.is_empty() || self.types.contains(&accommodation.kind);
        search_match && destination_match && price_match && type_match
    }

    pub fn apply<'a>(&self, accommodations: &'a [Accommodation]) -> Vec<&'a Accommodation> {
        accommodations.iter().filter(|a| self.matches(a)).collect()
    }

    pub fn toggle_type(&mut self, kind: &str) {
        toggle_selection(&mut self.types, kind);
    }
}

/// Destinations whose name or country contains the query. Used by the trip picker.
pub fn search_destinations<'a>(destinations: &'a [Destination], query: &str) -> Vec<&'a Destination> {
    destinations
        .iter()
        .filter(|d| contains_ignore_case(&d.name, query) || contains_ignore_case(&d.country, query))
        .collect()
}
