use serde::{Deserialize, Serialize};

use super::ids::DestinationId;

/// Fallback shown when a destination carries no emergency number.
pub const DEFAULT_EMERGENCY_NUMBER: &str = "911";

/// A named point of interest shown on the destination page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

impl Highlight {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub best_time_to_visit: String,
    /// Free-form daily spend hint, e.g. `$50-100 per day`.
    pub budget: String,
    pub recommended_stay: String,
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub emergency_number: String,
}

impl Destination {
    /// `Name, Country` as used in pickers and headers.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn emergency_number(&self) -> &str {
        if self.emergency_number.is_empty() {
            DEFAULT_EMERGENCY_NUMBER
        } else {
            &self.emergency_number
        }
    }

    /// The overview paragraph shown on the detail page.
    pub fn overview_blurb(&self) -> String {
        format!(
            "{} is known for its {} experiences. Whether you're looking for adventure, \
             relaxation, or cultural immersion, {} offers something for every type of traveler.",
            self.country,
            self.tags.join(", "),
            self.name
        )
    }
}
