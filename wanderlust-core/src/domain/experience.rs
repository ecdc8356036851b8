use serde::{Deserialize, Serialize};

use super::ids::{DestinationId, ExperienceId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub destination_id: DestinationId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub price: u32,
    pub duration: String,
    pub rating: f32,
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub avatar: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
    pub trip: String,
}

impl Testimonial {
    /// Filled and empty stars, e.g. `★★★★☆`.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_clamp_to_five() {
        let mut t = Testimonial {
            name: "A".into(),
            avatar: String::new(),
            rating: 4,
            text: String::new(),
            trip: String::new(),
        };
        assert_eq!(t.stars(), "★★★★☆");
        t.rating = 9;
        assert_eq!(t.stars(), "★★★★★");
    }
}
