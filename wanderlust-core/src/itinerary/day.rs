use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DayId, ItemId};

use super::item::ItineraryItem;
use super::reorder::Keyed;

/// One day of a trip. Items keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub id: DayId,
    /// Display number. Assigned on creation; reordering does not change it.
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub items: Vec<ItineraryItem>,
}

impl DayPlan {
    pub fn new(id: DayId, day: u32) -> Self {
        Self {
            id,
            day,
            date: None,
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("Day {}", self.day)
    }

    pub fn date_label(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "Date not set".to_string(),
        }
    }

    pub fn item(&self, id: &ItemId) -> Option<&ItineraryItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn push_item(&mut self, item: ItineraryItem) {
        self.items.push(item);
    }

    /// Replace the item with `id` in place. No-op when absent.
    pub fn update_item(&mut self, id: &ItemId, replacement: ItineraryItem) {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(slot) => *slot = replacement,
            None => tracing::debug!(day = %self.id, item = %id, "update ignored: no such item"),
        }
    }

    /// Drop the item with `id`. No-op when absent.
    pub fn remove_item(&mut self, id: &ItemId) {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        if self.items.len() == before {
            tracing::debug!(day = %self.id, item = %id, "remove ignored: no such item");
        }
    }
}

impl Keyed for DayPlan {
    type Key = DayId;

    fn key(&self) -> &DayId {
        &self.id
    }
}
