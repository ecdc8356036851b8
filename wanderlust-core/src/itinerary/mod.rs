//! Itinerary builder — ordered day plans, each with ordered items.
//!
//! All mutations are synchronous and total: a missing day or item id turns
//! the operation into a silent no-op. Nothing is returned as an error.
//!
//! Day numbers are assigned once (`len + 1` at creation) and are not
//! re-derived after remove or reorder unless `auto_renumber` is set or
//! [`Itinerary::renumber_days`] is called.

pub mod day;
pub mod item;
pub mod reorder;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::{DayId, DestinationId, ItemId};

pub use day::DayPlan;
pub use item::{DraftField, ItemDraft, ItemKind, ItineraryItem};
pub use reorder::{move_element, Keyed};

pub const DEFAULT_TRIP_NAME: &str = "My Trip";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub trip_name: String,
    pub destination: Option<DestinationId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub days: Vec<DayPlan>,
    /// Whether the destination picker is shown instead of the day list.
    pub show_selector: bool,
    /// Whether the trip name is being edited.
    pub editing_name: bool,
    /// Re-derive day numbers from position after every structural change.
    pub auto_renumber: bool,
    next_item_seq: u64,
}

impl Default for Itinerary {
    fn default() -> Self {
        Self::new()
    }
}

impl Itinerary {
    pub fn new() -> Self {
        Self {
            trip_name: DEFAULT_TRIP_NAME.to_string(),
            destination: None,
            start_date: None,
            end_date: None,
            days: Vec::new(),
            show_selector: true,
            editing_name: false,
            auto_renumber: false,
            next_item_seq: 1,
        }
    }

    /// Start a trip, optionally preselecting a destination (the
    /// `?destination=` query of the itinerary route). An unknown id is
    /// ignored and the picker stays open.
    pub fn for_destination(catalog: &Catalog, destination_id: Option<&str>) -> Self {
        let mut itinerary = Self::new();
        if let Some(dest) = destination_id.and_then(|id| catalog.destination(id)) {
            itinerary.destination = Some(dest.id.clone());
            itinerary.trip_name = format!("Trip to {}", dest.name);
            itinerary.show_selector = false;
        }
        itinerary
    }

    /// Pick the trip destination and close the picker. The trip is renamed
    /// only when the id resolves.
    pub fn select_destination(&mut self, catalog: &Catalog, id: &str) {
        self.destination = Some(DestinationId::from(id));
        match catalog.destination(id) {
            Some(dest) => self.trip_name = format!("Trip to {}", dest.name),
            None => tracing::debug!(destination = id, "selected destination not in catalog"),
        }
        self.show_selector = false;
    }

    /// `N day` / `N days`
    pub fn duration_label(&self) -> String {
        let n = self.days.len();
        format!("{n} {}", if n == 1 { "day" } else { "days" })
    }

    pub fn day(&self, id: &DayId) -> Option<&DayPlan> {
        self.days.iter().find(|d| &d.id == id)
    }

    pub fn day_index(&self, id: &DayId) -> Option<usize> {
        self.days.iter().position(|d| &d.id == id)
    }

    fn day_mut(&mut self, id: &DayId) -> Option<&mut DayPlan> {
        let found = self.days.iter_mut().find(|d| &d.id == id);
        if found.is_none() {
            tracing::debug!(day = %id, "ignored: no such day");
        }
        found
    }

    /// Append a day numbered `len + 1`. Its id is `day-<n>` with `n` bumped
    /// past any id still in use, so ids stay unique after removals.
    pub fn add_day(&mut self) -> DayId {
        let number = self.days.len() as u32 + 1;
        let mut n = number;
        let id = loop {
            let candidate = DayId::new(format!("day-{n}"));
            if self.day(&candidate).is_none() {
                break candidate;
            }
            n += 1;
        };
        self.days.push(DayPlan::new(id.clone(), number));
        tracing::debug!(day = %id, number, "day added");
        self.after_structural_change();
        id
    }

    pub fn remove_day(&mut self, id: &DayId) {
        let before = self.days.len();
        self.days.retain(|d| &d.id != id);
        if self.days.len() == before {
            tracing::debug!(day = %id, "remove ignored: no such day");
            return;
        }
        self.after_structural_change();
    }

    /// Drag-end: move day `from` into the slot held by `to`.
    pub fn move_day(&mut self, from: &DayId, to: &DayId) {
        let days = std::mem::take(&mut self.days);
        self.days = move_element(days, from, to);
        self.after_structural_change();
    }

    pub fn set_day_date(&mut self, id: &DayId, date: Option<NaiveDate>) {
        if let Some(day) = self.day_mut(id) {
            day.date = date;
        }
    }

    /// Append a placeholder item to a day. Returns the new id, or `None`
    /// when the day does not exist.
    pub fn add_item(&mut self, day_id: &DayId) -> Option<ItemId> {
        let item_id = ItemId::new(format!("item-{}", self.next_item_seq));
        let day = self.day_mut(day_id)?;
        day.push_item(ItineraryItem::placeholder(item_id.clone()));
        self.next_item_seq += 1;
        Some(item_id)
    }

    pub fn update_item(&mut self, day_id: &DayId, item_id: &ItemId, replacement: ItineraryItem) {
        if let Some(day) = self.day_mut(day_id) {
            day.update_item(item_id, replacement);
        }
    }

    pub fn remove_item(&mut self, day_id: &DayId, item_id: &ItemId) {
        if let Some(day) = self.day_mut(day_id) {
            day.remove_item(item_id);
        }
    }

    /// Commit an edit draft back into its day.
    pub fn save_draft(&mut self, day_id: &DayId, draft: ItemDraft) {
        let item_id = draft.item_id().clone();
        self.update_item(day_id, &item_id, draft.save());
    }

    /// Set every day's number to its 1-based position.
    pub fn renumber_days(&mut self) {
        for (i, day) in self.days.iter_mut().enumerate() {
            day.day = i as u32 + 1;
        }
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|d| d.items.len()).sum()
    }

    fn after_structural_change(&mut self) {
        if self.auto_renumber {
            self.renumber_days();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_ids(it: &Itinerary) -> Vec<&str> {
        it.days.iter().map(|d| d.id.as_str()).collect()
    }

    fn numbers(it: &Itinerary) -> Vec<u32> {
        it.days.iter().map(|d| d.day).collect()
    }

    #[test]
    fn new_trip_shows_picker() {
        let it = Itinerary::new();
        assert_eq!(it.trip_name, "My Trip");
        assert!(it.show_selector);
        assert_eq!(it.duration_label(), "0 days");
    }

    #[test]
    fn preselected_destination_names_trip() {
        let catalog = Catalog::builtin();
        let it = Itinerary::for_destination(&catalog, Some("kyoto"));
        assert_eq!(it.trip_name, "Trip to Kyoto");
        assert_eq!(it.destination.as_ref().map(|d| d.as_str()), Some("kyoto"));
        assert!(!it.show_selector);

        let it = Itinerary::for_destination(&catalog, Some("atlantis"));
        assert_eq!(it.trip_name, "My Trip");
        assert!(it.show_selector);
        assert!(it.destination.is_none());
    }

    #[test]
    fn select_destination_closes_picker() {
        let catalog = Catalog::builtin();
        let mut it = Itinerary::new();
        it.select_destination(&catalog, "rio");
        assert_eq!(it.trip_name, "Trip to Rio de Janeiro");
        assert!(!it.show_selector);
    }

    #[test]
    fn add_day_numbers_by_length() {
        let mut it = Itinerary::new();
        it.add_day();
        it.add_day();
        assert_eq!(day_ids(&it), vec!["day-1", "day-2"]);
        assert_eq!(numbers(&it), vec![1, 2]);
        assert_eq!(it.duration_label(), "2 days");
        it.remove_day(&DayId::from("day-2"));
        assert_eq!(it.duration_label(), "1 day");
    }

    #[test]
    fn day_ids_stay_unique_after_removal() {
        let mut it = Itinerary::new();
        it.add_day();
        it.add_day();
        it.remove_day(&DayId::from("day-1"));
        let id = it.add_day();
        assert_eq!(id.as_str(), "day-3");
        assert_eq!(day_ids(&it), vec!["day-2", "day-3"]);
        // Number follows length, so it duplicates the surviving day's number.
        assert_eq!(numbers(&it), vec![2, 2]);
    }

    #[test]
    fn reorder_keeps_numbers_unless_renumbered() {
        let mut it = Itinerary::new();
        for _ in 0..3 {
            it.add_day();
        }
        it.move_day(&DayId::from("day-3"), &DayId::from("day-1"));
        assert_eq!(day_ids(&it), vec!["day-3", "day-1", "day-2"]);
        assert_eq!(numbers(&it), vec![3, 1, 2]);
        it.renumber_days();
        assert_eq!(numbers(&it), vec![1, 2, 3]);
    }

    #[test]
    fn auto_renumber_after_each_change() {
        let mut it = Itinerary::new();
        it.auto_renumber = true;
        for _ in 0..3 {
            it.add_day();
        }
        it.move_day(&DayId::from("day-1"), &DayId::from("day-3"));
        assert_eq!(numbers(&it), vec![1, 2, 3]);
        it.remove_day(&DayId::from("day-2"));
        assert_eq!(numbers(&it), vec![1, 2]);
    }

    #[test]
    fn item_crud() {
        let mut it = Itinerary::new();
        let day = it.add_day();
        let a = it.add_item(&day).unwrap();
        let b = it.add_item(&day).unwrap();
        assert_ne!(a, b);
        assert_eq!(it.day(&day).unwrap().items.len(), 2);

        let mut edited = it.day(&day).unwrap().item(&a).unwrap().clone();
        edited.title = "Temple visit".into();
        it.update_item(&day, &a, edited);
        assert_eq!(it.day(&day).unwrap().items[0].title, "Temple visit");

        it.remove_item(&day, &a);
        let items = &it.day(&day).unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, b);
    }

    #[test]
    fn item_ops_on_missing_day_are_noops() {
        let mut it = Itinerary::new();
        it.add_day();
        let snapshot = it.clone();
        let ghost = DayId::from("day-9");
        assert!(it.add_item(&ghost).is_none());
        it.remove_item(&ghost, &ItemId::from("item-1"));
        it.update_item(
            &ghost,
            &ItemId::from("item-1"),
            ItineraryItem::placeholder(ItemId::from("item-1")),
        );
        it.remove_day(&ghost);
        assert_eq!(it, snapshot);
    }

    #[test]
    fn save_draft_round() {
        let mut it = Itinerary::new();
        let day = it.add_day();
        let id = it.add_item(&day).unwrap();
        let mut draft = ItemDraft::begin(it.day(&day).unwrap().item(&id).unwrap());
        draft.item.location = "Ubud".into();
        draft.time_text = "07:15".into();
        it.save_draft(&day, draft);
        let item = it.day(&day).unwrap().item(&id).unwrap();
        assert_eq!(item.location, "Ubud");
        assert_eq!(item.time_label(), "07:15");
    }
}
