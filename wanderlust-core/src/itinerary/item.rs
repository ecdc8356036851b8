use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::ItemId;

/// What an itinerary entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Activity,
    Transport,
    Accommodation,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Activity, ItemKind::Transport, ItemKind::Accommodation];

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Activity => "Activity",
            ItemKind::Transport => "Transport",
            ItemKind::Accommodation => "Accommodation",
        }
    }

    pub fn next(self) -> ItemKind {
        match self {
            ItemKind::Activity => ItemKind::Transport,
            ItemKind::Transport => ItemKind::Accommodation,
            ItemKind::Accommodation => ItemKind::Activity,
        }
    }

    pub fn prev(self) -> ItemKind {
        match self {
            ItemKind::Activity => ItemKind::Accommodation,
            ItemKind::Transport => ItemKind::Activity,
            ItemKind::Accommodation => ItemKind::Transport,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "activity" => Ok(ItemKind::Activity),
            "transport" => Ok(ItemKind::Transport),
            "accommodation" => Ok(ItemKind::Accommodation),
            other => Err(format!("unknown item type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: ItemId,
    pub time: NaiveTime,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl ItineraryItem {
    pub const DEFAULT_TITLE: &'static str = "New Activity";
    pub const DEFAULT_DESCRIPTION: &'static str = "Add description here";

    /// A fresh entry with the fixed "Add Activity" defaults.
    pub fn placeholder(id: ItemId) -> Self {
        Self {
            id,
            time: default_time(),
            title: Self::DEFAULT_TITLE.to_string(),
            description: Self::DEFAULT_DESCRIPTION.to_string(),
            location: String::new(),
            kind: ItemKind::Activity,
        }
    }

    /// `HH:MM`
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// 09:00, the start time of every new entry.
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Which field of a draft has focus in an edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Time,
    Kind,
    Title,
    Location,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Time,
        DraftField::Kind,
        DraftField::Title,
        DraftField::Location,
        DraftField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Time => "Time",
            DraftField::Kind => "Type",
            DraftField::Title => "Title",
            DraftField::Location => "Location",
            DraftField::Description => "Description",
        }
    }
}

/// Local edit buffer for one item: begin copies, save hands the copy back,
/// cancel discards it. The stored item is untouched until save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub item: ItineraryItem,
    /// Raw time text; parsed on save so partial input can be typed.
    pub time_text: String,
    pub field: DraftField,
}

impl ItemDraft {
    pub fn begin(item: &ItineraryItem) -> Self {
        Self {
            item: item.clone(),
            time_text: item.time_label(),
            field: DraftField::Time,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item.id
    }

    pub fn next_field(&mut self) {
        let i = DraftField::ALL.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = DraftField::ALL[(i + 1) % DraftField::ALL.len()];
    }

    pub fn prev_field(&mut self) {
        let n = DraftField::ALL.len();
        let i = DraftField::ALL.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = DraftField::ALL[(i + n - 1) % n];
    }

    /// Append a character to the focused text field. The type field cycles instead.
    pub fn push_char(&mut self, c: char) {
        match self.field {
            DraftField::Time => self.time_text.push(c),
            DraftField::Kind => self.item.kind = self.item.kind.next(),
            DraftField::Title => self.item.title.push(c),
            DraftField::Location => self.item.location.push(c),
            DraftField::Description => self.item.description.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.field {
            DraftField::Time => {
                self.time_text.pop();
            }
            DraftField::Kind => self.item.kind = self.item.kind.prev(),
            DraftField::Title => {
                self.item.title.pop();
            }
            DraftField::Location => {
                self.item.location.pop();
            }
            DraftField::Description => {
                self.item.description.pop();
            }
        }
    }

    /// Finish editing. An unparseable time keeps the item's previous time.
    pub fn save(self) -> ItineraryItem {
        let mut item = self.item;
        match NaiveTime::parse_from_str(self.time_text.trim(), "%H:%M") {
            Ok(t) => item.time = t,
            Err(_) => {
                tracing::debug!(input = %self.time_text, "ignoring unparseable item time");
            }
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_defaults() {
        let item = ItineraryItem::placeholder(ItemId::from("item-1"));
        assert_eq!(item.title, "New Activity");
        assert_eq!(item.description, "Add description here");
        assert_eq!(item.time_label(), "09:00");
        assert!(item.location.is_empty());
        assert_eq!(item.kind, ItemKind::Activity);
    }

    #[test]
    fn kind_cycles_both_ways() {
        for k in ItemKind::ALL {
            assert_eq!(k.next().prev(), k);
        }
        assert_eq!("Transport".parse::<ItemKind>().unwrap(), ItemKind::Transport);
        assert!("boat".parse::<ItemKind>().is_err());
    }

    #[test]
    fn draft_edits_do_not_touch_original() {
        let original = ItineraryItem::placeholder(ItemId::from("item-1"));
        let mut draft = ItemDraft::begin(&original);
        draft.field = DraftField::Title;
        draft.push_char('!');
        assert_eq!(original.title, "New Activity");
        assert_eq!(draft.item.title, "New Activity!");
    }

    #[test]
    fn draft_save_parses_time() {
        let original = ItineraryItem::placeholder(ItemId::from("item-1"));
        let mut draft = ItemDraft::begin(&original);
        draft.time_text = "14:30".into();
        draft.field = DraftField::Kind;
        draft.push_char('x');
        let saved = draft.save();
        assert_eq!(saved.time_label(), "14:30");
        assert_eq!(saved.kind, ItemKind::Transport);
        assert_eq!(saved.id, original.id);
    }

    #[test]
    fn draft_save_keeps_time_on_garbage() {
        let original = ItineraryItem::placeholder(ItemId::from("item-1"));
        let mut draft = ItemDraft::begin(&original);
        draft.time_text = "25:99".into();
        assert_eq!(draft.save().time_label(), "09:00");
    }

    #[test]
    fn field_focus_wraps() {
        let mut draft = ItemDraft::begin(&ItineraryItem::placeholder(ItemId::from("i")));
        draft.prev_field();
        assert_eq!(draft.field, DraftField::Description);
        draft.next_field();
        assert_eq!(draft.field, DraftField::Time);
    }
}
