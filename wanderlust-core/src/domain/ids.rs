use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Catalog destination slug (`bali`, `paris`, ...)
    DestinationId
);
string_id!(
    /// Accommodation listing ID
    AccommodationId
);
string_id!(
    /// Experience listing ID
    ExperienceId
);
string_id!(
    /// Day plan ID, unique within an itinerary
    DayId
);
string_id!(
    /// Itinerary item ID, unique within a day
    ItemId
);
string_id!(
    /// Budget category ID (`transportation`, `food`, ...)
    CategoryId
);
string_id!(
    /// Expense line ID, unique within a category
    ExpenseId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_slug() {
        assert_eq!(DestinationId::from("bali").to_string(), "bali");
        assert_eq!(DayId::new(String::from("day-3")).as_str(), "day-3");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ItemId::from("item-1")).unwrap();
        assert_eq!(json, "\"item-1\"");
        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ItemId::from("item-1"));
    }
}
