//! Domain types for expense categorisation.

use std::fmt;

/// Fixed set of expense categories offered by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// Returns the stable label used in persisted payloads and displays.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// Resolves a label back to a category. Empty or unrecognized labels
    /// resolve to `None` rather than an error; persisted snapshots encode
    /// an uncategorised expense as the empty string.
    pub fn from_label(label: &str) -> Option<Category> {
        match label.trim() {
            "Food" => Some(Category::Food),
            "Travel" => Some(Category::Travel),
            "Shopping" => Some(Category::Shopping),
            "Bills" => Some(Category::Bills),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serde adapter mapping `Option<Category>` to the label string stored in
/// snapshots: `None` round-trips as `""`.
pub mod opt_label {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Category;

    pub fn serialize<S>(value: &Option<Category>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map(Category::label).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::from_label(&raw))
    }
}
