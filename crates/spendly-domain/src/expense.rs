//! Domain model for a single logged expense.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::{opt_label, Category};

/// One logged spend. Field names match the persisted snapshot payload
/// (`id`, `amount`, `note`, `category`, `date`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub amount: f64,
    pub note: String,
    #[serde(default, with = "opt_label")]
    pub category: Option<Category>,
    pub date: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Creates a record with a fresh id and the current timestamp. The
    /// caller is responsible for having validated `amount` already.
    pub fn new(amount: f64, note: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            note: note.into(),
            category,
            date: Utc::now(),
        }
    }

    /// Label used when grouping by category; uncategorised records group
    /// under the empty label.
    pub fn category_label(&self) -> &'static str {
        self.category.map(Category::label).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snapshot_field_names() {
        let record = ExpenseRecord::new(12.5, "lunch", Some(Category::Food));
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        for field in ["id", "amount", "note", "category", "date"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(value["category"], "Food");
        assert_eq!(value["amount"], 12.5);
    }

    #[test]
    fn uncategorised_serializes_as_empty_string() {
        let record = ExpenseRecord::new(3.0, "", None);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["category"], "");
    }

    #[test]
    fn unknown_stored_category_deserializes_to_none() {
        let raw = r#"{
            "id": "4b4a6848-8c3e-4b2f-9d7b-111111111111",
            "amount": 9.0,
            "note": "membership",
            "category": "Subscriptions",
            "date": "2024-03-01T10:00:00Z"
        }"#;
        let record: ExpenseRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.category, None);
        assert_eq!(record.category_label(), "");
    }
}
