//! Aggregation helpers deriving totals from a ledger snapshot.

use serde::Serialize;
use spendly_domain::ExpenseRecord;

/// Summed amount for a single category label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub label: String,
    pub amount: f64,
}

/// Pure aggregation over ledger snapshots. Stateless; results are always
/// recomputed from the records passed in, never cached, so they cannot
/// drift from the ledger.
pub struct SummaryService;

impl SummaryService {
    /// Sum of `amount` across all records. 0.0 for an empty snapshot.
    pub fn total(records: &[ExpenseRecord]) -> f64 {
        records.iter().map(|record| record.amount).sum()
    }

    /// Per-category sums, one entry per distinct label present in the
    /// snapshot, in first-appearance order. Uncategorised records
    /// accumulate under the empty label; labels with no records simply do
    /// not appear.
    pub fn category_breakdown(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for record in records {
            let label = record.category_label();
            match totals.iter_mut().find(|entry| entry.label == label) {
                Some(entry) => entry.amount += record.amount,
                None => totals.push(CategoryTotal {
                    label: label.to_string(),
                    amount: record.amount,
                }),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use spendly_domain::{Category, ExpenseRecord};

    use super::{CategoryTotal, SummaryService};

    fn record(amount: f64, category: Option<Category>) -> ExpenseRecord {
        ExpenseRecord::new(amount, "", category)
    }

    #[test]
    fn total_of_empty_snapshot_is_zero() {
        assert_eq!(SummaryService::total(&[]), 0.0);
        assert!(SummaryService::category_breakdown(&[]).is_empty());
    }

    #[test]
    fn breakdown_groups_by_label_in_first_appearance_order() {
        let records = vec![
            record(100.0, Some(Category::Food)),
            record(50.0, Some(Category::Travel)),
            record(25.0, Some(Category::Food)),
        ];

        assert_eq!(SummaryService::total(&records), 175.0);
        let breakdown = SummaryService::category_breakdown(&records);
        assert_eq!(
            breakdown,
            vec![
                CategoryTotal {
                    label: "Food".into(),
                    amount: 125.0
                },
                CategoryTotal {
                    label: "Travel".into(),
                    amount: 50.0
                },
            ]
        );
    }

    #[test]
    fn uncategorised_records_accumulate_under_empty_label() {
        let records = vec![record(10.0, None), record(5.0, None)];
        let breakdown = SummaryService::category_breakdown(&records);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].label, "");
        assert_eq!(breakdown[0].amount, 15.0);
    }

    #[test]
    fn breakdown_is_idempotent_for_an_unchanged_snapshot() {
        let records = vec![
            record(12.5, Some(Category::Bills)),
            record(7.5, None),
            record(1.0, Some(Category::Other)),
        ];
        let first = SummaryService::category_breakdown(&records);
        let second = SummaryService::category_breakdown(&records);
        assert_eq!(first, second);
    }
}
