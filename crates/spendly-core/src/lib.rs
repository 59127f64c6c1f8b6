//! spendly-core
//!
//! Ledger store and aggregation services for the expense tracker.
//! Depends on spendly-domain. No CLI, no terminal I/O; persistence goes
//! through the [`storage::ExpenseStorage`] trait.

pub mod error;
pub mod storage;
pub mod store;
pub mod summary;

pub use error::CoreError;
pub use storage::ExpenseStorage;
pub use store::LedgerStore;
pub use summary::{CategoryTotal, SummaryService};
