//! spendly-domain
//!
//! Pure domain models for the expense ledger (ExpenseRecord, Category).
//! No I/O, no CLI, no storage. Only data types.

pub mod category;
pub mod expense;

pub use category::*;
pub use expense::*;
