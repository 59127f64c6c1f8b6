use spendly_domain::ExpenseRecord;

use crate::CoreError;

/// Abstraction over persistence backends holding the expense snapshot slot.
///
/// The slot stores the whole ledger as one serialized sequence; it is read
/// whole at startup and replaced whole after every mutation. Implementations
/// must be `Send` because writes run on a background thread owned by the
/// [`crate::LedgerStore`].
pub trait ExpenseStorage: Send + 'static {
    /// Reads the persisted snapshot. Returns `Ok(None)` when the slot has
    /// never been written; an unreadable or corrupt payload is an error
    /// (the store decides what to do with it, see
    /// [`crate::LedgerStore::restore`]).
    fn load(&self) -> Result<Option<Vec<ExpenseRecord>>, CoreError>;

    /// Replaces the slot contents with the supplied snapshot.
    fn save(&self, records: &[ExpenseRecord]) -> Result<(), CoreError>;
}
