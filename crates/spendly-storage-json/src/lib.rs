//! Filesystem-backed JSON persistence for the expense snapshot slot.

use std::{
    fs,
    path::{Path, PathBuf},
};

use spendly_core::{CoreError, ExpenseStorage};
use spendly_domain::ExpenseRecord;

const SLOT_FILE: &str = "expenses.json";

/// Stores the whole ledger as one pretty-printed JSON array in a single
/// named slot file. Writes stage to a temporary file and rename into
/// place so readers never observe a half-written snapshot.
#[derive(Debug, Clone)]
pub struct JsonExpenseStorage {
    slot_path: PathBuf,
}

impl JsonExpenseStorage {
    /// Creates the storage rooted at `data_root`, creating the directory
    /// if needed. The slot lives at `<data_root>/expenses.json`.
    pub fn new(data_root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let data_root = data_root.into();
        fs::create_dir_all(&data_root)?;
        Ok(Self {
            slot_path: data_root.join(SLOT_FILE),
        })
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }
}

impl ExpenseStorage for JsonExpenseStorage {
    fn load(&self) -> Result<Option<Vec<ExpenseRecord>>, CoreError> {
        if !self.slot_path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.slot_path)?;
        let records =
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
        Ok(Some(records))
    }

    fn save(&self, records: &[ExpenseRecord]) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = self.slot_path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.slot_path)?;
        Ok(())
    }
}
