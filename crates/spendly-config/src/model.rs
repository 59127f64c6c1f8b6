use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-configurable preferences for the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for the expense snapshot. Defaults
    /// to the platform data directory.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    /// Directory holding the expense snapshot slot.
    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("spendly")
    }
}
