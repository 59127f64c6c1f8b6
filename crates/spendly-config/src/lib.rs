//! spendly-config
//!
//! User preferences and data-directory resolution for the expense tracker.

mod error;
mod manager;
mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
