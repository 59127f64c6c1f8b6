//! Command-line presentation surface for the expense ledger.
//!
//! Forwards add / delete / clear intents to the [`LedgerStore`] and renders
//! the snapshot, running total, and category breakdown it exposes.

use std::sync::Once;

use clap::{Parser, Subcommand};
use spendly_config::{Config, ConfigError, ConfigManager};
use spendly_core::{CoreError, LedgerStore, SummaryService};
use spendly_domain::{Category, ExpenseRecord};
use spendly_storage_json::JsonExpenseStorage;
use thiserror::Error;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "spendly", version, about = "Single-ledger local expense tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log a new expense
    Add {
        /// Amount spent, e.g. "12.50"
        amount: String,
        /// Free-form note
        #[arg(default_value = "")]
        note: String,
        /// Category label (Food, Travel, Shopping, Bills, Other)
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// List all recorded expenses
    List,
    /// Show the running total and per-category breakdown
    Summary,
    /// Delete one expense by id
    Delete { id: Uuid },
    /// Remove every recorded expense
    Clear,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let manager = ConfigManager::from_platform_dirs()?;
    let config = manager.load()?;
    let storage = JsonExpenseStorage::new(config.resolve_data_root())?;
    tracing::debug!(slot = %storage.slot_path().display(), "using expense slot");
    let mut store = LedgerStore::restore(storage);

    match cli.command {
        Command::Add {
            amount,
            note,
            category,
        } => match store.add(&amount, &note, category) {
            Some(id) => println!("Added expense {id}"),
            None => println!("No expense added: amount must be a non-negative number"),
        },
        Command::List => render_list(&config, store.snapshot()),
        Command::Summary => render_summary(&config, store.snapshot()),
        Command::Delete { id } => {
            store.delete(id);
            println!("Deleted expense {id}");
        }
        Command::Clear => {
            store.clear();
            println!("Cleared all expenses");
        }
    }

    store.flush();
    Ok(())
}

fn render_list(config: &Config, records: &[ExpenseRecord]) {
    if records.is_empty() {
        println!("No expenses recorded.");
        return;
    }
    for record in records {
        println!(
            "{} {:.2} - {} [{}] ({})  {}",
            config.currency_symbol,
            record.amount,
            record.note,
            display_label(record.category_label()),
            record.date.format("%Y-%m-%d"),
            record.id
        );
    }
}

fn render_summary(config: &Config, records: &[ExpenseRecord]) {
    println!(
        "Total: {} {:.2}",
        config.currency_symbol,
        SummaryService::total(records)
    );
    for entry in SummaryService::category_breakdown(records) {
        println!(
            "  {}: {} {:.2}",
            display_label(&entry.label),
            config.currency_symbol,
            entry.amount
        );
    }
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "(uncategorised)"
    } else {
        label
    }
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::from_label(raw).ok_or_else(|| {
        let options: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category {raw:?}, expected one of: {}", options.join(", "))
    })
}

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendly_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::{parse_category, Cli};
    use spendly_domain::Category;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn category_argument_accepts_known_labels_only() {
        assert_eq!(parse_category("Food"), Ok(Category::Food));
        assert!(parse_category("Groceries").is_err());
    }
}
