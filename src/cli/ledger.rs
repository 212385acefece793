//! Ledger CLI commands
//!
//! Implements the add/report/edit/delete commands against a named ledger.

use clap::Subcommand;

use crate::config::{LedgerPaths, Settings};
use crate::display::{capitalize, format_category_totals};
use crate::error::LedgerResult;
use crate::models::{Money, TransactionType, TransactionUpdate};
use crate::services::Ledger;

/// Commands that operate on one ledger
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Add a transaction
    Add {
        /// Ledger name (case-insensitive)
        ledger: String,
        /// Amount (e.g. "40", "12.50", "$12.50")
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Money,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// income or expense
        #[arg(short = 't', long = "type", alias = "transaction-type")]
        transaction_type: TransactionType,
    },

    /// Show every transaction and the ledger totals
    Report {
        /// Ledger name
        ledger: String,
    },

    /// Show totals for one category
    ReportCategory {
        /// Ledger name
        ledger: String,
        /// Category label (exact match)
        category: String,
    },

    /// Delete a transaction by its 1-based index
    Delete {
        /// Ledger name
        ledger: String,
        /// Position as shown by `report`
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Edit fields of a transaction by its 1-based index
    Edit {
        /// Ledger name
        ledger: String,
        /// Position as shown by `report`
        #[arg(allow_negative_numbers = true)]
        index: i64,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<Money>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New type
        #[arg(short = 't', long = "type", alias = "transaction-type")]
        transaction_type: Option<TransactionType>,
    },
}

/// Handle a ledger command
pub fn handle_ledger_command(
    paths: &LedgerPaths,
    settings: &Settings,
    cmd: LedgerCommands,
) -> LedgerResult<()> {
    match cmd {
        LedgerCommands::Add {
            ledger,
            amount,
            category,
            transaction_type,
        } => {
            let mut ledger = open_ledger(paths, settings, &ledger)?;
            if amount.is_negative() {
                println!("Amount cannot be negative.");
                return Ok(());
            }

            ledger.add(amount, category, transaction_type)?;
            println!("Transaction added.");
        }

        LedgerCommands::Report { ledger } => {
            let ledger = open_ledger(paths, settings, &ledger)?;
            println!("{}", ledger.report());
        }

        LedgerCommands::ReportCategory { ledger, category } => {
            let ledger = open_ledger(paths, settings, &ledger)?;
            match ledger.category_totals(&category) {
                Some(totals) => print!(
                    "{}",
                    format_category_totals(&category, &totals, ledger.currency_symbol())
                ),
                None => println!("Category {} not found.", capitalize(&category)),
            }
        }

        LedgerCommands::Delete { ledger, index } => {
            let mut ledger = open_ledger(paths, settings, &ledger)?;
            match ledger.delete(to_position(index))? {
                Some(_) => println!("Transaction at index {} deleted.", index),
                None => println!("Transaction at index {} not found.", index),
            }
        }

        LedgerCommands::Edit {
            ledger,
            index,
            amount,
            category,
            transaction_type,
        } => {
            let update = TransactionUpdate {
                amount,
                category,
                transaction_type,
            };
            if update.is_empty() {
                println!("No fields provided.");
                return Ok(());
            }

            let mut ledger = open_ledger(paths, settings, &ledger)?;
            if ledger.is_empty() {
                println!("No transactions found.");
                return Ok(());
            }
            if update.amount.is_some_and(|a| a.is_negative()) {
                println!("Amount cannot be negative.");
                return Ok(());
            }

            match ledger.edit(to_position(index), update)? {
                Some(_) => println!("Transaction at index {} edited.", index),
                None => println!("Index {} out of range.", index),
            }
        }
    }

    Ok(())
}

/// Open a ledger, telling the user when its file had to be ignored
fn open_ledger(paths: &LedgerPaths, settings: &Settings, name: &str) -> LedgerResult<Ledger> {
    let ledger = Ledger::open_in(paths, settings, name)?;
    if ledger.load_warning().is_some() {
        println!(
            "{} might be corrupted, starting with empty ledger.",
            ledger.path().display()
        );
    }
    Ok(ledger)
}

/// Map a user-supplied index onto a ledger position; negatives never match
fn to_position(index: i64) -> usize {
    usize::try_from(index).unwrap_or(0)
}
