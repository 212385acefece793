//! Transaction Logger - named income/expense ledgers persisted as JSON
//!
//! This library provides the core of the `txlog` command line tool. Each
//! ledger is an ordered list of transactions stored in its own JSON file and
//! rewritten after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and settings
//! - `error`: Custom error types
//! - `models`: Money, identifiers and transactions
//! - `storage`: JSON file storage layer
//! - `services`: The `Ledger` and its totals
//! - `display`: Report formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `txlog` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use transaction_logger::models::{Money, TransactionType};
//! use transaction_logger::Ledger;
//!
//! let mut ledger = Ledger::open("personal")?;
//! ledger.add(Money::from_cents(10000), "salary", TransactionType::Income)?;
//! println!("{}", ledger.report());
//! # Ok::<(), transaction_logger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use services::{Ledger, Totals};
