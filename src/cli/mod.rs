//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod export;
pub mod ledger;
pub mod setup;

pub use export::{handle_export_command, ExportArgs};
pub use ledger::{handle_ledger_command, LedgerCommands};
pub use setup::{handle_config_command, handle_init_command};
