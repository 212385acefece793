//! Configuration module
//!
//! This module provides configuration management including:
//! - Data directory and ledger file name resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{ExportFormat, Settings};
