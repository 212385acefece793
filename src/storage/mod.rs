//! Storage layer
//!
//! Provides JSON file storage with atomic whole-document writes.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_optional, write_json_atomic};
pub use transactions::{LedgerFile, LoadOutcome};
