//! Business logic layer
//!
//! The ledger service sits between the CLI and the storage layer. It owns the
//! in-memory transaction list and persists it after every mutation.

pub mod ledger;

pub use ledger::{Ledger, Totals};
