//! Core data models
//!
//! - `Money`: exact currency amounts in cents
//! - `TransactionId`: transaction identifier, a UUID for new transactions
//! - `Timestamp`: ISO-8601 creation time
//! - `Transaction`: one income or expense event

pub mod ids;
pub mod money;
pub mod timestamp;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use timestamp::Timestamp;
pub use transaction::{Transaction, TransactionType, TransactionUpdate, REQUIRED_FIELDS};
