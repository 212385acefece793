//! Display formatting for terminal output

pub mod report;
pub mod transaction;

pub use report::{format_category_totals, format_report};
pub use transaction::{capitalize, format_transaction_details};
