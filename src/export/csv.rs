//! CSV export
//!
//! One row per transaction, in ledger order.

use crate::error::{LedgerError, LedgerResult};
use crate::services::Ledger;
use std::io::Write;

const HEADER: [&str; 6] = ["index", "id", "amount", "category", "type", "timestamp"];

/// Export all transactions of a ledger to CSV
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for (i, txn) in ledger.transactions().iter().enumerate() {
        csv_writer
            .write_record([
                (i + 1).to_string(),
                txn.id().to_string(),
                txn.amount().format_with_symbol(""),
                txn.category().to_string(),
                txn.transaction_type().to_string(),
                txn.timestamp().to_string(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
