//! JSON export
//!
//! Wraps a ledger's transactions with schema versioning and a totals summary.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction};
use crate::services::Ledger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub ledger: String,

    pub transactions: Vec<Transaction>,

    pub summary: ExportSummary,
}

/// Totals at export time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub transaction_count: usize,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl LedgerExport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let transactions = ledger.transactions().to_vec();
        let totals = ledger.totals();

        let timestamps = transactions.iter().map(|t| t.timestamp());
        let earliest_transaction = timestamps.clone().min().map(|t| t.to_string());
        let latest_transaction = timestamps.max().map(|t| t.to_string());

        let summary = ExportSummary {
            transaction_count: transactions.len(),
            total_income: totals.income,
            total_expense: totals.expense,
            balance: totals.balance(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: ledger.name().to_string(),
            transactions,
            summary,
        }
    }
}

/// Export a ledger as pretty-printed JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::models::TransactionType;
    use tempfile::TempDir;

    fn create_test_ledger(temp_dir: &TempDir) -> Ledger {
        let paths = LedgerPaths::with_data_dir(temp_dir.path());
        let mut ledger = Ledger::open_in(&paths, &Settings::default(), "Personal").unwrap();
        ledger
            .add(Money::from_cents(10000), "salary", TransactionType::Income)
            .unwrap();
        ledger
            .add(Money::from_cents(4000), "food", TransactionType::Expense)
            .unwrap();
        ledger
    }

    #[test]
    fn test_export_summary() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = create_test_ledger(&temp_dir);

        let export = LedgerExport::from_ledger(&ledger);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.ledger, "Personal");
        assert_eq!(export.summary.transaction_count, 2);
        assert_eq!(export.summary.balance, Money::from_cents(6000));
        assert!(export.summary.earliest_transaction.is_some());
    }

    #[test]
    fn test_json_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = create_test_ledger(&temp_dir);

        let mut output = Vec::new();
        export_ledger_json(&ledger, &mut output).unwrap();

        let imported: LedgerExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(imported.transactions, ledger.transactions());
        assert_eq!(imported.summary.total_income, Money::from_cents(10000));
    }
}
