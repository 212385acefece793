//! Ledger document persistence
//!
//! One ledger is one JSON array of transaction records. Every save rewrites
//! the whole document.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

use super::file_io::{read_optional, write_json_atomic};

/// Result of reading a ledger document
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub transactions: Vec<Transaction>,
    /// Set when the document existed but could not be parsed
    pub warning: Option<LedgerError>,
}

/// Reads and writes the document backing one ledger
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all transactions in stored order
    ///
    /// A missing file yields an empty ledger. A document that is not a JSON
    /// array is reported through `LoadOutcome::warning` and also yields an
    /// empty ledger; the file itself is left untouched. A record with missing
    /// or invalid fields fails the whole load.
    pub fn load(&self) -> LedgerResult<LoadOutcome> {
        let Some(contents) = read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "no ledger file yet");
            return Ok(LoadOutcome::default());
        };

        let records = match parse_document(&contents) {
            Ok(records) => records,
            Err(reason) => {
                warn!(
                    path = %self.path.display(),
                    %reason,
                    "ledger file might be corrupted, starting with an empty ledger"
                );
                return Ok(LoadOutcome {
                    transactions: Vec::new(),
                    warning: Some(LedgerError::MalformedStorage {
                        path: self.path.display().to_string(),
                        reason,
                    }),
                });
            }
        };

        let transactions = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Transaction::from_record(index, record))
            .collect::<LedgerResult<Vec<_>>>()?;

        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "loaded ledger"
        );

        Ok(LoadOutcome {
            transactions,
            warning: None,
        })
    }

    /// Replace the stored document with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> LedgerResult<()> {
        write_json_atomic(&self.path, transactions)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved ledger"
        );
        Ok(())
    }
}

fn parse_document(contents: &str) -> Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(contents) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(_) => Err("document is not a JSON array".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file() -> (TempDir, LedgerFile) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_transactions.json");
        (temp_dir, LedgerFile::new(path))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_temp_dir, file) = create_test_file();
        let outcome = file.load().unwrap();

        assert!(outcome.transactions.is_empty());
        assert!(outcome.warning.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, file) = create_test_file();
        let txns = vec![
            Transaction::new(Money::from_cents(10000), "salary", TransactionType::Income),
            Transaction::new(Money::from_cents(4000), "food", TransactionType::Expense),
        ];

        file.save(&txns).unwrap();
        let outcome = file.load().unwrap();

        assert_eq!(outcome.transactions, txns);
        assert!(outcome.warning.is_none());
    }

    #[test]
    fn test_document_is_a_plain_array() {
        let (_temp_dir, file) = create_test_file();
        let txn = Transaction::new(Money::from_cents(250), "coffee", TransactionType::Expense);
        file.save(std::slice::from_ref(&txn)).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "expense");
        assert_eq!(records[0]["category"], "coffee");
        assert_eq!(records[0]["amount"], 2.5);
        assert_eq!(records[0]["id"], txn.id().to_string());
    }

    #[test]
    fn test_corrupt_file_warns_and_is_left_alone() {
        let (_temp_dir, file) = create_test_file();
        fs::write(file.path(), "{ not valid json").unwrap();

        let outcome = file.load().unwrap();
        assert!(outcome.transactions.is_empty());
        assert!(matches!(
            outcome.warning,
            Some(LedgerError::MalformedStorage { .. })
        ));
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "{ not valid json");
    }

    #[test]
    fn test_non_array_document_is_malformed_storage() {
        let (_temp_dir, file) = create_test_file();
        fs::write(file.path(), r#"{"transactions": []}"#).unwrap();

        let outcome = file.load().unwrap();
        assert!(outcome.transactions.is_empty());
        assert!(outcome.warning.is_some());
    }

    #[test]
    fn test_record_missing_field_fails_load() {
        let (_temp_dir, file) = create_test_file();
        fs::write(
            file.path(),
            r#"[{"id": "6f1c0d9e-3b7a-4c41-9a52-2f8e4d1b7c10", "amount": 1.0, "category": "x", "type": "income"}]"#,
        )
        .unwrap();

        let err = file.load().unwrap_err();
        assert!(err.is_malformed_record());
    }
}
