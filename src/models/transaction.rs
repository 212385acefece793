//! Transaction model
//!
//! A transaction is one income or expense event. Its `id` and `timestamp` are
//! fixed at creation and kept verbatim through load and save; amount, category
//! and type may be edited in place.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use super::timestamp::Timestamp;
use crate::error::{LedgerError, LedgerResult};

/// Fields every stored record must carry
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "amount", "category", "type", "timestamp"];

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Lowercase form used on disk and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Capitalized form used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Invalid transaction type: '{}'. Use income or expense",
                other
            ))),
        }
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,

    amount: Money,

    category: String,

    #[serde(rename = "type")]
    transaction_type: TransactionType,

    timestamp: Timestamp,
}

impl Transaction {
    /// Create a new transaction with a fresh id and the current local time
    ///
    /// No validation happens here; the ledger rejects negative amounts.
    pub fn new(amount: Money, category: impl Into<String>, transaction_type: TransactionType) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            category: category.into(),
            transaction_type,
            timestamp: Timestamp::now(),
        }
    }

    /// Rebuild a transaction from one stored record, keeping its id and
    /// timestamp verbatim
    ///
    /// `index` is the record's 0-based position in the document and is only
    /// used for error reporting.
    pub fn from_record(index: usize, record: Value) -> LedgerResult<Self> {
        let missing = match record.as_object() {
            Some(object) => REQUIRED_FIELDS
                .iter()
                .find(|field| !object.contains_key(**field))
                .copied(),
            None => {
                return Err(LedgerError::MalformedRecord {
                    index,
                    reason: "record is not a JSON object".into(),
                })
            }
        };

        if let Some(field) = missing {
            return Err(LedgerError::MalformedRecord {
                index,
                reason: format!("missing field `{}`", field),
            });
        }

        let txn: Transaction = serde_json::from_value(record).map_err(|e| {
            LedgerError::MalformedRecord {
                index,
                reason: e.to_string(),
            }
        })?;

        if txn.amount.is_negative() {
            return Err(LedgerError::MalformedRecord {
                index,
                reason: format!("negative amount {}", txn.amount),
            });
        }

        Ok(txn)
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Overwrite the fields present in `update`; id and timestamp never change
    pub(crate) fn apply(&mut self, update: &TransactionUpdate) {
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(transaction_type) = update.transaction_type {
            self.transaction_type = transaction_type;
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id.short(),
            self.transaction_type,
            self.category,
            self.amount
        )
    }
}

/// Optional field changes for an edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub transaction_type: Option<TransactionType>,
}

impl TransactionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.transaction_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> Value {
        json!({
            "id": "6f1c0d9e-3b7a-4c41-9a52-2f8e4d1b7c10",
            "amount": 100.0,
            "category": "salary",
            "type": "income",
            "timestamp": "2024-03-01T09:15:42.123456"
        })
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(Money::from_cents(4000), "food", TransactionType::Expense);

        assert_eq!(txn.amount().cents(), 4000);
        assert_eq!(txn.category(), "food");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = Transaction::new(Money::from_cents(1), "x", TransactionType::Income);
        let b = Transaction::new(Money::from_cents(1), "x", TransactionType::Income);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_serialized_record_shape() {
        let txn = Transaction::from_record(0, sample_record()).unwrap();
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value, sample_record());
    }

    #[test]
    fn test_from_record_keeps_id_and_timestamp() {
        let txn = Transaction::from_record(0, sample_record()).unwrap();

        assert_eq!(txn.id().as_str(), "6f1c0d9e-3b7a-4c41-9a52-2f8e4d1b7c10");
        assert_eq!(txn.timestamp().as_str(), "2024-03-01T09:15:42.123456");
        assert_eq!(txn.transaction_type(), TransactionType::Income);
        assert_eq!(txn.amount().cents(), 10000);
    }

    #[test]
    fn test_timestamp_without_fraction_round_trips() {
        let mut record = sample_record();
        record["timestamp"] = json!("2024-03-01T09:15:42");

        let txn = Transaction::from_record(0, record.clone()).unwrap();
        assert_eq!(serde_json::to_value(&txn).unwrap(), record);
    }

    #[test]
    fn test_non_canonical_record_round_trips_verbatim() {
        let record = json!({
            "id": "6F1C0D9E-3B7A-4C41-9A52-2F8E4D1B7C10",
            "amount": 12.5,
            "category": "food",
            "type": "expense",
            "timestamp": "2024-01-01T00:00:00.5"
        });

        let txn = Transaction::from_record(0, record.clone()).unwrap();
        assert_eq!(serde_json::to_value(&txn).unwrap(), record);
    }

    #[test]
    fn test_free_form_id_and_offset_timestamp_load() {
        let record = json!({
            "id": "abc",
            "amount": 1.0,
            "category": "misc",
            "type": "income",
            "timestamp": "2024-01-01T00:00:00+00:00"
        });

        let txn = Transaction::from_record(0, record.clone()).unwrap();
        assert_eq!(txn.id().as_str(), "abc");
        assert_eq!(serde_json::to_value(&txn).unwrap(), record);
    }

    #[test]
    fn test_from_record_rejects_invalid_timestamp() {
        let mut record = sample_record();
        record["timestamp"] = json!("March 1st");
        assert!(Transaction::from_record(0, record)
            .unwrap_err()
            .is_malformed_record());
    }

    #[test]
    fn test_from_record_rejects_out_of_range_amount() {
        let mut record = sample_record();
        record["amount"] = json!(1e20);

        match Transaction::from_record(4, record).unwrap_err() {
            LedgerError::MalformedRecord { index, reason } => {
                assert_eq!(index, 4);
                assert!(reason.contains("out of range"), "reason was {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_of_new_transaction() {
        let txn = Transaction::new(Money::from_cents(1234), "rent", TransactionType::Expense);
        let value = serde_json::to_value(&txn).unwrap();
        let restored = Transaction::from_record(0, value).unwrap();

        assert_eq!(restored, txn);
    }

    #[test]
    fn test_from_record_missing_field() {
        for field in REQUIRED_FIELDS {
            let mut record = sample_record();
            record.as_object_mut().unwrap().remove(field);

            let err = Transaction::from_record(2, record).unwrap_err();
            match err {
                LedgerError::MalformedRecord { index, reason } => {
                    assert_eq!(index, 2);
                    assert!(reason.contains(field), "reason was {}", reason);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_from_record_rejects_bad_values() {
        let mut bad_type = sample_record();
        bad_type["type"] = json!("transfer");
        assert!(Transaction::from_record(0, bad_type)
            .unwrap_err()
            .is_malformed_record());

        let mut bad_amount = sample_record();
        bad_amount["amount"] = json!("lots");
        assert!(Transaction::from_record(0, bad_amount)
            .unwrap_err()
            .is_malformed_record());

        let mut negative = sample_record();
        negative["amount"] = json!(-5.0);
        assert!(Transaction::from_record(0, negative)
            .unwrap_err()
            .is_malformed_record());

        assert!(Transaction::from_record(0, json!([1, 2, 3]))
            .unwrap_err()
            .is_malformed_record());
    }

    #[test]
    fn test_apply_update_preserves_identity() {
        let mut txn = Transaction::new(Money::from_cents(500), "food", TransactionType::Expense);
        let id = txn.id().clone();
        let timestamp = txn.timestamp().clone();

        txn.apply(&TransactionUpdate::new().category("groceries"));

        assert_eq!(txn.id(), &id);
        assert_eq!(txn.timestamp(), &timestamp);
        assert_eq!(txn.category(), "groceries");
        assert_eq!(txn.amount().cents(), 500);
        assert!(txn.is_expense());
    }

    #[test]
    fn test_transaction_type_parse() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("Expense".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("refund".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_update_is_empty() {
        assert!(TransactionUpdate::new().is_empty());
        assert!(!TransactionUpdate::new().amount(Money::zero()).is_empty());
    }
}
