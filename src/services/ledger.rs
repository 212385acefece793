//! Ledger service
//!
//! A `Ledger` owns the ordered transactions of one named ledger and mirrors
//! every change to its file before returning. Positions are 1-based
//! everywhere; an out-of-range position is reported as `None`, never as an
//! error.

use std::path::Path;

use tracing::debug;

use crate::config::{LedgerPaths, Settings};
use crate::display::format_report;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionType, TransactionUpdate};
use crate::storage::LedgerFile;

/// Income and expense sums over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
}

impl Totals {
    /// Sum `transactions` by type in one pass
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut totals = Self::default();
        for txn in transactions {
            match txn.transaction_type() {
                TransactionType::Income => totals.income += txn.amount(),
                TransactionType::Expense => totals.expense += txn.amount(),
            }
        }
        totals
    }

    /// Income minus expense
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// A named, file-backed collection of transactions
#[derive(Debug)]
pub struct Ledger {
    name: String,
    file: LedgerFile,
    transactions: Vec<Transaction>,
    currency_symbol: String,
    load_warning: Option<LedgerError>,
}

impl Ledger {
    /// Open a ledger in the data directory resolved from the environment
    pub fn open(name: &str) -> LedgerResult<Self> {
        let paths = LedgerPaths::new()?;
        let settings = Settings::load_or_create(&paths)?;
        Self::open_in(&paths, &settings, name)
    }

    /// Open a ledger under explicit paths and settings
    ///
    /// An unreadable document does not fail the open: the ledger starts empty
    /// and the problem is available from [`Ledger::load_warning`]. The file is
    /// only overwritten by the next mutation.
    ///
    /// Names containing path separators are rejected.
    pub fn open_in(paths: &LedgerPaths, settings: &Settings, name: &str) -> LedgerResult<Self> {
        let file = LedgerFile::new(paths.ledger_file(name)?);
        let outcome = file.load()?;

        debug!(ledger = name, count = outcome.transactions.len(), "opened ledger");

        Ok(Self {
            name: name.to_string(),
            file,
            transactions: outcome.transactions,
            currency_symbol: settings.currency_symbol.clone(),
            load_warning: outcome.warning,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage location of this ledger
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transaction at a 1-based position
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        index
            .checked_sub(1)
            .and_then(|i| self.transactions.get(i))
    }

    /// Why the stored document was ignored on open, if it was
    pub fn load_warning(&self) -> Option<&LedgerError> {
        self.load_warning.as_ref()
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Record a new transaction at the end of the ledger and persist
    pub fn add(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        transaction_type: TransactionType,
    ) -> LedgerResult<Transaction> {
        if amount.is_negative() {
            return Err(LedgerError::negative_amount());
        }
        if !amount.is_storable() {
            return Err(LedgerError::amount_out_of_range());
        }

        let txn = Transaction::new(amount, category, transaction_type);
        let mut transactions = self.transactions.clone();
        transactions.push(txn.clone());
        self.commit(transactions)?;

        Ok(txn)
    }

    /// Income and expense totals over the whole ledger
    pub fn totals(&self) -> Totals {
        Totals::from_transactions(&self.transactions)
    }

    pub fn total_income(&self) -> Money {
        self.totals().income
    }

    pub fn total_expense(&self) -> Money {
        self.totals().expense
    }

    pub fn balance(&self) -> Money {
        self.totals().balance()
    }

    /// Totals for transactions whose category equals `category` exactly
    ///
    /// Returns `None` when no transaction has that category.
    pub fn category_totals(&self, category: &str) -> Option<Totals> {
        let mut matching = self
            .transactions
            .iter()
            .filter(|txn| txn.category() == category)
            .peekable();

        matching.peek()?;
        Some(Totals::from_transactions(matching))
    }

    /// Human-readable summary of every transaction and the totals
    pub fn report(&self) -> String {
        format_report(self)
    }

    /// Remove the transaction at a 1-based position
    ///
    /// Returns `None` without touching the file when the position is out of
    /// range. Later transactions move up by one.
    pub fn delete(&mut self, index: usize) -> LedgerResult<Option<Transaction>> {
        if index < 1 || index > self.transactions.len() {
            return Ok(None);
        }

        let mut transactions = self.transactions.clone();
        let removed = transactions.remove(index - 1);
        self.commit(transactions)?;

        Ok(Some(removed))
    }

    /// Overwrite the given fields of the transaction at a 1-based position
    ///
    /// Returns `None` without touching the file when the position is out of
    /// range, mirroring [`Ledger::delete`].
    pub fn edit(
        &mut self,
        index: usize,
        update: TransactionUpdate,
    ) -> LedgerResult<Option<Transaction>> {
        if update.is_empty() {
            return Err(LedgerError::Validation("No fields provided".into()));
        }
        if let Some(amount) = update.amount {
            if amount.is_negative() {
                return Err(LedgerError::negative_amount());
            }
            if !amount.is_storable() {
                return Err(LedgerError::amount_out_of_range());
            }
        }
        if index < 1 || index > self.transactions.len() {
            return Ok(None);
        }

        let mut transactions = self.transactions.clone();
        let txn = &mut transactions[index - 1];
        txn.apply(&update);
        let edited = txn.clone();
        self.commit(transactions)?;

        Ok(Some(edited))
    }

    /// Save `transactions` and adopt them; on a failed save the ledger keeps
    /// its previous contents.
    fn commit(&mut self, transactions: Vec<Transaction>) -> LedgerResult<()> {
        self.file.save(&transactions)?;
        self.transactions = transactions;
        Ok(())
    }
}
