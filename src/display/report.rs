//! Report formatting for terminal output

use crate::services::{Ledger, Totals};

use super::transaction::{capitalize, format_transaction_details};

/// Full ledger report: header, numbered transactions, then totals
pub fn format_report(ledger: &Ledger) -> String {
    let symbol = ledger.currency_symbol();
    let mut output = format!("\n{} Ledger\n\n", capitalize(ledger.name()));

    if ledger.is_empty() {
        output.push_str("No transactions found.\n\n");
    }

    for (i, txn) in ledger.transactions().iter().enumerate() {
        output.push_str(&format!("Index: {}\n", i + 1));
        output.push_str(&format_transaction_details(txn, symbol));
        output.push('\n');
    }

    let totals = ledger.totals();
    output.push_str(&format!(
        "Total income: {}\n",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total expense: {}\n",
        totals.expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total balance: {}\n",
        totals.balance().format_with_symbol(symbol)
    ));

    output
}

/// Per-category summary printed by `report-category`
pub fn format_category_totals(category: &str, totals: &Totals, currency_symbol: &str) -> String {
    format!(
        "Category: {}\nTotal income: {}\nTotal expense: {}\n",
        capitalize(category),
        totals.income.format_with_symbol(currency_symbol),
        totals.expense.format_with_symbol(currency_symbol)
    )
}
