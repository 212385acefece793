//! Transaction display formatting

use crate::models::Transaction;

/// Uppercase the first character and lowercase the rest
///
/// ```
/// use transaction_logger::display::capitalize;
/// assert_eq!(capitalize("sALARY"), "Salary");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Format transaction details as a multi-line block
pub fn format_transaction_details(txn: &Transaction, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Transaction info:\n");
    output.push_str(&format!("ID: {}\n", txn.id()));
    output.push_str(&format!(
        "Amount: {}\n",
        txn.amount().format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Category: {}\n", capitalize(txn.category())));
    output.push_str(&format!("Type: {}\n", txn.transaction_type().label()));
    output.push_str(&format!(
        "Timestamp: {}\n",
        txn.timestamp().local().format("%Y-%m-%d %H:%M:%S")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("food"), "Food");
        assert_eq!(capitalize("FOOD"), "Food");
        assert_eq!(capitalize("eating out"), "Eating out");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_format_transaction_details() {
        let txn = Transaction::new(Money::from_cents(4050), "food", TransactionType::Expense);
        let output = format_transaction_details(&txn, "$");

        assert!(output.starts_with("Transaction info:\n"));
        assert!(output.contains(&format!("ID: {}\n", txn.id())));
        assert!(output.contains("Amount: $40.50\n"));
        assert!(output.contains("Category: Food\n"));
        assert!(output.contains("Type: Expense\n"));
        assert!(output.contains("Timestamp: "));
    }

    #[test]
    fn test_custom_currency_symbol() {
        let txn = Transaction::new(Money::from_cents(100), "misc", TransactionType::Income);
        assert!(format_transaction_details(&txn, "€").contains("Amount: €1.00\n"));
    }
}
