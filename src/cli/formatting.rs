use crate::domain::Transaction;
use crate::utils::format_fixed;

const TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Formats an amount with two decimals and an optional currency suffix.
pub fn format_amount(amount: f64, currency_suffix: &str) -> String {
    let amount = format_fixed(amount, 2);
    if currency_suffix.is_empty() {
        amount
    } else {
        format!("{amount} {currency_suffix}")
    }
}

/// Formats when `txn` happened as `dd.MM.yyyy HH:mm` in UTC, or the raw seconds
/// when the timestamp is out of range.
pub fn format_transaction_time(txn: &Transaction) -> String {
    txn.occurred_at()
        .map(|at| at.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| txn.time.to_string())
}
