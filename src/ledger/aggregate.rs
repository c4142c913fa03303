//! Side-effect-free aggregation over in-memory transaction slices.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{Transaction, TransactionKind};

/// Sum of all income amounts.
pub fn total_income(transactions: &[Transaction]) -> f64 {
    total_of_kind(transactions, TransactionKind::Income)
}

/// Sum of all expense amounts.
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    total_of_kind(transactions, TransactionKind::Expense)
}

fn total_of_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .map(|txn| txn.amount)
        .sum()
}

/// Per-category sums for entries of the given kind. Categories absent from
/// the input never appear in the result.
pub fn breakdown(transactions: &[Transaction], kind: TransactionKind) -> HashMap<String, f64> {
    let mut totals = HashMap::new();
    for txn in transactions.iter().filter(|txn| txn.kind == kind) {
        *totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }
    totals
}

/// The category with the largest summed amount, or `None` for an empty
/// breakdown. On equal totals the lexicographically smallest category wins,
/// keeping the result independent of map iteration order.
pub fn top_category(breakdown: &HashMap<String, f64>) -> Option<&str> {
    breakdown
        .iter()
        .max_by(|(a_category, a_total), (b_category, b_total)| {
            a_total
                .partial_cmp(b_total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b_category.cmp(a_category))
        })
        .map(|(category, _)| category.as_str())
}

/// Entries flagged as recurring.
pub fn recurring(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions.iter().filter(|txn| txn.is_recurring).collect()
}

/// Entries not flagged as recurring.
pub fn non_recurring(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|txn| !txn.is_recurring)
        .collect()
}

/// Recurring entries of a single kind.
pub fn recurring_of_kind(transactions: &[Transaction], kind: TransactionKind) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.is_recurring && txn.kind == kind)
        .collect()
}
