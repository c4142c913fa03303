//! Materialization of due recurring occurrences.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::Transaction;

/// Builds concrete transactions for recurring entries whose next occurrence
/// falls on or before `reference`. Each emitted occurrence copies the source
/// entry (amount, category, kind, recurrence cadence) under a fresh id,
/// dated at the computed next occurrence.
///
/// Each eligible source is evaluated at most once per call: a single
/// invocation never chains several missed periods into several emissions.
/// The input is never mutated; the caller appends the returned occurrences
/// to its working set.
pub fn generate_due_occurrences(
    reference: DateTime<Utc>,
    transactions: &[Transaction],
) -> Vec<Transaction> {
    let mut generated = Vec::new();
    for template in transactions.iter().filter(|txn| txn.is_recurring) {
        let Some(next) = template.next_occurrence() else {
            continue;
        };
        if next > reference {
            continue;
        }
        let mut occurrence = template.clone();
        occurrence.id = Uuid::new_v4();
        occurrence.date = next;
        generated.push(occurrence);
    }
    generated
}
