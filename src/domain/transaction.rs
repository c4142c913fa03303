use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::interval::RecurrenceInterval;

/// A single income or expense entry.
///
/// Serialized field names and enum spellings match the snapshots already on
/// disk, so existing data keeps loading unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    /// Timestamp of occurrence. For a recurring entry this is the date of
    /// the last generated occurrence in its series.
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(rename = "isRecurring", default)]
    pub is_recurring: bool,
    #[serde(
        rename = "recurrenceInterval",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recurrence_interval: Option<RecurrenceInterval>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            date,
            kind,
            is_recurring: false,
            recurrence_interval: None,
        }
    }

    pub fn with_recurrence(mut self, interval: RecurrenceInterval) -> Self {
        self.set_recurrence(Some(interval));
        self
    }

    /// Sets or clears the recurrence cadence. `is_recurring` always tracks
    /// the presence of the interval.
    pub fn set_recurrence(&mut self, interval: Option<RecurrenceInterval>) {
        self.is_recurring = interval.is_some();
        self.recurrence_interval = interval;
    }

    /// The date of the next occurrence, for recurring entries.
    pub fn next_occurrence(&self) -> Option<DateTime<Utc>> {
        self.recurrence_interval
            .map(|interval| interval.next_date(self.date))
    }
}

/// Closed enumeration of transaction kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}
