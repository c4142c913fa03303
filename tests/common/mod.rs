#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use tracker_core::domain::{RecurrenceInterval, Transaction, TransactionKind};

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn income(amount: f64, category: &str, date: DateTime<Utc>) -> Transaction {
    Transaction::new(TransactionKind::Income, amount, category, date)
}

pub fn expense(amount: f64, category: &str, date: DateTime<Utc>) -> Transaction {
    Transaction::new(TransactionKind::Expense, amount, category, date)
}

pub fn recurring(
    kind: TransactionKind,
    amount: f64,
    category: &str,
    date: DateTime<Utc>,
    interval: RecurrenceInterval,
) -> Transaction {
    Transaction::new(kind, amount, category, date).with_recurrence(interval)
}
