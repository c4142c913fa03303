//! Domain models: the transaction record and its recurrence cadence.

pub mod interval;
pub mod transaction;

pub use interval::RecurrenceInterval;
pub use transaction::{Transaction, TransactionKind};
