//! Stateful orchestration over the pure ledger helpers.

pub mod tracker;

pub use tracker::{Tracker, BUDGET_WARNING_THRESHOLD};
