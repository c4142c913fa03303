//! Key-value persistence for tracker state.

pub mod json_backend;
pub mod memory;

use crate::domain::Transaction;
use crate::errors::TrackerError;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Key holding the serialized transaction collection.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key holding the budget scalar.
pub const BUDGET_KEY: &str = "totalBudget";
/// Key holding the balance scalar. The spelling is carried over from the
/// snapshots already on disk.
pub const BALANCE_KEY: &str = "userBalance";

/// Abstraction over persistence backends capable of storing the tracker's
/// transaction collection and its two scalar values.
pub trait StorageBackend: Send + Sync {
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
    fn load_transactions(&self) -> Result<Option<Vec<Transaction>>>;
    fn save_budget(&self, amount: f64) -> Result<()>;
    fn load_budget(&self) -> Result<Option<f64>>;
    fn save_balance(&self, balance: f64) -> Result<()>;
    fn load_balance(&self) -> Result<Option<f64>>;
}

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
