use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::Transaction;

use super::{Result, StorageBackend, BALANCE_KEY, BUDGET_KEY, TRANSACTIONS_KEY};

/// In-memory key-value store, substitutable for [`JsonStore`] in tests.
/// Values are stored as serialized JSON so reads and writes exercise the
/// same encoding path as the file backend. Clones share the same entries.
///
/// [`JsonStore`]: super::JsonStore
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `key`, if any.
    pub fn contents(&self, key: &str) -> Option<String> {
        self.lock_entries().get(key).cloned()
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.lock_entries().insert(key.to_string(), json);
        Ok(())
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.lock_entries().get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryStore {
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.write_key(TRANSACTIONS_KEY, &transactions)
    }

    fn load_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        self.read_key(TRANSACTIONS_KEY)
    }

    fn save_budget(&self, amount: f64) -> Result<()> {
        self.write_key(BUDGET_KEY, &amount)
    }

    fn load_budget(&self) -> Result<Option<f64>> {
        self.read_key(BUDGET_KEY)
    }

    fn save_balance(&self, balance: f64) -> Result<()> {
        self.write_key(BALANCE_KEY, &balance)
    }

    fn load_balance(&self) -> Result<Option<f64>> {
        self.read_key(BALANCE_KEY)
    }
}
