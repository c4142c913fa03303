use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::Transaction;

use super::{Result, StorageBackend, BALANCE_KEY, BUDGET_KEY, TRANSACTIONS_KEY};

const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// File-backed key-value store keeping one pretty-printed JSON document per
/// key under a root directory. Writes are staged to a temporary file and
/// renamed into place.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    /// Opens the store at the platform data directory.
    pub fn new_default() -> Result<Self> {
        Self::new(default_data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{FILE_EXTENSION}"))
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        write_atomic(&self.key_path(key), &json)
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }
}

impl StorageBackend for JsonStore {
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

/// Platform data directory for the tracker's managed store.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tracker-core")
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension(TMP_SUFFIX);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
