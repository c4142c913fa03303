use std::collections::HashMap;

use uuid::Uuid;

use crate::config::ConfigManager;
use crate::domain::{RecurrenceInterval, Transaction, TransactionKind};
use crate::errors::{Result, TrackerError};
use crate::ledger::{aggregate, recurring};
use crate::storage::{JsonStore, StorageBackend};
use crate::time::{Clock, SystemClock};

/// Remaining-budget level below which the warning flag is raised.
pub const BUDGET_WARNING_THRESHOLD: f64 = 200.0;

/// Owns the authoritative transaction collection and coordinates
/// aggregation, recurrence, and persistence.
///
/// Balance is always `total_income - total_expenses`, recomputed after
/// every mutation. Persistence failures are logged and never roll back the
/// in-memory mutation; the worst case is loss of the most recent
/// unpersisted change on restart.
pub struct Tracker {
    transactions: Vec<Transaction>,
    total_budget: Option<f64>,
    balance: f64,
    budget_warning: bool,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl Tracker {
    pub fn new(storage: Box<dyn StorageBackend>, clock: Box<dyn Clock>) -> Self {
        Self {
            transactions: Vec::new(),
            total_budget: None,
            balance: 0.0,
            budget_warning: false,
            storage,
            clock,
        }
    }

    /// Opens a tracker against the configured data directory and the
    /// system clock.
    pub fn open_default() -> Result<Self> {
        let config = ConfigManager::new()?.load()?;
        let store = JsonStore::new(config.resolved_data_dir())?;
        Ok(Self::new(Box::new(store), Box::new(SystemClock)))
    }

    /// Loads persisted state, materializes recurring occurrences that have
    /// come due, and persists the reconciled collection. Returns the number
    /// of occurrences generated.
    ///
    /// A failed read is logged and the prior in-memory state is retained.
    pub fn load_and_reconcile(&mut self) -> usize {
        match self.storage.load_transactions() {
            Ok(Some(stored)) => self.transactions = stored,
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to load transactions: {err}"),
        }
        match self.storage.load_budget() {
            Ok(Some(budget)) => self.total_budget = Some(budget),
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to load budget: {err}"),
        }
        match self.storage.load_balance() {
            Ok(Some(balance)) => self.balance = balance,
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to load balance: {err}"),
        }

        let generated = recurring::generate_due_occurrences(self.clock.now(), &self.transactions);
        let count = generated.len();
        if count > 0 {
            tracing::info!(count, "materialized due recurring occurrences");
            self.transactions.extend(generated);
            self.persist_transactions();
        }
        self.recompute_balance();
        count
    }

    /// Validates and commits a new transaction dated now, returning the
    /// committed record. Passing an interval marks the entry recurring.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        category: &str,
        interval: Option<RecurrenceInterval>,
    ) -> Result<Transaction> {
        let category = category.trim();
        if amount <= 0.0 {
            return Err(TrackerError::Validation(
                "amount must be greater than zero".into(),
            ));
        }
        if category.is_empty() {
            return Err(TrackerError::Validation("category must not be empty".into()));
        }

        let mut txn = Transaction::new(kind, amount, category, self.clock.now());
        txn.set_recurrence(interval);
        self.transactions.push(txn.clone());
        self.persist_transactions();
        self.recompute_balance();
        Ok(txn)
    }

    /// Removes the entry with the given id. A missing id is a silent no-op,
    /// never an error.
    pub fn delete_transaction(&mut self, id: Uuid) {
        self.transactions.retain(|txn| txn.id != id);
        self.persist_transactions();
        self.recompute_balance();
    }

    /// Stores and persists the budget scalar.
    pub fn set_budget(&mut self, amount: f64) {
        self.total_budget = Some(amount);
        if let Err(err) = self.storage.save_budget(amount) {
            tracing::warn!("failed to persist budget: {err}");
        }
    }

    /// Budget left after expenses, or 0.0 when no budget is set. Updates the
    /// warning flag as a side effect.
    pub fn remaining_budget(&mut self) -> f64 {
        let Some(budget) = self.total_budget else {
            return 0.0;
        };
        let remaining = budget - self.total_expenses();
        self.budget_warning = remaining < BUDGET_WARNING_THRESHOLD;
        remaining
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn total_budget(&self) -> Option<f64> {
        self.total_budget
    }

    pub fn budget_warning(&self) -> bool {
        self.budget_warning
    }

    pub fn total_income(&self) -> f64 {
        aggregate::total_income(&self.transactions)
    }

    pub fn total_expenses(&self) -> f64 {
        aggregate::total_expenses(&self.transactions)
    }

    pub fn income_breakdown(&self) -> HashMap<String, f64> {
        aggregate::breakdown(&self.transactions, TransactionKind::Income)
    }

    pub fn expense_breakdown(&self) -> HashMap<String, f64> {
        aggregate::breakdown(&self.transactions, TransactionKind::Expense)
    }

    pub fn top_income_category(&self) -> Option<String> {
        aggregate::top_category(&self.income_breakdown()).map(str::to_owned)
    }

    pub fn top_expense_category(&self) -> Option<String> {
        aggregate::top_category(&self.expense_breakdown()).map(str::to_owned)
    }

    pub fn recurring_transactions(&self) -> Vec<&Transaction> {
        aggregate::recurring(&self.transactions)
    }

    pub fn non_recurring_transactions(&self) -> Vec<&Transaction> {
        aggregate::non_recurring(&self.transactions)
    }

    pub fn recurring_income(&self) -> Vec<&Transaction> {
        aggregate::recurring_of_kind(&self.transactions, TransactionKind::Income)
    }

    pub fn recurring_expenses(&self) -> Vec<&Transaction> {
        aggregate::recurring_of_kind(&self.transactions, TransactionKind::Expense)
    }

    fn persist_transactions(&self) {
        if let Err(err) = self.storage.save_transactions(&self.transactions) {
            tracing::warn!("failed to persist transactions: {err}");
        }
    }

    fn recompute_balance(&mut self) {
        self.balance = self.total_income() - self.total_expenses();
        if let Err(err) = self.storage.save_balance(self.balance) {
            tracing::warn!("failed to persist balance: {err}");
        }
    }
}
