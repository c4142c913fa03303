use chrono::{TimeZone, Utc};
use tracker_core::core::Tracker;
use tracker_core::domain::{RecurrenceInterval, Transaction, TransactionKind};
use tracker_core::errors::TrackerError;
use tracker_core::storage::{self, MemoryStore, StorageBackend};
use tracker_core::time::FixedClock;
use uuid::Uuid;

/// Backend whose every operation fails, for exercising the
/// keep-in-memory-state-on-persistence-failure contract.
struct FailingStore;

impl StorageBackend for FailingStore {
    fn save_transactions(&self, _transactions: &[Transaction]) -> storage::Result<()> {
        Err(TrackerError::Storage("disk full".into()))
    }

    fn load_transactions(&self) -> storage::Result<Option<Vec<Transaction>>> {
        Err(TrackerError::Storage("disk full".into()))
    }

    fn save_budget(&self, _amount: f64) -> storage::Result<()> {
        Err(TrackerError::Storage("disk full".into()))
    }

    fn load_budget(&self) -> storage::Result<Option<f64>> {
        Err(TrackerError::Storage("disk full".into()))
    }

    fn save_balance(&self, _balance: f64) -> storage::Result<()> {
        Err(TrackerError::Storage("disk full".into()))
    }

    fn load_balance(&self) -> storage::Result<Option<f64>> {
        Err(TrackerError::Storage("disk full".into()))
    }
}

fn tracker_at(store: MemoryStore, year: i32, month: u32, day: u32) -> Tracker {
    tracker_at_with(Box::new(store), year, month, day)
}

fn tracker_at_with(store: Box<dyn StorageBackend>, year: i32, month: u32, day: u32) -> Tracker {
    let clock = FixedClock(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap());
    Tracker::new(store, Box::new(clock))
}

#[test]
fn test_add_income_then_expense_scenario() {
    let mut tracker = tracker_at(MemoryStore::new(), 2025, 6, 1);

    tracker
        .add_transaction(TransactionKind::Income, 500.0, "Salary", None)
        .expect("add income");
    assert_eq!(tracker.total_income(), 500.0);
    assert_eq!(tracker.balance(), 500.0);

    tracker
        .add_transaction(TransactionKind::Expense, 200.0, "Rent", None)
        .expect("add expense");
    assert_eq!(tracker.total_expenses(), 200.0);
    assert_eq!(tracker.balance(), 300.0);
}

#[test]
fn test_balance_invariant_over_add_delete_sequences() {
    let mut tracker = tracker_at(MemoryStore::new(), 2025, 6, 1);
    let mut ids = Vec::new();

    for (kind, amount, category) in [
        (TransactionKind::Income, 1200.0, "Salary"),
        (TransactionKind::Expense, 300.0, "Rent"),
        (TransactionKind::Income, 80.0, "Freelance"),
        (TransactionKind::Expense, 45.5, "Groceries"),
        (TransactionKind::Expense, 19.5, "Streaming"),
    ] {
        let txn = tracker
            .add_transaction(kind, amount, category, None)
            .expect("add transaction");
        ids.push(txn.id);
        assert_eq!(
            tracker.balance(),
            tracker.total_income() - tracker.total_expenses()
        );
    }

    for id in [ids[1], ids[4]] {
        tracker.delete_transaction(id);
        assert_eq!(
            tracker.balance(),
            tracker.total_income() - tracker.total_expenses()
        );
    }

    assert_eq!(tracker.transactions().len(), 3);
    assert_eq!(tracker.balance(), 1200.0 + 80.0 - 45.5);
}

#[test]
fn test_validation_rejects_before_any_mutation() {
    let mut tracker = tracker_at(MemoryStore::new(), 2025, 6, 1);

    for (amount, category) in [(-5.0, "Rent"), (0.0, "Rent"), (10.0, ""), (10.0, "  ")] {
        let err = tracker
            .add_transaction(TransactionKind::Expense, amount, category, None)
            .expect_err("invalid input must be rejected");
        assert!(matches!(err, TrackerError::Validation(_)));
    }

    assert!(tracker.transactions().is_empty());
    assert_eq!(tracker.balance(), 0.0);
}

#[test]
fn test_delete_with_unknown_id_leaves_collection_unchanged() {
    let mut tracker = tracker_at(MemoryStore::new(), 2025, 6, 1);
    tracker
        .add_transaction(TransactionKind::Income, 60.0, "Gift", None)
        .expect("add income");

    tracker.delete_transaction(Uuid::new_v4());

    assert_eq!(tracker.transactions().len(), 1);
    assert_eq!(tracker.balance(), 60.0);
}

#[test]
fn test_remaining_budget_scenario_with_warning() {
    let mut tracker = tracker_at(MemoryStore::new(), 2025, 6, 1);
    tracker.set_budget(1000.0);
    tracker
        .add_transaction(TransactionKind::Expense, 850.0, "Rent", None)
        .expect("add expense");

    assert_eq!(tracker.remaining_budget(), 150.0);
    assert!(tracker.budget_warning());
}

#[test]
fn test_breakdowns_and_top_categories() {
    let mut tracker = tracker_at(MemoryStore::new(), 2025, 6, 1);
    for (kind, amount, category) in [
        (TransactionKind::Income, 500.0, "Salary"),
        (TransactionKind::Income, 200.0, "Freelance"),
        (TransactionKind::Expense, 100.0, "Rent"),
        (TransactionKind::Expense, 50.0, "Groceries"),
        (TransactionKind::Expense, 60.0, "Rent"),
    ] {
        tracker
            .add_transaction(kind, amount, category, None)
            .expect("add transaction");
    }

    let income = tracker.income_breakdown();
    assert_eq!(income.len(), 2);
    assert_eq!(income["Salary"], 500.0);

    let expenses = tracker.expense_breakdown();
    assert_eq!(expenses["Rent"], 160.0);
    assert_eq!(tracker.top_income_category().as_deref(), Some("Salary"));
    assert_eq!(tracker.top_expense_category().as_deref(), Some("Rent"));
}

#[test]
fn test_recurring_views_split_by_kind() {
    let mut tracker = tracker_at(MemoryStore::new(), 2025, 6, 1);
    tracker
        .add_transaction(
            TransactionKind::Expense,
            12.0,
            "Streaming",
            Some(RecurrenceInterval::Monthly),
        )
        .expect("add recurring expense");
    tracker
        .add_transaction(
            TransactionKind::Income,
            900.0,
            "Salary",
            Some(RecurrenceInterval::Monthly),
        )
        .expect("add recurring income");
    tracker
        .add_transaction(TransactionKind::Expense, 35.0, "Dining", None)
        .expect("add one-off expense");

    let recurring_expenses = tracker.recurring_expenses();
    assert_eq!(recurring_expenses.len(), 1);
    assert_eq!(recurring_expenses[0].category, "Streaming");

    let recurring_income = tracker.recurring_income();
    assert_eq!(recurring_income.len(), 1);
    assert_eq!(recurring_income[0].category, "Salary");

    assert_eq!(tracker.recurring_transactions().len(), 2);
    assert_eq!(tracker.non_recurring_transactions().len(), 1);
}

#[test]
fn test_mutations_persist_through_the_injected_store() {
    let store = MemoryStore::new();
    let mut tracker = tracker_at(store.clone(), 2025, 6, 1);

    tracker
        .add_transaction(TransactionKind::Income, 500.0, "Salary", None)
        .expect("add income");
    tracker.set_budget(1000.0);

    let raw = store.contents("transactions").expect("persisted collection");
    assert!(raw.contains("\"Salary\""));
    assert_eq!(store.contents("userBalance").as_deref(), Some("500.0"));
    assert_eq!(store.contents("totalBudget").as_deref(), Some("1000.0"));
}

#[test]
fn test_persistence_failure_keeps_the_in_memory_mutation() {
    let mut tracker = tracker_at_with(Box::new(FailingStore), 2025, 6, 1);

    let committed = tracker
        .add_transaction(TransactionKind::Expense, 40.0, "Dining", None)
        .expect("mutation succeeds even when persistence fails");

    assert_eq!(tracker.transactions().len(), 1);
    assert_eq!(tracker.transactions()[0].id, committed.id);
    assert_eq!(tracker.balance(), -40.0);

    // A failed load also leaves prior in-memory state untouched.
    assert_eq!(tracker.load_and_reconcile(), 0);
    assert_eq!(tracker.transactions().len(), 1);
}

#[test]
fn test_reconcile_appends_due_occurrence_and_recomputes_balance() {
    let store = MemoryStore::new();
    let mut first = tracker_at(store.clone(), 2025, 1, 10);
    first
        .add_transaction(
            TransactionKind::Expense,
            45.0,
            "Insurance",
            Some(RecurrenceInterval::Monthly),
        )
        .expect("add recurring expense");

    let mut second = tracker_at(store, 2025, 2, 11);
    let generated = second.load_and_reconcile();

    assert_eq!(generated, 1);
    assert_eq!(second.transactions().len(), 2);
    assert_eq!(second.balance(), -90.0);
    assert_eq!(
        second.balance(),
        second.total_income() - second.total_expenses()
    );
}
