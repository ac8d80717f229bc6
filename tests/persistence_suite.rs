mod common;

use chrono::{TimeZone, Utc};
use expenso::domain::{Category, ExpenseRecord};
use expenso::storage::{JsonStorage, StorageBackend};
use serde_json::json;
use tempfile::TempDir;

use common::{reopen_manager, sample_date, sample_instant, setup_manager};

fn sample_record() -> ExpenseRecord {
    ExpenseRecord {
        id: 1748593200123,
        name: "Groceries".into(),
        amount: 42.75,
        category: Category::Food,
        date: sample_date(2025, 5, 30),
        created_at: Utc.with_ymd_and_hms(2025, 5, 30, 7, 0, 0).unwrap(),
    }
}

#[test]
fn records_serialize_to_the_stable_wire_shape() {
    let value = serde_json::to_value(sample_record()).expect("serialize record");
    assert_eq!(
        value,
        json!({
            "id": 1748593200123_i64,
            "name": "Groceries",
            "amount": 42.75,
            "category": "Food",
            "date": "2025-05-30",
            "timestamp": "2025-05-30T07:00:00Z"
        })
    );
}

#[test]
fn save_then_load_preserves_every_field() {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(temp.path().to_path_buf()).expect("storage");
    let records = vec![sample_record()];
    storage.save_expenses(&records).expect("save");
    let loaded = storage.load_expenses().expect("load").expect("present");
    assert_eq!(loaded, records);
}

#[test]
fn unknown_category_strings_fail_to_deserialize() {
    let raw = r#"[{
        "id": 1, "name": "x", "amount": 2.0, "category": "Gadgets",
        "date": "2025-05-30", "timestamp": "2025-05-30T07:00:00Z"
    }]"#;
    assert!(serde_json::from_str::<Vec<ExpenseRecord>>(raw).is_err());
}

#[test]
fn manager_starts_empty_on_a_fresh_directory() {
    let (manager, _guard) = setup_manager(sample_instant(2025, 6, 1));
    assert!(manager.ledger().is_empty());
    assert_eq!(manager.ledger().monthly_budget(), 0.0);
}

#[test]
fn manager_persists_each_mutation_for_the_next_session() {
    let (mut manager, guard) = setup_manager(sample_instant(2025, 6, 1));
    let record = manager
        .add_expense("Lunch", 12.5, Category::Food, sample_date(2025, 6, 1))
        .expect("add expense");
    manager.set_budget(500.0).expect("set budget");
    drop(manager);

    let mut next = reopen_manager(&guard, sample_instant(2025, 6, 2));
    assert_eq!(next.ledger().expense_count(), 1);
    assert_eq!(next.ledger().expenses()[0], record);
    assert_eq!(next.ledger().monthly_budget(), 500.0);

    assert!(next.delete_expense(record.id).expect("delete"));
    drop(next);

    let last = reopen_manager(&guard, sample_instant(2025, 6, 3));
    assert!(last.ledger().is_empty());
    assert_eq!(last.ledger().monthly_budget(), 500.0);
}

#[test]
fn deleting_a_missing_id_reports_false_and_changes_nothing() {
    let (mut manager, guard) = setup_manager(sample_instant(2025, 6, 1));
    manager
        .add_expense("Lunch", 12.5, Category::Food, sample_date(2025, 6, 1))
        .expect("add expense");
    assert!(!manager.delete_expense(9999).expect("delete"));

    let next = reopen_manager(&guard, sample_instant(2025, 6, 2));
    assert_eq!(next.ledger().expense_count(), 1);
}

#[test]
fn corrupted_state_loads_as_an_empty_ledger() {
    let temp = TempDir::new().expect("temp dir");
    std::fs::write(temp.path().join("expenses.json"), "{ definitely not json").expect("write");
    std::fs::write(temp.path().join("budget.json"), "NaN-ish").expect("write");

    let mut manager = reopen_manager(&temp, sample_instant(2025, 6, 1));
    assert!(manager.ledger().is_empty());
    assert_eq!(manager.ledger().monthly_budget(), 0.0);

    // The session stays usable and the next save replaces the bad document.
    manager
        .add_expense("Fresh start", 9.0, Category::Other, sample_date(2025, 6, 1))
        .expect("add expense");
    let next = reopen_manager(&temp, sample_instant(2025, 6, 2));
    assert_eq!(next.ledger().expense_count(), 1);
}

#[test]
fn clear_all_persists_an_empty_list() {
    let (mut manager, guard) = setup_manager(sample_instant(2025, 6, 1));
    manager
        .add_expense("Lunch", 12.5, Category::Food, sample_date(2025, 6, 1))
        .expect("add expense");
    manager.clear_all().expect("clear");

    let next = reopen_manager(&guard, sample_instant(2025, 6, 2));
    assert!(next.ledger().is_empty());
}

#[test]
fn ids_stay_unique_across_sessions_with_a_stalled_clock() {
    let instant = sample_instant(2025, 6, 1);
    let (mut manager, guard) = setup_manager(instant);
    let first = manager
        .add_expense("One", 1.0, Category::Other, sample_date(2025, 6, 1))
        .expect("add expense");

    let mut next = reopen_manager(&guard, instant);
    let second = next
        .add_expense("Two", 2.0, Category::Other, sample_date(2025, 6, 1))
        .expect("add expense");
    assert!(second.id > first.id);
}
