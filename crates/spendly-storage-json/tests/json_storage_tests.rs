use spendly_core::{ExpenseStorage, LedgerStore, SummaryService};
use spendly_domain::{Category, ExpenseRecord};
use spendly_storage_json::JsonExpenseStorage;
use std::fs;
use tempfile::tempdir;

#[test]
fn load_returns_none_for_a_fresh_slot() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::new(dir.path().join("data")).expect("create storage");

    assert!(storage.load().expect("load").is_none());
    assert!(!storage.slot_path().exists());
}

#[test]
fn save_and_load_round_trip_preserves_records_and_order() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::new(dir.path()).expect("create storage");

    let records = vec![
        ExpenseRecord::new(100.0, "lunch", Some(Category::Food)),
        ExpenseRecord::new(50.0, "bus", Some(Category::Travel)),
        ExpenseRecord::new(9.99, "misc", None),
    ];
    storage.save(&records).expect("save snapshot");

    let loaded = storage.load().expect("load").expect("slot written");
    assert_eq!(loaded, records);
    assert!(storage.slot_path().exists());
    assert!(!storage.slot_path().with_extension("json.tmp").exists());
}

#[test]
fn save_replaces_the_slot_wholesale() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::new(dir.path()).expect("create storage");

    let first = vec![ExpenseRecord::new(1.0, "a", None)];
    storage.save(&first).expect("first save");
    let second = vec![ExpenseRecord::new(2.0, "b", Some(Category::Bills))];
    storage.save(&second).expect("second save");

    let loaded = storage.load().expect("load").expect("slot written");
    assert_eq!(loaded, second);
}

#[test]
fn corrupt_slot_payload_is_a_load_error() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::new(dir.path()).expect("create storage");
    fs::write(storage.slot_path(), "not json {{{").expect("write garbage");

    assert!(storage.load().is_err());
}

#[test]
fn store_mutations_survive_a_restart_through_the_slot() {
    let dir = tempdir().expect("tempdir");

    {
        let storage = JsonExpenseStorage::new(dir.path()).expect("create storage");
        let mut store = LedgerStore::restore(storage);
        store.add("100", "lunch", Some(Category::Food));
        store.add("50", "bus", Some(Category::Travel));
        store.flush();
    }

    let storage = JsonExpenseStorage::new(dir.path()).expect("reopen storage");
    let store = LedgerStore::restore(storage);
    assert_eq!(store.len(), 2);
    assert_eq!(SummaryService::total(store.snapshot()), 150.0);
    assert_eq!(store.snapshot()[0].note, "lunch");
    assert_eq!(store.snapshot()[1].category, Some(Category::Travel));
}

#[test]
fn store_restores_empty_from_a_corrupt_slot() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::new(dir.path()).expect("create storage");
    fs::write(storage.slot_path(), "[{\"id\": 7}]").expect("write garbage");

    let store = LedgerStore::restore(storage);
    assert!(store.is_empty());
}
