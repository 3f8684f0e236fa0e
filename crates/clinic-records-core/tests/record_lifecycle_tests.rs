//! Record lifecycle integration tests.

use clinic_records_core::db::Database;
use clinic_records_core::{
    open_manager, ChangeEvent, RecordForm, RecordManager, RecordStore, RECORDS_SLOT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

fn alice() -> RecordForm {
    RecordForm::new("S1", "Alice", "Flu", "Paracetamol")
}

fn bob() -> RecordForm {
    RecordForm::new("S2", "Bob", "Sprained ankle", "Ice pack")
}

#[test]
fn test_alice_and_bob_scenario() {
    let mut manager = clinic_records_core::open_manager_in_memory().unwrap();

    let a = manager.add(alice()).unwrap();
    let b = manager.add(bob()).unwrap();
    assert_eq!(manager.records(), &[b.clone(), a.clone()]);

    assert_eq!(manager.search("s1"), vec![&a]);

    manager.delete(&a.id).unwrap();
    assert_eq!(manager.records(), &[b.clone()]);

    manager.delete(&a.id).unwrap();
    assert_eq!(manager.records(), &[b]);
}

#[test]
fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db");

    let (a, b) = {
        let mut manager = open_manager(&path).unwrap();
        let a = manager.add(alice()).unwrap();
        let b = manager.add(bob()).unwrap();
        (a, b)
    };

    let manager = open_manager(&path).unwrap();
    assert_eq!(manager.records(), &[b, a]);
}

#[test]
fn test_delete_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db");

    let b = {
        let mut manager = open_manager(&path).unwrap();
        let a = manager.add(alice()).unwrap();
        let b = manager.add(bob()).unwrap();
        manager.delete(&a.id).unwrap();
        b
    };

    let manager = open_manager(&path).unwrap();
    assert_eq!(manager.records(), &[b]);
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db");

    Database::open(&path)
        .unwrap()
        .put_slot(RECORDS_SLOT, "not a record list")
        .unwrap();

    let mut manager = open_manager(&path).unwrap();
    assert!(manager.records().is_empty());

    // The next mutation overwrites the unreadable payload
    let a = manager.add(alice()).unwrap();
    let reopened = open_manager(&path).unwrap();
    assert_eq!(reopened.records(), &[a]);
}

#[test]
fn test_reads_hand_written_payload() {
    let db = Database::open_in_memory().unwrap();
    db.put_slot(
        RECORDS_SLOT,
        r#"[{"id":"1700000000000","studentId":"S9","studentName":"Carol",
             "consultation":"Fever","medicines":"Rest",
             "datetime":"1/2/2024, 10:00:00 AM","status":"Pending"}]"#,
    )
    .unwrap();

    let store = RecordStore::open(db).unwrap();
    let record = &store.all()[0];
    assert_eq!(record.id, "1700000000000");
    assert_eq!(record.student_name, "Carol");
    assert!(!record.status.is_active());
}

#[test]
fn test_edit_resubmit_yields_single_record() {
    let store = RecordStore::open(Database::open_in_memory().unwrap()).unwrap();
    let mut manager = RecordManager::with_rng(store, StdRng::seed_from_u64(1));

    let original = manager.add(alice()).unwrap();
    manager.add(bob()).unwrap();

    let form = manager.edit(&original.id).unwrap().unwrap();
    assert_eq!(manager.records().len(), 1);

    let resubmitted = manager.add(form).unwrap();
    let matching: Vec<_> = manager
        .records()
        .iter()
        .filter(|r| r.to_form() == alice())
        .collect();

    assert_eq!(matching.len(), 1);
    assert_ne!(resubmitted.id, original.id);
    assert_eq!(manager.records()[0], resubmitted);
}

#[test]
fn test_listener_sees_every_notice() {
    let mut manager = clinic_records_core::open_manager_in_memory().unwrap();
    let notices = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notices);
    manager.subscribe(move |event: &ChangeEvent| sink.borrow_mut().push(event.notice()));

    let a = manager.add(alice()).unwrap();
    manager.print(&a.id).unwrap();
    manager.edit(&a.id).unwrap();
    manager.delete("missing").unwrap();

    assert_eq!(
        *notices.borrow(),
        vec![
            "Record added successfully!",
            "Print window opened",
            "Record deleted successfully!",
            "Record loaded for editing",
            "Record deleted successfully!",
        ]
    );
}
