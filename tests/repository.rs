use chrono::{NaiveDate, NaiveDateTime};

use medilabo::domain::note::{NewNote, Note};
use medilabo::domain::patient::{NewPatient, Patient};
use medilabo::repository::note::DieselNoteRepository;
use medilabo::repository::patient::DieselPatientRepository;
use medilabo::repository::{NoteReader, NoteWriter, PatientListQuery, PatientReader, PatientWriter};

mod common;

fn new_patient(first_name: &str, last_name: &str) -> NewPatient {
    NewPatient::new(
        first_name.to_string(),
        last_name.to_string(),
        NaiveDate::from_ymd_opt(1966, 12, 31).unwrap(),
        "F".to_string(),
        Some("1 Brookside St".to_string()),
        Some("100-222-3333".to_string()),
    )
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn test_patient_repository_crud() {
    let test_db = common::TestDb::patients("test_patient_repository_crud.db");
    let repo = DieselPatientRepository::new(test_db.pool());

    let alice = repo.create(&new_patient("Alice", "TestNone")).unwrap();
    let bob = repo.create(&new_patient("Bob", "TestBorderline")).unwrap();
    assert!(alice.id > 0);
    assert!(bob.id > alice.id);

    let (total, patients) = repo.list(PatientListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].first_name, "Alice");

    let updates = Patient {
        last_name: "TestInDanger".to_string(),
        address: None,
        ..bob.clone()
    };
    let updated = repo.update(&updates).unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.last_name, "TestInDanger");
    assert_eq!(updated.address, None);

    repo.delete(alice.id).unwrap();
    assert!(repo.get_by_id(alice.id).unwrap().is_none());

    let (total_after, patients_after) = repo.list(PatientListQuery::new()).unwrap();
    assert_eq!(total_after, 1);
    assert_eq!(patients_after[0].last_name, "TestInDanger");
}

#[test]
fn test_patient_repository_pagination() {
    let test_db = common::TestDb::patients("test_patient_repository_pagination.db");
    let repo = DieselPatientRepository::new(test_db.pool());

    for i in 0..12 {
        repo.create(&new_patient(&format!("Patient{i:02}"), "Test"))
            .unwrap();
    }

    let (total, first_page) = repo.list(PatientListQuery::new().paginate(0, 5)).unwrap();
    assert_eq!(total, 12);
    assert_eq!(first_page.len(), 5);
    assert_eq!(first_page[0].first_name, "Patient00");

    let (_, third_page) = repo.list(PatientListQuery::new().paginate(2, 5)).unwrap();
    assert_eq!(third_page.len(), 2);
    assert_eq!(third_page[0].first_name, "Patient10");

    let (total_past_end, past_end) = repo.list(PatientListQuery::new().paginate(5, 5)).unwrap();
    assert_eq!(total_past_end, 12);
    assert!(past_end.is_empty());
}

#[test]
fn test_patient_update_with_unknown_id_fails() {
    let test_db = common::TestDb::patients("test_patient_update_unknown_id.db");
    let repo = DieselPatientRepository::new(test_db.pool());

    let missing = Patient {
        id: 999,
        ..Patient::default()
    };
    assert!(repo.update(&missing).is_err());
}

#[test]
fn test_patient_delete_is_silent_for_unknown_ids() {
    let test_db = common::TestDb::patients("test_patient_delete_unknown_id.db");
    let repo = DieselPatientRepository::new(test_db.pool());

    assert!(repo.delete(999).is_ok());
}

#[test]
fn test_note_repository_crud() {
    let test_db = common::TestDb::notes("test_note_repository_crud.db");
    let repo = DieselNoteRepository::new(test_db.pool());

    let first = repo
        .create(&NewNote::new(
            1,
            at(2023, 1, 5, 10, 0),
            "Patient states that they feel tired".to_string(),
        ))
        .unwrap();
    assert!(!first.id.is_empty());
    assert_eq!(first.patient_id, 1);

    let second = repo
        .create(&NewNote::new(
            1,
            at(2023, 3, 20, 9, 30),
            "Second observation".to_string(),
        ))
        .unwrap();
    assert_ne!(second.id, first.id);

    let other = repo
        .create(&NewNote::new(
            2,
            at(2023, 2, 11, 16, 45),
            "Another patient".to_string(),
        ))
        .unwrap();

    let notes = repo.list_by_patient(1).unwrap();
    assert_eq!(notes.len(), 2);
    // Newest first.
    assert_eq!(notes[0].id, second.id);
    assert_eq!(notes[1].id, first.id);

    let fetched = repo.get_by_id(&first.id).unwrap().unwrap();
    assert_eq!(fetched.content, "Patient states that they feel tired");

    let updated_note = Note {
        content: "Patient states that they feel much better".to_string(),
        ..fetched
    };
    let updated = repo.update(&updated_note).unwrap();
    assert_eq!(updated.content, "Patient states that they feel much better");

    repo.delete(&first.id).unwrap();
    assert!(repo.get_by_id(&first.id).unwrap().is_none());
    assert_eq!(repo.list_by_patient(1).unwrap().len(), 1);
    assert_eq!(repo.list_by_patient(2).unwrap()[0].id, other.id);
}

#[test]
fn test_note_delete_is_silent_for_unknown_ids() {
    let test_db = common::TestDb::notes("test_note_delete_unknown_id.db");
    let repo = DieselNoteRepository::new(test_db.pool());

    assert!(repo.delete("no-such-note").is_ok());
}
