use cleannote_core::db::open_db_in_memory;
use cleannote_core::{
    AddNote, InMemoryNoteRepository, Note, NoteRepository, NoteUseCaseError, NoteValidationError,
    SqliteNoteRepository,
};
use uuid::Uuid;

const NOTE_ID: i64 = 123;

fn random_text() -> String {
    Uuid::new_v4().to_string()
}

fn note_with(title: String, content: String) -> Note {
    Note {
        title,
        content,
        timestamp: 1234,
        color: 1,
        id: Some(NOTE_ID),
    }
}

#[test]
fn add_note_inserts_identical_note() {
    let repo = InMemoryNoteRepository::new();
    let add_note = AddNote::new(&repo);
    let note = note_with(random_text(), random_text());

    assert_eq!(repo.get_note_by_id(NOTE_ID).unwrap(), None);
    add_note.invoke(&note).unwrap();

    assert_eq!(repo.get_note_by_id(NOTE_ID).unwrap(), Some(note));
}

#[test]
fn add_note_with_empty_title_is_rejected_and_not_stored() {
    let repo = InMemoryNoteRepository::new();
    let add_note = AddNote::new(&repo);

    let err = add_note
        .invoke(&note_with(String::new(), random_text()))
        .unwrap_err();

    assert!(matches!(
        err,
        NoteUseCaseError::InvalidNote(NoteValidationError::EmptyTitle)
    ));
    assert_eq!(err.to_string(), "The title of the note can't be empty.");
    assert_eq!(repo.get_note_by_id(NOTE_ID).unwrap(), None);
}

#[test]
fn add_note_with_empty_content_is_rejected_and_not_stored() {
    let repo = InMemoryNoteRepository::new();
    let add_note = AddNote::new(&repo);

    let err = add_note
        .invoke(&note_with(random_text(), String::new()))
        .unwrap_err();

    assert_eq!(
        err.as_invalid_note(),
        Some(NoteValidationError::EmptyContent)
    );
    assert_eq!(err.to_string(), "The content of the note can't be empty.");
    assert_eq!(repo.get_note_by_id(NOTE_ID).unwrap(), None);
}

#[test]
fn add_note_reports_title_first_when_both_are_blank() {
    let repo = InMemoryNoteRepository::new();
    let add_note = AddNote::new(&repo);

    let err = add_note
        .invoke(&note_with("   ".to_string(), "\t\n".to_string()))
        .unwrap_err();

    assert_eq!(err.to_string(), "The title of the note can't be empty.");
    assert!(repo.is_empty());
}

#[test]
fn add_note_through_sqlite_round_trips_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();
    let add_note = AddNote::new(&repo);
    let note = note_with(random_text(), random_text());

    add_note.invoke(&note).unwrap();

    assert_eq!(repo.get_note_by_id(NOTE_ID).unwrap(), Some(note));
}

#[test]
fn add_note_without_id_gets_storage_assigned_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();
    let add_note = AddNote::new(&repo);

    add_note
        .invoke(&Note::new("groceries", "milk, eggs", 42, 7))
        .unwrap();

    let stored = repo.get_notes().unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].id.is_some());
    assert_eq!(stored[0].title, "groceries");
}
