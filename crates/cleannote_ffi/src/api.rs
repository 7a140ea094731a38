//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose note use cases to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` + message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Validation failures return the exact validation message.

use cleannote_core::db::open_db;
use cleannote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig, Note, NoteOrder, NoteUseCaseError, NoteUseCases, OrderType, SqliteNoteRepository,
    UseCaseResult,
};
use log::error;
use std::path::PathBuf;
use std::sync::OnceLock;

static CORE_CONFIG: OnceLock<CoreConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Note shape exchanged with Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub timestamp: i64,
    pub color: i32,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            timestamp: note.timestamp,
            color: note.color,
        }
    }
}

impl From<NoteItem> for Note {
    fn from(item: NoteItem) -> Self {
        Self {
            title: item.title,
            content: item.content,
            timestamp: item.timestamp,
            color: item.color,
            id: item.id,
        }
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Set when the failure was a title/content validation rejection.
    pub invalid_note: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            invalid_note: false,
            message: message.into(),
        }
    }

    fn failure(err: &NoteUseCaseError) -> Self {
        Self {
            ok: false,
            invalid_note: err.as_invalid_note().is_some(),
            message: err.to_string(),
        }
    }
}

/// List response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListResponse {
    pub ok: bool,
    pub items: Vec<NoteItem>,
    pub message: String,
}

/// Single-note lookup envelope. `item` is `None` when absent or on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteGetResponse {
    pub ok: bool,
    pub item: Option<NoteItem>,
    pub message: String,
}

/// Sort key accepted by `get_notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSortKey {
    Title,
    Date,
    Color,
}

/// Validates and stores one note.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - On validation failure `invalid_note=true` and `message` is the exact field message.
#[flutter_rust_bridge::frb(sync)]
pub fn add_note(note: NoteItem) -> NoteActionResponse {
    let note = Note::from(note);
    match with_repo(|repo| NoteUseCases::new(repo).add_note.invoke(&note)) {
        Ok(()) => NoteActionResponse::success("Note saved."),
        Err(err) => NoteActionResponse::failure(&err),
    }
}

/// Deletes one note. Deleting an unknown note succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_note(note: NoteItem) -> NoteActionResponse {
    let note = Note::from(note);
    match with_repo(|repo| NoteUseCases::new(repo).delete_note.invoke(&note)) {
        Ok(()) => NoteActionResponse::success("Note deleted."),
        Err(err) => NoteActionResponse::failure(&err),
    }
}

/// Fetches one note by id.
#[flutter_rust_bridge::frb(sync)]
pub fn get_note(id: i64) -> NoteGetResponse {
    match with_repo(|repo| NoteUseCases::new(repo).get_note.invoke(id)) {
        Ok(Some(note)) => NoteGetResponse {
            ok: true,
            item: Some(note.into()),
            message: String::new(),
        },
        Ok(None) => NoteGetResponse {
            ok: true,
            item: None,
            message: format!("Note {id} not found."),
        },
        Err(err) => NoteGetResponse {
            ok: false,
            item: None,
            message: err.to_string(),
        },
    }
}

/// Lists notes sorted by `key`; `descending` flips the direction.
#[flutter_rust_bridge::frb(sync)]
pub fn get_notes(key: NoteSortKey, descending: bool) -> NoteListResponse {
    let order = to_note_order(key, descending);
    match with_repo(|repo| NoteUseCases::new(repo).get_notes.invoke(order)) {
        Ok(notes) => NoteListResponse {
            ok: true,
            message: format!("Found {} note(s).", notes.len()),
            items: notes.into_iter().map(NoteItem::from).collect(),
        },
        Err(err) => NoteListResponse {
            ok: false,
            items: Vec::new(),
            message: err.to_string(),
        },
    }
}

fn to_note_order(key: NoteSortKey, descending: bool) -> NoteOrder {
    let order_type = if descending {
        OrderType::Descending
    } else {
        OrderType::Ascending
    };
    match key {
        NoteSortKey::Title => NoteOrder::Title(order_type),
        NoteSortKey::Date => NoteOrder::Date(order_type),
        NoteSortKey::Color => NoteOrder::Color(order_type),
    }
}

fn resolve_db_path() -> PathBuf {
    CORE_CONFIG.get_or_init(CoreConfig::from_env).db_path.clone()
}

fn with_repo<T>(
    f: impl FnOnce(&SqliteNoteRepository<'_>) -> UseCaseResult<T>,
) -> UseCaseResult<T> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        error!("event=ffi_db_open module=ffi status=error error={err}");
        NoteUseCaseError::Repo(err.into())
    })?;
    let repo = SqliteNoteRepository::try_new(&conn)?;
    f(&repo)
}

#[cfg(test)]
mod tests {
    use super::{
        add_note, core_version, delete_note, get_note, get_notes, init_logging, ping, NoteItem,
        NoteSortKey,
    };
    use uuid::Uuid;

    fn note_item(title: String, content: String, id: Option<i64>) -> NoteItem {
        NoteItem {
            id,
            title,
            content,
            timestamp: 1234,
            color: 1,
        }
    }

    fn unique_id() -> i64 {
        (Uuid::new_v4().as_u128() & 0x3FFF_FFFF_FFFF) as i64 + 1
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn add_note_then_get_and_delete() {
        let id = unique_id();
        let item = note_item(Uuid::new_v4().to_string(), "body".to_string(), Some(id));

        let added = add_note(item.clone());
        assert!(added.ok, "{}", added.message);

        let fetched = get_note(id);
        assert!(fetched.ok, "{}", fetched.message);
        assert_eq!(fetched.item, Some(item.clone()));

        let listed = get_notes(NoteSortKey::Date, true);
        assert!(listed.items.iter().any(|note| note.id == Some(id)));

        assert!(delete_note(item).ok);
        assert_eq!(get_note(id).item, None);
    }

    #[test]
    fn add_note_with_blank_title_reports_validation_message() {
        let id = unique_id();
        let response = add_note(note_item(String::new(), "body".to_string(), Some(id)));
        assert!(!response.ok);
        assert!(response.invalid_note);
        assert_eq!(response.message, "The title of the note can't be empty.");
        assert_eq!(get_note(id).item, None);
    }

    #[test]
    fn add_note_with_blank_content_reports_validation_message() {
        let id = unique_id();
        let response = add_note(note_item("title".to_string(), " ".to_string(), Some(id)));
        assert!(!response.ok);
        assert!(response.invalid_note);
        assert_eq!(response.message, "The content of the note can't be empty.");
        assert_eq!(get_note(id).item, None);
    }
}
