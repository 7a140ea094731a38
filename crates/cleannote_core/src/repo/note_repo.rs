//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the CRUD data-access interface consumed by use cases.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert` with an existing id replaces the stored row.
//! - Assigned ids are never reused, even after the row is deleted.
//! - `delete` of an absent note is a no-op.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    timestamp,
    color
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// Connection was not bootstrapped through `open_db*`.
    MissingRequiredTable(&'static str),
    /// No id is left above the largest one ever assigned.
    IdSpaceExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::IdSpaceExhausted => write!(f, "no note id left to assign"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::MissingRequiredTable(_) | Self::IdSpaceExhausted => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data-access interface for notes.
pub trait NoteRepository {
    /// Stores a note and returns its effective id.
    ///
    /// Assigns an id when `note.id` is `None`; otherwise inserts or replaces
    /// the row with that id.
    fn insert(&self, note: &Note) -> RepoResult<NoteId>;
    /// Removes the row matching `note.id`, if any.
    fn delete(&self, note: &Note) -> RepoResult<()>;
    fn get_note_by_id(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Returns all notes ordered by id ascending.
    fn get_notes(&self) -> RepoResult<Vec<Note>>;
}

impl<R: NoteRepository + ?Sized> NoteRepository for &R {
    fn insert(&self, note: &Note) -> RepoResult<NoteId> {
        (**self).insert(note)
    }

    fn delete(&self, note: &Note) -> RepoResult<()> {
        (**self).delete(note)
    }

    fn get_note_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        (**self).get_note_by_id(id)
    }

    fn get_notes(&self) -> RepoResult<Vec<Note>> {
        (**self).get_notes()
    }
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when the `notes` table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'notes'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::MissingRequiredTable("notes"));
        }
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert(&self, note: &Note) -> RepoResult<NoteId> {
        match note.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT OR REPLACE INTO notes (id, title, content, timestamp, color)
                     VALUES (?1, ?2, ?3, ?4, ?5);",
                    params![
                        id,
                        note.title.as_str(),
                        note.content.as_str(),
                        note.timestamp,
                        note.color,
                    ],
                )?;
                Ok(id)
            }
            None => {
                self.conn.execute(
                    "INSERT INTO notes (title, content, timestamp, color)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        note.title.as_str(),
                        note.content.as_str(),
                        note.timestamp,
                        note.color,
                    ],
                )?;
                Ok(self.conn.last_insert_rowid())
            }
        }
    }

    fn delete(&self, note: &Note) -> RepoResult<()> {
        if let Some(id) = note.id {
            self.conn.execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        }
        Ok(())
    }

    fn get_note_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn get_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let id: NoteId = row.get("id")?;
    let color_raw: i64 = row.get("color")?;
    let color = i32::try_from(color_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid color value `{color_raw}` in notes.color for id {id}"
        ))
    })?;

    Ok(Note {
        title: row.get("title")?,
        content: row.get("content")?,
        timestamp: row.get("timestamp")?,
        color,
        id: Some(id),
    })
}
