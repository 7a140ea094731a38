//! In-memory note repository.
//!
//! Mirrors `SqliteNoteRepository` semantics without a database, for tests and
//! UI previews. Assigned ids follow SQLite `AUTOINCREMENT`: they grow past the
//! largest id ever stored and are not reused after deletion.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError, RepoResult};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Store {
    notes: BTreeMap<NoteId, Note>,
    /// Largest id ever stored, deleted rows included.
    high_water: NoteId,
}

/// Map-backed fake keyed by note id.
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    store: Mutex<Store>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with pre-built notes, assigning ids where absent.
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> RepoResult<Self> {
        let repo = Self::new();
        for note in notes {
            repo.insert(&note)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.lock().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation is a single map call, so a panicking holder cannot leave
    // the map half-written.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn insert(&self, note: &Note) -> RepoResult<NoteId> {
        let mut store = self.lock();
        let id = match note.id {
            Some(id) => id,
            None => store
                .high_water
                .checked_add(1)
                .ok_or(RepoError::IdSpaceExhausted)?,
        };
        let mut stored = note.clone();
        stored.id = Some(id);
        store.notes.insert(id, stored);
        store.high_water = store.high_water.max(id);
        Ok(id)
    }

    fn delete(&self, note: &Note) -> RepoResult<()> {
        if let Some(id) = note.id {
            self.lock().notes.remove(&id);
        }
        Ok(())
    }

    fn get_note_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        Ok(self.lock().notes.get(&id).cloned())
    }

    fn get_notes(&self) -> RepoResult<Vec<Note>> {
        Ok(self.lock().notes.values().cloned().collect())
    }
}
