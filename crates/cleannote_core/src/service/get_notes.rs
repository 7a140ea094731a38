//! GetNotes use case.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep storage (id ascending) order.

use crate::model::note::Note;
use crate::model::order::NoteOrder;
use crate::repo::note_repo::NoteRepository;
use crate::service::error::UseCaseResult;
use log::debug;

/// Lists every stored note in the requested order.
pub struct GetNotes<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> GetNotes<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn invoke(&self, order: NoteOrder) -> UseCaseResult<Vec<Note>> {
        let mut notes = self.repo.get_notes()?;
        order.sort(&mut notes);
        debug!(
            "event=note_list module=service status=ok count={} order={:?}",
            notes.len(),
            order
        );
        Ok(notes)
    }
}
