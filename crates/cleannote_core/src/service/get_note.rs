//! GetNote use case.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::service::error::UseCaseResult;

/// Looks up one note by id.
pub struct GetNote<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> GetNote<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn invoke(&self, id: NoteId) -> UseCaseResult<Option<Note>> {
        Ok(self.repo.get_note_by_id(id)?)
    }
}
