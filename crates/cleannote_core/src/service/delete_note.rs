//! DeleteNote use case.

use crate::model::note::Note;
use crate::repo::note_repo::NoteRepository;
use crate::service::error::UseCaseResult;
use log::info;

/// Removes one note from storage.
pub struct DeleteNote<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> DeleteNote<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Deletes `note`. Notes that were never stored are ignored.
    pub fn invoke(&self, note: &Note) -> UseCaseResult<()> {
        self.repo.delete(note)?;
        info!(
            "event=note_delete module=service status=ok note_id={:?}",
            note.id
        );
        Ok(())
    }
}
