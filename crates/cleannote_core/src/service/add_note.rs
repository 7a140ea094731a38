//! AddNote use case.
//!
//! # Responsibility
//! - Validate a note before it reaches storage.
//! - Forward valid notes unchanged to `NoteRepository::insert`.
//!
//! # Invariants
//! - Exactly one repository write on success, none on failure.
//! - Title is checked before content.

use crate::model::note::Note;
use crate::repo::note_repo::NoteRepository;
use crate::service::error::UseCaseResult;
use log::{info, warn};

/// Validates and stores one note.
pub struct AddNote<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> AddNote<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Runs the use case.
    ///
    /// # Errors
    /// - `InvalidNote` with the exact field message when title or content is blank.
    /// - `Repo` when storage rejects the write.
    pub fn invoke(&self, note: &Note) -> UseCaseResult<()> {
        if let Err(err) = note.validate() {
            warn!(
                "event=note_add module=service status=rejected reason={:?}",
                err
            );
            return Err(err.into());
        }

        let id = self.repo.insert(note)?;
        info!(
            "event=note_add module=service status=ok note_id={} title_len={} content_len={}",
            id,
            note.title.chars().count(),
            note.content.chars().count()
        );
        Ok(())
    }
}
