//! Bundle of note use cases sharing one repository.
//!
//! # Responsibility
//! - Give UI/FFI layers a single handle over every note operation.
//! - Keep UI/FFI layers decoupled from storage details.

use crate::repo::note_repo::NoteRepository;
use crate::service::add_note::AddNote;
use crate::service::delete_note::DeleteNote;
use crate::service::get_note::GetNote;
use crate::service::get_notes::GetNotes;

/// Note use cases borrowing one repository.
pub struct NoteUseCases<'repo, R: NoteRepository + ?Sized> {
    pub add_note: AddNote<&'repo R>,
    pub delete_note: DeleteNote<&'repo R>,
    pub get_note: GetNote<&'repo R>,
    pub get_notes: GetNotes<&'repo R>,
}

impl<'repo, R: NoteRepository + ?Sized> NoteUseCases<'repo, R> {
    pub fn new(repo: &'repo R) -> Self {
        Self {
            add_note: AddNote::new(repo),
            delete_note: DeleteNote::new(repo),
            get_note: GetNote::new(repo),
            get_notes: GetNotes::new(repo),
        }
    }
}
