//! Error type shared by note use cases.

use crate::model::note::NoteValidationError;
use crate::repo::note_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type UseCaseResult<T> = Result<T, NoteUseCaseError>;

/// Failure surfaced to the UI layer by note use cases.
#[derive(Debug)]
pub enum NoteUseCaseError {
    /// The note broke a write-time invariant; nothing was stored.
    InvalidNote(NoteValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl NoteUseCaseError {
    /// Returns the validation rejection, if this is one.
    pub fn as_invalid_note(&self) -> Option<NoteValidationError> {
        match self {
            Self::InvalidNote(err) => Some(*err),
            Self::Repo(_) => None,
        }
    }
}

impl Display for NoteUseCaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNote(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteUseCaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNote(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteUseCaseError {
    fn from(value: NoteValidationError) -> Self {
        Self::InvalidNote(value)
    }
}

impl From<RepoError> for NoteUseCaseError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
