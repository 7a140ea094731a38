//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted `Note` record shared by every layer.
//! - Own the write-time validation rule for title and content.
//!
//! # Invariants
//! - `id` is `None` until storage assigns one on insert.
//! - Title and content must be non-empty after trimming, checked in that order.
//! - `color` is an ARGB value; `NOTE_COLORS` is a display hint, not a constraint.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned numeric note identifier.
pub type NoteId = i64;

/// ARGB display colors offered by the note editor.
pub const NOTE_COLORS: [i32; 5] = [
    0xFFFF_AB91_u32 as i32, // red orange
    0xFFE7_ED9B_u32 as i32, // light green
    0xFFCF_94DA_u32 as i32, // violet
    0xFF81_DEEA_u32 as i32, // baby blue
    0xFFF4_8FB1_u32 as i32, // red pink
];

/// A user's note as persisted by the repository layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    /// ARGB display color.
    pub color: i32,
    /// Absent for notes that were never stored.
    pub id: Option<NoteId>,
}

impl Note {
    /// Creates an unsaved note without an id.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        timestamp: i64,
        color: i32,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            timestamp,
            color,
            id: None,
        }
    }

    /// Returns a copy of this note carrying the given id.
    pub fn with_id(mut self, id: NoteId) -> Self {
        self.id = Some(id);
        self
    }

    /// Checks the write-time invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty.
    /// - `EmptyContent` when the trimmed content is empty and the title is not.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Rejection raised when a note fails write-time validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
    EmptyContent,
}

impl NoteValidationError {
    /// User-facing message naming the empty field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "The title of the note can't be empty.",
            Self::EmptyContent => "The content of the note can't be empty.",
        }
    }
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for NoteValidationError {}

#[cfg(test)]
mod tests {
    use super::{Note, NoteValidationError, NOTE_COLORS};

    fn note(title: &str, content: &str) -> Note {
        Note::new(title, content, 1_234, NOTE_COLORS[0])
    }

    #[test]
    fn validate_accepts_filled_note() {
        assert!(note("title", "content").validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_title_before_content() {
        let err = note("  \t", "").validate().unwrap_err();
        assert_eq!(err, NoteValidationError::EmptyTitle);
        assert_eq!(err.to_string(), "The title of the note can't be empty.");
    }

    #[test]
    fn validate_rejects_whitespace_content() {
        let err = note("title", "\n  ").validate().unwrap_err();
        assert_eq!(err, NoteValidationError::EmptyContent);
        assert_eq!(err.to_string(), "The content of the note can't be empty.");
    }

    #[test]
    fn with_id_sets_identifier() {
        assert_eq!(note("a", "b").with_id(7).id, Some(7));
    }

    #[test]
    fn palette_values_are_opaque() {
        for color in NOTE_COLORS {
            assert_eq!((color as u32) >> 24, 0xFF);
        }
    }
}
