//! Note use cases.
//!
//! # Responsibility
//! - Coordinate validation and persistence, one operation per type.
//! - Stay storage-agnostic: every use case is generic over `NoteRepository`.

pub mod add_note;
pub mod delete_note;
pub mod error;
pub mod get_note;
pub mod get_notes;
pub mod note_use_cases;
