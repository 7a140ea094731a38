//! Domain model for notes.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules next to the data they guard.
//!
//! # Invariants
//! - A stored note is identified by a storage-assigned `NoteId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod note;
pub mod order;
