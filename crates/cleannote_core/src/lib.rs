//! Core domain logic for CleanNote.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{CoreConfig, DbPathSource};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LogLevel,
};
pub use model::note::{Note, NoteId, NoteValidationError, NOTE_COLORS};
pub use model::order::{NoteOrder, OrderType};
pub use repo::memory_repo::InMemoryNoteRepository;
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::add_note::AddNote;
pub use service::delete_note::DeleteNote;
pub use service::error::{NoteUseCaseError, UseCaseResult};
pub use service::get_note::GetNote;
pub use service::get_notes::GetNotes;
pub use service::note_use_cases::NoteUseCases;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
