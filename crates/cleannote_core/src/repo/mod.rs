//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract consumed by use cases.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repositories store notes as given; validation belongs to use cases.
//! - SQLite and in-memory implementations share insert/delete semantics,
//!   including `AUTOINCREMENT`-style id assignment.

pub mod memory_repo;
pub mod note_repo;
