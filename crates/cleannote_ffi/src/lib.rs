//! Flutter bridge for the CleanNote core.

pub mod api;
