//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve the note database path and logging settings for host shells.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never fails; missing values fall back to defaults.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "CLEANNOTE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "CLEANNOTE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "CLEANNOTE_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "cleannote.sqlite3";

/// Where `CoreConfig::db_path` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbPathSource {
    /// `CLEANNOTE_DB_PATH` was set.
    Env,
    /// Fallback file in the system temp dir.
    TempDir,
}

impl DbPathSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::TempDir => "temp_dir",
        }
    }
}

/// Settings consumed by FFI and CLI entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file holding notes.
    pub db_path: PathBuf,
    pub db_path_source: DbPathSource,
    /// One of `trace|debug|info|warn|error`; validated by `init_logging`.
    pub log_level: String,
    /// Absolute log directory. File logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let (db_path, db_path_source) = match non_blank(DB_PATH_ENV) {
            Some(path) => (PathBuf::from(path), DbPathSource::Env),
            None => (
                std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
                DbPathSource::TempDir,
            ),
        };

        Self {
            db_path,
            db_path_source,
            log_level: non_blank(LOG_LEVEL_ENV)
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CoreConfig, DbPathSource, DB_PATH_ENV, DEFAULT_DB_FILE_NAME, LOG_DIR_ENV, LOG_LEVEL_ENV,
    };
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = CoreConfig::from_lookup(lookup(&[]));
        assert!(config.db_path.ends_with(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.db_path_source, DbPathSource::TempDir);
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_values_are_ignored_and_others_trimmed() {
        let config = CoreConfig::from_lookup(lookup(&[
            (DB_PATH_ENV, "  /data/notes.db "),
            (LOG_LEVEL_ENV, "   "),
            (LOG_DIR_ENV, "/var/log/cleannote"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/data/notes.db"));
        assert_eq!(config.db_path_source, DbPathSource::Env);
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/cleannote")));
    }
}
