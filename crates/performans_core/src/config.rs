//! Session configuration.
//!
//! # Responsibility
//! - Carry the few knobs a session needs: journal location and sizes.
//!
//! # Invariants
//! - `db_path = None` selects an in-memory journal.
//! - Sizes are normalized before use: zero falls back to the default and
//!   anything above `MAX_SAMPLE_COUNT` is capped.

use crate::params::RECENT_NOTES_COUNT;
use crate::signal::domain::{DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default journal file name when a directory is given instead of a file.
pub const DEFAULT_DB_FILE_NAME: &str = "performans_intentions.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Journal file. `None` keeps notes in memory for the session only.
    pub db_path: Option<PathBuf>,
    /// Rows shown by the journal view.
    pub recent_count: i64,
    /// Samples per chart axis.
    pub sample_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            recent_count: RECENT_NOTES_COUNT,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl SessionConfig {
    /// File-backed configuration with default sizes.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Resolves a path that may point at a directory to the journal file.
    pub fn resolved_db_path(&self) -> Option<PathBuf> {
        self.db_path.as_ref().map(|path| {
            if path.is_dir() {
                path.join(DEFAULT_DB_FILE_NAME)
            } else {
                path.clone()
            }
        })
    }

    pub(crate) fn effective_sample_count(&self) -> usize {
        match self.sample_count {
            0 => DEFAULT_SAMPLE_COUNT,
            count => count.min(MAX_SAMPLE_COUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionConfig, DEFAULT_DB_FILE_NAME};
    use crate::signal::domain::MAX_SAMPLE_COUNT;

    #[test]
    fn defaults_match_journal_view() {
        let config = SessionConfig::default();
        assert_eq!(config.recent_count, 5);
        assert_eq!(config.sample_count, 1000);
        assert!(config.db_path.is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"recent_count": 3}"#).unwrap();
        assert_eq!(config.recent_count, 3);
        assert_eq!(config.sample_count, 1000);
    }

    #[test]
    fn directory_path_resolves_to_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::with_db_path(dir.path());
        assert_eq!(
            config.resolved_db_path().unwrap(),
            dir.path().join(DEFAULT_DB_FILE_NAME)
        );
    }

    #[test]
    fn zero_sample_count_is_normalized() {
        let config = SessionConfig {
            sample_count: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.effective_sample_count(), 1000);
    }

    #[test]
    fn oversized_sample_count_is_capped() {
        for sample_count in [5001, 1 << 40, usize::MAX] {
            let config = SessionConfig {
                sample_count,
                ..SessionConfig::default()
            };
            assert_eq!(config.effective_sample_count(), MAX_SAMPLE_COUNT);
        }
    }
}
