//! Error taxonomy shared by signal, journal and session layers.
//!
//! # Responsibility
//! - Separate recoverable input problems from storage failures.
//! - Keep conversion paths explicit via `From` impls.
//!
//! # Invariants
//! - `InvalidInputError` never implies a state change.
//! - No variant here is fatal to the process; callers turn them into notices.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected caller input. Always recoverable.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// Note text is empty or whitespace-only.
    EmptyNoteText,
    /// `recent(n)` was called with `n <= 0`.
    NonPositiveRetrievalCount(i64),
    /// Coherence time must be finite and strictly positive.
    NonPositiveCoherenceTime(f64),
    /// Chapter key does not match any catalog entry.
    UnknownChapter(String),
    /// Affirmation requested for an empty intention.
    EmptyIntention,
    /// Caller-provided timestamp is not `YYYY-MM-DD HH:MM:SS`.
    MalformedTimestamp(String),
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNoteText => write!(f, "note text must not be empty"),
            Self::NonPositiveRetrievalCount(count) => {
                write!(f, "retrieval count must be positive, got {count}")
            }
            Self::NonPositiveCoherenceTime(value) => {
                write!(f, "coherence time must be positive, got {value}")
            }
            Self::UnknownChapter(key) => write!(f, "unknown chapter: `{key}`"),
            Self::EmptyIntention => write!(f, "intention must not be empty"),
            Self::MalformedTimestamp(value) => write!(
                f,
                "timestamp must look like YYYY-MM-DD HH:MM:SS, got `{value}`"
            ),
        }
    }
}

impl Error for InvalidInputError {}

pub type StorageResult<T> = Result<T, StorageError>;

/// Backing-store failure. Not retried.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// A persisted row could not be decoded.
    InvalidData(String),
    /// Connection is open but the journal table is absent.
    MissingRequiredTable(&'static str),
    /// Session is running without a journal.
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table: {table}"),
            Self::Unavailable(reason) => write!(f, "note journal unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Error returned by journal use-cases.
#[derive(Debug)]
pub enum NoteStoreError {
    InvalidInput(InvalidInputError),
    Storage(StorageError),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<InvalidInputError> for NoteStoreError {
    fn from(value: InvalidInputError) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<StorageError> for NoteStoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<DbError> for NoteStoreError {
    fn from(value: DbError) -> Self {
        Self::Storage(StorageError::Db(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidInputError, NoteStoreError, StorageError};
    use std::error::Error;

    #[test]
    fn invalid_input_messages_name_the_value() {
        let message = InvalidInputError::NonPositiveRetrievalCount(-3).to_string();
        assert!(message.contains("-3"));
    }

    #[test]
    fn note_store_error_keeps_source_chain() {
        let err = NoteStoreError::from(StorageError::Unavailable("offline".to_string()));
        assert!(matches!(err, NoteStoreError::Storage(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("offline"));
    }
}
