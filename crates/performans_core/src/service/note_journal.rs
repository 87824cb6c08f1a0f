//! Intention journal use-case service.
//!
//! # Responsibility
//! - Validate note text, timestamps and retrieval counts before touching storage.
//! - Stamp new notes with the current UTC wall-clock time.
//!
//! # Invariants
//! - Invalid input never reaches the repository.
//! - `recent(n)` returns at most `n` and at least `min(n, total)` notes.
//! - Note text is never written to logs; only ids and counts are.

use crate::error::{InvalidInputError, NoteStoreError};
use crate::model::note::{now_timestamp, validate_note_text, validate_timestamp, Note};
use crate::repo::note_repo::NoteRepository;
use log::{debug, error, info};

/// Journal service facade over repository implementations.
pub struct NoteJournal<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteJournal<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends one note stamped with the current UTC time.
    pub fn append(&self, text: &str) -> Result<Note, NoteStoreError> {
        self.append_at(text, &now_timestamp())
    }

    /// Appends one note with a caller-provided timestamp.
    ///
    /// Used by imports and tests that need deterministic timestamps.
    ///
    /// # Errors
    /// - `MalformedTimestamp` when `timestamp` is not `YYYY-MM-DD HH:MM:SS`.
    pub fn append_at(&self, text: &str, timestamp: &str) -> Result<Note, NoteStoreError> {
        validate_note_text(text)?;
        validate_timestamp(timestamp)?;

        match self.repo.append_note(text, timestamp) {
            Ok(note) => {
                info!(
                    "event=note_append module=journal status=ok id={} chars={}",
                    note.id,
                    note.text.chars().count()
                );
                Ok(note)
            }
            Err(err) => {
                error!(
                    "event=note_append module=journal status=error error_code=storage_write_failed error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Returns up to `count` most recent notes, newest first.
    pub fn recent(&self, count: i64) -> Result<Vec<Note>, NoteStoreError> {
        if count <= 0 {
            return Err(InvalidInputError::NonPositiveRetrievalCount(count).into());
        }
        let limit = u32::try_from(count).unwrap_or(u32::MAX);

        let notes = self.repo.recent_notes(limit)?;
        debug!(
            "event=note_recent module=journal status=ok requested={} returned={}",
            count,
            notes.len()
        );
        Ok(notes)
    }

    /// Returns the number of stored notes.
    pub fn count(&self) -> Result<u64, NoteStoreError> {
        Ok(self.repo.count_notes()?)
    }
}
