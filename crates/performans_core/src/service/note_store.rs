//! Session-scoped owner of the journal connection.
//!
//! # Responsibility
//! - Acquire the SQLite handle once (`open`) and release it once (`close`).
//! - Route every journal operation through the owned connection.
//!
//! # Invariants
//! - Opening the same file repeatedly is idempotent.
//! - The connection is released on every exit path: explicitly via `close`,
//!   otherwise when the store is dropped.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::error::{NoteStoreError, StorageError, StorageResult};
use crate::model::note::Note;
use crate::repo::note_repo::SqliteNoteRepository;
use crate::service::note_journal::NoteJournal;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Where the journal lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    Memory,
}

/// Append-only intention journal with an explicit lifecycle.
pub struct NoteStore {
    conn: Connection,
    location: StoreLocation,
}

impl NoteStore {
    /// Opens (creating if absent) a file-backed journal.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = open_db(&path)?;
        Self::from_connection(conn, StoreLocation::File(path))
    }

    /// Opens a journal that lives only as long as this store.
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = open_db_in_memory()?;
        Self::from_connection(conn, StoreLocation::Memory)
    }

    fn from_connection(conn: Connection, location: StoreLocation) -> StorageResult<Self> {
        SqliteNoteRepository::try_new(&conn)?;
        info!("event=store_open module=store status=ok location={location:?}");
        Ok(Self { conn, location })
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Appends one note. See [`NoteJournal::append`].
    pub fn append(&self, text: &str) -> Result<Note, NoteStoreError> {
        self.journal().append(text)
    }

    /// Appends one note with an explicit timestamp.
    pub fn append_at(&self, text: &str, timestamp: &str) -> Result<Note, NoteStoreError> {
        self.journal().append_at(text, timestamp)
    }

    /// Returns up to `count` most recent notes, newest first.
    pub fn recent(&self, count: i64) -> Result<Vec<Note>, NoteStoreError> {
        self.journal().recent(count)
    }

    pub fn count(&self) -> Result<u64, NoteStoreError> {
        self.journal().count()
    }

    /// Releases the connection and reports close failures.
    pub fn close(self) -> StorageResult<()> {
        let location = self.location;
        match self.conn.close() {
            Ok(()) => {
                info!("event=store_close module=store status=ok location={location:?}");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=store_close module=store status=error location={:?} error={}",
                    location, err
                );
                Err(StorageError::Db(DbError::Sqlite(err)))
            }
        }
    }

    fn journal(&self) -> NoteJournal<SqliteNoteRepository<'_>> {
        NoteJournal::new(SqliteNoteRepository::new(&self.conn))
    }
}
