//! Intention repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Append note rows and read the most recent ones back.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Rows are insert-only; there is no update or delete path.
//! - Recent queries are ordered `timestamp DESC, id DESC`.
//! - Read paths reject malformed persisted rows instead of masking them.

use crate::error::{StorageError, StorageResult};
use crate::model::note::{Note, NoteId};
use rusqlite::{params, Connection, Row};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    text,
    timestamp
FROM intentions";

/// Repository interface for the append-only intention journal.
pub trait NoteRepository {
    /// Persists one note and returns the stored record.
    fn append_note(&self, text: &str, timestamp: &str) -> StorageResult<Note>;
    /// Returns up to `limit` notes, newest first.
    fn recent_notes(&self, limit: u32) -> StorageResult<Vec<Note>>;
    /// Returns the total number of stored notes.
    fn count_notes(&self) -> StorageResult<u64>;
}

/// SQLite-backed intention repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Wraps a connection already known to carry the journal schema.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Constructs a repository after checking the journal table exists.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        ensure_note_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn append_note(&self, text: &str, timestamp: &str) -> StorageResult<Note> {
        self.conn.execute(
            "INSERT INTO intentions (text, timestamp) VALUES (?1, ?2);",
            params![text, timestamp],
        )?;
        let id: NoteId = self.conn.last_insert_rowid();

        Ok(Note {
            id,
            text: text.to_string(),
            timestamp: timestamp.to_string(),
        })
    }

    fn recent_notes(&self, limit: u32) -> StorageResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL}
             ORDER BY timestamp DESC, id DESC
             LIMIT ?1;"
        ))?;

        let mut rows = stmt.query([i64::from(limit)])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn count_notes(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM intentions;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| StorageError::InvalidData(format!("negative note count `{count}`")))
    }
}

fn parse_note_row(row: &Row<'_>) -> StorageResult<Note> {
    let id: NoteId = row.get("id")?;
    let text: String = row.get("text")?;
    if text.trim().is_empty() {
        return Err(StorageError::InvalidData(format!(
            "empty text in intentions.text for id {id}"
        )));
    }

    Ok(Note {
        id,
        text,
        timestamp: row.get("timestamp")?,
    })
}

fn ensure_note_connection_ready(conn: &Connection) -> StorageResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'intentions'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(StorageError::MissingRequiredTable("intentions"));
    }
    Ok(())
}
