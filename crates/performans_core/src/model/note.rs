//! Note (intention) domain model.
//!
//! # Responsibility
//! - Define the canonical persisted note record.
//! - Own text validation and timestamp formatting rules.
//!
//! # Invariants
//! - `text` is never empty or whitespace-only.
//! - `timestamp` is UTC wall-clock time formatted `YYYY-MM-DD HH:MM:SS`, so
//!   lexical order matches chronological order.

use crate::error::InvalidInputError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Storage id for one note. Strictly increasing in insertion order.
pub type NoteId = i64;

/// `strftime` pattern used for persisted timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One persisted intention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    /// Second precision; ties are ordered by `id`.
    pub timestamp: String,
}

/// Rejects empty and whitespace-only note text.
pub fn validate_note_text(text: &str) -> Result<(), InvalidInputError> {
    if text.trim().is_empty() {
        return Err(InvalidInputError::EmptyNoteText);
    }
    Ok(())
}

/// Rejects timestamps that would not sort among generated ones.
///
/// The value must parse with `TIMESTAMP_FORMAT` and print back unchanged,
/// which rules out missing zero padding and trailing text.
pub fn validate_timestamp(timestamp: &str) -> Result<(), InvalidInputError> {
    let malformed = || InvalidInputError::MalformedTimestamp(timestamp.to_string());
    let parsed =
        NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| malformed())?;
    if parsed.format(TIMESTAMP_FORMAT).to_string() != timestamp {
        return Err(malformed());
    }
    Ok(())
}

/// Formats the current UTC wall-clock time for persistence.
pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

/// Formats any zoned instant with second precision.
pub fn format_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{
        format_timestamp, now_timestamp, validate_note_text, validate_timestamp,
        TIMESTAMP_FORMAT,
    };
    use crate::error::InvalidInputError;
    use chrono::{NaiveDateTime, TimeZone, Utc};

    #[test]
    fn validate_rejects_blank_text() {
        assert_eq!(
            validate_note_text("  \n\t").unwrap_err(),
            InvalidInputError::EmptyNoteText
        );
        assert_eq!(
            validate_note_text("").unwrap_err(),
            InvalidInputError::EmptyNoteText
        );
        assert!(validate_note_text(" health ").is_ok());
    }

    #[test]
    fn timestamp_has_second_precision_layout() {
        let instant = Utc.with_ymd_and_hms(2026, 2, 13, 9, 5, 7).unwrap();
        assert_eq!(format_timestamp(&instant), "2026-02-13 09:05:07");
        assert_eq!(now_timestamp().len(), "YYYY-MM-DD HH:MM:SS".len());
    }

    #[test]
    fn now_timestamp_is_utc() {
        let stamped = NaiveDateTime::parse_from_str(&now_timestamp(), TIMESTAMP_FORMAT)
            .unwrap()
            .and_utc();
        let drift = (Utc::now() - stamped).num_seconds();
        assert!((0..=5).contains(&drift), "drift {drift}s");
    }

    #[test]
    fn validate_timestamp_accepts_only_stored_layout() {
        assert!(validate_timestamp("2026-02-13 09:05:07").is_ok());
        for broken in [
            "yesterday",
            "",
            "2026-2-13 09:05:07",
            "2026-02-13T09:05:07",
            "2026-02-13 09:05:07Z",
            "2026-02-30 09:05:07",
            "9999-99-99",
        ] {
            assert_eq!(
                validate_timestamp(broken).unwrap_err(),
                InvalidInputError::MalformedTimestamp(broken.to_string())
            );
        }
    }
}
