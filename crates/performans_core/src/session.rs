//! Single-user session: the boundary between the shell and the core.
//!
//! # Responsibility
//! - Own the journal handle for the whole session (`open` .. `close`).
//! - Recompute every chart per view; nothing is cached.
//! - Convert every failure into a displayable `Notice`.
//!
//! # Invariants
//! - `Session::open` never fails; without a journal it runs degraded and the
//!   signal views keep working.
//! - The journal is closed exactly once, by `close` or on drop.

use crate::config::SessionConfig;
use crate::content::{affirmation, Chapter};
use crate::error::{InvalidInputError, NoteStoreError, StorageError};
use crate::model::note::Note;
use crate::params::{CoherenceTime, Intensity};
use crate::service::note_store::NoteStore;
use crate::signal::Domain;
use crate::view::{
    collapse_chart, decoherence_chart, notes_table, phenomena_table, stationary_chart, Chart,
    ChartKind, Table,
};
use log::{error, warn};
use serde::Serialize;

/// How prominently a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// User-visible outcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }
}

impl From<InvalidInputError> for Notice {
    fn from(value: InvalidInputError) -> Self {
        Self {
            severity: Severity::Warning,
            message: capitalize(&value.to_string()),
        }
    }
}

impl From<StorageError> for Notice {
    fn from(value: StorageError) -> Self {
        Self {
            severity: Severity::Error,
            message: format!("Note journal is unavailable right now ({value})."),
        }
    }
}

impl From<NoteStoreError> for Notice {
    fn from(value: NoteStoreError) -> Self {
        match value {
            NoteStoreError::InvalidInput(err) => err.into(),
            NoteStoreError::Storage(err) => err.into(),
        }
    }
}

/// Chapter text plus its freshly computed illustration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterView {
    pub chapter: Chapter,
    pub title: &'static str,
    pub summary: &'static str,
    pub chart: Option<Chart>,
}

/// Result of submitting an intention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub note: Note,
    pub affirmation: String,
}

pub struct Session {
    config: SessionConfig,
    store: Option<NoteStore>,
    unavailable_reason: Option<String>,
    position: Domain,
    time: Domain,
}

impl Session {
    /// Opens the journal configured in `config`, degrading on failure.
    pub fn open(config: SessionConfig) -> Self {
        let opened = match config.resolved_db_path() {
            Some(path) => NoteStore::open(path),
            None => NoteStore::open_in_memory(),
        };
        let (store, unavailable_reason) = match opened {
            Ok(store) => (Some(store), None),
            Err(err) => {
                error!(
                    "event=session_open module=session status=degraded error_code=store_open_failed error={}",
                    err
                );
                (None, Some(err.to_string()))
            }
        };

        let samples = config.effective_sample_count();
        Self {
            position: Domain::position(samples),
            time: Domain::time(samples),
            config,
            store,
            unavailable_reason,
        }
    }

    /// Builds a session around an already opened store.
    pub fn with_store(config: SessionConfig, store: NoteStore) -> Self {
        let samples = config.effective_sample_count();
        Self {
            position: Domain::position(samples),
            time: Domain::time(samples),
            config,
            store: Some(store),
            unavailable_reason: None,
        }
    }

    pub fn journal_available(&self) -> bool {
        self.store.is_some()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Collapse view for a raw slider value; out-of-range values are clamped.
    pub fn collapse_view(&self, raw_intensity: f64) -> Chart {
        collapse_chart(&self.position, Intensity::clamped(raw_intensity))
    }

    /// Decoherence view. Non-positive times are rejected, large ones clamped.
    pub fn decoherence_view(&self, raw_ms: i64) -> Result<Chart, Notice> {
        if raw_ms <= 0 {
            return Err(InvalidInputError::NonPositiveCoherenceTime(raw_ms as f64).into());
        }
        decoherence_chart(&self.time, CoherenceTime::clamped(raw_ms)).map_err(Notice::from)
    }

    pub fn stationary_view(&self) -> Chart {
        stationary_chart(&self.position)
    }

    /// Phenomena summary with the collapse row following the slider.
    pub fn phenomena_view(&self, raw_intensity: f64) -> Table {
        phenomena_table(Intensity::clamped(raw_intensity))
    }

    /// Resolves a chapter key and renders its illustration with the current
    /// parameters.
    pub fn chapter_view(
        &self,
        key: &str,
        raw_intensity: f64,
        coherence_ms: i64,
    ) -> Result<ChapterView, Notice> {
        let chapter: Chapter = key.parse()?;
        let content = chapter.content();
        let chart = match content.chart {
            Some(ChartKind::WaveCollapse) => Some(self.collapse_view(raw_intensity)),
            Some(ChartKind::CoherenceDecay) => Some(decoherence_chart(
                &self.time,
                CoherenceTime::clamped(coherence_ms),
            )?),
            Some(ChartKind::StationaryDensity) => Some(self.stationary_view()),
            None => None,
        };
        Ok(ChapterView {
            chapter,
            title: content.title,
            summary: content.summary,
            chart,
        })
    }

    /// Persists an intention and phrases its affirmation.
    pub fn submit_intention(&self, text: &str) -> Result<Submission, Notice> {
        let store = self.store()?;
        let note = store.append(text)?;
        let affirmation = affirmation(&note.text)?;
        Ok(Submission { note, affirmation })
    }

    /// Journal table of the configured number of most recent notes.
    pub fn recent_intentions(&self) -> Result<Table, Notice> {
        let store = self.store()?;
        let notes = store.recent(self.config.recent_count)?;
        Ok(notes_table(&notes))
    }

    /// Closes the journal, reporting a close failure as a notice.
    pub fn close(mut self) -> Notice {
        match self.store.take() {
            Some(store) => match store.close() {
                Ok(()) => Notice::success("Journal closed."),
                Err(err) => err.into(),
            },
            None => Notice::success("Session ended without a journal."),
        }
    }

    fn store(&self) -> Result<&NoteStore, StorageError> {
        self.store.as_ref().ok_or_else(|| {
            StorageError::Unavailable(
                self.unavailable_reason
                    .clone()
                    .unwrap_or_else(|| "journal closed".to_string()),
            )
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(store) = self.store.take() {
            if let Err(err) = store.close() {
                warn!(
                    "event=session_drop module=session status=error error_code=store_close_failed error={}",
                    err
                );
            }
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
