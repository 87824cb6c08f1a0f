//! Core logic for the Performans quantum demo.
//! Signal generation, the intention journal and the session boundary live here;
//! drawing and widgets belong to the caller.

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod params;
pub mod repo;
pub mod service;
pub mod session;
pub mod signal;
pub mod view;

pub use config::SessionConfig;
pub use content::{affirmation, Chapter, ChapterContent};
pub use error::{InvalidInputError, NoteStoreError, StorageError, StorageResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId};
pub use params::{CoherenceTime, Intensity};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use service::note_journal::NoteJournal;
pub use service::note_store::{NoteStore, StoreLocation};
pub use session::{ChapterView, Notice, Session, Severity, Submission};
pub use signal::{
    base_wave, coherence_decay, coherence_envelope, collapsed_wave, probability_density,
    stationary_density, Domain, StationaryDensity,
};
pub use view::{Chart, ChartKind, Series, Table};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
