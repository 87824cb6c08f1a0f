//! Journal use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own the journal connection lifecycle (`NoteStore`).
//! - Keep the session and CLI decoupled from storage details.

pub mod note_journal;
pub mod note_store;
