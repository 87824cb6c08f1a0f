//! Journal domain model.
//!
//! # Responsibility
//! - Define the note record shared by the repository, service and session.
//!
//! # Invariants
//! - Every note is identified by a database-assigned integer id.
//! - Notes are immutable once persisted; there is no update or delete path.

pub mod note;
