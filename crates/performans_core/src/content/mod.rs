//! Static educational content.
//!
//! # Responsibility
//! - Resolve chapter keys to static text records tagged with a chart kind.
//! - Phrase affirmations for submitted intentions.
//!
//! # Invariants
//! - Content is data only; charts are produced by the caller per view.

pub mod chapter;
pub mod practice;

pub use chapter::{Chapter, ChapterContent};
pub use practice::affirmation;
