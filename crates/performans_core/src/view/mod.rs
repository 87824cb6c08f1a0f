//! Render-ready projections of signal and journal outputs.
//!
//! # Responsibility
//! - Assemble named (x, y) series into charts.
//! - Assemble notes and static facts into ordered tables.
//!
//! # Invariants
//! - Every series has `x.len() == y.len()`.
//! - Table rows carry cells in column order.

pub mod chart;
pub mod table;

pub use chart::{collapse_chart, decoherence_chart, stationary_chart, Chart, ChartKind, Series};
pub use table::{notes_table, phenomena_table, Table};
