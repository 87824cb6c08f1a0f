//! Tabular projections for notes and the static phenomena summary.

use crate::model::note::Note;
use crate::params::Intensity;
use serde::{Deserialize, Serialize};

/// Ordered rows of (field name → value) cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|column| (*column).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Journal table, rows in the order given (newest first from `recent`).
pub fn notes_table(notes: &[Note]) -> Table {
    let mut table = Table::new(&["id", "text", "timestamp"]);
    for note in notes {
        table.push_row(vec![
            note.id.to_string(),
            note.text.clone(),
            note.timestamp.clone(),
        ]);
    }
    table
}

/// Static phenomena summary; the collapse row tracks the current intensity.
pub fn phenomena_table(intensity: Intensity) -> Table {
    let mut table = Table::new(&["phenomenon", "probability"]);
    for (name, probability) in [
        ("Entanglement", 0.8),
        ("Superposition", 0.5),
        ("Collapse", intensity.value()),
    ] {
        table.push_row(vec![name.to_string(), format!("{probability:.2}")]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::{notes_table, phenomena_table};
    use crate::model::note::Note;
    use crate::params::Intensity;

    #[test]
    fn notes_table_keeps_field_order() {
        let table = notes_table(&[Note {
            id: 7,
            text: "health and abundance".to_string(),
            timestamp: "2026-03-01 08:00:00".to_string(),
        }]);
        assert_eq!(table.columns, vec!["id", "text", "timestamp"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0],
            vec!["7", "health and abundance", "2026-03-01 08:00:00"]
        );
    }

    #[test]
    fn phenomena_collapse_row_follows_intensity() {
        let table = phenomena_table(Intensity::clamped(0.25));
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[2], vec!["Collapse".to_string(), "0.25".to_string()]);
    }
}
