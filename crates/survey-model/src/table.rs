//! Raw tabular dataset as handed over by the presentation layer.

use serde::{Deserialize, Serialize};

/// One uploaded survey export: rows are respondents, columns are questions.
///
/// Cells are positionally aligned: `rows[r][c]` answers `headers[c]`.
/// Missing or empty cells are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    /// Number of respondent rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// One column's cells in respondent order. Rows shorter than the header
    /// width contribute `None`.
    pub fn column_values(&self, index: usize) -> Vec<Option<String>> {
        self.rows
            .iter()
            .map(|row| row.get(index).cloned().flatten())
            .collect()
    }
}
