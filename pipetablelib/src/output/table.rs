//! The rendered table value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully rendered table.
///
/// `header` and each entry of `rows` are complete, padded lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    /// Title line (the data source's description)
    pub title: String,
    /// Computed width of each column, excluding the surrounding spaces and `|`
    pub widths: Vec<usize>,
    /// Header line built from the column labels
    pub header: String,
    /// One line per data row, in row order
    pub rows: Vec<String>,
}

impl RenderedTable {
    /// All output lines in print order: title, header, then rows.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(std::iter::once(self.header.as_str()))
            .chain(self.rows.iter().map(String::as_str))
    }

    pub fn column_count(&self) -> usize {
        self.widths.len()
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
