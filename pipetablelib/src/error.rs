//! Error types for pipetablelib

use thiserror::Error;

/// Errors that can occur while rendering a table
#[derive(Error, Debug)]
pub enum TableError {
    /// A data source was asked for a column it does not have
    #[error("invalid column index {column} (source has {column_count} columns)")]
    InvalidColumnIndex { column: usize, column_count: usize },

    /// A data source was asked for a row it does not have
    #[error("invalid row index {row} (source has {row_count} rows)")]
    InvalidRowIndex { row: usize, row_count: usize },

    /// Unknown alignment name
    #[error("invalid alignment '{0}': expected 'left' or 'right'")]
    InvalidAlignment(String),

    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
