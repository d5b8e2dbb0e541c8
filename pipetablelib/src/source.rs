//! The data-source capability consumed by the renderer.
//!
//! A [`TabularDataSource`] reports how many rows and columns it has, a label
//! for each column, and a string for each cell. The renderer additionally
//! requires [`std::fmt::Display`], whose output becomes the title line.
//!
//! Lookups outside the reported bounds must fail with an index error rather
//! than fall back to a default value. [`check_column`] and [`check_row`] do
//! the bounds check for implementors.

use crate::error::TableError;
use crate::Result;

/// Anything that can be rendered as a table.
///
/// Counts must stay stable for the duration of a single render, and both
/// lookups must be deterministic.
pub trait TabularDataSource {
    /// Number of data rows
    fn row_count(&self) -> usize;

    /// Number of columns
    fn column_count(&self) -> usize;

    /// Header label for `column`
    fn label(&self, column: usize) -> Result<String>;

    /// Cell value at (`row`, `column`)
    fn item(&self, row: usize, column: usize) -> Result<String>;
}

impl<T: TabularDataSource + ?Sized> TabularDataSource for &T {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn label(&self, column: usize) -> Result<String> {
        (**self).label(column)
    }

    fn item(&self, row: usize, column: usize) -> Result<String> {
        (**self).item(row, column)
    }
}

/// Fail with [`TableError::InvalidColumnIndex`] unless `column < column_count`.
pub fn check_column(column: usize, column_count: usize) -> Result<()> {
    if column < column_count {
        Ok(())
    } else {
        Err(TableError::InvalidColumnIndex {
            column,
            column_count,
        })
    }
}

/// Fail with [`TableError::InvalidRowIndex`] unless `row < row_count`.
pub fn check_row(row: usize, row_count: usize) -> Result<()> {
    if row < row_count {
        Ok(())
    } else {
        Err(TableError::InvalidRowIndex { row, row_count })
    }
}
