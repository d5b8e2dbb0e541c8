//! The table renderer.
//!
//! Rendering is two passes over the data source:
//!
//! 1. Scan every label and every cell to find each column's width.
//! 2. Pad the header and every data row to those widths.
//!
//! Nothing is emitted until both passes succeed, so a failing lookup aborts
//! the render without leaving a partial table behind.

use std::fmt::Display;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::options::{Alignment, RenderOptions};
use crate::output::RenderedTable;
use crate::source::TabularDataSource;
use crate::Result;

/// Display width of a cell, counted in terminal columns rather than bytes.
pub fn text_width(text: &str) -> usize {
    console::measure_text_width(text)
}

/// Compute the width of every column.
///
/// `width[c]` is the widest of the column's label and all of its cells.
pub fn column_widths<S>(source: &S) -> Result<Vec<usize>>
where
    S: TabularDataSource + ?Sized,
{
    let row_count = source.row_count();

    (0..source.column_count())
        .map(|column| {
            let mut width = text_width(&source.label(column)?);
            for row in 0..row_count {
                width = width.max(text_width(&source.item(row, column)?));
            }
            Ok(width)
        })
        .collect()
}

/// Pad `value` to `width` and wrap it as `" <padded> |"`.
///
/// A value wider than `width` is emitted unpadded.
pub fn pad_cell(value: &str, width: usize, alignment: Alignment) -> String {
    let len = text_width(value);
    if len > width {
        debug!(value, len, width, "cell wider than its column, padding clamped");
    }
    let padding = " ".repeat(width.saturating_sub(len));

    match alignment {
        Alignment::Right => format!(" {}{} |", padding, value),
        Alignment::Left => format!(" {}{} |", value, padding),
    }
}

/// Join padded cells into one `|`-prefixed line.
fn format_row<I>(cells: I, widths: &[usize], alignment: Alignment) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut line = String::from("|");
    for (cell, width) in cells.into_iter().zip(widths) {
        line.push_str(&pad_cell(&cell, *width, alignment));
    }
    line
}

/// Render `source` into a [`RenderedTable`].
///
/// The source's `Display` output becomes the title line.
pub fn render_table<S>(source: &S, options: &RenderOptions) -> Result<RenderedTable>
where
    S: TabularDataSource + Display + ?Sized,
{
    let title = source.to_string();
    let widths = column_widths(source)?;
    debug!(%title, ?widths, "computed column widths");

    let labels = (0..widths.len())
        .map(|column| source.label(column))
        .collect::<Result<Vec<_>>>()?;
    let header = format_row(labels, &widths, options.alignment);

    let mut rows = Vec::with_capacity(source.row_count());
    for row in 0..source.row_count() {
        let cells = (0..widths.len())
            .map(|column| source.item(row, column))
            .collect::<Result<Vec<_>>>()?;
        trace!(row, "rendered row");
        rows.push(format_row(cells, &widths, options.alignment));
    }

    Ok(RenderedTable {
        title,
        widths,
        header,
        rows,
    })
}

/// Render `source` and write the finished table to `writer`.
pub fn write_table<W, S>(writer: &mut W, source: &S, options: &RenderOptions) -> Result<()>
where
    W: Write + ?Sized,
    S: TabularDataSource + Display + ?Sized,
{
    let table = render_table(source, options)?;
    write!(writer, "{}", table)?;
    writer.flush()?;
    Ok(())
}

/// Print `source` to standard output with default options.
pub fn print_table<S>(source: &S) -> Result<()>
where
    S: TabularDataSource + Display + ?Sized,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_table(&mut handle, source, &RenderOptions::default())
}
