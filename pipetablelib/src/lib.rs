//! # pipetablelib
//!
//! Render any tabular data source as an aligned, pipe-delimited text table.
//!
//! ## Overview
//!
//! The renderer knows nothing about the records behind a table. It talks to a
//! [`TabularDataSource`], which reports:
//!
//! - **Counts**: number of rows and columns
//! - **Labels**: one header label per column
//! - **Cells**: one string per (row, column)
//!
//! plus a [`Display`](std::fmt::Display) impl whose output is the title line.
//!
//! Every column is as wide as its widest label or cell, so nothing is ever
//! truncated. Lookups outside a source's bounds fail with a [`TableError`]
//! and abort the render; no partial table is produced.
//!
//! ## Example
//!
//! ```rust
//! use pipetablelib::{render_table, Department, Person, RenderOptions};
//!
//! let mut department = Department::new("Engineering");
//! department.add(Person::new("Eva", 30, 6));
//! department.add(Person::new("Saleh", 40, 18));
//!
//! let table = render_table(&department, &RenderOptions::default()).unwrap();
//! assert_eq!(table.to_string(), "\
//! Department: Engineering
//! | Employee name | Age | Years of experience |
//! |           Eva |  30 |                   6 |
//! |         Saleh |  40 |                  18 |
//! ");
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod render;
pub mod source;

pub use data::{Book, BookCollection, Department, Person};
pub use error::TableError;
pub use options::{Alignment, RenderOptions};
pub use output::RenderedTable;
pub use render::{column_widths, pad_cell, print_table, render_table, text_width, write_table};
pub use source::{check_column, check_row, TabularDataSource};

/// Result type for pipetablelib operations
pub type Result<T> = std::result::Result<T, TableError>;
