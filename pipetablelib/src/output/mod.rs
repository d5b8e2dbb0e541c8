//! Output: the finished, presentation-ready table.
//!
//! [`RenderedTable`] holds every line of a render result. It is built only
//! after the whole data source has been scanned, so holding one means the
//! render succeeded. It can be printed as text or serialized.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pipetablelib::{render_table, RenderOptions};
//!
//! let table = render_table(&source, &RenderOptions::default())?;
//! // table.title:  "Department: Engineering"
//! // table.header: "| Employee name | Age | Years of experience |"
//! // table.rows:   ["|           Eva |  30 |                   6 |", ...]
//! print!("{}", table);
//! ```

pub mod table;

pub use table::RenderedTable;
