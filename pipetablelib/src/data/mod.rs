//! Sample data sources.
//!
//! Two small record collections that implement [`TabularDataSource`]:
//!
//! - **Department**: employees with name, age, and years of experience
//! - **BookCollection**: books with title, author, and average review
//!
//! [`TabularDataSource`]: crate::source::TabularDataSource

pub mod books;
pub mod department;

pub use books::{Book, BookCollection};
pub use department::{Department, Person};
