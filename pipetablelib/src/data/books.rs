//! A named collection of books.

use std::fmt;

use crate::error::TableError;
use crate::source::{check_column, check_row, TabularDataSource};
use crate::Result;

const LABELS: [&str; 3] = ["Title", "Author", "Average Rating"];

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub average_review: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, average_review: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            average_review,
        }
    }
}

/// One row per book, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookCollection {
    pub name: String,
    pub books: Vec<Book>,
}

impl BookCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// "The Maze Runner" series, five titles.
    pub fn sample() -> Self {
        let mut collection = BookCollection::new("The Maze Runner");
        for (title, review) in [
            ("Correr o Morir", 9.6),
            ("Prueba de Fuego", 8.4),
            ("La Cura Mortal", 8.9),
            ("Código C.R.U.E.L.", 9.6),
            ("El Palacio de los Cranks", 7.4),
        ] {
            collection.add(Book::new(title, "James Dashner", review));
        }
        collection
    }
}

/// Shortest round-trip form that always keeps a fractional part ("7.0", not "7").
fn format_review(review: f64) -> String {
    format!("{:?}", review)
}

impl TabularDataSource for BookCollection {
    fn row_count(&self) -> usize {
        self.books.len()
    }

    fn column_count(&self) -> usize {
        LABELS.len()
    }

    fn label(&self, column: usize) -> Result<String> {
        check_column(column, LABELS.len())?;
        Ok(LABELS[column].to_string())
    }

    fn item(&self, row: usize, column: usize) -> Result<String> {
        check_row(row, self.books.len())?;
        let book = &self.books[row];

        match column {
            0 => Ok(book.title.clone()),
            1 => Ok(book.author.clone()),
            2 => Ok(format_review(book.average_review)),
            _ => Err(TableError::InvalidColumnIndex {
                column,
                column_count: LABELS.len(),
            }),
        }
    }
}

impl fmt::Display for BookCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book Collection: {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_collection() {
        let collection = BookCollection::sample();
        assert_eq!(collection.to_string(), "Book Collection: The Maze Runner");
        assert_eq!(collection.row_count(), 5);
        assert_eq!(collection.item(4, 0).unwrap(), "El Palacio de los Cranks");
        assert_eq!(collection.item(3, 1).unwrap(), "James Dashner");
    }

    #[test]
    fn test_labels() {
        let collection = BookCollection::new("Empty");
        let labels: Vec<String> = (0..collection.column_count())
            .map(|c| collection.label(c).unwrap())
            .collect();
        assert_eq!(labels, vec!["Title", "Author", "Average Rating"]);
    }

    #[test]
    fn test_review_formatting() {
        assert_eq!(format_review(9.6), "9.6");
        assert_eq!(format_review(7.0), "7.0");
        assert_eq!(format_review(10.0), "10.0");
        assert_eq!(format_review(8.25), "8.25");
    }

    #[test]
    fn test_invalid_indices() {
        let collection = BookCollection::sample();
        assert!(matches!(
            collection.label(5),
            Err(TableError::InvalidColumnIndex {
                column: 5,
                column_count: 3
            })
        ));
        assert!(matches!(
            collection.item(5, 0),
            Err(TableError::InvalidRowIndex { row: 5, row_count: 5 })
        ));
        assert!(collection.item(0, 3).is_err());
    }
}
