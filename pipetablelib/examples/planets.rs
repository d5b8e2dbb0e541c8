//! Render a hand-written data source.
//!
//! Run with `cargo run -p pipetablelib --example planets`.

use std::fmt;

use pipetablelib::{check_column, check_row, print_table, TabularDataSource};

struct Planets(Vec<(&'static str, f64)>);

impl TabularDataSource for Planets {
    fn row_count(&self) -> usize {
        self.0.len()
    }

    fn column_count(&self) -> usize {
        2
    }

    fn label(&self, column: usize) -> pipetablelib::Result<String> {
        check_column(column, 2)?;
        Ok(["Planet", "Distance (AU)"][column].to_string())
    }

    fn item(&self, row: usize, column: usize) -> pipetablelib::Result<String> {
        check_row(row, self.0.len())?;
        check_column(column, 2)?;
        let (name, distance) = self.0[row];
        Ok(if column == 0 {
            name.to_string()
        } else {
            distance.to_string()
        })
    }
}

impl fmt::Display for Planets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inner planets")
    }
}

fn main() {
    let planets = Planets(vec![
        ("Mercury", 0.39),
        ("Venus", 0.72),
        ("Earth", 1.0),
        ("Mars", 1.52),
    ]);

    print_table(&planets).expect("Failed to render table");
}
