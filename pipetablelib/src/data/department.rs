//! Employees grouped by department.

use std::fmt;

use crate::error::TableError;
use crate::source::{check_column, check_row, TabularDataSource};
use crate::Result;

const LABELS: [&str; 3] = ["Employee name", "Age", "Years of experience"];

/// A single employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub years_of_experience: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, years_of_experience: u32) -> Self {
        Self {
            name: name.into(),
            age,
            years_of_experience,
        }
    }
}

/// A named department and its employees, one row per person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Department {
    pub name: String,
    pub people: Vec<Person>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            people: Vec::new(),
        }
    }

    pub fn add(&mut self, person: Person) {
        self.people.push(person);
    }

    /// The Engineering department with three employees.
    pub fn sample() -> Self {
        let mut department = Department::new("Engineering");
        department.add(Person::new("Eva", 30, 6));
        department.add(Person::new("Saleh", 40, 18));
        department.add(Person::new("Amit", 50, 20));
        department
    }
}

impl TabularDataSource for Department {
    fn row_count(&self) -> usize {
        self.people.len()
    }

    fn column_count(&self) -> usize {
        LABELS.len()
    }

    fn label(&self, column: usize) -> Result<String> {
        check_column(column, LABELS.len())?;
        Ok(LABELS[column].to_string())
    }

    fn item(&self, row: usize, column: usize) -> Result<String> {
        check_row(row, self.people.len())?;
        let person = &self.people[row];

        match column {
            0 => Ok(person.name.clone()),
            1 => Ok(person.age.to_string()),
            2 => Ok(person.years_of_experience.to_string()),
            _ => Err(TableError::InvalidColumnIndex {
                column,
                column_count: LABELS.len(),
            }),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Department: {}", self.name)
    }
}
