//! Options that control how a table is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TableError;

/// Which side of a cell receives the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Pad before the value (values hug the trailing `|`)
    #[default]
    Right,
    /// Pad after the value
    Left,
}

impl FromStr for Alignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right" => Ok(Alignment::Right),
            "left" => Ok(Alignment::Left),
            _ => Err(TableError::InvalidAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Right => f.write_str("right"),
            Alignment::Left => f.write_str("left"),
        }
    }
}

/// Rendering configuration, built up with chained setters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Cell alignment applied to every column, header included
    pub alignment: Alignment,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell alignment
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_right_aligned() {
        assert_eq!(RenderOptions::new().alignment, Alignment::Right);
        assert_eq!(Alignment::default(), Alignment::Right);
    }

    #[test]
    fn test_builder_sets_alignment() {
        let options = RenderOptions::new().alignment(Alignment::Left);
        assert_eq!(options.alignment, Alignment::Left);
    }

    #[test]
    fn test_alignment_from_str() {
        assert_eq!("left".parse::<Alignment>().unwrap(), Alignment::Left);
        assert_eq!("RIGHT".parse::<Alignment>().unwrap(), Alignment::Right);
        assert!(matches!(
            "center".parse::<Alignment>(),
            Err(TableError::InvalidAlignment(ref s)) if s == "center"
        ));
    }

    #[test]
    fn test_alignment_display_round_trips() {
        for alignment in [Alignment::Left, Alignment::Right] {
            assert_eq!(alignment.to_string().parse::<Alignment>().unwrap(), alignment);
        }
    }
}
