//! Grid coordinates and the objective pairs attached to them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A coordinate into the objective field.
///
/// Identity is the coordinate, never the values stored at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:2},{:2})", self.row, self.col)
    }
}

/// The two objective values of a cell, both maximized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Objectives {
    pub a: f64,
    pub b: f64,
}

impl Objectives {
    #[inline]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

impl From<(f64, f64)> for Objectives {
    fn from((a, b): (f64, f64)) -> Self {
        Self { a, b }
    }
}

/// A non-dominated cell together with its objective values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontPoint {
    pub cell: Cell,
    pub objectives: Objectives,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_pads_coordinates() {
        assert_eq!(Cell::new(3, 12).to_string(), "( 3,12)");
    }

    #[test]
    fn test_objectives_from_tuple() {
        let o: Objectives = (1.5, 2.5).into();
        assert_eq!(o, Objectives::new(1.5, 2.5));
    }
}
