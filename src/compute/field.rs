//! Objective field: a read-only grid of objective pairs.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::schema::{Cell, FieldConfig, Objectives};

/// Errors raised when building a field from explicit values.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("Grid dimensions (rows, cols) must be non-zero")]
    EmptyGrid,
    #[error("Expected {expected} values for the grid, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Row-major grid mapping each cell to its objective pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveField {
    rows: usize,
    cols: usize,
    values: Vec<Objectives>,
}

impl ObjectiveField {
    /// Build a field from row-major values.
    pub fn from_values(
        rows: usize,
        cols: usize,
        values: Vec<Objectives>,
    ) -> Result<Self, FieldError> {
        if rows == 0 || cols == 0 {
            return Err(FieldError::EmptyGrid);
        }
        if values.len() != rows * cols {
            return Err(FieldError::LengthMismatch {
                expected: rows * cols,
                actual: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Generate a field with both objectives drawn uniformly from the
    /// configured range and rounded to the configured precision.
    ///
    /// The config is assumed to have passed [`FieldConfig::validate`].
    pub fn generate<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Self {
        let (min, max) = config.value_range;
        let dist = Uniform::new_inclusive(min, max);
        let scale = 10f64.powi(config.decimals as i32);
        let mut sample = || (dist.sample(&mut *rng) * scale).round() / scale;

        let values = (0..config.cell_count())
            .map(|_| {
                let a = sample();
                let b = sample();
                Objectives::new(a, b)
            })
            .collect();

        Self {
            rows: config.rows,
            cols: config.cols,
            values,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Objective pair at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid.
    #[inline]
    pub fn objectives(&self, cell: Cell) -> Objectives {
        debug_assert!(cell.row < self.rows && cell.col < self.cols);
        self.values[cell.row * self.cols + cell.col]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Uniformly random cell.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.rows), rng.gen_range(0..self.cols))
    }
}
