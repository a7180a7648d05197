//! Coverage of the reference front by a search archive.

use std::collections::HashSet;

use crate::schema::{Cell, Coverage, FrontPoint};

impl Coverage {
    /// Compare archive coordinates against reference front coordinates.
    ///
    /// Only coordinates matter; objective values are never compared.
    pub fn measure<I>(archive: I, reference: &[FrontPoint]) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let reference: HashSet<Cell> = reference.iter().map(|p| p.cell).collect();
        let archive: HashSet<Cell> = archive.into_iter().collect();

        let hit = reference.intersection(&archive).count();
        let total = reference.len();
        let rate = if total > 0 {
            hit as f64 / total as f64
        } else {
            0.0
        };

        Self { hit, total, rate }
    }
}
