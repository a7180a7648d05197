//! Non-dominated archive and the reference front built from it.
//!
//! The archive holds cells whose objective pairs are mutually
//! non-dominated and pairwise distinct. [`ParetoArchive::try_insert`] is the
//! only way to change it, and the same rule builds the reference front from
//! a full scan of the field.

use std::cmp::Ordering;

use crate::schema::{Cell, FrontPoint};

use super::ObjectiveField;

/// Archive of mutually non-dominated cells, in admission order.
#[derive(Debug, Clone, Default)]
pub struct ParetoArchive {
    members: Vec<FrontPoint>,
}

impl ParetoArchive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an archive holding a single seed cell.
    pub fn with_seed(field: &ObjectiveField, seed: Cell) -> Self {
        Self {
            members: vec![FrontPoint {
                cell: seed,
                objectives: field.objectives(seed),
            }],
        }
    }

    /// Try to admit `candidate`. Returns whether it was admitted.
    ///
    /// The checks run in a fixed order: a candidate equal in value to a
    /// member is rejected, then one dominated by a member is rejected, and
    /// only then are the members it dominates swept out. A dominated
    /// newcomer therefore never displaces anything.
    pub fn try_insert(&mut self, field: &ObjectiveField, candidate: Cell) -> bool {
        let objectives = field.objectives(candidate);

        if self.members.iter().any(|m| m.objectives == objectives) {
            return false;
        }

        if self
            .members
            .iter()
            .any(|m| m.objectives.dominates(&objectives))
        {
            return false;
        }

        self.members
            .retain(|m| !objectives.dominates(&m.objectives));
        self.members.push(FrontPoint {
            cell: candidate,
            objectives,
        });

        log::trace!("admitted {} -> archive size {}", candidate, self.members.len());
        true
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the archive is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in admission order.
    #[inline]
    pub fn members(&self) -> &[FrontPoint] {
        &self.members
    }

    /// Member at `index` in admission order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&FrontPoint> {
        self.members.get(index)
    }

    /// Whether `cell` is a member.
    pub fn contains(&self, cell: Cell) -> bool {
        self.members.iter().any(|m| m.cell == cell)
    }

    /// Member coordinates in admission order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.members.iter().map(|m| m.cell)
    }

    /// Members sorted by descending first objective, then descending second.
    pub fn into_sorted(mut self) -> Vec<FrontPoint> {
        self.members.sort_by(descending_objectives);
        self.members
    }
}

fn descending_objectives(x: &FrontPoint, y: &FrontPoint) -> Ordering {
    y.objectives
        .a
        .total_cmp(&x.objectives.a)
        .then_with(|| y.objectives.b.total_cmp(&x.objectives.b))
}

/// True non-dominated set of the whole field, scanned in row-major order.
pub fn reference_front(field: &ObjectiveField) -> Vec<FrontPoint> {
    reference_front_from(field, field.cells())
}

/// True non-dominated set of the field, scanning `cells` in the given order.
///
/// The objective values in the result do not depend on the scan order. The
/// coordinates do not either, except when several cells share one
/// non-dominated value pair: the first of them scanned is kept.
pub fn reference_front_from<I>(field: &ObjectiveField, cells: I) -> Vec<FrontPoint>
where
    I: IntoIterator<Item = Cell>,
{
    let mut archive = ParetoArchive::new();
    for cell in cells {
        archive.try_insert(field, cell);
    }
    archive.into_sorted()
}
