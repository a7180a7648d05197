//! Strict Pareto dominance for two maximized objectives.

use crate::schema::Objectives;

/// True iff `(a1, b1)` strictly dominates `(a2, b2)`: at least as good in
/// both objectives and strictly better in one.
///
/// Comparisons are exact; no tolerance is applied.
#[inline]
pub fn dominates(a1: f64, b1: f64, a2: f64, b2: f64) -> bool {
    a1 >= a2 && b1 >= b2 && (a1 > a2 || b1 > b2)
}

impl Objectives {
    /// True iff `self` strictly dominates `other`.
    #[inline]
    pub fn dominates(&self, other: &Objectives) -> bool {
        dominates(self.a, self.b, other.a, other.b)
    }
}
