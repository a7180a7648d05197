//! Shared fixtures for unit and property tests.

use proptest::prelude::*;

use super::ObjectiveField;
use crate::schema::Objectives;

/// Build a field from row-major `(a, b)` pairs.
pub fn field_from_pairs(rows: usize, cols: usize, pairs: &[(f64, f64)]) -> ObjectiveField {
    let values = pairs.iter().copied().map(Objectives::from).collect();
    ObjectiveField::from_values(rows, cols, values).unwrap()
}

/// The 2x2 field where (1,1) is dominated by (1,0) and the rest are incomparable.
pub fn scenario_field() -> ObjectiveField {
    field_from_pairs(2, 2, &[(10.0, 1.0), (1.0, 10.0), (5.0, 5.0), (1.0, 1.0)])
}

/// Small fields over a coarse value alphabet so ties and dominance chains
/// show up often.
pub fn arb_field() -> impl Strategy<Value = ObjectiveField> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec((0u8..6, 0u8..6), rows * cols).prop_map(move |pairs| {
            let values = pairs
                .into_iter()
                .map(|(a, b)| Objectives::new(a as f64, b as f64))
                .collect();
            ObjectiveField::from_values(rows, cols, values).unwrap()
        })
    })
}

/// Like [`arb_field`] but with every objective pair distinct, so coordinate
/// sets of fronts are fully determined by the values.
pub fn arb_distinct_field() -> impl Strategy<Value = ObjectiveField> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::hash_set((0u8..12, 0u8..12), rows * cols).prop_map(move |pairs| {
            let values = pairs
                .into_iter()
                .map(|(a, b)| Objectives::new(a as f64, b as f64))
                .collect();
            ObjectiveField::from_values(rows, cols, values).unwrap()
        })
    })
}
