//! Local stagnation check for a SEMO archive.
//!
//! An archive has stagnated when no single neighbor move from any member
//! can produce a new admission candidate: every neighbor of every member is
//! either a member itself or strictly dominated by some member.
//!
//! This is a statement about the archive's neighborhood only. A stagnated
//! archive can still miss reference front cells that the walk would reach
//! only through cells it rejects, so it must not be read as "found the
//! whole front".

use crate::schema::NeighborTopology;

use super::{ObjectiveField, ParetoArchive};

/// Whether `archive` is a local fixed point under `topology`.
///
/// Cost is `O(|archive|^2 * degree)`.
pub fn is_stagnated(
    archive: &ParetoArchive,
    field: &ObjectiveField,
    topology: NeighborTopology,
) -> bool {
    let members = archive.members();

    members.iter().all(|member| {
        topology
            .neighbors(member.cell, field.rows(), field.cols())
            .all(|neighbor| {
                let objectives = field.objectives(neighbor);
                members
                    .iter()
                    .any(|m| m.cell == neighbor || m.objectives.dominates(&objectives))
            })
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::compute::reference_front;
    use crate::compute::test_support::{arb_field, field_from_pairs, scenario_field};
    use crate::schema::Cell;

    #[test]
    fn test_single_cell_field_stagnates_immediately() {
        let field = field_from_pairs(1, 1, &[(1.0, 1.0)]);
        let archive = ParetoArchive::with_seed(&field, Cell::new(0, 0));
        assert!(is_stagnated(&archive, &field, NeighborTopology::VonNeumann));
        assert!(is_stagnated(&archive, &field, NeighborTopology::Moore));
    }

    #[test]
    fn test_incomparable_neighbor_blocks_stagnation() {
        let field = scenario_field();
        let archive = ParetoArchive::with_seed(&field, Cell::new(1, 0));
        // (0,0) = (10,1) is a neighbor of (1,0) and is not dominated by (5,5).
        assert!(!is_stagnated(&archive, &field, NeighborTopology::VonNeumann));
    }

    #[test]
    fn test_full_front_stagnates() {
        let field = scenario_field();
        let mut archive = ParetoArchive::new();
        for cell in field.cells() {
            archive.try_insert(&field, cell);
        }
        assert!(is_stagnated(&archive, &field, NeighborTopology::VonNeumann));
        assert!(is_stagnated(&archive, &field, NeighborTopology::Moore));
    }

    #[test]
    fn test_local_optimum_is_not_global() {
        // 1x5 ring: (0,0) dominates both neighbors, the best cell sits at (0,2).
        let field = field_from_pairs(
            1,
            5,
            &[(5.0, 5.0), (1.0, 1.0), (9.0, 9.0), (1.0, 1.0), (2.0, 2.0)],
        );
        let archive = ParetoArchive::with_seed(&field, Cell::new(0, 0));

        assert!(is_stagnated(&archive, &field, NeighborTopology::VonNeumann));
        let front = reference_front(&field);
        assert_eq!(front.len(), 1);
        assert_eq!(front[0].cell, Cell::new(0, 2));
        assert!(!archive.contains(Cell::new(0, 2)));
    }

    #[test]
    fn test_topology_changes_verdict() {
        // 3x3 torus: centre (1,1) beats its orthogonal neighbors but the
        // diagonal (0,0) is incomparable.
        let field = field_from_pairs(
            3,
            3,
            &[
                (9.0, 0.0),
                (1.0, 1.0),
                (0.0, 0.0),
                (1.0, 1.0),
                (5.0, 5.0),
                (1.0, 1.0),
                (0.0, 0.0),
                (1.0, 1.0),
                (0.0, 0.0),
            ],
        );
        let archive = ParetoArchive::with_seed(&field, Cell::new(1, 1));
        assert!(is_stagnated(&archive, &field, NeighborTopology::VonNeumann));
        assert!(!is_stagnated(&archive, &field, NeighborTopology::Moore));
    }

    #[test]
    fn test_equal_valued_neighbor_is_not_covered() {
        // The neighbor duplicates the seed's values at another coordinate,
        // so it is neither a member nor dominated.
        let field = field_from_pairs(1, 2, &[(3.0, 3.0), (3.0, 3.0)]);
        let archive = ParetoArchive::with_seed(&field, Cell::new(0, 0));
        assert!(!is_stagnated(&archive, &field, NeighborTopology::VonNeumann));
    }

    proptest! {
        #[test]
        fn prop_reference_front_always_stagnated(field in arb_field()) {
            let mut archive = ParetoArchive::new();
            for cell in field.cells() {
                archive.try_insert(&field, cell);
            }
            // Every cell is either in the front, dominated by it, or equal in
            // value to a member; only the last case can block stagnation.
            let has_value_twins = field.cells().any(|c| {
                !archive.contains(c)
                    && archive
                        .members()
                        .iter()
                        .any(|m| m.objectives == field.objectives(c))
            });
            if !has_value_twins {
                prop_assert!(is_stagnated(&archive, &field, NeighborTopology::VonNeumann));
                prop_assert!(is_stagnated(&archive, &field, NeighborTopology::Moore));
            }
        }

        #[test]
        fn prop_verdict_is_stable(field in arb_field(), seed in 0usize..25) {
            let cell = Cell::new(seed % field.rows(), (seed / field.rows()) % field.cols());
            let archive = ParetoArchive::with_seed(&field, cell);
            for topology in [NeighborTopology::VonNeumann, NeighborTopology::Moore] {
                let first = is_stagnated(&archive, &field, topology);
                prop_assert_eq!(first, is_stagnated(&archive, &field, topology));
            }
        }
    }
}
