//! Toroidal neighborhoods used for mutation and stagnation checks.

use rand::Rng;

use crate::schema::{Cell, NeighborTopology};

/// Row/column offset of a single move.
pub type Offset = (isize, isize);

const VON_NEUMANN: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const MOORE: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

impl NeighborTopology {
    /// Moves available from any cell.
    #[inline]
    pub fn offsets(self) -> &'static [Offset] {
        match self {
            NeighborTopology::VonNeumann => &VON_NEUMANN,
            NeighborTopology::Moore => &MOORE,
        }
    }

    /// Number of moves per cell.
    #[inline]
    pub fn degree(self) -> usize {
        self.offsets().len()
    }

    /// Short label for reports.
    pub fn label(self) -> &'static str {
        match self {
            NeighborTopology::VonNeumann => "4-neighbor",
            NeighborTopology::Moore => "8-neighbor",
        }
    }

    /// Neighbors of `cell` on a `rows` x `cols` torus, one per offset.
    ///
    /// On grids narrower than three cells some neighbors coincide, and a
    /// cell can be its own neighbor.
    pub fn neighbors(self, cell: Cell, rows: usize, cols: usize) -> impl Iterator<Item = Cell> {
        self.offsets()
            .iter()
            .map(move |&offset| step(cell, offset, rows, cols))
    }

    /// Apply a uniformly chosen offset to `cell`.
    pub fn random_neighbor<R: Rng + ?Sized>(
        self,
        cell: Cell,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Cell {
        let offsets = self.offsets();
        let offset = offsets[rng.gen_range(0..offsets.len())];
        step(cell, offset, rows, cols)
    }
}

/// Move `cell` by `offset`, wrapping each axis independently.
#[inline]
pub fn step(cell: Cell, (dr, dc): Offset, rows: usize, cols: usize) -> Cell {
    Cell::new(wrap(cell.row, dr, rows), wrap(cell.col, dc, cols))
}

#[inline]
fn wrap(coord: usize, delta: isize, extent: usize) -> usize {
    (coord as isize + delta).rem_euclid(extent as isize) as usize
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_degree() {
        assert_eq!(NeighborTopology::VonNeumann.degree(), 4);
        assert_eq!(NeighborTopology::Moore.degree(), 8);
    }

    #[test]
    fn test_moore_extends_von_neumann() {
        let moore = NeighborTopology::Moore.offsets();
        for offset in NeighborTopology::VonNeumann.offsets() {
            assert!(moore.contains(offset));
        }
    }

    #[test]
    fn test_wraps_negative_at_zero() {
        assert_eq!(step(Cell::new(0, 0), (-1, 0), 5, 7), Cell::new(4, 0));
        assert_eq!(step(Cell::new(0, 0), (0, -1), 5, 7), Cell::new(0, 6));
        assert_eq!(step(Cell::new(0, 0), (-1, -1), 5, 7), Cell::new(4, 6));
    }

    #[test]
    fn test_wraps_positive_at_last() {
        assert_eq!(step(Cell::new(4, 6), (1, 0), 5, 7), Cell::new(0, 6));
        assert_eq!(step(Cell::new(4, 6), (0, 1), 5, 7), Cell::new(4, 0));
        assert_eq!(step(Cell::new(4, 6), (1, 1), 5, 7), Cell::new(0, 0));
    }

    #[test]
    fn test_interior_step() {
        assert_eq!(step(Cell::new(2, 3), (1, -1), 5, 7), Cell::new(3, 2));
    }

    #[test]
    fn test_neighbors_interior() {
        let got: HashSet<Cell> = NeighborTopology::VonNeumann
            .neighbors(Cell::new(2, 2), 5, 5)
            .collect();
        let expected: HashSet<Cell> = [
            Cell::new(3, 2),
            Cell::new(1, 2),
            Cell::new(2, 3),
            Cell::new(2, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(got, expected);

        let moore: HashSet<Cell> = NeighborTopology::Moore
            .neighbors(Cell::new(2, 2), 5, 5)
            .collect();
        assert_eq!(moore.len(), 8);
        assert!(!moore.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn test_single_cell_grid_is_own_neighbor() {
        for topology in [NeighborTopology::VonNeumann, NeighborTopology::Moore] {
            assert!(
                topology
                    .neighbors(Cell::new(0, 0), 1, 1)
                    .all(|n| n == Cell::new(0, 0))
            );
        }
    }

    #[test]
    fn test_random_neighbor_is_adjacent() {
        let mut rng = StdRng::seed_from_u64(5);
        for topology in [NeighborTopology::VonNeumann, NeighborTopology::Moore] {
            let allowed: HashSet<Cell> = topology.neighbors(Cell::new(0, 9), 4, 10).collect();
            let mut seen = HashSet::new();
            for _ in 0..500 {
                let n = topology.random_neighbor(Cell::new(0, 9), 4, 10, &mut rng);
                assert!(allowed.contains(&n));
                seen.insert(n);
            }
            assert_eq!(seen, allowed);
        }
    }
}
