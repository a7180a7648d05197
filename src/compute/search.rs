//! SEMO search driver.
//!
//! Each iteration picks a parent uniformly from the archive, moves it to a
//! random neighbor and offers the child to the archive. The archive's
//! dominance filter is the only acceptance rule.

use rand::prelude::*;

use crate::schema::{Cell, SearchConfig, SearchOutcome, StopReason};

use super::{ObjectiveField, ParetoArchive, is_stagnated};

/// Per-iteration progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// 1-based index of the iteration just finished.
    pub iteration: usize,
    /// Archive size after the iteration.
    pub archive_size: usize,
    /// Whether the child was admitted.
    pub admitted: bool,
}

/// Single-writer SEMO engine over one objective field.
///
/// The engine owns its random source, so independent engines can run in
/// parallel and a fixed seed reproduces a run exactly.
pub struct SemoEngine<'f> {
    field: &'f ObjectiveField,
    config: SearchConfig,
    rng: StdRng,
}

impl<'f> SemoEngine<'f> {
    /// Create an engine seeded with `seed`.
    pub fn new(field: &'f ObjectiveField, config: SearchConfig, seed: u64) -> Self {
        Self {
            field,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an engine with an entropy-seeded random source.
    pub fn from_entropy(field: &'f ObjectiveField, config: SearchConfig) -> Self {
        Self {
            field,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Draw a uniformly random start cell from the engine's random source.
    pub fn random_start(&mut self) -> Cell {
        self.field.random_cell(&mut self.rng)
    }

    /// Run from a uniformly random start cell.
    pub fn run(&mut self) -> SearchOutcome {
        let start = self.random_start();
        self.run_from(start)
    }

    /// Run from `start`.
    pub fn run_from(&mut self, start: Cell) -> SearchOutcome {
        self.run_with_callback(start, |_| {})
    }

    /// Run from `start`, reporting after every iteration.
    pub fn run_with_callback<F>(&mut self, start: Cell, mut callback: F) -> SearchOutcome
    where
        F: FnMut(&SearchProgress),
    {
        let field = self.field;
        let topology = self.config.topology;
        let budget = self.config.iterations;
        let track = self.config.track_stagnation;

        log::debug!(
            "SEMO start {} ({}, budget {}, stagnation tracking {})",
            start,
            topology.label(),
            budget,
            track
        );

        let mut archive = ParetoArchive::with_seed(field, start);
        // The verdict only changes when the archive does.
        let mut archive_changed = true;
        let mut iterations = 0;
        let mut stop_reason = StopReason::IterationBudget;

        while iterations < budget {
            let parent = self.select_parent(&archive);
            let child = topology.random_neighbor(parent, field.rows(), field.cols(), &mut self.rng);
            let admitted = archive.try_insert(field, child);
            archive_changed |= admitted;
            iterations += 1;

            callback(&SearchProgress {
                iteration: iterations,
                archive_size: archive.len(),
                admitted,
            });

            if track && archive_changed {
                archive_changed = false;
                if is_stagnated(&archive, field, topology) {
                    stop_reason = StopReason::Stagnated;
                    break;
                }
            }
        }

        log::debug!(
            "SEMO stopped after {} iterations ({:?}), archive size {}",
            iterations,
            stop_reason,
            archive.len()
        );

        SearchOutcome {
            topology,
            start,
            front: archive.into_sorted(),
            iterations,
            stagnation_steps: track.then_some(iterations),
            stop_reason,
        }
    }

    /// Uniform parent draw. The archive always holds at least the seed, and
    /// a single member is always returned.
    fn select_parent(&mut self, archive: &ParetoArchive) -> Cell {
        let index = self.rng.gen_range(0..archive.len());
        archive.members()[index].cell
    }
}
