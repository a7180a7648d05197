//! Result types produced by searches, coverage checks and trial batches.

use serde::{Deserialize, Serialize};

use super::{Cell, FrontPoint, NeighborTopology};

/// Reason a search run stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// Used the whole iteration budget.
    IterationBudget,
    /// Archive became a local fixed point of the topology.
    Stagnated,
}

/// Final result of one SEMO run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Topology the run mutated with.
    pub topology: NeighborTopology,
    /// Seed cell the archive started from.
    pub start: Cell,
    /// Final archive, by descending first then second objective.
    pub front: Vec<FrontPoint>,
    /// Iterations actually performed.
    pub iterations: usize,
    /// Steps until stagnation was first observed, or the full budget if it
    /// never was. `None` when stagnation tracking is disabled.
    ///
    /// Stagnation is local: the archive cannot grow through one more
    /// neighbor move, which does not mean it holds the whole reference front.
    pub stagnation_steps: Option<usize>,
    /// Reason for stopping.
    pub stop_reason: StopReason,
}

impl SearchOutcome {
    /// Coordinates of the final archive.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.front.iter().map(|p| p.cell)
    }
}

/// How much of the reference front an archive recovered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coverage {
    /// Reference front cells present in the archive.
    pub hit: usize,
    /// Size of the reference front.
    pub total: usize,
    /// `hit / total`, or 0.0 for an empty reference front.
    pub rate: f64,
}

/// Mean, population standard deviation and extremes of a sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SummaryStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Summarize a sample. An empty sample yields all zeros.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}

/// Aggregate statistics over many independent runs of one topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialSummary {
    /// Topology every run used.
    pub topology: NeighborTopology,
    /// Number of runs.
    pub runs: usize,
    /// Coverage rate statistics.
    pub coverage: SummaryStats,
    /// Stagnation step statistics, when tracking was enabled.
    pub stagnation: Option<SummaryStats>,
}
