//! Repeated independent SEMO runs and their aggregate statistics.

use rand::prelude::*;
use rayon::prelude::*;

use crate::schema::{
    Coverage, FrontPoint, NeighborTopology, SearchConfig, SummaryStats, TrialSummary,
};

use super::{ObjectiveField, SemoEngine};

/// Coverage and stagnation result of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    pub coverage: Coverage,
    pub stagnation_steps: Option<usize>,
}

/// Runs many independent searches against one reference front.
pub struct TrialRunner<'a> {
    field: &'a ObjectiveField,
    config: SearchConfig,
    reference: &'a [FrontPoint],
}

impl<'a> TrialRunner<'a> {
    pub fn new(
        field: &'a ObjectiveField,
        config: SearchConfig,
        reference: &'a [FrontPoint],
    ) -> Self {
        Self {
            field,
            config,
            reference,
        }
    }

    /// Run `runs` searches from random starts.
    ///
    /// Per-run seeds are drawn up front from `seed`, and every run owns its
    /// engine and archive, so the records do not depend on thread count.
    pub fn run_records(&self, runs: usize, seed: u64) -> Vec<TrialRecord> {
        let mut master = StdRng::seed_from_u64(seed);
        let seeds: Vec<u64> = (0..runs).map(|_| master.r#gen()).collect();

        log::info!(
            "Running {} {} trials ({} iterations each)",
            runs,
            self.config.topology.label(),
            self.config.iterations
        );

        seeds
            .into_par_iter()
            .map(|run_seed| {
                let mut engine = SemoEngine::new(self.field, self.config.clone(), run_seed);
                let outcome = engine.run();
                TrialRecord {
                    coverage: Coverage::measure(outcome.cells(), self.reference),
                    stagnation_steps: outcome.stagnation_steps,
                }
            })
            .collect()
    }

    /// Run `runs` searches and summarize them.
    pub fn run(&self, runs: usize, seed: u64) -> TrialSummary {
        summarize(self.config.topology, &self.run_records(runs, seed))
    }
}

/// Aggregate trial records into a summary.
pub fn summarize(topology: NeighborTopology, records: &[TrialRecord]) -> TrialSummary {
    let rates: Vec<f64> = records.iter().map(|r| r.coverage.rate).collect();
    let steps: Option<Vec<f64>> = records
        .iter()
        .map(|r| r.stagnation_steps.map(|s| s as f64))
        .collect();

    TrialSummary {
        topology,
        runs: records.len(),
        coverage: SummaryStats::from_samples(&rates),
        stagnation: steps
            .filter(|s| !s.is_empty())
            .map(|s| SummaryStats::from_samples(&s)),
    }
}
