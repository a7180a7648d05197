//! End-to-end experiment: generate a field, compute its reference front,
//! run SEMO once per topology and aggregate repeated runs.

use rand::prelude::*;

use crate::compute::{ObjectiveField, SemoEngine, TrialRunner, reference_front};
use crate::schema::{
    Coverage, ExperimentConfig, FrontPoint, NeighborTopology, SearchConfig, SearchOutcome,
    TrialSummary,
};

/// One search run and its coverage of the reference front.
#[derive(Debug, Clone)]
pub struct SingleRun {
    pub outcome: SearchOutcome,
    pub coverage: Coverage,
}

/// Everything an experiment computed, ready for reporting.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    /// Seed every random draw of the experiment derives from.
    pub seed: u64,
    pub field: ObjectiveField,
    /// Reference front, by descending first then second objective.
    pub reference: Vec<FrontPoint>,
    /// One run per topology, all from the same start cell.
    pub runs: Vec<SingleRun>,
    /// Aggregates per topology; empty when no repeated runs were requested.
    pub summaries: Vec<TrialSummary>,
}

impl ExperimentConfig {
    /// Topologies the experiment covers.
    pub fn topologies(&self) -> Vec<NeighborTopology> {
        if self.compare_topologies {
            vec![NeighborTopology::VonNeumann, NeighborTopology::Moore]
        } else {
            vec![self.search.topology]
        }
    }
}

/// Run the experiment described by `config`.
///
/// The config is assumed to have passed [`ExperimentConfig::validate`].
pub fn run_experiment(config: &ExperimentConfig) -> ExperimentReport {
    let seed = config.random_seed.unwrap_or_else(rand::random);
    log::info!("Experiment seed: {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let field = ObjectiveField::generate(&config.field, &mut rng);
    let reference = reference_front(&field);
    log::info!(
        "Generated {}x{} field with {} reference front cells",
        field.rows(),
        field.cols(),
        reference.len()
    );

    let start = field.random_cell(&mut rng);
    let topologies = config.topologies();

    let runs = topologies
        .iter()
        .map(|&topology| {
            let search = SearchConfig {
                topology,
                ..config.search.clone()
            };
            let outcome = SemoEngine::new(&field, search, rng.r#gen()).run_from(start);
            let coverage = Coverage::measure(outcome.cells(), &reference);
            SingleRun { outcome, coverage }
        })
        .collect();

    let summaries = if config.trials.runs == 0 {
        Vec::new()
    } else {
        topologies
            .iter()
            .map(|&topology| {
                let search = SearchConfig {
                    topology,
                    ..config.search.clone()
                };
                TrialRunner::new(&field, search, &reference).run(config.trials.runs, rng.r#gen())
            })
            .collect()
    };

    ExperimentReport {
        seed,
        field,
        reference,
        runs,
        summaries,
    }
}
