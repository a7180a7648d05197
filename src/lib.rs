//! SEMO search for Pareto-optimal cells on a two-objective grid.
//!
//! Every cell of a finite grid carries two objective values to be jointly
//! maximized. This crate finds the grid's non-dominated cells with a simple
//! mutation-based evolutionary search (SEMO) and measures how much of the
//! true non-dominated set a search recovers.
//!
//! # Architecture
//!
//! - `schema`: Configuration and result types (serde-serializable)
//! - `compute`: Dominance, the non-dominated archive, neighbor topologies,
//!   the SEMO driver, stagnation detection, coverage and repeated trials
//! - `experiment`: Wires the pieces together for one configuration
//! - `report`: Console formatting of computed results
//!
//! # Example
//!
//! ```rust
//! use pareto_semo::{
//!     compute::{ObjectiveField, SemoEngine, reference_front},
//!     schema::{Coverage, FieldConfig, NeighborTopology, SearchConfig},
//! };
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let field = ObjectiveField::generate(&FieldConfig::default(), &mut StdRng::seed_from_u64(1));
//! let reference = reference_front(&field);
//!
//! let config = SearchConfig {
//!     iterations: 5_000,
//!     topology: NeighborTopology::Moore,
//!     track_stagnation: true,
//! };
//! let outcome = SemoEngine::new(&field, config, 42).run();
//! let coverage = Coverage::measure(outcome.cells(), &reference);
//!
//! assert!((0.0..=1.0).contains(&coverage.rate));
//! ```

pub mod compute;
pub mod experiment;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use compute::{ObjectiveField, ParetoArchive, SemoEngine, TrialRunner, reference_front};
pub use experiment::{ExperimentReport, run_experiment};
pub use schema::{Cell, Coverage, ExperimentConfig, NeighborTopology, Objectives, SearchConfig};
