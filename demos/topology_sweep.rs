//! Quick coverage comparison of 4- and 8-neighbor SEMO across grid sizes

use pareto_semo::{
    ObjectiveField, TrialRunner, reference_front,
    schema::{FieldConfig, NeighborTopology, SearchConfig},
};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

fn main() {
    println!("=== Topology Sweep ===\n");

    for size in [5, 10, 20, 40] {
        println!("Grid size: {}x{}", size, size);

        let config = FieldConfig {
            rows: size,
            cols: size,
            ..Default::default()
        };
        let field = ObjectiveField::generate(&config, &mut StdRng::seed_from_u64(42));
        let reference = reference_front(&field);
        println!("  Front size:     {}", reference.len());

        for topology in [NeighborTopology::VonNeumann, NeighborTopology::Moore] {
            let search = SearchConfig {
                iterations: 100_000,
                topology,
                track_stagnation: true,
            };

            let start = Instant::now();
            let summary = TrialRunner::new(&field, search, &reference).run(200, 7);
            let elapsed = start.elapsed();

            let steps = summary.stagnation.unwrap_or_default();
            println!(
                "  {}: coverage {:.4} ± {:.4}, stagnation {:.1} ± {:.1} steps, {:.2}s",
                topology.label(),
                summary.coverage.mean,
                summary.coverage.std_dev,
                steps.mean,
                steps.std_dev,
                elapsed.as_secs_f64()
            );
        }
        println!();
    }
}
