//! SEMO CLI - Run a Pareto coverage experiment from JSON configuration.

use pareto_semo::{
    ExperimentConfig,
    report::{CoverageView, FieldView, FrontView, SummaryView},
    run_experiment,
    schema::{ConfigError, FrontPoint},
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Errors surfaced by the command line.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Error serializing example config: {0}")]
    Json(#[from] serde_json::Error),
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(1).map(String::as_str) {
        Some("--example") => {
            println!("Example configuration (config.json):");
            println!("{}", serde_json::to_string_pretty(&ExperimentConfig::default())?);
            return Ok(());
        }
        Some("--help") | Some("-h") => {
            print_usage(&args[0]);
            return Ok(());
        }
        Some(path) => ExperimentConfig::from_file(path)?,
        None => ExperimentConfig::default(),
    };

    config.validate()?;
    run_and_print(&config);
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage: {} [config.json | --example]", program);
    println!();
    println!("Run SEMO on a random two-objective grid and report how much of the");
    println!("true Pareto front it recovers. Without a config file the defaults are used.");
    println!();
    println!("Arguments:");
    println!("  config.json  Path to experiment configuration file");
    println!("  --example    Print the default configuration as JSON");
}

fn run_and_print(config: &ExperimentConfig) {
    let decimals = config.field.decimals as usize;

    println!("SEMO Pareto Coverage");
    println!("====================");
    println!("Grid: {}x{}", config.field.rows, config.field.cols);
    println!(
        "Values: [{}, {}] rounded to {} decimals",
        config.field.value_range.0, config.field.value_range.1, decimals
    );
    println!("Iterations per run: {}", config.search.iterations);
    println!("Stagnation tracking: {}", config.search.track_stagnation);
    println!();

    let report = run_experiment(config);
    println!("Seed: {}", report.seed);
    println!();

    if config.print_field {
        println!(
            "{}",
            FieldView {
                field: &report.field,
                decimals,
            }
        );
    }

    println!(
        "{}",
        FrontView {
            title: "Reference Pareto front",
            points: &report.reference,
            decimals,
        }
    );

    if let Some(first) = report.runs.first() {
        let start = [FrontPoint {
            cell: first.outcome.start,
            objectives: report.field.objectives(first.outcome.start),
        }];
        println!(
            "{}",
            FrontView {
                title: "SEMO start",
                points: &start,
                decimals,
            }
        );
    }

    for run in &report.runs {
        let title = format!("{} SEMO final archive", run.outcome.topology.label());
        println!(
            "{}",
            FrontView {
                title: &title,
                points: &run.outcome.front,
                decimals,
            }
        );
    }

    println!("========== Single run coverage ==========");
    for run in &report.runs {
        print!(
            "{}",
            CoverageView {
                topology: run.outcome.topology,
                archive_size: run.outcome.front.len(),
                coverage: run.coverage,
            }
        );
        if let Some(steps) = run.outcome.stagnation_steps {
            println!(
                "{} stopped after {} iterations ({:?}, stagnation steps = {})",
                run.outcome.topology.label(),
                run.outcome.iterations,
                run.outcome.stop_reason,
                steps
            );
        }
        println!();
    }

    for summary in &report.summaries {
        println!("{}", SummaryView { summary });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_is_not_a_config_error() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        let cli: CliError = err.into();
        assert!(matches!(cli, CliError::Json(_)));
        assert!(cli.to_string().starts_with("Error serializing"));
    }

    #[test]
    fn test_config_errors_keep_their_message() {
        let cli: CliError = ConfigError::InvalidDimensions.into();
        assert!(matches!(cli, CliError::Config(_)));
        assert_eq!(
            cli.to_string(),
            "Grid dimensions (rows, cols) must be non-zero"
        );
    }
}
