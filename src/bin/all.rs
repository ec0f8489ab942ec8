//! CLI for running the sorting analysis.
//!
//! Usage:
//!   sort-analyzer                              # Default run (10 sizes up to 2000)
//!   sort-analyzer --list                       # List available algorithms
//!   sort-analyzer --max-size 5000 --steps 20   # Larger sweep
//!   sort-analyzer --algorithms "Merge Sort,Quicksort" --shared-inputs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sorting_analyzer::chart::write_charts;
use sorting_analyzer::config::{ExperimentConfig, InputPolicy, DEFAULT_MAX_SIZE, DEFAULT_STEPS};
use sorting_analyzer::error::Result;
use sorting_analyzer::export::{export_csv, export_json};
use sorting_analyzer::generator::Distribution;
use sorting_analyzer::registry::{build_registry, AlgorithmRegistry};
use sorting_analyzer::{run_experiment, tui};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run a comparative analysis of sorting algorithms.
#[derive(Parser, Debug)]
#[command(name = "sort-analyzer", version, about)]
struct Cli {
    /// Maximum array size to test
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE, allow_negative_numbers = true)]
    max_size: i64,

    /// Number of different array sizes to test, spaced evenly from 10
    #[arg(long, default_value_t = DEFAULT_STEPS, allow_negative_numbers = true)]
    steps: i64,

    /// File to save the raw CSV data to
    #[arg(long, default_value = "sorting_results.csv")]
    csv: PathBuf,

    /// Directory to save the output plots to
    #[arg(long, default_value = "plots")]
    plots_dir: PathBuf,

    /// Also save the raw data as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Comma-separated subset of algorithms (default: all)
    #[arg(long, value_delimiter = ',')]
    algorithms: Vec<String>,

    /// Comma-separated array types (default: Random,Sorted,Reversed)
    #[arg(long, value_delimiter = ',')]
    types: Vec<Distribution>,

    /// Reuse one input per size and type across all algorithms
    #[arg(long)]
    shared_inputs: bool,

    /// Skip chart generation
    #[arg(long)]
    no_plots: bool,

    /// List available algorithms and exit
    #[arg(long, short = 'l')]
    list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Apply command-line overrides on top of the default configuration.
fn build_config(cli: &Cli, registry: &AlgorithmRegistry) -> ExperimentConfig {
    let mut config = ExperimentConfig::with_registry(registry);
    config.max_size = cli.max_size;
    config.steps = cli.steps;
    if !cli.algorithms.is_empty() {
        config.algorithms = cli.algorithms.iter().map(|s| s.trim().to_string()).collect();
    }
    if !cli.types.is_empty() {
        config.distributions = cli.types.clone();
    }
    if cli.shared_inputs {
        config.input_policy = InputPolicy::Shared;
    }
    config
}

fn run(cli: Cli) -> Result<()> {
    let registry = build_registry();

    if cli.list {
        tui::print_registry(&registry);
        return Ok(());
    }

    let config = build_config(&cli, &registry);
    config.validate(&registry)?;
    tui::print_header(&config.algorithms, &config.sizes()?, &config.distributions);

    info!("Starting sorting analysis");
    let records = run_experiment(&config, &registry)?;

    tui::print_summary(&records);

    export_csv(&cli.csv, &records)?;
    if let Some(path) = &cli.json {
        export_json(path, &records)?;
    }
    if !cli.no_plots {
        write_charts(&records, &cli.plots_dir)?;
    }

    info!("Analysis complete");
    Ok(())
}
