//! Experiment runner: drives every algorithm over every size and array type.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::{ExperimentConfig, InputPolicy};
use crate::error::{AnalyzerError, Result};
use crate::generator::{ArraySpec, Distribution};
use crate::record::MeasurementRecord;
use crate::registry::{AlgorithmRegistry, AlgorithmSpec, Capability};
use crate::sorting::is_sorted;
use crate::utils::timer::{time_call, to_millis};

/// Validate `config` against `registry` and run the full analysis.
pub fn run_experiment(
    config: &ExperimentConfig,
    registry: &AlgorithmRegistry,
) -> Result<Vec<MeasurementRecord>> {
    config.validate(registry)?;
    let sizes = config.sizes()?;
    run_analysis(
        registry,
        &config.algorithms,
        &sizes,
        &config.distributions,
        config.input_policy,
    )
}

/// Run every (algorithm, size, array type) combination and collect one
/// record per trial.
///
/// Iteration order is algorithm, then size, then array type. All names
/// are resolved and all sizes checked before the first trial, so a bad
/// configuration never produces partial results.
pub fn run_analysis<S: AsRef<str>>(
    registry: &AlgorithmRegistry,
    algo_names: &[S],
    sizes: &[usize],
    distributions: &[Distribution],
    policy: InputPolicy,
) -> Result<Vec<MeasurementRecord>> {
    let algorithms = algo_names
        .iter()
        .map(|name| registry.resolve(name.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    if let Some(bad) = sizes.iter().find(|&&s| s < 1) {
        return Err(AnalyzerError::Configuration(format!(
            "array size must be at least 1, got {}",
            bad
        )));
    }

    let shared = match policy {
        InputPolicy::PerTrial => None,
        InputPolicy::Shared => Some(shared_inputs(sizes, distributions)?),
    };

    let mut results =
        Vec::with_capacity(algorithms.len() * sizes.len() * distributions.len());

    for algo in algorithms {
        info!(algorithm = algo.name, "Testing algorithm");
        for &size in sizes {
            for &distribution in distributions {
                let spec = ArraySpec::new(size, distribution);
                let input = match &shared {
                    Some(inputs) => inputs[&spec].clone(),
                    None => spec.generate()?,
                };
                let record = run_trial(algo, input, distribution);
                debug!(
                    algorithm = algo.name,
                    size,
                    array_type = %distribution,
                    elapsed_ms = record.elapsed_ms,
                    "Trial complete"
                );
                results.push(record);
            }
        }
        info!(algorithm = algo.name, "Finished algorithm");
    }

    Ok(results)
}

/// One input per (size, array type), reused by every algorithm.
fn shared_inputs(
    sizes: &[usize],
    distributions: &[Distribution],
) -> Result<HashMap<ArraySpec, Vec<i64>>> {
    let mut inputs = HashMap::new();
    for &size in sizes {
        for &distribution in distributions {
            let spec = ArraySpec::new(size, distribution);
            if !inputs.contains_key(&spec) {
                inputs.insert(spec, spec.generate()?);
            }
        }
    }
    Ok(inputs)
}

/// Time one algorithm on `input` and build its record.
fn run_trial(algo: &AlgorithmSpec, input: Vec<i64>, distribution: Distribution) -> MeasurementRecord {
    let size = input.len();
    match algo.capability {
        Capability::Opaque(sort) => {
            let (elapsed, sorted) = time_call(|| sort(&input));
            debug_assert!(is_sorted(&sorted), "{} returned unsorted output", algo.name);
            MeasurementRecord::opaque(algo.name, size, distribution, to_millis(elapsed))
        }
        Capability::Instrumented(sort) => {
            let mut data = input;
            let (elapsed, counts) = time_call(|| sort(&mut data));
            debug_assert!(is_sorted(&data), "{} left input unsorted", algo.name);
            MeasurementRecord::instrumented(algo.name, size, distribution, to_millis(elapsed), counts)
        }
    }
}
