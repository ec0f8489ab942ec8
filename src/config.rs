//! Experiment parameters and their validation.

use crate::error::{AnalyzerError, Result};
use crate::generator::Distribution;
use crate::registry::AlgorithmRegistry;

/// Smallest array size tested; sizes are spaced from here up to `max_size`.
pub const MIN_SIZE: i64 = 10;
pub const DEFAULT_MAX_SIZE: i64 = 2000;
pub const DEFAULT_STEPS: i64 = 10;
/// Upper bound on the number of sizes in one sweep.
pub const MAX_STEPS: i64 = 100_000;

/// How inputs are shared between algorithms within one (size, type) group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Generate a fresh array for every trial (random inputs differ per algorithm)
    #[default]
    PerTrial,
    /// Generate one array per (size, type) and hand each algorithm a copy
    Shared,
}

/// Full description of one analysis run.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    pub max_size: i64,
    pub steps: i64,
    pub algorithms: Vec<String>,
    pub distributions: Vec<Distribution>,
    pub input_policy: InputPolicy,
}

impl ExperimentConfig {
    /// Default parameters with every algorithm from `registry`.
    pub fn with_registry(registry: &AlgorithmRegistry) -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            steps: DEFAULT_STEPS,
            algorithms: registry.list_names().into_iter().map(String::from).collect(),
            distributions: Distribution::ALL.to_vec(),
            input_policy: InputPolicy::default(),
        }
    }

    /// Array sizes to test: `steps` evenly spaced values in `[10, max_size]`.
    pub fn sizes(&self) -> Result<Vec<usize>> {
        if self.steps <= 0 {
            return Err(AnalyzerError::Configuration(format!(
                "step count must be positive, got {}",
                self.steps
            )));
        }
        if self.steps > MAX_STEPS {
            return Err(AnalyzerError::Configuration(format!(
                "step count must be at most {}, got {}",
                MAX_STEPS, self.steps
            )));
        }
        if self.max_size < MIN_SIZE {
            return Err(AnalyzerError::Configuration(format!(
                "maximum size must be at least {}, got {}",
                MIN_SIZE, self.max_size
            )));
        }
        Ok(linspace_sizes(MIN_SIZE, self.max_size, self.steps as usize))
    }

    /// Check every parameter, including that all algorithm names are registered.
    pub fn validate(&self, registry: &AlgorithmRegistry) -> Result<()> {
        self.sizes()?;
        if self.algorithms.is_empty() {
            return Err(AnalyzerError::Configuration(
                "no algorithms selected".to_string(),
            ));
        }
        if self.distributions.is_empty() {
            return Err(AnalyzerError::Configuration(
                "no array types selected".to_string(),
            ));
        }
        for name in &self.algorithms {
            registry.resolve(name)?;
        }
        Ok(())
    }
}

/// `num` evenly spaced integers from `start` to `stop` inclusive.
///
/// Intermediate points are truncated toward zero, so neighbouring points may
/// coincide when the range is narrow; duplicates are kept. `num == 1` yields
/// just `start`.
pub fn linspace_sizes(start: i64, stop: i64, num: usize) -> Vec<usize> {
    match num {
        0 => Vec::new(),
        1 => vec![start as usize],
        _ => {
            let step = (stop - start) as f64 / (num - 1) as f64;
            let mut sizes: Vec<usize> = (0..num)
                .map(|i| (start as f64 + i as f64 * step) as usize)
                .collect();
            // Pin the endpoint against float drift
            sizes[num - 1] = stop as usize;
            sizes
        }
    }
}
