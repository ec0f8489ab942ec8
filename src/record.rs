//! Measurement records produced by the runner.

use crate::generator::Distribution;
use crate::sorting::OpCounts;
use serde::Serialize;

/// Result of one trial: one algorithm on one generated input.
///
/// `comparisons` and `swaps` are `Some` exactly when the algorithm is
/// instrumented. Opaque algorithms leave them `None`, never zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeasurementRecord {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    #[serde(rename = "Size")]
    pub size: usize,
    #[serde(rename = "Type")]
    pub distribution: Distribution,
    #[serde(rename = "Time (ms)")]
    pub elapsed_ms: f64,
    #[serde(rename = "Comparisons")]
    pub comparisons: Option<u64>,
    /// Movements as defined per algorithm (shifts, exchanges or merge writes)
    #[serde(rename = "Swaps")]
    pub swaps: Option<u64>,
}

impl MeasurementRecord {
    pub fn instrumented(
        algorithm: &str,
        size: usize,
        distribution: Distribution,
        elapsed_ms: f64,
        counts: OpCounts,
    ) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            size,
            distribution,
            elapsed_ms,
            comparisons: Some(counts.comparisons),
            swaps: Some(counts.movements),
        }
    }

    pub fn opaque(algorithm: &str, size: usize, distribution: Distribution, elapsed_ms: f64) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            size,
            distribution,
            elapsed_ms,
            comparisons: None,
            swaps: None,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Time => Some(self.elapsed_ms),
            Metric::Comparisons => self.comparisons.map(|c| c as f64),
            Metric::Swaps => self.swaps.map(|s| s as f64),
        }
    }
}

/// A plottable column of a [`MeasurementRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Time,
    Comparisons,
    Swaps,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Time, Metric::Comparisons, Metric::Swaps];

    /// Column label, shared by the CSV header and chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Time => "Time (ms)",
            Metric::Comparisons => "Comparisons",
            Metric::Swaps => "Swaps",
        }
    }
}
