//! # Sorting-Analyzer
//!
//! Benchmarks classic sorting algorithms across input sizes and input
//! shapes, recording wall-clock time together with the comparisons and
//! element movements each algorithm performs.
//!
//! The flow is one-way: the [runner](utils::runner) asks the
//! [generator] for a fresh input, hands it to an algorithm from the
//! [registry], and turns the timing and counts into a
//! [`MeasurementRecord`](record::MeasurementRecord). [`export`] and
//! [`chart`] consume the finished record sequence.

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod record;
pub mod registry;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_analysis / run_experiment from utils::runner
pub use utils::runner::{run_analysis, run_experiment};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{ExperimentConfig, InputPolicy};
    pub use crate::error::{AnalyzerError, Result};
    pub use crate::generator::{generate, ArraySpec, Distribution};
    pub use crate::record::{MeasurementRecord, Metric};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmSpec, Capability};
    pub use crate::sorting::OpCounts;
}
