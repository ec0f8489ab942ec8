//! Utility modules for running experiments and reporting.

pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use runner::{run_analysis, run_experiment};
pub use timer::{time_call, to_millis};
