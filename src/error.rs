//! Error types for the analyzer.

use thiserror::Error;

/// Errors raised while configuring, running or persisting an analysis.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Invalid experiment parameters (step count, size bounds, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Algorithm name not present in the registry
    #[error("Configuration error: unknown algorithm '{name}' (available: {})", .available.join(", "))]
    UnknownAlgorithm {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// True for errors that abort a run before any trial executes.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AnalyzerError::Configuration(_) | AnalyzerError::UnknownAlgorithm { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_lists_available() {
        let err = AnalyzerError::UnknownAlgorithm {
            name: "Shell Sort".to_string(),
            available: vec!["Insertion Sort", "Quicksort"],
        };
        let msg = err.to_string();
        assert!(msg.contains("Shell Sort"));
        assert!(msg.contains("Insertion Sort, Quicksort"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_io_is_not_configuration() {
        let err: AnalyzerError = std::io::Error::other("disk full").into();
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
