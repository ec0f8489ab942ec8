//! Algorithm registry for name-based algorithm lookup.
//!
//! The registry is built once at startup by [`build_registry`] and only read
//! afterwards. Each entry carries a [`Capability`] telling the runner whether
//! operation counts can be observed.

use crate::error::{AnalyzerError, Result};
use crate::sorting::{self, is_sorted, OpCounts};

/// In-place sort that reports its operation counts.
pub type InstrumentedFn = fn(&mut [i64]) -> OpCounts;

/// Out-of-place sort that can only be timed.
pub type OpaqueFn = fn(&[i64]) -> Vec<i64>;

/// What the runner can observe about an algorithm.
#[derive(Clone, Copy, Debug)]
pub enum Capability {
    /// Sorts in place and reports `(comparisons, movements)`
    Instrumented(InstrumentedFn),
    /// Sorts a copy; only elapsed time is measurable
    Opaque(OpaqueFn),
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Instrumented(_) => "instrumented",
            Capability::Opaque(_) => "opaque",
        }
    }
}

/// A registered algorithm.
#[derive(Clone, Debug)]
pub struct AlgorithmSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub capability: Capability,
}

impl AlgorithmSpec {
    pub fn instrumented(name: &'static str, description: &'static str, f: InstrumentedFn) -> Self {
        Self {
            name,
            description,
            capability: Capability::Instrumented(f),
        }
    }

    pub fn opaque(name: &'static str, description: &'static str, f: OpaqueFn) -> Self {
        Self {
            name,
            description,
            capability: Capability::Opaque(f),
        }
    }

    /// Verify correctness against `slice::sort` on a fixed set of inputs.
    ///
    /// The output must equal the sorted input, so lost, duplicated or
    /// altered elements fail as well as misordering.
    pub fn verify(&self) -> std::result::Result<(), String> {
        let inputs: Vec<Vec<i64>> = vec![
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
            vec![7; 6],
            (0..257).map(|i| (i * 7919) % 257 - 128).collect(),
        ];

        for input in inputs {
            let mut expected = input.clone();
            expected.sort();

            let output = match self.capability {
                Capability::Instrumented(f) => {
                    let mut data = input.clone();
                    f(&mut data);
                    data
                }
                Capability::Opaque(f) => f(&input),
            };

            if !is_sorted(&output) || output != expected {
                return Err(format!(
                    "'{}' failed verification on input of length {}: got {:?}",
                    self.name,
                    input.len(),
                    output
                ));
            }
        }

        Ok(())
    }
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<AlgorithmSpec>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register(&mut self, algo: AlgorithmSpec) {
        self.algorithms.push(algo);
    }

    /// Get all registered algorithms, in registration order
    pub fn all(&self) -> &[AlgorithmSpec] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&AlgorithmSpec> {
        self.algorithms.iter().find(|a| a.name == name)
    }

    /// Like [`find`](Self::find), but an unknown name is a configuration error.
    pub fn resolve(&self, name: &str) -> Result<&AlgorithmSpec> {
        self.find(name).ok_or_else(|| AnalyzerError::UnknownAlgorithm {
            name: name.to_string(),
            available: self.list_names(),
        })
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub const INSERTION_SORT: &str = "Insertion Sort";
pub const BUBBLE_SORT: &str = "Bubble Sort";
pub const MERGE_SORT: &str = "Merge Sort";
pub const QUICKSORT: &str = "Quicksort";
pub const BUILTIN_SORT: &str = "Std Sort (Rust built-in)";

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(AlgorithmSpec::instrumented(
        INSERTION_SORT,
        "Shifts each key left into the sorted prefix",
        sorting::insertion_sort::<i64>,
    ));
    registry.register(AlgorithmSpec::instrumented(
        BUBBLE_SORT,
        "Adjacent exchanges, stops after a pass without exchanges",
        sorting::bubble_sort::<i64>,
    ));
    registry.register(AlgorithmSpec::instrumented(
        MERGE_SORT,
        "Top-down merge sort, ties taken from the right half",
        sorting::merge_sort::<i64>,
    ));
    registry.register(AlgorithmSpec::instrumented(
        QUICKSORT,
        "Lomuto partition around the last element",
        sorting::quick_sort::<i64>,
    ));
    registry.register(AlgorithmSpec::opaque(
        BUILTIN_SORT,
        "slice::sort on a copy of the input (time only)",
        sorting::builtin_sort::<i64>,
    ));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = build_registry();
        assert_eq!(
            registry.list_names(),
            vec![INSERTION_SORT, BUBBLE_SORT, MERGE_SORT, QUICKSORT, BUILTIN_SORT]
        );
    }

    #[test]
    fn test_capabilities() {
        let registry = build_registry();
        for algo in registry.all() {
            let instrumented = matches!(algo.capability, Capability::Instrumented(_));
            assert_eq!(instrumented, algo.name != BUILTIN_SORT, "{}", algo.name);
        }
        assert_eq!(registry.find(BUILTIN_SORT).unwrap().capability.label(), "opaque");
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = build_registry();
        match registry.resolve("Bogo Sort") {
            Err(AnalyzerError::UnknownAlgorithm { name, available }) => {
                assert_eq!(name, "Bogo Sort");
                assert_eq!(available.len(), 5);
            }
            other => panic!("expected UnknownAlgorithm, got {:?}", other.map(|a| a.name)),
        }
    }

    #[test]
    fn test_verify_rejects_broken_sort() {
        fn not_a_sort(_: &mut [i64]) -> OpCounts {
            OpCounts::ZERO
        }
        let algo = AlgorithmSpec::instrumented("Broken", "does nothing", not_a_sort);
        assert!(algo.verify().is_err());
    }

    #[test]
    fn test_verify_rejects_opaque_sort_dropping_elements() {
        fn dedup_sort(arr: &[i64]) -> Vec<i64> {
            let mut out = arr.to_vec();
            out.sort();
            out.dedup();
            out
        }
        let algo = AlgorithmSpec::opaque("Dedup", "sorted but lossy", dedup_sort);
        let err = algo.verify().unwrap_err();
        assert!(err.contains("Dedup"));
    }
}
