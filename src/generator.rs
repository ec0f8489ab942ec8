//! Input generation.
//!
//! Every generated array of size `n` is a permutation of `0..n`; the
//! [`Distribution`] only decides the order.

use crate::error::{AnalyzerError, Result};
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Shape of a generated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Distribution {
    /// Uniformly random permutation, reshuffled on every call
    Random,
    /// Ascending `0, 1, ..., n - 1`
    Sorted,
    /// Descending `n - 1, ..., 1, 0`
    Reversed,
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reversed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Random => "Random",
            Distribution::Sorted => "Sorted",
            Distribution::Reversed => "Reversed",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        Distribution::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalyzerError::Configuration(format!("unknown array type '{}'", s)))
    }
}

/// One input to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArraySpec {
    pub size: usize,
    pub distribution: Distribution,
}

impl ArraySpec {
    pub fn new(size: usize, distribution: Distribution) -> Self {
        Self { size, distribution }
    }

    pub fn generate(&self) -> Result<Vec<i64>> {
        generate(self.size, self.distribution)
    }
}

/// Generate a permutation of `0..size` shaped by `distribution`.
///
/// `Random` draws from the thread-local RNG without a fixed seed, so two
/// calls with the same arguments almost never agree.
///
/// # Errors
/// Returns [`AnalyzerError::Configuration`] when `size` is zero.
pub fn generate(size: usize, distribution: Distribution) -> Result<Vec<i64>> {
    if size < 1 {
        return Err(AnalyzerError::Configuration(
            "array size must be at least 1".to_string(),
        ));
    }

    let mut arr: Vec<i64> = (0..size as i64).collect();
    match distribution {
        Distribution::Random => arr.shuffle(&mut rand::rng()),
        Distribution::Sorted => {}
        Distribution::Reversed => arr.reverse(),
    }
    Ok(arr)
}
