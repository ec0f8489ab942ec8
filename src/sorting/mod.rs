//! # Instrumented Sorting Algorithms
//!
//! Every routine here sorts its input ascending **in place** and reports how
//! much work it did as an [`OpCounts`] pair:
//!
//! - **comparisons**: element-to-element ordering tests
//! - **movements**: element relocations. What counts as one movement is
//!   algorithm specific (a shift for insertion sort, an exchange for bubble
//!   sort and quicksort, a write into the destination for merge sort).
//!
//! The counting conventions are part of each function's contract and are
//! documented on the function itself.
//!
//! [`builtin`] wraps the standard library sort, which can only be timed.

pub mod bubble;
pub mod builtin;
pub mod insertion;
pub mod merge;
pub mod quick;
#[cfg(test)]
mod test;

pub use bubble::bubble_sort;
pub use builtin::builtin_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

use std::ops::{Add, AddAssign};

/// Operation counts reported by an instrumented sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OpCounts {
    pub comparisons: u64,
    pub movements: u64,
}

impl OpCounts {
    pub const ZERO: OpCounts = OpCounts {
        comparisons: 0,
        movements: 0,
    };

    pub fn new(comparisons: u64, movements: u64) -> Self {
        Self {
            comparisons,
            movements,
        }
    }
}

impl Add for OpCounts {
    type Output = OpCounts;

    fn add(self, rhs: OpCounts) -> OpCounts {
        OpCounts {
            comparisons: self.comparisons + rhs.comparisons,
            movements: self.movements + rhs.movements,
        }
    }
}

impl AddAssign for OpCounts {
    fn add_assign(&mut self, rhs: OpCounts) {
        self.comparisons += rhs.comparisons;
        self.movements += rhs.movements;
    }
}

/// Check that `data` is in ascending order.
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
