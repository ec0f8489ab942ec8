//! Insertion sort.

use super::OpCounts;

/// Sort `arr` in place with insertion sort.
///
/// For every key `arr[i]` (`i >= 1`) one comparison is counted on entering
/// the inward scan, plus one per shift performed while `key < arr[j]`.
/// Each shift of an element one slot to the right is one movement. Dropping
/// the key into its final slot is not counted.
///
/// # Example
/// ```
/// use sorting_analyzer::sorting::{insertion_sort, OpCounts};
///
/// let mut data = [3, 2, 1];
/// let counts = insertion_sort(&mut data);
/// assert_eq!(data, [1, 2, 3]);
/// assert_eq!(counts, OpCounts::new(5, 3));
/// ```
pub fn insertion_sort<T: PartialOrd + Copy>(arr: &mut [T]) -> OpCounts {
    let mut counts = OpCounts::ZERO;

    for i in 1..arr.len() {
        let key = arr[i];
        // `slot` is the index the key would land in if the scan stopped now
        let mut slot = i;

        counts.comparisons += 1;
        while slot > 0 && key < arr[slot - 1] {
            counts.comparisons += 1;
            arr[slot] = arr[slot - 1];
            counts.movements += 1;
            slot -= 1;
        }
        arr[slot] = key;
    }

    counts
}
