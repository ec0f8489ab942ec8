//! Bubble sort with early exit.

use super::OpCounts;

/// Sort `arr` in place with bubble sort.
///
/// Pass `i` compares each adjacent pair `(j, j + 1)` for `j < n - i - 1`,
/// counting one comparison per pair and one movement per exchange. A pass
/// without any exchange ends the sort, so sorted input of length `n` costs
/// exactly `n - 1` comparisons and no movements.
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) -> OpCounts {
    let n = arr.len();
    let mut counts = OpCounts::ZERO;

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            counts.comparisons += 1;
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                counts.movements += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    counts
}
