//! Quicksort with the Lomuto partition scheme.

use super::OpCounts;

/// Sort `arr` in place with quicksort, pivoting on the last element of each
/// subrange.
///
/// Partitioning counts one comparison per scanned element (`arr[j] <= pivot`)
/// and one movement per exchange, including the final exchange that puts the
/// pivot in place even when it is already there. Already sorted and reverse
/// sorted inputs are the quadratic worst case.
///
/// Subranges are kept on an explicit work stack instead of the call stack,
/// so worst-case inputs do not grow recursion depth with `n`.
pub fn quick_sort<T: PartialOrd + Copy>(arr: &mut [T]) -> OpCounts {
    let mut counts = OpCounts::ZERO;
    if arr.len() <= 1 {
        return counts;
    }

    let mut pending = vec![(0usize, arr.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }

        let (pivot_index, part) = partition(arr, low, high);
        counts += part;

        // Push right first so the left range is processed first.
        pending.push((pivot_index + 1, high));
        if pivot_index > low {
            pending.push((low, pivot_index - 1));
        }
    }

    counts
}

/// Lomuto partition of `arr[low..=high]` around `arr[high]`.
///
/// Returns the final pivot index and the partition's own counts.
fn partition<T: PartialOrd + Copy>(arr: &mut [T], low: usize, high: usize) -> (usize, OpCounts) {
    let pivot = arr[high];
    let mut counts = OpCounts::ZERO;
    // Next slot of the "<= pivot" region.
    let mut boundary = low;

    for j in low..high {
        counts.comparisons += 1;
        if arr[j] <= pivot {
            arr.swap(boundary, j);
            counts.movements += 1;
            boundary += 1;
        }
    }

    arr.swap(boundary, high);
    counts.movements += 1;

    (boundary, counts)
}
