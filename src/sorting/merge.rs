//! Top-down merge sort.

use super::OpCounts;

/// Sort `arr` in place with recursive merge sort.
///
/// The slice is split at `len / 2`. Comparisons are only counted while
/// merging; every value written back into `arr` (interleaved or drained)
/// is one movement. Slices of length 0 or 1 cost nothing.
///
/// Ties are taken from the **right** half: the merge only takes from the
/// left when `left < right`. Equal elements can therefore change their
/// relative order, and this sort is not stable.
pub fn merge_sort<T: PartialOrd + Copy>(arr: &mut [T]) -> OpCounts {
    if arr.len() <= 1 {
        return OpCounts::ZERO;
    }

    let mid = arr.len() / 2;
    let mut counts = {
        let (left, right) = arr.split_at_mut(mid);
        merge_sort(left) + merge_sort(right)
    };
    counts += merge_halves(arr, mid);
    counts
}

/// Merge the sorted runs `arr[..mid]` and `arr[mid..]` back into `arr`.
fn merge_halves<T: PartialOrd + Copy>(arr: &mut [T], mid: usize) -> OpCounts {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();
    let mut counts = OpCounts::ZERO;

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        counts.comparisons += 1;
        if left[i] < right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        counts.movements += 1;
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        arr[k] = value;
        counts.movements += 1;
        k += 1;
    }

    counts
}
