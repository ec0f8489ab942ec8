//! Standard library sort used as an opaque baseline.

/// Sort a copy of `arr` with `slice::sort` and return it.
///
/// The input is left untouched. Operation counts are not observable.
pub fn builtin_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let mut out = arr.to_vec();
    out.sort();
    out
}
