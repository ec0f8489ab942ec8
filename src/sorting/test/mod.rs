use crate::sorting::*;
use proptest::prelude::*;
use std::cmp::Ordering;

type InPlaceSort = fn(&mut [i64]) -> OpCounts;

fn instrumented() -> Vec<(&'static str, InPlaceSort)> {
    vec![
        ("insertion", insertion_sort::<i64> as InPlaceSort),
        ("bubble", bubble_sort::<i64> as InPlaceSort),
        ("merge", merge_sort::<i64> as InPlaceSort),
        ("quick", quick_sort::<i64> as InPlaceSort),
    ]
}

fn reversed(n: i64) -> Vec<i64> {
    (0..n).rev().collect()
}

/// Element ordered by `key` only, so equal keys can be told apart by `tag`.
#[derive(Clone, Copy, Debug)]
struct Keyed {
    key: u8,
    tag: char,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

fn tags(data: &[Keyed]) -> String {
    data.iter().map(|k| k.tag).collect()
}

// ---------------------------------------------------------------------------
// Insertion sort
// ---------------------------------------------------------------------------

#[test]
fn test_insertion_worst_case_small() {
    let mut data = [3, 2, 1];
    let counts = insertion_sort(&mut data);
    assert_eq!(data, [1, 2, 3]);
    assert_eq!(counts.comparisons, 5);
    assert_eq!(counts.movements, 3);
}

#[test]
fn test_insertion_sorted_is_linear() {
    let mut data = [1, 2, 3, 4];
    assert_eq!(insertion_sort(&mut data), OpCounts::new(3, 0));
}

#[test]
fn test_insertion_reversed_formula() {
    let n = 50u64;
    let mut data = reversed(n as i64);
    let counts = insertion_sort(&mut data);
    let pairs = n * (n - 1) / 2;
    assert!(is_sorted(&data));
    assert_eq!(counts.comparisons, (n - 1) + pairs);
    assert_eq!(counts.movements, pairs);
}

#[test]
fn test_insertion_is_stable() {
    let mut data = [
        Keyed { key: 2, tag: 'a' },
        Keyed { key: 1, tag: 'b' },
        Keyed { key: 2, tag: 'c' },
        Keyed { key: 1, tag: 'd' },
    ];
    insertion_sort(&mut data);
    assert_eq!(tags(&data), "bdac");
}

// ---------------------------------------------------------------------------
// Bubble sort
// ---------------------------------------------------------------------------

#[test]
fn test_bubble_sorted_exits_after_one_pass() {
    let mut data = [1, 2, 3, 4];
    let counts = bubble_sort(&mut data);
    assert_eq!(data, [1, 2, 3, 4]);
    // A second pass would have added another 2 comparisons.
    assert_eq!(counts, OpCounts::new(3, 0));
}

#[test]
fn test_bubble_reversed_small() {
    let mut data = [3, 2, 1];
    assert_eq!(bubble_sort(&mut data), OpCounts::new(3, 3));
    assert_eq!(data, [1, 2, 3]);
}

#[test]
fn test_bubble_reversed_formula() {
    let n = 40u64;
    let mut data = reversed(n as i64);
    let counts = bubble_sort(&mut data);
    let pairs = n * (n - 1) / 2;
    assert!(is_sorted(&data));
    assert_eq!(counts, OpCounts::new(pairs, pairs));
}

#[test]
fn test_bubble_single_swap_needs_second_pass() {
    let mut data = [2, 1, 3, 4];
    // Pass 0: 3 comparisons, 1 exchange. Pass 1: 2 comparisons, none.
    assert_eq!(bubble_sort(&mut data), OpCounts::new(5, 1));
    assert_eq!(data, [1, 2, 3, 4]);
}

// ---------------------------------------------------------------------------
// Merge sort
// ---------------------------------------------------------------------------

#[test]
fn test_merge_base_cases() {
    let mut empty: [i64; 0] = [];
    assert_eq!(merge_sort(&mut empty), OpCounts::ZERO);

    let mut single = [7];
    assert_eq!(merge_sort(&mut single), OpCounts::ZERO);
    assert_eq!(single, [7]);
}

#[test]
fn test_merge_counts() {
    let mut pair = [2, 1];
    assert_eq!(merge_sort(&mut pair), OpCounts::new(1, 2));
    assert_eq!(pair, [1, 2]);

    let mut rev = [4, 3, 2, 1];
    assert_eq!(merge_sort(&mut rev), OpCounts::new(4, 8));
    assert_eq!(rev, [1, 2, 3, 4]);

    let mut sorted = [1, 2, 3, 4];
    assert_eq!(merge_sort(&mut sorted), OpCounts::new(4, 8));
}

#[test]
fn test_merge_movements_are_n_log_n_writes() {
    // Every level of the recursion writes each element exactly once.
    let mut data = reversed(64);
    let counts = merge_sort(&mut data);
    assert!(is_sorted(&data));
    assert_eq!(counts.movements, 64 * 6);
}

#[test]
fn test_merge_ties_take_from_right() {
    let mut data = [Keyed { key: 1, tag: 'a' }, Keyed { key: 1, tag: 'b' }];
    let counts = merge_sort(&mut data);
    assert_eq!(tags(&data), "ba");
    assert_eq!(counts, OpCounts::new(1, 2));
}

// ---------------------------------------------------------------------------
// Quicksort
// ---------------------------------------------------------------------------

#[test]
fn test_quick_trivial() {
    let mut single = [1];
    assert_eq!(quick_sort(&mut single), OpCounts::ZERO);
    assert_eq!(single, [1]);

    let mut empty: [i64; 0] = [];
    assert_eq!(quick_sort(&mut empty), OpCounts::ZERO);
}

#[test]
fn test_quick_small_counts() {
    let mut sorted = [1, 2, 3];
    assert_eq!(quick_sort(&mut sorted), OpCounts::new(3, 5));

    let mut rev = [3, 2, 1];
    assert_eq!(quick_sort(&mut rev), OpCounts::new(3, 3));
    assert_eq!(rev, [1, 2, 3]);
}

#[test]
fn test_quick_sorted_worst_case_formula() {
    let n = 100u64;
    let mut data: Vec<i64> = (0..n as i64).collect();
    let counts = quick_sort(&mut data);
    assert!(is_sorted(&data));
    assert_eq!(counts.comparisons, n * (n - 1) / 2);
    // Partitions of size n, n-1, ..., 2 each cost their size in exchanges.
    assert_eq!(counts.movements, n * (n + 1) / 2 - 1);
}

#[test]
fn test_quick_large_sorted_does_not_overflow_stack() {
    let mut data: Vec<i64> = (0..20_000).collect();
    quick_sort(&mut data);
    assert!(is_sorted(&data));
}

// ---------------------------------------------------------------------------
// Builtin
// ---------------------------------------------------------------------------

#[test]
fn test_builtin_is_out_of_place() {
    let data = vec![3, 1, 2];
    let sorted = builtin_sort(&data);
    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(data, vec![3, 1, 2]);
}

// ---------------------------------------------------------------------------
// Shared properties
// ---------------------------------------------------------------------------

#[test]
fn test_counts_are_deterministic_for_fixed_input() {
    let input = vec![5, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    for (name, sort) in instrumented() {
        let mut a = input.clone();
        let mut b = input.clone();
        assert_eq!(sort(&mut a), sort(&mut b), "{} counts differ", name);
        assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn prop_sorts_into_permutation(input in prop::collection::vec(-50i64..50, 0..200)) {
        let mut expected = input.clone();
        expected.sort();

        for (name, sort) in instrumented() {
            let mut data = input.clone();
            sort(&mut data);
            prop_assert_eq!(&data, &expected, "{} produced a wrong result", name);
        }
    }

    #[test]
    fn prop_bubble_sorted_input_is_one_pass(n in 1usize..300) {
        let mut data: Vec<i64> = (0..n as i64).collect();
        let counts = bubble_sort(&mut data);
        prop_assert_eq!(counts, OpCounts::new(n as u64 - 1, 0));
    }
}
