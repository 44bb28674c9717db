use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use tallysort::prelude::*;

#[test]
fn test_sorted_input_is_a_chain() {
    let mut input: Vec<u32> = (0..100).collect();
    let expected = input.clone();

    let mut stats = Statistics::new();
    binary_tree_sort(&mut input, &mut stats);

    assert_eq!(input, expected);
    assert_eq!(stats.compare_count(), 4950);
    assert_eq!(stats.index_read_count(), 100);
    assert_eq!(stats.index_write_count(), 100);
    assert_eq!(stats.swap_count(), 0);
}

#[test]
fn test_reversed_input_is_a_chain() {
    for n in [2u64, 10, 57, 300] {
        let mut input: Vec<u64> = (0..n).rev().collect();

        let mut stats = Statistics::new();
        binary_tree_sort(&mut input, &mut stats);

        assert_eq!(input, (0..n).collect::<Vec<_>>());
        assert_eq!(stats.compare_count(), n * (n - 1) / 2);
        assert_eq!(stats.index_read_count(), n);
        assert_eq!(stats.index_write_count(), n);
        assert_eq!(stats.swap_count(), 0);
    }
}

#[test]
fn test_balanced_insertion_order() {
    // Level-order insertion of 0..7 builds a perfect tree: 0 + 1 + 1 + 2 * 4.
    let mut input = vec![3, 1, 5, 0, 2, 4, 6];

    let mut stats = Statistics::new();
    binary_tree_sort(&mut input, &mut stats);

    assert_eq!(input, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(stats.compare_count(), 10);
}

#[test]
fn test_all_equal_descend_right() {
    // Equal elements always go right, so all-equal input is a chain as well.
    let mut input = vec![7u8; 40];

    let mut stats = Statistics::new();
    binary_tree_sort(&mut input, &mut stats);

    assert_eq!(input, vec![7u8; 40]);
    assert_eq!(stats.compare_count(), 40 * 39 / 2);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let mut input = vec![(2, 'a'), (1, 'b'), (2, 'c'), (0, 'd'), (1, 'e'), (2, 'f')];

    let mut stats = Statistics::new();
    binary_tree_sort_by(&mut input, &ByKey(|p: &(i32, char)| p.0), &mut stats);

    assert_eq!(
        input,
        vec![(0, 'd'), (1, 'b'), (1, 'e'), (2, 'a'), (2, 'c'), (2, 'f')]
    );
}

#[test]
fn test_empty_and_singleton() {
    let mut empty: Vec<i32> = vec![];
    let mut stats = Statistics::new();
    binary_tree_sort(&mut empty, &mut stats);
    assert!(empty.is_empty());
    assert_eq!(stats, Statistics::new());

    let mut single = vec![42];
    let mut stats = Statistics::new();
    binary_tree_sort(&mut single, &mut stats);
    assert_eq!(single, vec![42]);
    assert_eq!(stats.compare_count(), 0);
    assert_eq!(stats.index_read_count(), 1);
    assert_eq!(stats.index_write_count(), 1);
}

#[test]
fn test_random_compare_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 2_000usize;
    let mut input: Vec<u64> = (0..n).map(|_| rng.random()).collect();
    let mut expected = input.clone();
    expected.sort();

    let mut stats = Statistics::new();
    binary_tree_sort(&mut input, &mut stats);

    assert_eq!(input, expected);
    let lower = 0.4 * n as f64 * (n as f64).log2();
    let upper = (n * (n - 1) / 2) as f64;
    let compares = stats.compare_count() as f64;
    assert!(compares >= lower, "{} compares below {}", compares, lower);
    assert!(compares <= upper, "{} compares above {}", compares, upper);
}

#[test]
fn test_nan_first() {
    let mut input = vec![3.0, f64::NAN, -2.0, f64::INFINITY, f64::NAN, 0.5];

    let mut stats = Statistics::new();
    binary_tree_sort_by(&mut input, &NanFirst, &mut stats);

    assert!(input[0].is_nan());
    assert!(input[1].is_nan());
    assert_eq!(&input[2..], &[-2.0, 0.5, 3.0, f64::INFINITY]);
}

#[test]
fn test_closure_comparator_descending() {
    let mut input = vec!["pear", "fig", "apple", "kiwi"];

    let mut stats = Statistics::new();
    binary_tree_sort_by(&mut input, &|a: &&str, b: &&str| b.cmp(a), &mut stats);

    assert_eq!(input, vec!["pear", "kiwi", "fig", "apple"]);
}

#[test]
fn test_fuzz_random_mut() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let count = rng.random_range(0..64);
        let mut input: Vec<i16> = (0..count).map(|_| rng.random_range(-20..20)).collect();

        let mut expected = input.clone();
        expected.sort();

        let mut stats = Statistics::new();
        binary_tree_sort(&mut input, &mut stats);
        assert_eq!(input, expected);
        assert_eq!(stats.index_read_count(), count as u64);
        assert_eq!(stats.index_write_count(), count as u64);
        assert_eq!(stats.swap_count(), 0);
    }
}

#[test]
fn test_strings() {
    let mut input = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
    ];

    let mut stats = Statistics::new();
    binary_tree_sort(&mut input, &mut stats);

    assert_eq!(input, vec!["apple", "banana", "cherry", "date"]);
    assert!(
        input
            .windows(2)
            .all(|w| Natural.compare(&w[0], &w[1]) != Ordering::Greater)
    );
}
