use crate::{TopN, TopNExt};
use itertools::Itertools;
use pretty_assertions::assert_eq;
use rand::Rng;
use rand::seq::SliceRandom;
use rstest::rstest;

const PERMUTATION_SIZE: i32 = 20;

fn shuffled(size: i32) -> Vec<i32> {
    let mut values: Vec<i32> = (0..size).collect();
    values.shuffle(&mut rand::thread_rng());
    values
}

fn reference_top(values: &[i32], n: usize) -> Vec<i32> {
    values.iter().copied().sorted_by(|a, b| b.cmp(a)).take(n).collect()
}

#[test]
fn test_every_capacity_over_permutation() {
    let permutation = shuffled(PERMUTATION_SIZE);
    let descending: Vec<i32> = (0..PERMUTATION_SIZE).rev().collect();

    for n in 0..=PERMUTATION_SIZE as usize {
        let mut top = TopN::by_ord(n);
        for value in permutation.iter().copied() {
            top.add(value);
        }
        assert_eq!(top.take(), descending[..n].to_vec(), "top {n}");
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
#[case(64)]
#[case(500)]
fn test_matches_full_sort_with_duplicates(#[case] capacity: usize) {
    let mut rng = rand::thread_rng();
    let values: Vec<i32> = (0..300).map(|_| rng.gen_range(-50..50)).collect();

    let mut top = TopN::by_ord(capacity);
    top.extend(values.iter().copied());
    let taken = top.take();

    assert!(taken.len() <= capacity);
    assert!(taken.len() <= values.len());
    assert_eq!(taken, reference_top(&values, capacity));
}

#[rstest]
#[case(3)]
#[case(16)]
fn test_result_independent_of_insertion_order(#[case] capacity: usize) {
    let mut values = shuffled(100);
    let mut top = TopN::by_ord(capacity);

    top.extend(values.iter().copied());
    let first = top.take();

    values.reverse();
    top.extend(values.iter().copied());
    let reversed = top.take();

    values.sort();
    top.extend(values.iter().copied());
    let ascending = top.take();

    assert_eq!(first, reversed);
    assert_eq!(first, ascending);
}

#[test]
fn test_fewer_elements_than_capacity_are_all_kept() {
    let mut top = TopN::by_ord(10);
    top.extend([4, -2, 8]);
    assert!(!top.is_full());
    assert_eq!(top.take(), vec![8, 4, -2]);
}

#[test]
fn test_reused_accumulator_matches_fresh_one() {
    let mut reused = TopN::by_ord(5);
    reused.extend(shuffled(1000));
    let _ = reused.take();

    let batch = shuffled(40);
    reused.extend(batch.iter().copied());

    let mut fresh = TopN::by_ord(5);
    fresh.extend(batch.iter().copied());

    assert_eq!(reused.take(), fresh.take());
}

#[test]
fn test_ties_keep_only_equal_ranked_elements() {
    let mut top = TopN::new(3, |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0));
    top.extend([1u8, 9, 9, 9, 9, 2].into_iter().enumerate().map(|(i, s)| (s, i)));

    let taken = top.take();
    assert_eq!(taken.len(), 3);
    assert!(taken.iter().all(|(score, _)| *score == 9));
    assert_eq!(taken.iter().map(|(_, i)| *i).unique().count(), 3);
}

#[test]
fn test_iterator_adapter_agrees_with_accumulator() {
    let values = shuffled(250);
    let mut top = TopN::by_ord(12);
    top.extend(values.iter().copied());
    assert_eq!(values.into_iter().top_n(12), top.take());
}
