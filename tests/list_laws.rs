//! Property-based tests for `List<A>`.
//!
//! These tests verify the algebraic properties every list traversal must
//! satisfy, for arbitrary contents and lengths.

#![cfg(feature = "persistent")]

use proptest::prelude::*;
use stackless::persistent::List;

// =============================================================================
// Strategy for generating List
// =============================================================================

/// Generates a `Vec<i32>` with up to `max_size` elements.
fn vector_strategy(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size)
}

/// Generates a `List<i32>` with up to `max_size` elements.
fn list_strategy(max_size: usize) -> impl Strategy<Value = List<i32>> {
    vector_strategy(max_size).prop_map(List::from_vec)
}

/// Generates a small `List<i32>` for faster tests.
fn small_list() -> impl Strategy<Value = List<i32>> {
    list_strategy(20)
}

/// Generates a small list over few distinct values, so that subsequence
/// and grouping properties hit matches.
fn small_digit_list() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(0..4, 0..20).prop_map(List::from_vec)
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_length_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.length(), list.iter().count());
    }

    #[test]
    fn prop_is_empty_matches_length_zero(list in small_list()) {
        prop_assert_eq!(list.is_empty(), list.length() == 0);
    }

    #[test]
    fn prop_cons_puts_element_at_head(list in small_list(), element: i32) {
        let extended = list.cons(element);
        prop_assert_eq!(extended.head(), Ok(&element));
        prop_assert_eq!(extended.tail(), Ok(list.clone()));
        prop_assert_eq!(extended.length(), list.length() + 1);
    }

    #[test]
    fn prop_to_vec_roundtrip(vector in vector_strategy(20)) {
        prop_assert_eq!(List::from_vec(vector.clone()).to_vec(), vector);
    }

    // =========================================================================
    // Reverse
    // =========================================================================

    #[test]
    fn prop_reverse_preserves_length(list in small_list()) {
        prop_assert_eq!(list.reverse().length(), list.length());
    }

    #[test]
    fn prop_reverse_is_involution(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    #[test]
    fn prop_reverse_matches_vec_reverse(vector in vector_strategy(20)) {
        let mut reversed = vector.clone();
        reversed.reverse();
        prop_assert_eq!(List::from_vec(vector).reverse().to_vec(), reversed);
    }

    // =========================================================================
    // Append
    // =========================================================================

    #[test]
    fn prop_append_adds_lengths(left in small_list(), right in small_list()) {
        prop_assert_eq!(left.append(&right).length(), left.length() + right.length());
    }

    #[test]
    fn prop_append_starts_with_left(left in small_list(), right in small_list()) {
        prop_assert!(left.append(&right).starts_with(&left));
    }

    #[test]
    fn prop_append_drop_gives_right(left in small_list(), right in small_list()) {
        prop_assert_eq!(left.append(&right).drop(left.length()), right);
    }

    #[test]
    fn prop_append_contains_right(left in small_list(), right in small_list()) {
        prop_assert!(left.append(&right).has_subsequence(&right));
    }

    // =========================================================================
    // Prefixes and Subsequences
    // =========================================================================

    #[test]
    fn prop_empty_is_prefix_and_subsequence(list in small_list()) {
        prop_assert!(list.starts_with(&List::empty()));
        prop_assert!(list.has_subsequence(&List::empty()));
    }

    #[test]
    fn prop_every_suffix_is_subsequence(list in small_digit_list(), count in 0usize..25) {
        prop_assert!(list.has_subsequence(&list.drop(count)));
    }

    #[test]
    fn prop_has_subsequence_matches_windows(list in small_digit_list(), sub in prop::collection::vec(0..4, 1..4)) {
        let vector = list.to_vec();
        let expected = vector.windows(sub.len()).any(|window| window == sub.as_slice());
        prop_assert_eq!(list.has_subsequence(&List::from_vec(sub)), expected);
    }

    // =========================================================================
    // Drop
    // =========================================================================

    #[test]
    fn prop_drop_length(list in small_list(), count in 0usize..30) {
        let dropped = list.drop(count);
        prop_assert_eq!(dropped.length(), list.length().saturating_sub(count));
    }

    #[test]
    fn prop_drop_is_suffix(list in small_list(), count in 0usize..30) {
        let vector = list.to_vec();
        let expected: Vec<i32> = vector.iter().skip(count).copied().collect();
        prop_assert_eq!(list.drop(count).to_vec(), expected);
    }

    #[test]
    fn prop_drop_while_matches_skip_while(list in small_digit_list()) {
        let vector = list.to_vec();
        let expected: Vec<i32> = vector.iter().skip_while(|x| **x < 2).copied().collect();
        prop_assert_eq!(list.drop_while(|x| *x < 2).to_vec(), expected);
    }

    // =========================================================================
    // Folds
    // =========================================================================

    #[test]
    fn prop_fold_right_with_cons_rebuilds(list in small_list()) {
        let rebuilt = list.fold_right(List::empty(), |x, tail| tail.cons(*x));
        prop_assert_eq!(rebuilt, list);
    }

    #[test]
    fn prop_fold_with_cons_reverses(list in small_list()) {
        let reversed = list.fold(List::empty(), |tail: List<i32>, x| tail.cons(*x));
        prop_assert_eq!(reversed, list.reverse());
    }

    #[test]
    fn prop_fold_matches_iterator_sum(vector in vector_strategy(50)) {
        let expected = vector.iter().fold(0_i64, |total, x| total + i64::from(*x));
        prop_assert_eq!(List::from_vec(vector).fold(0_i64, |total, x| total + i64::from(*x)), expected);
    }

    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn prop_map_identity(list in small_list()) {
        prop_assert_eq!(list.map(|x| *x), list);
    }

    #[test]
    fn prop_map_composition(list in small_list()) {
        let function1 = |x: &i32| x.wrapping_add(1);
        let function2 = |x: &i32| x.wrapping_mul(2);
        let left = list.map(function1).map(function2);
        let right = list.map(move |x| function2(&function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_map_preserves_length(list in small_list()) {
        prop_assert_eq!(list.map(|x| i64::from(*x) * 2).length(), list.length());
    }

    // =========================================================================
    // Filter and Grouping
    // =========================================================================

    #[test]
    fn prop_filter_matches_iterator_filter(vector in vector_strategy(30)) {
        let expected: Vec<i32> = vector.iter().filter(|x| **x % 3 == 0).copied().collect();
        prop_assert_eq!(List::from_vec(vector).filter(|x| x % 3 == 0).to_vec(), expected);
    }

    #[test]
    fn prop_group_by_partitions(list in small_digit_list()) {
        let groups = list.group_by(|x| x % 2);
        let total: usize = groups.values().map(List::length).sum();
        prop_assert_eq!(total, list.length());
        for (key, group) in &groups {
            prop_assert!(group.iter().all(|x| x % 2 == *key));
        }
    }
}
