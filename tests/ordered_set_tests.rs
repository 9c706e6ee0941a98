//! Behavioral tests shared by every ordered set implementation.
//!
//! Each scenario is written once against the `OrderedSet` trait and then
//! instantiated for `LinkedOrderedSet`, `SliceOrderedSet` and
//! `SyncLinkedOrderedSet`, so the three implementations are held to exactly
//! the same observable sequences.

use ordsets::collections::{LinkedOrderedSet, SliceOrderedSet, SyncLinkedOrderedSet};
use ordsets::set::OrderedSet;
use rstest::rstest;

/// Asserts order, length and membership in one go.
fn assert_values<S: OrderedSet<i32>>(set: &S, expected: &[i32]) {
    assert_eq!(set.values().into_owned(), expected.to_vec());
    assert_eq!(set.len(), expected.len());
    assert_eq!(set.is_empty(), expected.is_empty());
    for value in expected {
        assert!(set.contains(value), "missing {value}");
    }
}

// =============================================================================
// Scenarios
// =============================================================================

fn scenario_len<S: OrderedSet<i32>>(mut set: S) {
    assert_eq!(set.len(), 0);
    for (value, expected) in [
        (20, vec![20]),
        (20, vec![20]),
        (10, vec![20, 10]),
        (10, vec![20, 10]),
        (30, vec![20, 10, 30]),
        (30, vec![20, 10, 30]),
    ] {
        set.add(value);
        assert_values(&set, &expected);
    }
}

fn scenario_contains<S: OrderedSet<i32>>(mut set: S) {
    assert!(!set.contains(&20));

    set.add(20);
    assert!(set.contains(&20));
    assert!(!set.contains(&10));
    assert!(!set.contains(&30));

    set.add(10);
    assert!(set.contains(&20));
    assert!(set.contains(&10));
    assert!(!set.contains(&30));

    set.add(30);
    assert!(set.contains(&20));
    assert!(set.contains(&10));
    assert!(set.contains(&30));
    assert!(!set.contains(&40));
}

fn scenario_try_add<S: OrderedSet<i32>>(mut set: S) {
    for (value, inserted, expected) in [
        (20, true, vec![20]),
        (20, false, vec![20]),
        (10, true, vec![20, 10]),
        (10, false, vec![20, 10]),
        (30, true, vec![20, 10, 30]),
        (30, false, vec![20, 10, 30]),
        (20, false, vec![20, 10, 30]),
    ] {
        assert_eq!(set.try_add(value), inserted, "try_add({value})");
        assert_values(&set, &expected);
    }
}

fn scenario_try_remove<S: OrderedSet<i32>>(mut set: S) {
    set.add(20);
    set.add(10);
    set.add(30);
    assert_values(&set, &[20, 10, 30]);

    for (value, removed, expected) in [
        (10, true, vec![20, 30]),
        (10, false, vec![20, 30]),
        (20, true, vec![30]),
        (20, false, vec![30]),
        (30, true, vec![]),
        (30, false, vec![]),
    ] {
        assert_eq!(set.try_remove(&value), removed, "try_remove({value})");
        assert_values(&set, &expected);
    }
}

fn scenario_remove<S: OrderedSet<i32>>(mut set: S) {
    set.add(20);
    set.add(10);
    set.add(30);

    set.remove(&10);
    assert_values(&set, &[20, 30]);
    set.remove(&10);
    assert_values(&set, &[20, 30]);
    set.remove(&30);
    assert_values(&set, &[20]);
    set.remove(&20);
    assert_values(&set, &[]);
    set.remove(&20);
    assert_values(&set, &[]);
}

fn scenario_try_add_first<S: OrderedSet<i32>>(mut set: S) {
    for (value, inserted, expected) in [
        (20, true, vec![20]),
        (20, false, vec![20]),
        (10, true, vec![10, 20]),
        (10, false, vec![10, 20]),
        (30, true, vec![30, 10, 20]),
        (30, false, vec![30, 10, 20]),
        (10, false, vec![10, 30, 20]),
        (10, false, vec![10, 30, 20]),
        (30, false, vec![30, 10, 20]),
        (30, false, vec![30, 10, 20]),
    ] {
        assert_eq!(set.try_add_first(value), inserted, "try_add_first({value})");
        assert_values(&set, &expected);
    }
}

fn scenario_try_add_last<S: OrderedSet<i32>>(mut set: S) {
    for (value, inserted, expected) in [
        (20, true, vec![20]),
        (20, false, vec![20]),
        (10, true, vec![20, 10]),
        (10, false, vec![20, 10]),
        (30, true, vec![20, 10, 30]),
        (30, false, vec![20, 10, 30]),
        (10, false, vec![20, 30, 10]),
        (10, false, vec![20, 30, 10]),
        (20, false, vec![30, 10, 20]),
        (20, false, vec![30, 10, 20]),
    ] {
        assert_eq!(set.try_add_last(value), inserted, "try_add_last({value})");
        assert_values(&set, &expected);
    }
}

fn scenario_void_moves<S: OrderedSet<i32>>(mut set: S) {
    set.add_last(20);
    set.add_last(10);
    set.add_first(30);
    assert_values(&set, &[30, 20, 10]);

    set.add_first(10);
    assert_values(&set, &[10, 30, 20]);
    set.add_last(10);
    assert_values(&set, &[30, 20, 10]);
}

fn scenario_pop_first<S: OrderedSet<i32>>(mut set: S) {
    set.add(20);
    set.add(10);
    set.add(30);

    assert_eq!(set.pop_first(), Some(20));
    assert_values(&set, &[10, 30]);
    assert_eq!(set.pop_first(), Some(10));
    assert_values(&set, &[30]);
    assert_eq!(set.pop_first(), Some(30));
    assert_values(&set, &[]);
    assert_eq!(set.pop_first(), None);
    assert_values(&set, &[]);
}

fn scenario_pop_last<S: OrderedSet<i32>>(mut set: S) {
    set.add(20);
    set.add(10);
    set.add(30);

    assert_eq!(set.pop_last(), Some(30));
    assert_values(&set, &[20, 10]);
    assert_eq!(set.pop_last(), Some(10));
    assert_values(&set, &[20]);
    assert_eq!(set.pop_last(), Some(20));
    assert_values(&set, &[]);
    assert_eq!(set.pop_last(), None);
    assert_values(&set, &[]);
}

fn scenario_reuse_after_emptying<S: OrderedSet<i32>>(mut set: S) {
    set.add(1);
    set.add(2);
    assert_eq!(set.pop_last(), Some(2));
    assert_eq!(set.pop_last(), Some(1));
    assert!(set.is_empty());

    set.add_first(3);
    set.add_last(4);
    set.add_first(5);
    assert_values(&set, &[5, 3, 4]);
}

fn scenario_values_snapshot_is_detached<S: OrderedSet<i32>>(mut set: S) {
    set.add(1);
    set.add(2);

    let mut snapshot = set.values();
    snapshot.to_mut()[0] = 100;
    assert_eq!(snapshot.into_owned(), vec![100, 2]);
    assert_values(&set, &[1, 2]);
}

macro_rules! ordered_set_scenarios {
    ($module:ident, $constructor:expr) => {
        mod $module {
            use super::*;

            #[rstest]
            fn test_len() {
                scenario_len($constructor);
            }

            #[rstest]
            fn test_contains() {
                scenario_contains($constructor);
            }

            #[rstest]
            fn test_try_add() {
                scenario_try_add($constructor);
            }

            #[rstest]
            fn test_try_remove() {
                scenario_try_remove($constructor);
            }

            #[rstest]
            fn test_remove() {
                scenario_remove($constructor);
            }

            #[rstest]
            fn test_try_add_first() {
                scenario_try_add_first($constructor);
            }

            #[rstest]
            fn test_try_add_last() {
                scenario_try_add_last($constructor);
            }

            #[rstest]
            fn test_void_moves() {
                scenario_void_moves($constructor);
            }

            #[rstest]
            fn test_pop_first() {
                scenario_pop_first($constructor);
            }

            #[rstest]
            fn test_pop_last() {
                scenario_pop_last($constructor);
            }

            #[rstest]
            fn test_reuse_after_emptying() {
                scenario_reuse_after_emptying($constructor);
            }

            #[rstest]
            fn test_values_snapshot_is_detached() {
                scenario_values_snapshot_is_detached($constructor);
            }
        }
    };
}

ordered_set_scenarios!(linked, LinkedOrderedSet::<i32>::new());
ordered_set_scenarios!(slice, SliceOrderedSet::<i32>::new());
ordered_set_scenarios!(sync_linked, SyncLinkedOrderedSet::<i32>::new());

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(vec![], vec![])]
#[case(vec![20], vec![20])]
#[case(vec![20, 10], vec![20, 10])]
#[case(vec![20, 10, 30], vec![20, 10, 30])]
#[case(vec![20, 10, 30, 20, 30, 10], vec![20, 10, 30])]
fn test_collect_keeps_first_occurrence(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    let linked: LinkedOrderedSet<i32> = input.iter().copied().collect();
    let slice: SliceOrderedSet<i32> = input.iter().copied().collect();
    let sync_linked: SyncLinkedOrderedSet<i32> = input.iter().copied().collect();

    assert_eq!(linked.values(), expected);
    assert_eq!(slice.values(), expected.as_slice());
    assert_eq!(sync_linked.values(), expected);
}

#[rstest]
fn test_from_array_deduplicates() {
    let linked = LinkedOrderedSet::from([20, 10, 30, 20, 30, 10]);
    let slice = SliceOrderedSet::from([20, 10, 30, 20, 30, 10]);
    let sync_linked = SyncLinkedOrderedSet::from([20, 10, 30, 20, 30, 10]);

    assert_eq!(linked.values(), vec![20, 10, 30]);
    assert_eq!(slice.values(), &[20, 10, 30]);
    assert_eq!(sync_linked.values(), vec![20, 10, 30]);
}

#[rstest]
fn test_from_vec_deduplicates_for_linked_sets() {
    let linked = LinkedOrderedSet::from(vec![3, 1, 3, 2]);
    let sync_linked = SyncLinkedOrderedSet::from(vec![3, 1, 3, 2]);

    assert_eq!(linked.values(), vec![3, 1, 2]);
    assert_eq!(sync_linked.values(), vec![3, 1, 2]);
}

#[rstest]
fn test_slice_try_from_vec_rejects_duplicates() {
    let error = SliceOrderedSet::try_from(vec![20, 10, 30, 10]).unwrap_err();
    assert_eq!(error.first_index, 1);
    assert_eq!(error.duplicate_index, 3);

    let set = SliceOrderedSet::try_from(vec![20, 10, 30]).unwrap();
    assert_eq!(set.values(), &[20, 10, 30]);
}

// =============================================================================
// Iteration and Equality
// =============================================================================

#[rstest]
fn test_iteration_follows_order() {
    let mut linked = LinkedOrderedSet::from([1, 2, 3]);
    linked.add_first(3);
    let mut slice = SliceOrderedSet::from([1, 2, 3]);
    slice.add_first(3);

    assert_eq!(linked.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(slice.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(linked.iter().rev().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    assert_eq!(linked.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert_eq!(slice.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[rstest]
fn test_owned_iterator_drains_from_both_ends() {
    let set = SyncLinkedOrderedSet::from([1, 2, 3, 4]);
    let mut iter = set.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
}

#[rstest]
fn test_equality_is_order_sensitive() {
    let forward = LinkedOrderedSet::from([1, 2, 3]);
    let backward = LinkedOrderedSet::from([3, 2, 1]);
    let mut moved = LinkedOrderedSet::from([3, 1, 2]);
    moved.add_first(2);
    moved.add_first(1);

    assert_ne!(forward, backward);
    assert_eq!(forward, moved);
    assert_ne!(SliceOrderedSet::from([1, 2]), SliceOrderedSet::from([2, 1]));
}

#[rstest]
fn test_lookup_by_borrowed_form() {
    let mut linked = LinkedOrderedSet::from(["alpha".to_string(), "beta".to_string()]);
    let sync_linked = SyncLinkedOrderedSet::from(["alpha".to_string(), "beta".to_string()]);

    assert!(linked.contains("alpha"));
    assert!(linked.try_remove("alpha"));
    assert!(!linked.contains("alpha"));
    assert!(sync_linked.contains("beta"));
    assert!(sync_linked.try_remove("beta"));
    assert_eq!(sync_linked.values(), vec!["alpha".to_string()]);
}

#[rstest]
fn test_shared_reference_drives_sync_set_generically() {
    fn fill<S: OrderedSet<i32>>(mut set: S) {
        set.add(20);
        set.add(10);
        set.add_first(30);
    }

    let set = SyncLinkedOrderedSet::new();
    fill(&set);
    assert_eq!(set.values(), vec![30, 20, 10]);
    assert_eq!(set.first(), Some(30));
    assert_eq!(set.last(), Some(10));
}
