//! Integration tests for `Display` and `Debug` rendering.
//!
//! `Display` shows the values in order as `[a b c]`. `Debug` renders a
//! constructor call that rebuilds an equal set when pasted back as source.

use ordsets::collections::{LinkedOrderedSet, SliceOrderedSet, SyncLinkedOrderedSet};
use rstest::rstest;

// =============================================================================
// Display
// =============================================================================

#[rstest]
#[case::empty(&[], "[]")]
#[case::single(&[20], "[20]")]
#[case::several(&[20, 10, 30], "[20 10 30]")]
#[case::duplicates_dropped(&[20, 10, 30, 20], "[20 10 30]")]
fn test_display(#[case] input: &[i32], #[case] expected: &str) {
    let linked: LinkedOrderedSet<i32> = input.iter().copied().collect();
    let slice: SliceOrderedSet<i32> = input.iter().copied().collect();
    let sync_linked: SyncLinkedOrderedSet<i32> = input.iter().copied().collect();

    assert_eq!(linked.to_string(), expected);
    assert_eq!(slice.to_string(), expected);
    assert_eq!(sync_linked.to_string(), expected);
}

#[rstest]
fn test_display_follows_moves() {
    let mut set = LinkedOrderedSet::new();
    set.add_first(20);
    set.add_first(10);
    set.add_first(30);
    set.add_first(10);
    assert_eq!(format!("{set}"), "[10 30 20]");
}

#[rstest]
fn test_display_uses_element_display() {
    let set = SliceOrderedSet::from(["hello", "world"]);
    assert_eq!(format!("{set}"), "[hello world]");
}

#[rstest]
fn test_default_displays_as_empty() {
    assert_eq!(LinkedOrderedSet::<i32>::default().to_string(), "[]");
    assert_eq!(SliceOrderedSet::<i32>::default().to_string(), "[]");
    assert_eq!(SyncLinkedOrderedSet::<i32>::default().to_string(), "[]");
}

// =============================================================================
// Debug
// =============================================================================

#[rstest]
#[case::empty(&[], "::from([])")]
#[case::single(&[20], "::from([20])")]
#[case::several(&[20, 10, 30], "::from([20, 10, 30])")]
fn test_debug_renders_constructor(#[case] input: &[i32], #[case] suffix: &str) {
    let linked: LinkedOrderedSet<i32> = input.iter().copied().collect();
    let slice: SliceOrderedSet<i32> = input.iter().copied().collect();
    let sync_linked: SyncLinkedOrderedSet<i32> = input.iter().copied().collect();

    assert_eq!(format!("{linked:?}"), format!("LinkedOrderedSet{suffix}"));
    assert_eq!(format!("{slice:?}"), format!("SliceOrderedSet{suffix}"));
    assert_eq!(format!("{sync_linked:?}"), format!("SyncLinkedOrderedSet{suffix}"));
}

#[rstest]
fn test_debug_uses_element_debug() {
    let set = LinkedOrderedSet::from(["a", "b"]);
    assert_eq!(format!("{set:?}"), r#"LinkedOrderedSet::from(["a", "b"])"#);
}

#[rstest]
fn test_debug_output_rebuilds_equal_set() {
    let mut original = LinkedOrderedSet::from([20, 10, 30]);
    original.add_first(30);
    assert_eq!(format!("{original:?}"), "LinkedOrderedSet::from([30, 20, 10])");

    let rebuilt = LinkedOrderedSet::from([30, 20, 10]);
    assert_eq!(original, rebuilt);
}

#[rstest]
fn test_pretty_debug_lists_one_value_per_line() {
    let set = SliceOrderedSet::from([1, 2]);
    assert_eq!(format!("{set:#?}"), "SliceOrderedSet::from([\n    1,\n    2,\n])");
}
