//! Unit tests for GuardedOrderedSet.
//!
//! These tests exercise the full operation set of the concurrency-safe
//! wrapper from a single thread: construction, single-element and
//! batch mutation, membership, snapshots, and reset. Multi-threaded
//! behavior is covered by `guarded_set_thread_tests`.

use guardset::sync::GuardedOrderedSet;
use rstest::rstest;

#[rstest]
fn test_new_creates_empty_set() {
    let set: GuardedOrderedSet<i32> = GuardedOrderedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.to_sorted_vec().is_empty());
}

#[rstest]
fn test_insert_reports_novelty() {
    let set = GuardedOrderedSet::new();
    assert!(set.insert(42));
    assert!(!set.insert(42));
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_insert_slice_scenario() {
    let set = GuardedOrderedSet::new();
    assert_eq!(
        set.insert_slice(&[3, 1, 2, 1]),
        vec![true, true, true, false]
    );
    assert_eq!(set.to_sorted_vec(), vec![1, 2, 3]);
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_from_slice_scenario() {
    let set = GuardedOrderedSet::from_slice(&["b", "a", "a"]);
    assert_eq!(set.to_sorted_vec(), vec!["a", "b"]);
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_remove_slice_scenario() {
    // The first occurrence removes the element, the second finds it gone
    let set = GuardedOrderedSet::from_slice(&["a"]);
    assert_eq!(set.remove_slice(&["a", "a"]), vec![true, false]);
    assert!(set.is_empty());
}

#[rstest]
fn test_clear_scenario() {
    let set: GuardedOrderedSet<i32> = (1..=50).collect();
    assert_eq!(set.len(), 50);

    set.clear();
    assert_eq!(set.len(), 0);
    assert!(set.to_sorted_vec().is_empty());
}

#[rstest]
fn test_contains_tracks_insert_and_remove() {
    let set = GuardedOrderedSet::new();
    assert!(!set.contains(&7));

    assert!(set.insert(7));
    assert!(set.contains(&7));

    assert!(set.remove(&7));
    assert!(!set.contains(&7));
}

#[rstest]
fn test_contains_slice_does_not_mutate() {
    let set = GuardedOrderedSet::from_slice(&[1, 2, 4]);
    assert_eq!(
        set.contains_slice(&[1, 3, 4, 1]),
        vec![true, false, true, true]
    );
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_sorted_vec(), vec![1, 2, 4]);
}

#[rstest]
fn test_batch_results_keep_index_correspondence() {
    let set = GuardedOrderedSet::new();
    let elements = [5, 3, 5, 8, 3];
    let results = set.insert_slice(&elements);

    assert_eq!(results.len(), elements.len());
    assert_eq!(results, vec![true, true, false, true, false]);
}

#[rstest]
fn test_empty_batch_inputs_yield_empty_results() {
    let set: GuardedOrderedSet<i32> = GuardedOrderedSet::new();
    assert!(set.insert_slice(&[]).is_empty());
    assert!(set.contains_slice(&[]).is_empty());
    assert!(set.remove_slice(&[]).is_empty());
}

#[rstest]
fn test_from_slice_empty_input_yields_empty_set() {
    let set: GuardedOrderedSet<i32> = GuardedOrderedSet::from_slice(&[]);
    assert!(set.is_empty());
}

#[rstest]
fn test_snapshot_survives_later_mutation() {
    let set = GuardedOrderedSet::from_slice(&[3, 1, 2]);
    let snapshot = set.to_sorted_vec();

    set.insert(4);
    set.remove(&1);
    set.clear();

    assert_eq!(snapshot, vec![1, 2, 3]);
}

#[rstest]
fn test_first_and_last_sorted() {
    let set = GuardedOrderedSet::from_slice(&[30, 10, 20]);
    assert_eq!(set.first_sorted(), Some(10));
    assert_eq!(set.last_sorted(), Some(30));

    set.clear();
    assert_eq!(set.first_sorted(), None);
    assert_eq!(set.last_sorted(), None);
}

#[rstest]
fn test_string_set_with_borrowed_lookups() {
    let set = GuardedOrderedSet::new();
    set.insert("banana".to_string());
    set.insert("apple".to_string());

    assert!(set.contains("apple"));
    assert!(set.remove("banana"));
    assert!(!set.contains("banana"));
}

#[rstest]
fn test_into_inner_returns_collection() {
    let set = GuardedOrderedSet::from_slice(&[2, 1, 2]);
    let collection = set.into_inner();
    assert_eq!(collection.to_sorted_vec(), vec![1, 2]);
}

#[rstest]
fn test_interleaved_batches_apply_in_call_order() {
    let set = GuardedOrderedSet::new();
    set.insert_slice(&[1, 2, 3, 4]);

    assert_eq!(set.remove_slice(&[2, 2, 5]), vec![true, false, false]);
    assert_eq!(set.insert_slice(&[2, 4]), vec![true, false]);
    assert_eq!(set.to_sorted_vec(), vec![1, 2, 3, 4]);
}
