//! Unit tests for SortedHashTree.

use hashtree::tree::{HashTree, NaturalOrder, Reverse, SortedHashTree};
use rstest::rstest;
use std::cmp::Ordering;

// =============================================================================
// Ordering Tests
// =============================================================================

#[rstest]
#[case::ascending(vec![5, 3, 9, 1], vec![1, 3, 5, 9])]
#[case::already_sorted(vec![1, 2, 3], vec![1, 2, 3])]
#[case::with_duplicates(vec![2, 1, 2, 1], vec![1, 2])]
fn test_list_is_sorted(#[case] keys: Vec<i32>, #[case] expected: Vec<i32>) {
    let tree = SortedHashTree::from_keys(keys);
    let listed: Vec<i32> = tree.list().into_iter().copied().collect();
    assert_eq!(listed, expected);
}

#[rstest]
fn test_custom_comparator_applies_at_every_depth() {
    let by_length = |left: &String, right: &String| {
        left.len().cmp(&right.len()).then_with(|| left.cmp(right))
    };
    let mut tree = SortedHashTree::with_comparator(by_length);
    tree.add_path(["root".to_string(), "ccc".to_string()]);
    tree.add_path(["root".to_string(), "a".to_string()]);
    tree.add_path(["root".to_string(), "bb".to_string()]);

    let children: Vec<&str> = tree
        .list_at(&["root".to_string()])
        .unwrap()
        .into_iter()
        .map(String::as_str)
        .collect();
    assert_eq!(children, vec!["a", "bb", "ccc"]);
}

#[rstest]
fn test_reverse_comparator() {
    let mut tree = SortedHashTree::with_comparator(Reverse(NaturalOrder));
    tree.add_all(['a', 'c', 'b']);
    assert_eq!(tree.list(), vec![&'c', &'b', &'a']);
    assert_eq!(tree.comparator(), &Reverse(NaturalOrder));
}

#[rstest]
fn test_comparator_equal_keys_collapse() {
    let case_insensitive =
        |left: &&str, right: &&str| -> Ordering { left.to_lowercase().cmp(&right.to_lowercase()) };
    let mut tree = SortedHashTree::with_comparator(case_insensitive);
    tree.add("Key");
    tree.add("key");
    assert_eq!(tree.len(), 1);
}

// =============================================================================
// Mutation Tests
// =============================================================================

#[rstest]
fn test_set_overwrites_existing_key() {
    let mut tree = SortedHashTree::new();
    tree.add_values("group", ["old", "older"]);
    tree.set("group", ["new"]);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.list_at(&["group"]), Some(vec![&"new"]));
}

#[rstest]
fn test_remove_and_missing_remove() {
    let mut tree = SortedHashTree::from_keys([1, 2, 3]);
    assert!(tree.remove(&2).is_some());
    assert!(tree.remove(&2).is_none());
    assert_eq!(tree.list(), vec![&1, &3]);
}

#[rstest]
fn test_get_tree_on_missing_first_segment() {
    let mut tree = SortedHashTree::new();
    tree.add_path([1, 2]);
    assert!(tree.get_tree(&[9, 2]).is_none());
    assert!(tree.get_tree(&[1, 2]).is_some());
}

// =============================================================================
// Equality and Clone Tests
// =============================================================================

#[rstest]
fn test_equality_ignores_insertion_order() {
    let mut first = SortedHashTree::new();
    first.add_values("root", ["a", "b"]);
    let mut second = SortedHashTree::new();
    second.add_values("root", ["b", "a"]);
    assert_eq!(first, second);
}

#[rstest]
fn test_clone_is_deep() {
    let mut original = SortedHashTree::new();
    original.add_path([1, 2, 3]);
    let mut copy = original.clone();

    copy.get_tree_mut(&[1, 2]).unwrap().add(4);

    assert_eq!(original.list_at(&[1, 2]), Some(vec![&3]));
    assert_eq!(copy.list_at(&[1, 2]), Some(vec![&3, &4]));
}

#[rstest]
fn test_deep_chain_clones_compares_and_drops() {
    let depth = 200_000;
    let mut tree = SortedHashTree::with_comparator(Reverse(NaturalOrder));
    tree.add_path(0..depth);

    let copy = tree.clone();
    assert_eq!(copy, tree);
    assert_eq!(copy.comparator(), &Reverse(NaturalOrder));

    let mut shorter = SortedHashTree::with_comparator(Reverse(NaturalOrder));
    shorter.add_path(0..depth - 1);
    assert_ne!(shorter, tree);

    drop(copy);
    drop(tree);
}

#[rstest]
fn test_iterator_runs_both_ways() {
    let tree = SortedHashTree::from_keys([2, 1, 3]);
    let backwards: Vec<i32> = tree.iter().rev().map(|(key, _)| *key).collect();
    assert_eq!(backwards, vec![3, 2, 1]);
    assert_eq!(tree.iter().len(), 3);
}
