//! Unit tests for ListedHashTree.

use hashtree::tree::{HashTree, ListedHashTree};
use rstest::rstest;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn plan() -> ListedHashTree<&'static str> {
    let mut tree = ListedHashTree::new();
    tree.add_path(["plan", "group", "sampler"]);
    tree.add_path_values(["plan", "group"], ["timer", "assertion"]);
    tree.add_value("plan", "listener");
    tree
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: ListedHashTree<i32> = ListedHashTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.list().is_empty());
}

#[rstest]
fn test_from_keys_keeps_order_and_drops_duplicates() {
    let tree = ListedHashTree::from_keys(["c", "a", "c", "b"]);
    assert_eq!(tree.list(), vec![&"c", &"a", &"b"]);
}

#[rstest]
fn test_from_key_creates_single_leaf() {
    let tree = ListedHashTree::from_key(7);
    assert_eq!(tree.list(), vec![&7]);
    assert!(tree.get(&7).unwrap().is_empty());
}

// =============================================================================
// Add and Set Tests
// =============================================================================

#[rstest]
fn test_add_is_idempotent_and_never_overwrites() {
    let mut tree = ListedHashTree::new();
    tree.add_value("a", "child");
    tree.add("a");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.list_at(&["a"]), Some(vec![&"child"]));
}

#[rstest]
fn test_add_path_auto_vivifies_every_segment() {
    let mut tree = ListedHashTree::new();
    tree.add_path(["x", "y", "z"]).add("leaf");
    assert_eq!(tree.list_at(&["x", "y", "z"]), Some(vec![&"leaf"]));
}

#[rstest]
fn test_set_replaces_whole_subtree() {
    let mut tree = plan();
    tree.set("plan", ["only"]);
    assert_eq!(tree.list_at(&["plan"]), Some(vec![&"only"]));
    assert!(tree.get_tree(&["plan", "group"]).is_none());
}

#[rstest]
fn test_set_keeps_position_of_existing_key() {
    let mut tree = ListedHashTree::from_keys(["a", "b", "c"]);
    tree.set("b", ["x"]);
    assert_eq!(tree.list(), vec![&"a", &"b", &"c"]);
}

#[rstest]
fn test_put_returns_replaced_subtree() {
    let mut tree = ListedHashTree::new();
    tree.add_value("a", "old");
    let previous = tree.put("a", ListedHashTree::from_key("new"));
    assert_eq!(previous, Some(ListedHashTree::from_key("old")));
    assert_eq!(tree.list_at(&["a"]), Some(vec![&"new"]));
}

// =============================================================================
// Read Tests
// =============================================================================

#[rstest]
#[case::first_segment_missing(vec!["missing", "group"])]
#[case::last_segment_missing(vec!["plan", "group", "missing"])]
#[case::middle_segment_missing(vec!["plan", "missing", "sampler"])]
fn test_get_tree_returns_none_for_missing_path(#[case] path: Vec<&'static str>) {
    let tree = plan();
    assert!(tree.get_tree(&path).is_none());
    assert!(tree.list_at(&path).is_none());
}

#[rstest]
fn test_get_tree_with_empty_path_returns_root() {
    let tree = plan();
    let root = tree.get_tree(std::iter::empty()).unwrap();
    assert_eq!(root, &tree);
}

#[rstest]
fn test_reads_do_not_create_nodes() {
    let tree = plan();
    let before = tree.clone();
    let _ = tree.get_tree(&["plan", "nothing", "here"]);
    let _ = tree.search(&"nothing");
    assert_eq!(tree, before);
}

#[rstest]
fn test_list_reports_insertion_order() {
    let tree = plan();
    assert_eq!(
        tree.list_at(&["plan", "group"]),
        Some(vec![&"sampler", &"timer", &"assertion"])
    );
}

#[rstest]
fn test_len_counts_immediate_children_only() {
    let tree = plan();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(&"plan").unwrap().len(), 2);
    assert_eq!(tree.leaf_count(), 4);
}

// =============================================================================
// Remove and Replace Tests
// =============================================================================

#[rstest]
fn test_remove_returns_detached_subtree() {
    let mut tree = plan();
    let removed = tree.get_mut(&"plan").unwrap().remove(&"group").unwrap();
    assert_eq!(removed.list(), vec![&"sampler", &"timer", &"assertion"]);
    assert_eq!(tree.list_at(&["plan"]), Some(vec![&"listener"]));
}

#[rstest]
fn test_remove_absent_key_is_noop() {
    let mut tree = plan();
    let before = tree.clone();
    assert!(tree.remove(&"absent").is_none());
    assert_eq!(tree, before);
}

#[rstest]
fn test_replace_renames_in_place() {
    let mut tree = ListedHashTree::from_keys(["a", "b", "c"]);
    tree.add_value("b", "child");

    assert!(tree.replace(&"b", "renamed"));

    assert_eq!(tree.list(), vec![&"a", &"renamed", &"c"]);
    assert_eq!(tree.list_at(&["renamed"]), Some(vec![&"child"]));
    assert!(tree.get(&"b").is_none());
}

#[rstest]
fn test_replace_missing_key_returns_false() {
    let mut tree = ListedHashTree::from_keys(["a"]);
    assert!(!tree.replace(&"missing", "new"));
    assert_eq!(tree.list(), vec![&"a"]);
}

#[rstest]
fn test_clear_then_add_starts_fresh_order() {
    let mut tree = ListedHashTree::from_keys(["a", "b"]);
    tree.clear();
    assert!(tree.is_empty());
    tree.add("b");
    tree.add("a");
    assert_eq!(tree.list(), vec![&"b", &"a"]);
}

// =============================================================================
// Clone, Equality and Hash Tests
// =============================================================================

#[rstest]
fn test_clone_is_independent() {
    let original = plan();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.add_path_value(["plan", "group"], "extra");
    copy.remove(&"plan");

    assert_eq!(original, plan());
    assert_ne!(copy, original);
}

#[rstest]
fn test_deep_chain_clones_compares_and_drops() {
    let depth: usize = 200_000;
    let path: Vec<usize> = (0..depth).collect();
    let mut tree = ListedHashTree::new();
    tree.add_path(0..depth);

    let mut copy = tree.clone();
    assert_eq!(copy, tree);
    assert_eq!(hash_of(&copy), hash_of(&tree));

    copy.get_tree_mut(&path).unwrap().add(depth);
    assert_ne!(copy, tree);
    assert!(tree.get_tree(&path).unwrap().is_empty());

    drop(copy);
    drop(tree);
}

#[rstest]
fn test_deep_chain_display() {
    let mut tree = ListedHashTree::new();
    tree.add_path(0..50_000);
    let text = tree.to_string();
    assert!(text.starts_with("{0: {1: {2: {"));
    assert!(text.ends_with("49999}}}"));
    assert_eq!(text.matches('{').count(), 50_000);
}

#[rstest]
fn test_equality_is_order_sensitive() {
    let mut first = ListedHashTree::new();
    first.add_values("root", ["a", "b"]);
    let mut second = ListedHashTree::new();
    second.add_values("root", ["b", "a"]);

    assert_ne!(first, second);
    assert_ne!(hash_of(&first), hash_of(&second));
}

#[rstest]
fn test_equal_trees_hash_equally() {
    assert_eq!(hash_of(&plan()), hash_of(&plan()));
}

// =============================================================================
// Search and Merge Tests
// =============================================================================

#[rstest]
fn test_search_finds_nested_key() {
    let tree = plan();
    let group = tree.search(&"group").unwrap();
    assert_eq!(group.len(), 3);
}

#[rstest]
fn test_add_tree_merges_structure() {
    let mut tree = plan();
    let mut other = ListedHashTree::new();
    other.add_path(["plan", "group", "sampler", "child"]);
    other.add("second plan");

    tree.add_tree(&other);

    assert_eq!(
        tree.list_at(&["plan", "group", "sampler"]),
        Some(vec![&"child"])
    );
    assert_eq!(tree.list(), vec![&"plan", &"second plan"]);
}

// =============================================================================
// Formatting and Iteration Tests
// =============================================================================

#[rstest]
fn test_display_uses_braces() {
    let mut tree = ListedHashTree::new();
    tree.add_values("a", ["b", "c"]);
    assert_eq!(tree.to_string(), "{a: {b, c}}");
}

#[rstest]
fn test_owned_iteration_yields_entries_in_order() {
    let tree = ListedHashTree::from_keys([3, 1, 2]);
    let keys: Vec<i32> = tree.into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![3, 1, 2]);
}

#[rstest]
fn test_collect_and_extend() {
    let mut tree: ListedHashTree<char> = "ba".chars().collect();
    tree.extend("ca".chars());
    assert_eq!(tree.list(), vec![&'b', &'a', &'c']);
}
