//! Unit tests for ConfigurationTree path operations.

use hashtree::config::{ConfigError, ConfigurationTree, VALUE_KEY};
use hashtree::traverse::PathCollector;
use hashtree::tree::{HashTree, ListedHashTree};
use rstest::{fixture, rstest};

#[fixture]
fn config() -> ConfigurationTree {
    let mut config = ConfigurationTree::with_value("test plan");
    config.add_value("threads/count", "10");
    config.add_value("threads/ramp", "5");
    config.set_value_at("threads", "main group");
    config.add_values("samplers", ["login", "logout"]);
    config
}

// =============================================================================
// Path Addressing Tests
// =============================================================================

#[rstest]
#[case::delimited("threads/count")]
#[case::segments(["threads", "count"])]
#[case::doubled_delimiter("threads//count/")]
fn test_paths_address_same_node<P: hashtree::config::ConfigPath>(config: ConfigurationTree, #[case] path: P) {
    assert_eq!(config.property(path), Some("10"));
}

#[rstest]
fn test_custom_delimiter() {
    let mut config = ConfigurationTree::with_delimiter(".").unwrap();
    config.add_value("a.b", "c");
    assert_eq!(config.property_names(), vec!["a"]);
    assert_eq!(config.property("a.b"), Some("c"));
    assert_eq!(config.delimiter(), ".");
}

#[rstest]
fn test_empty_delimiter_is_rejected() {
    let error = ConfigurationTree::with_delimiter("").unwrap_err();
    assert_eq!(error, ConfigError::InvalidArgument { name: "delimiter" });
    assert_eq!(error.to_string(), "argument `delimiter` must not be empty");
}

#[rstest]
fn test_raw_keys_are_not_split() {
    let mut config = ConfigurationTree::new();
    config.add_raw_value("a/b", "c");
    config.add_raw("d/e");

    assert_eq!(config.property_names(), vec!["a/b", "d/e"]);
    assert_eq!(config.property(["a/b"]), Some("c"));
    assert!(!config.contains_key("a"));
}

// =============================================================================
// Value Slot Tests
// =============================================================================

#[rstest]
fn test_values_are_separate_from_children(config: ConfigurationTree) {
    assert_eq!(config.value(), Some("test plan"));
    assert_eq!(config.value_at("threads"), Some("main group"));
    assert_eq!(config.property_names_at("threads"), Some(vec!["count", "ramp"]));
    assert_eq!(config.len(), 2);
}

#[rstest]
fn test_value_defaults(config: ConfigurationTree) {
    assert_eq!(config.value_at_or("samplers", "none"), "none");
    assert_eq!(config.value_at_or("missing/path", "none"), "none");
    assert_eq!(ConfigurationTree::new().value_or("fallback"), "fallback");
}

#[rstest]
fn test_set_value_overwrites() {
    let mut config = ConfigurationTree::new();
    config.set_value("one");
    config.set_value("two");
    assert_eq!(config.value(), Some("two"));
    assert_eq!(config.as_tree().list_at(&[VALUE_KEY.to_string()]).map(|keys| keys.len()), Some(1));
}

#[rstest]
fn test_value_only_node_is_empty() {
    let mut config = ConfigurationTree::new();
    config.set_value("root");
    assert!(config.is_empty());
    assert_eq!(config.len(), 0);
    assert!(config.properties().is_empty());
}

#[rstest]
fn test_search_never_finds_value_slot(config: ConfigurationTree) {
    assert!(config.search(VALUE_KEY).is_none());
    assert!(config.search(ConfigurationTree::VALUE_KEY).is_none());
}

// =============================================================================
// Property Tests
// =============================================================================

#[rstest]
#[case::single("threads/count", Some("10"))]
#[case::several_children("samplers", None)]
#[case::leaf("samplers/login", None)]
#[case::missing("nothing/here", None)]
fn test_property(config: ConfigurationTree, #[case] path: &str, #[case] expected: Option<&str>) {
    assert_eq!(config.property(path), expected);
}

#[rstest]
fn test_property_or(config: ConfigurationTree) {
    assert_eq!(config.property_or("threads/count", "1"), "10");
    assert_eq!(config.property_or("threads/missing", "1"), "1");
}

#[rstest]
fn test_properties_pairs_names_with_values(config: ConfigurationTree) {
    assert_eq!(
        config.properties_at("threads"),
        Some(vec![("count", Some("10")), ("ramp", Some("5"))])
    );
    assert_eq!(
        config.properties(),
        vec![("threads", None), ("samplers", None)]
    );
}

#[rstest]
fn test_add_properties() {
    let mut config = ConfigurationTree::new();
    config.add_properties([("http/host", "localhost"), ("http/port", "8080")]);
    assert_eq!(config.property("http/port"), Some("8080"));
    assert_eq!(config.property_names_at("http"), Some(vec!["host", "port"]));
}

#[rstest]
fn test_set_property_replaces_children(config: ConfigurationTree) {
    let mut config = config;
    config.set_property("samplers", "only");
    assert_eq!(config.property("samplers"), Some("only"));

    config.set_properties("threads", ["a", "b"]);
    assert_eq!(config.property_names_at("threads"), Some(vec!["a", "b"]));
    assert_eq!(config.value_at("threads"), Some("main group"));
}

// =============================================================================
// Structural Tests
// =============================================================================

#[rstest]
fn test_get_tree_view(config: ConfigurationTree) {
    let threads = config.get_tree("threads").unwrap();
    assert_eq!(threads.value(), Some("main group"));
    assert_eq!(threads.property("count"), Some("10"));
    assert_eq!(threads.len(), 2);
    assert!(config.get_tree("threads/missing").is_none());
}

#[rstest]
fn test_view_to_owned_tree_is_independent(config: ConfigurationTree) {
    let mut copy = config.get_tree("threads").unwrap().to_owned_tree();
    copy.add_value("count", "extra");
    assert_eq!(copy.property("count"), None);
    assert_eq!(config.property("threads/count"), Some("10"));
}

#[rstest]
fn test_contains_key(config: ConfigurationTree) {
    assert!(config.contains_key("threads/count"));
    assert!(config.contains_key("samplers/login"));
    assert!(!config.contains_key("samplers/missing"));
}

#[rstest]
fn test_search_delegates_to_tree(config: ConfigurationTree) {
    let found = config.search("count").unwrap();
    assert_eq!(found.property_names(), vec!["10"]);
    assert!(config.search("nope").is_none());
}

#[rstest]
fn test_remove_returns_single_property(config: ConfigurationTree) {
    let mut config = config;
    assert_eq!(config.remove("threads/count"), Some("10".to_string()));
    assert_eq!(config.remove("samplers"), None);
    assert!(!config.contains_key("samplers"));
    assert_eq!(config.remove("absent/path"), None);
    assert_eq!(config.remove(""), None);
}

#[rstest]
fn test_replace_renames_each_depth_in_place(config: ConfigurationTree) {
    let mut config = config;
    assert!(config.replace("threads/ramp", "pool/warmup"));

    assert_eq!(config.property_names(), vec!["pool", "samplers"]);
    assert_eq!(config.property_names_at("pool"), Some(vec!["count", "warmup"]));
    assert_eq!(config.property("pool/warmup"), Some("5"));
    assert_eq!(config.value_at("pool"), Some("main group"));
}

#[rstest]
#[case::different_lengths("threads/count", "count")]
#[case::missing_path("threads/missing", "threads/other")]
#[case::empty("", "")]
fn test_replace_rejects(config: ConfigurationTree, #[case] old: &str, #[case] new: &str) {
    let mut config = config;
    let before = config.clone();
    assert!(!config.replace(old, new));
    assert_eq!(config, before);
}

#[rstest]
fn test_set_subtree(config: ConfigurationTree) {
    let mut config = config;
    let mut other = ConfigurationTree::with_value("replacement");
    other.add_value("x", "y");

    config.set_subtree("threads", other.clone());
    assert_eq!(config.value_at("threads"), Some("replacement"));
    assert_eq!(config.property_names_at("threads"), Some(vec!["x"]));

    config.set_subtree("", other.clone());
    assert_eq!(config, other);
}

#[rstest]
fn test_add_tree_merges_under_path() {
    let mut config = ConfigurationTree::new();
    config.add_value("base/a", "1");
    let mut other = ConfigurationTree::new();
    other.add_value("a", "2");
    other.add("b");

    config.add_tree("base", &other);

    assert_eq!(config.property_names_at("base"), Some(vec!["a", "b"]));
    assert_eq!(config.property_names_at("base/a"), Some(vec!["1", "2"]));
}

#[rstest]
fn test_clear_removes_everything(config: ConfigurationTree) {
    let mut config = config;
    config.clear();
    assert!(config.is_empty());
    assert_eq!(config.value(), None);
}

#[rstest]
fn test_traverse_exposes_value_slots() {
    let mut config = ConfigurationTree::with_value("v");
    config.add("a");

    let mut collector = PathCollector::new();
    config.traverse(&mut collector);

    assert_eq!(
        collector.into_paths(),
        vec![
            vec![VALUE_KEY.to_string(), "v".to_string()],
            vec!["a".to_string()],
        ]
    );
}

#[rstest]
fn test_equality_ignores_delimiter() {
    let mut slash = ConfigurationTree::new();
    slash.add_value("a/b", "c");
    let mut dot = ConfigurationTree::with_delimiter(".").unwrap();
    dot.add_value("a.b", "c");
    assert_eq!(slash, dot);
}

#[rstest]
fn test_from_tree_round_trip() {
    let mut tree = ListedHashTree::new();
    tree.add_value("key".to_string(), "value".to_string());
    let config = ConfigurationTree::from(tree.clone());
    assert_eq!(config.property("key"), Some("value"));
    assert_eq!(config.into_tree(), tree);
}
