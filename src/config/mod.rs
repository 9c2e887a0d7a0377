//! Path-addressed configuration on top of [`ListedHashTree`].
//!
//! [`ConfigurationTree`] wraps an insertion-ordered tree of `String` keys and
//! adds three things:
//!
//! - **Path addressing**: every operation accepts either a single string
//!   split on a delimiter (`"plan/group"`) or an explicit segment sequence
//!   (`["plan", "group"]`), through the [`ConfigPath`] trait
//! - **A value slot** per node, stored under the reserved [`VALUE_KEY`] as
//!   the node's first child and never listed among its children
//! - **A text format** that round-trips the tree, read with a pest grammar
//!   and written with four spaces of indentation per depth
//!
//! # Examples
//!
//! ```rust
//! use hashtree::config::ConfigurationTree;
//!
//! let mut config = ConfigurationTree::with_value("plan");
//! config.add_value("threads/count", "10");
//! config.set_value_at("threads", "main");
//! config.add("threads/enabled");
//!
//! assert_eq!(config.property("threads/count"), Some("10"));
//! assert_eq!(config.value_at("threads"), Some("main"));
//! assert_eq!(config.property_names_at("threads"), Some(vec!["count", "enabled"]));
//!
//! let text = config.to_text();
//! assert_eq!(
//!     text,
//!     "plan {\n    threads=main {\n        count=10\n        enabled\n    }\n}\n"
//! );
//! assert_eq!(text.parse::<ConfigurationTree>().unwrap(), config);
//! ```
//!
//! # Text Format
//!
//! ```text
//! root-value {
//!     key=value
//!     bare
//!     section=value {
//!         script=[[!
//! several
//! lines
//!         !]]
//!     }
//! }
//! ```
//!
//! Section names are split on the delimiter when read; entry keys are kept
//! as written. There is no escaping: keys and values that hold a line
//! break, a brace, `[[!`, or (for keys) `=` are written inside a
//! `[[!` ... `!]]` block, and a block-quoted section name is never split.
//!
//! Some trees do not survive a write and read back:
//!
//! - text is trimmed when read, so leading and trailing whitespace is lost
//! - an empty key or value is dropped (`a=` reads as a bare `a`)
//! - text containing `!]]` cannot be quoted and breaks the block around it

use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use crate::traverse::TreeVisitor;
use crate::tree::{HashTree, ListedHashTree};

mod error;
mod parser;
mod writer;

pub use error::ConfigError;
pub use error::ParseError;

/// Reserved key under which a node stores its own value.
pub const VALUE_KEY: &str = "!!VALUE_][!!";

/// Path delimiter used unless another one is configured.
pub const DEFAULT_DELIMITER: &str = "/";

/// Splits `path` on `delimiter`, dropping empty segments.
pub(crate) fn split_path<'a>(path: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    path.split(delimiter).filter(|segment| !segment.is_empty())
}

// =============================================================================
// ConfigPath
// =============================================================================

/// Something that can address a node of a [`ConfigurationTree`].
///
/// Strings are split on the tree's delimiter; sequences are taken as
/// segments verbatim.
pub trait ConfigPath {
    /// Returns the path segments, splitting on `delimiter` where relevant.
    fn segments<'a>(&'a self, delimiter: &'a str) -> Vec<&'a str>;
}

impl ConfigPath for str {
    fn segments<'a>(&'a self, delimiter: &'a str) -> Vec<&'a str> {
        split_path(self, delimiter).collect()
    }
}

impl ConfigPath for String {
    fn segments<'a>(&'a self, delimiter: &'a str) -> Vec<&'a str> {
        self.as_str().segments(delimiter)
    }
}

impl ConfigPath for [&str] {
    fn segments<'a>(&'a self, _delimiter: &'a str) -> Vec<&'a str> {
        self.to_vec()
    }
}

impl<const N: usize> ConfigPath for [&str; N] {
    fn segments<'a>(&'a self, _delimiter: &'a str) -> Vec<&'a str> {
        self.to_vec()
    }
}

impl ConfigPath for Vec<&str> {
    fn segments<'a>(&'a self, _delimiter: &'a str) -> Vec<&'a str> {
        self.clone()
    }
}

impl ConfigPath for [String] {
    fn segments<'a>(&'a self, _delimiter: &'a str) -> Vec<&'a str> {
        self.iter().map(String::as_str).collect()
    }
}

impl ConfigPath for Vec<String> {
    fn segments<'a>(&'a self, delimiter: &'a str) -> Vec<&'a str> {
        self.as_slice().segments(delimiter)
    }
}

impl<T: ConfigPath + ?Sized> ConfigPath for &T {
    fn segments<'a>(&'a self, delimiter: &'a str) -> Vec<&'a str> {
        (**self).segments(delimiter)
    }
}

// =============================================================================
// Parse Options
// =============================================================================

/// What to do when the input ends inside an open block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EofPolicy {
    /// Reject the input with [`ParseError::UnclosedBlock`].
    #[default]
    Strict,
    /// Close every open block, logging a warning.
    Lenient,
}

/// Options for reading configuration text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    eof: EofPolicy,
}

impl ParseOptions {
    /// Returns the default options (strict end-of-input handling).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            eof: EofPolicy::Strict,
        }
    }

    /// Returns options that close blocks left open at end of input.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            eof: EofPolicy::Lenient,
        }
    }

    /// Sets the end-of-input policy.
    #[must_use]
    pub const fn with_eof(mut self, eof: EofPolicy) -> Self {
        self.eof = eof;
        self
    }

    /// Returns the end-of-input policy.
    #[must_use]
    pub const fn eof(&self) -> EofPolicy {
        self.eof
    }
}

// =============================================================================
// Node Helpers
// =============================================================================

/// The value stored in the slot of `node`, if exactly one is stored.
pub(crate) fn stored_value(node: &ListedHashTree<String>) -> Option<&str> {
    let slot = node.lookup(VALUE_KEY)?;
    match slot.len() {
        1 => slot.iter().next().map(|(value, _)| value.as_str()),
        _ => None,
    }
}

fn visible(node: &ListedHashTree<String>) -> impl Iterator<Item = (&String, &ListedHashTree<String>)> {
    node.iter().filter(|(key, _)| key.as_str() != VALUE_KEY)
}

/// The only listed child of `node`.
fn single_property(node: &ListedHashTree<String>) -> Option<&str> {
    let mut names = visible(node).map(|(key, _)| key.as_str());
    match (names.next(), names.next()) {
        (Some(name), None) => Some(name),
        _ => None,
    }
}

/// Stores `value` in the slot of `node`, replacing any previous value.
///
/// A new slot is placed before every other child.
pub(crate) fn store_value(node: &mut ListedHashTree<String>, value: String) {
    if let Some(slot) = node.lookup_mut(VALUE_KEY) {
        slot.set_values([value]);
        return;
    }
    install_slot(node, ListedHashTree::from_key(value));
}

fn install_slot(node: &mut ListedHashTree<String>, slot: ListedHashTree<String>) {
    let children = std::mem::take(node);
    node.put(VALUE_KEY.to_owned(), slot);
    for (key, child) in children {
        if key != VALUE_KEY {
            node.put(key, child);
        }
    }
}

// =============================================================================
// ConfigView
// =============================================================================

/// Read-only view of a node of a [`ConfigurationTree`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigView<'a> {
    tree: &'a ListedHashTree<String>,
    delimiter: &'a str,
}

impl<'a> ConfigView<'a> {
    fn node<P: ConfigPath>(&self, path: P) -> Option<&'a ListedHashTree<String>> {
        let mut node = self.tree;
        for segment in path.segments(self.delimiter) {
            node = node.lookup(segment)?;
        }
        Some(node)
    }

    const fn at(&self, tree: &'a ListedHashTree<String>) -> Self {
        Self {
            tree,
            delimiter: self.delimiter,
        }
    }

    /// Returns the backing tree of this node, value slots included.
    pub const fn as_tree(&self) -> &'a ListedHashTree<String> {
        self.tree
    }

    /// Returns a view of the node at `path`.
    pub fn get_tree<P: ConfigPath>(&self, path: P) -> Option<Self> {
        self.node(path).map(|tree| self.at(tree))
    }

    /// Returns the value of this node.
    pub fn value(&self) -> Option<&'a str> {
        stored_value(self.tree)
    }

    /// Returns the value of this node, or `default`.
    pub fn value_or(&self, default: &'a str) -> &'a str {
        self.value().unwrap_or(default)
    }

    /// Returns the value of the node at `path`.
    pub fn value_at<P: ConfigPath>(&self, path: P) -> Option<&'a str> {
        self.node(path).and_then(stored_value)
    }

    /// Returns the value of the node at `path`, or `default`.
    pub fn value_at_or<P: ConfigPath>(&self, path: P, default: &'a str) -> &'a str {
        self.value_at(path).unwrap_or(default)
    }

    /// Returns the only child of the node at `path`.
    ///
    /// `None` when the node is missing or has zero or several children.
    pub fn property<P: ConfigPath>(&self, path: P) -> Option<&'a str> {
        self.node(path).and_then(single_property)
    }

    /// Returns the property at `path`, or `default`.
    pub fn property_or<P: ConfigPath>(&self, path: P, default: &'a str) -> &'a str {
        self.property(path).unwrap_or(default)
    }

    /// Returns the child names of this node, in insertion order.
    pub fn property_names(&self) -> Vec<&'a str> {
        visible(self.tree).map(|(key, _)| key.as_str()).collect()
    }

    /// Returns the child names of the node at `path`.
    pub fn property_names_at<P: ConfigPath>(&self, path: P) -> Option<Vec<&'a str>> {
        self.get_tree(path).map(|view| view.property_names())
    }

    /// Returns `(name, property)` for every child of this node.
    pub fn properties(&self) -> Vec<(&'a str, Option<&'a str>)> {
        visible(self.tree)
            .map(|(key, child)| (key.as_str(), single_property(child)))
            .collect()
    }

    /// Returns `(name, property)` for every child of the node at `path`.
    pub fn properties_at<P: ConfigPath>(&self, path: P) -> Option<Vec<(&'a str, Option<&'a str>)>> {
        self.get_tree(path).map(|view| view.properties())
    }

    /// Returns `true` if a node exists at `path`.
    pub fn contains_key<P: ConfigPath>(&self, path: P) -> bool {
        self.node(path).is_some()
    }

    /// Returns the number of children, not counting the value slot.
    pub fn len(&self) -> usize {
        visible(self.tree).count()
    }

    /// Returns `true` if this node has no children besides its value slot.
    pub fn is_empty(&self) -> bool {
        visible(self.tree).next().is_none()
    }

    /// Finds the node named `key` anywhere below this one.
    ///
    /// An immediate child wins over deeper matches.
    pub fn search(&self, key: &str) -> Option<Self> {
        if key == VALUE_KEY {
            return None;
        }
        self.tree.search(&key.to_owned()).map(|tree| self.at(tree))
    }

    /// Copies this node into a new [`ConfigurationTree`].
    pub fn to_owned_tree(&self) -> ConfigurationTree {
        ConfigurationTree {
            tree: self.tree.clone(),
            delimiter: self.delimiter.to_owned(),
        }
    }

    /// Renders this node as a document.
    pub fn to_text(&self) -> String {
        let text = self.to_string();
        tracing::debug!(bytes = text.len(), "wrote configuration text");
        text
    }
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::write_document(self.tree, formatter)
    }
}

// =============================================================================
// ConfigurationTree
// =============================================================================

/// An insertion-ordered tree of strings addressed by delimited paths.
///
/// Equality compares the trees only; the delimiter is not part of it.
#[derive(Debug, Clone)]
pub struct ConfigurationTree {
    tree: ListedHashTree<String>,
    delimiter: String,
}

impl ConfigurationTree {
    /// Reserved key of the value slot.
    pub const VALUE_KEY: &'static str = VALUE_KEY;

    /// Creates an empty tree using `/` as path delimiter.
    #[must_use]
    pub fn new() -> Self {
        Self::from_tree(ListedHashTree::new())
    }

    /// Creates an empty tree whose root holds `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.set_value(value);
        config
    }

    /// Creates an empty tree splitting paths on `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] when `delimiter` is empty.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self, ConfigError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ConfigError::InvalidArgument { name: "delimiter" });
        }
        Ok(Self {
            tree: ListedHashTree::new(),
            delimiter,
        })
    }

    /// Wraps an existing tree.
    #[must_use]
    pub fn from_tree(tree: ListedHashTree<String>) -> Self {
        Self {
            tree,
            delimiter: DEFAULT_DELIMITER.to_owned(),
        }
    }

    /// Unwraps the backing tree.
    #[must_use]
    pub fn into_tree(self) -> ListedHashTree<String> {
        self.tree
    }

    /// Returns the backing tree, value slots included.
    #[must_use]
    pub const fn as_tree(&self) -> &ListedHashTree<String> {
        &self.tree
    }

    /// Returns the path delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns a read-only view of the root.
    #[must_use]
    pub fn view(&self) -> ConfigView<'_> {
        ConfigView {
            tree: &self.tree,
            delimiter: &self.delimiter,
        }
    }

    fn node_mut<P: ConfigPath>(&mut self, path: P) -> &mut ListedHashTree<String> {
        let segments = path.segments(&self.delimiter);
        self.tree.add_path(segments.into_iter().map(str::to_owned))
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Creates every missing node along `path`.
    pub fn add<P: ConfigPath>(&mut self, path: P) {
        self.node_mut(path);
    }

    /// Creates `path` and adds `value` as a child of its last node.
    pub fn add_value<P: ConfigPath>(&mut self, path: P, value: impl Into<String>) {
        self.node_mut(path).add(value.into());
    }

    /// Creates `path` and adds every value as a child of its last node.
    pub fn add_values<P, I>(&mut self, path: P, values: I)
    where
        P: ConfigPath,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.node_mut(path).add_all(values.into_iter().map(Into::into));
    }

    /// Adds `key` below the root without splitting it.
    pub fn add_raw(&mut self, key: impl Into<String>) {
        self.tree.add(key.into());
    }

    /// Adds `key` below the root without splitting it, with `value` as its
    /// child.
    pub fn add_raw_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tree.add_value(key.into(), value.into());
    }

    /// Merges `other` into the node at `path`.
    ///
    /// Where both trees hold a value for the same node, the value of
    /// `other` wins.
    pub fn add_tree<P: ConfigPath>(&mut self, path: P, other: &Self) {
        let target = self.node_mut(path);
        for (keys, _) in other.tree.walk() {
            match keys.iter().position(|key| key.as_str() == VALUE_KEY) {
                None => {
                    target.add_path(keys.into_iter().cloned());
                }
                Some(slot) if slot + 2 == keys.len() => {
                    let node = target.add_path(keys[..slot].iter().map(|key| (*key).clone()));
                    store_value(node, keys[slot + 1].clone());
                }
                Some(_) => {}
            }
        }
    }

    /// Adds every `(path, value)` pair.
    pub fn add_properties<I, P, V>(&mut self, properties: I)
    where
        I: IntoIterator<Item = (P, V)>,
        P: ConfigPath,
        V: Into<String>,
    {
        for (path, value) in properties {
            self.add_value(path, value);
        }
    }

    /// Replaces the children of the node at `path` with `value` alone.
    ///
    /// The node's value slot is kept.
    pub fn set_property<P: ConfigPath>(&mut self, path: P, value: impl Into<String>) {
        self.set_properties(path, [value]);
    }

    /// Replaces the children of the node at `path` with `values`.
    ///
    /// The node's value slot is kept.
    pub fn set_properties<P, I>(&mut self, path: P, values: I)
    where
        P: ConfigPath,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let node = self.node_mut(path);
        let slot = node.take(VALUE_KEY);
        node.set_values(values.into_iter().map(Into::into));
        if let Some(slot) = slot {
            install_slot(node, slot);
        }
    }

    /// Installs `subtree` at `path`, replacing whatever was there.
    ///
    /// An empty path replaces the whole tree.
    pub fn set_subtree<P: ConfigPath>(&mut self, path: P, subtree: Self) {
        let segments = path.segments(&self.delimiter);
        match segments.split_last() {
            None => self.tree = subtree.tree,
            Some((last, parent)) => {
                let node = self.tree.add_path(parent.iter().map(|segment| (*segment).to_owned()));
                node.put((*last).to_owned(), subtree.tree);
            }
        }
    }

    /// Sets the value of the root.
    pub fn set_value(&mut self, value: impl Into<String>) {
        store_value(&mut self.tree, value.into());
    }

    /// Sets the value of the node at `path`, creating it if needed.
    pub fn set_value_at<P: ConfigPath>(&mut self, path: P, value: impl Into<String>) {
        store_value(self.node_mut(path), value.into());
    }

    /// Detaches the node at `path`.
    ///
    /// Returns the removed node's property (its only child), if it had
    /// exactly one.
    pub fn remove<P: ConfigPath>(&mut self, path: P) -> Option<String> {
        let segments = path.segments(&self.delimiter);
        let (last, parent) = segments.split_last()?;
        let node = parent
            .iter()
            .try_fold(&mut self.tree, |node, segment| node.lookup_mut(*segment))?;
        let removed = node.take(*last)?;
        single_property(&removed).map(str::to_owned)
    }

    /// Renames the keys of `old` to those of `new`, depth by depth.
    ///
    /// Both paths must have the same, non-zero number of segments and `old`
    /// must exist. Renamed keys keep their position.
    pub fn replace<P: ConfigPath, Q: ConfigPath>(&mut self, old: P, new: Q) -> bool {
        let from = old.segments(&self.delimiter);
        let to = new.segments(&self.delimiter);
        if from.is_empty() || from.len() != to.len() || self.view().node(from.as_slice()).is_none() {
            return false;
        }

        let mut node = &mut self.tree;
        for (current, renamed) in from.iter().zip(&to) {
            if current != renamed {
                node.replace(&(*current).to_owned(), (*renamed).to_owned());
            }
            let Some(next) = node.lookup_mut(*renamed) else {
                return false;
            };
            node = next;
        }
        true
    }

    /// Removes every node, including the root value.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// See [`ConfigView::get_tree`].
    pub fn get_tree<P: ConfigPath>(&self, path: P) -> Option<ConfigView<'_>> {
        self.view().get_tree(path)
    }

    /// See [`ConfigView::value`].
    pub fn value(&self) -> Option<&str> {
        self.view().value()
    }

    /// See [`ConfigView::value_or`].
    pub fn value_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.view().value_or(default)
    }

    /// See [`ConfigView::value_at`].
    pub fn value_at<P: ConfigPath>(&self, path: P) -> Option<&str> {
        self.view().value_at(path)
    }

    /// See [`ConfigView::value_at_or`].
    pub fn value_at_or<'a, P: ConfigPath>(&'a self, path: P, default: &'a str) -> &'a str {
        self.view().value_at_or(path, default)
    }

    /// See [`ConfigView::property`].
    pub fn property<P: ConfigPath>(&self, path: P) -> Option<&str> {
        self.view().property(path)
    }

    /// See [`ConfigView::property_or`].
    pub fn property_or<'a, P: ConfigPath>(&'a self, path: P, default: &'a str) -> &'a str {
        self.view().property_or(path, default)
    }

    /// See [`ConfigView::property_names`].
    pub fn property_names(&self) -> Vec<&str> {
        self.view().property_names()
    }

    /// See [`ConfigView::property_names_at`].
    pub fn property_names_at<P: ConfigPath>(&self, path: P) -> Option<Vec<&str>> {
        self.view().property_names_at(path)
    }

    /// See [`ConfigView::properties`].
    pub fn properties(&self) -> Vec<(&str, Option<&str>)> {
        self.view().properties()
    }

    /// See [`ConfigView::properties_at`].
    pub fn properties_at<P: ConfigPath>(&self, path: P) -> Option<Vec<(&str, Option<&str>)>> {
        self.view().properties_at(path)
    }

    /// See [`ConfigView::contains_key`].
    pub fn contains_key<P: ConfigPath>(&self, path: P) -> bool {
        self.view().contains_key(path)
    }

    /// See [`ConfigView::len`].
    pub fn len(&self) -> usize {
        self.view().len()
    }

    /// See [`ConfigView::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.view().is_empty()
    }

    /// See [`ConfigView::search`].
    pub fn search(&self, key: &str) -> Option<ConfigView<'_>> {
        self.view().search(key)
    }

    /// Drives `visitor` over the backing tree.
    ///
    /// Value slots are visited like any other child, under [`VALUE_KEY`].
    pub fn traverse<V>(&self, visitor: &mut V)
    where
        V: TreeVisitor<ListedHashTree<String>> + ?Sized,
    {
        self.tree.traverse(visitor);
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// Reads a document with the default options.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when `text` is not a well-formed document.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, ParseOptions::default())
    }

    /// Reads a document with the given options.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when `text` is not a well-formed document.
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<Self, ParseError> {
        parser::parse_document(text, &options, DEFAULT_DELIMITER).map(Self::from_tree)
    }

    /// Reads a whole document from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] when reading fails, or another
    /// [`ParseError`] when the text is malformed.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ParseError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text(&text)
    }

    /// Renders the tree as a document.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.view().to_text()
    }

    /// Writes the tree as a document to `out`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying writer.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.to_text().as_bytes())
    }
}

impl Default for ConfigurationTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ConfigurationTree {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl Eq for ConfigurationTree {}

impl fmt::Display for ConfigurationTree {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), formatter)
    }
}

impl FromStr for ConfigurationTree {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl From<ListedHashTree<String>> for ConfigurationTree {
    fn from(tree: ListedHashTree<String>) -> Self {
        Self::from_tree(tree)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ConfigurationTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.tree, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ConfigurationTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <ListedHashTree<String> as serde::Deserialize>::deserialize(deserializer).map(Self::from_tree)
    }
}

// =============================================================================
// Tests
// =============================================================================
