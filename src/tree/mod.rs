//! Recursive keyed trees.
//!
//! This module provides the [`HashTree`] abstraction and its two ordering
//! variants:
//!
//! - [`ListedHashTree`]: children are kept in insertion order
//! - [`SortedHashTree`]: children are kept in comparator order
//!
//! # Overview
//!
//! A tree node maps each child key to exactly one child node of the same
//! type. There is no separate value type: a "leaf value" is simply a key
//! whose subtree is empty. Nodes are created lazily on the first write to a
//! key, so writing along a path auto-vivifies every missing segment.
//!
//! Reads never create nodes. Looking up a key or a path that does not exist
//! returns `None`, and removing a missing key is a no-op returning `None`.
//!
//! # Examples
//!
//! ```rust
//! use hashtree::tree::{HashTree, ListedHashTree};
//!
//! let mut tree = ListedHashTree::new();
//! tree.add_path_value(["plan", "group"], "sampler");
//! tree.add_value("plan", "listener");
//!
//! assert_eq!(tree.list(), vec![&"plan"]);
//! assert_eq!(tree.list_at(&["plan"]), Some(vec![&"group", &"listener"]));
//! assert!(tree.get_tree(&["missing", "group"]).is_none());
//! ```
//!
//! # Equality
//!
//! The two variants deliberately differ: two [`ListedHashTree`]s are equal
//! only when their keys were added in the same order, while two
//! [`SortedHashTree`]s with the same members are always equal.
//!
//! ```rust
//! use hashtree::tree::{HashTree, ListedHashTree, SortedHashTree};
//!
//! let listed_ab: ListedHashTree<&str> = ["a", "b"].into_iter().collect();
//! let listed_ba: ListedHashTree<&str> = ["b", "a"].into_iter().collect();
//! assert_ne!(listed_ab, listed_ba);
//!
//! let sorted_ab: SortedHashTree<&str> = ["a", "b"].into_iter().collect();
//! let sorted_ba: SortedHashTree<&str> = ["b", "a"].into_iter().collect();
//! assert_eq!(sorted_ab, sorted_ba);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::traverse::{self, TreeVisitor, Walk};

mod listed;
mod sorted;

pub use listed::ListedChildren;
pub use listed::ListedHashTree;
pub use sorted::Comparator;
pub use sorted::NaturalOrder;
pub use sorted::Reverse;
pub use sorted::SortedChildren;
pub use sorted::SortedHashTree;

// =============================================================================
// Key Hasher Type Alias
// =============================================================================

/// Hasher used by the key index of [`ListedHashTree`].
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`.
/// When only the `ahash` feature is enabled, this is `ahash::RandomState`.
/// Otherwise it is the standard library's `RandomState`.
#[cfg(feature = "fxhash")]
pub(crate) type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type KeyHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type KeyHasher = std::collections::hash_map::RandomState;

// =============================================================================
// HashTree Trait
// =============================================================================

/// A recursive map from keys to subtrees of the same type.
///
/// Implementors supply the handful of primitive operations that depend on
/// how children are stored and ordered. Everything else (paths, bulk
/// insertion, search, traversal) is provided on top of those primitives and
/// behaves identically for every variant, apart from the iteration order of
/// [`children`](HashTree::children).
///
/// # Laws
///
/// For every implementor and every key `k`:
///
/// - `add(k)` twice leaves exactly one child under `k`
/// - after `remove(&k)`, `get(&k)` is `None`
/// - `len()` equals the number of items yielded by `children()`
/// - `children()` never yields the same key twice
pub trait HashTree: Sized {
    /// The key type of every node in the tree.
    type Key;

    /// Iterator over the immediate children, in the variant's native order.
    type Children<'a>: Iterator<Item = (&'a Self::Key, &'a Self)>
    where
        Self: 'a;

    /// Creates an empty tree configured like this one (same comparator, same
    /// hasher).
    fn empty_like(&self) -> Self;

    /// Returns the immediate children as `(key, subtree)` pairs.
    fn children(&self) -> Self::Children<'_>;

    /// Returns the subtree stored under `key`.
    fn get(&self, key: &Self::Key) -> Option<&Self>;

    /// Returns the subtree stored under `key` for modification.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self>;

    /// Ensures a child exists under `key` and returns it.
    ///
    /// An existing child is returned untouched; it is never replaced.
    fn add(&mut self, key: Self::Key) -> &mut Self;

    /// Installs `subtree` under `key`, returning the subtree it replaced.
    ///
    /// A key that is already present keeps its position.
    fn put(&mut self, key: Self::Key, subtree: Self) -> Option<Self>;

    /// Detaches and returns the subtree under `key`.
    fn remove(&mut self, key: &Self::Key) -> Option<Self>;

    /// Renames the child `current` to `new`, keeping its subtree.
    ///
    /// Returns `false` when `current` is not a child. If `new` already names
    /// a different child, that child is discarded.
    fn replace(&mut self, current: &Self::Key, new: Self::Key) -> bool;

    /// Removes every child.
    fn clear(&mut self);

    /// Returns the number of immediate children.
    fn len(&self) -> usize;

    /// Returns `true` if this node has no children.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is an immediate child.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Returns an iterator over the immediate child keys.
    fn keys(&self) -> impl Iterator<Item = &Self::Key> {
        self.children().map(|(key, _)| key)
    }

    /// Returns the immediate child keys, in native order.
    fn list(&self) -> Vec<&Self::Key> {
        self.keys().collect()
    }

    /// Returns the child keys of the node at `path`.
    ///
    /// Returns `None` when the path does not exist.
    fn list_at<'k, I>(&self, path: I) -> Option<Vec<&Self::Key>>
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k,
    {
        self.get_tree(path).map(Self::list)
    }

    /// Walks `path` from this node and returns the node it ends at.
    ///
    /// Stops with `None` at the first missing segment. An empty path returns
    /// this node.
    fn get_tree<'k, I>(&self, path: I) -> Option<&Self>
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k,
    {
        let mut node = self;
        for key in path {
            node = node.get(key)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`get_tree`](HashTree::get_tree).
    fn get_tree_mut<'k, I>(&mut self, path: I) -> Option<&mut Self>
    where
        I: IntoIterator<Item = &'k Self::Key>,
        Self::Key: 'k,
    {
        let mut node = self;
        for key in path {
            node = node.get_mut(key)?;
        }
        Some(node)
    }

    /// Adds every key in `keys` as a child of this node.
    fn add_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = Self::Key>,
    {
        for key in keys {
            self.add(key);
        }
    }

    /// Ensures `key` exists and adds `value` as its child.
    ///
    /// Returns the subtree of `value`.
    fn add_value(&mut self, key: Self::Key, value: Self::Key) -> &mut Self {
        self.add(key).add(value)
    }

    /// Ensures `key` exists and adds every value as its child.
    fn add_values<I>(&mut self, key: Self::Key, values: I)
    where
        I: IntoIterator<Item = Self::Key>,
    {
        self.add(key).add_all(values);
    }

    /// Creates every missing node along `path` and returns the last one.
    fn add_path<I>(&mut self, path: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Key>,
    {
        let mut node = self;
        for key in path {
            node = node.add(key);
        }
        node
    }

    /// Creates `path` and adds `value` below its last node.
    fn add_path_value<I>(&mut self, path: I, value: Self::Key) -> &mut Self
    where
        I: IntoIterator<Item = Self::Key>,
    {
        self.add_path(path).add(value)
    }

    /// Creates `path` and adds every value below its last node.
    fn add_path_values<I, V>(&mut self, path: I, values: V)
    where
        I: IntoIterator<Item = Self::Key>,
        V: IntoIterator<Item = Self::Key>,
    {
        self.add_path(path).add_all(values);
    }

    /// Merges the structure of `other` into this tree.
    ///
    /// Keys already present are kept and their subtrees merged; new keys are
    /// appended in the order `other` yields them.
    fn add_tree(&mut self, other: &Self)
    where
        Self::Key: Clone,
    {
        for (path, _) in other.walk() {
            self.add_path(path.into_iter().cloned());
        }
    }

    /// Replaces the subtree under `key` with one holding exactly `values`.
    fn set<I>(&mut self, key: Self::Key, values: I)
    where
        I: IntoIterator<Item = Self::Key>,
    {
        let mut subtree = self.empty_like();
        subtree.add_all(values);
        self.put(key, subtree);
    }

    /// Creates `path`, then replaces the children of its last node with
    /// `values`.
    fn set_path<I, V>(&mut self, path: I, values: V)
    where
        I: IntoIterator<Item = Self::Key>,
        V: IntoIterator<Item = Self::Key>,
    {
        self.add_path(path).set_values(values);
    }

    /// Replaces every child of this node with `values`.
    fn set_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Key>,
    {
        self.clear();
        self.add_all(values);
    }

    /// Finds the subtree of `key` anywhere below this node.
    ///
    /// An immediate child wins; otherwise the first occurrence in pre-order
    /// depth-first order is returned.
    fn search(&self, key: &Self::Key) -> Option<&Self>
    where
        Self::Key: PartialEq,
    {
        self.get(key).or_else(|| {
            self.walk()
                .find(|(path, _)| path.last().is_some_and(|last| *last == key))
                .map(|(_, subtree)| subtree)
        })
    }

    /// Counts the nodes below this one that have no children.
    fn leaf_count(&self) -> usize {
        self.walk().filter(|(_, subtree)| subtree.is_empty()).count()
    }

    /// Drives `visitor` over this tree in pre-order depth-first order.
    ///
    /// See [`traverse`](crate::traverse::traverse) for the callback protocol.
    fn traverse<V>(&self, visitor: &mut V)
    where
        V: TreeVisitor<Self> + ?Sized,
    {
        traverse::traverse(self, visitor);
    }

    /// Returns a pre-order iterator over `(path, subtree)` pairs.
    fn walk(&self) -> Walk<'_, Self> {
        Walk::new(self)
    }

    /// Logs the whole tree, one key per line, at DEBUG level.
    fn debug_deep(&self)
    where
        Self::Key: fmt::Debug,
    {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        tracing::debug!(children = self.len(), "tree dump start");
        for (path, _) in self.walk() {
            if let Some(key) = path.last() {
                tracing::debug!("{}{:?}", "\t".repeat(path.len() - 1), key);
            }
        }
        tracing::debug!("tree dump end");
    }
}

// =============================================================================
// Shared Formatting
// =============================================================================

/// Formats a tree as `{a: {b, c}, d}`; leaves are printed as bare keys.
pub(crate) fn display_tree<T>(tree: &T, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: HashTree,
    T::Key: fmt::Display,
{
    formatter.write_str("{")?;
    let mut open = vec![tree.children().enumerate()];
    while let Some(children) = open.last_mut() {
        let Some((position, (key, subtree))) = children.next() else {
            open.pop();
            formatter.write_str("}")?;
            continue;
        };
        if position > 0 {
            formatter.write_str(", ")?;
        }
        if subtree.is_empty() {
            write!(formatter, "{key}")?;
        } else {
            write!(formatter, "{key}: {{")?;
            open.push(subtree.children().enumerate());
        }
    }
    Ok(())
}

// =============================================================================
// Deep Structural Operations
// =============================================================================

/// Direct access to the `(key, subtree)` entries a variant stores.
///
/// Clone, drop, equality and hashing are written once on top of this, with
/// an explicit stack, so none of them recurses once per tree level.
pub(crate) trait EntryStorage: Sized {
    type Key;

    /// The children of this node, in native order.
    fn entries(&self) -> &[(Self::Key, Self)];

    /// Detaches every child, leaving this node empty.
    fn take_entries(&mut self) -> Vec<(Self::Key, Self)>;
}

/// Copies `root` level by level.
///
/// `assemble` builds a node configured like its source around the already
/// copied entries.
pub(crate) fn deep_clone<N>(root: &N, assemble: impl Fn(&N, Vec<(N::Key, N)>) -> N) -> N
where
    N: EntryStorage,
    N::Key: Clone,
{
    // Each frame is a source node and the copies of its first children; the
    // number of copies so far is the index of the next child to descend into.
    let mut frames = vec![(root, Vec::with_capacity(root.entries().len()))];
    let mut finished = None;
    while let Some((source, copied)) = frames.last_mut() {
        let source: &N = *source;
        if let Some((_, child)) = source.entries().get(copied.len()) {
            frames.push((child, Vec::with_capacity(child.entries().len())));
            continue;
        }
        let node = assemble(source, std::mem::take(copied));
        frames.pop();
        match frames.last_mut() {
            Some((parent, siblings)) => {
                let key = parent.entries()[siblings.len()].0.clone();
                siblings.push((key, node));
            }
            None => finished = Some(node),
        }
    }
    finished.unwrap_or_else(|| assemble(root, Vec::new()))
}

/// Empties `node`, releasing its descendants from a heap worklist.
pub(crate) fn dismantle<N: EntryStorage>(node: &mut N) {
    let mut pending: Vec<N> = node.take_entries().into_iter().map(|(_, child)| child).collect();
    while let Some(mut subtree) = pending.pop() {
        pending.extend(subtree.take_entries().into_iter().map(|(_, child)| child));
    }
}

/// Compares two trees entry by entry, in native order.
pub(crate) fn deep_eq<N>(left: &N, right: &N) -> bool
where
    N: EntryStorage,
    N::Key: PartialEq,
{
    let mut pending = vec![(left, right)];
    while let Some((left, right)) = pending.pop() {
        let (left, right) = (left.entries(), right.entries());
        if left.len() != right.len() {
            return false;
        }
        for ((left_key, left_child), (right_key, right_child)) in left.iter().zip(right) {
            if left_key != right_key {
                return false;
            }
            pending.push((left_child, right_child));
        }
    }
    true
}

/// Feeds every node's child count and keys to `state`, consistent with
/// [`deep_eq`].
pub(crate) fn deep_hash<N, H>(root: &N, state: &mut H)
where
    N: EntryStorage,
    N::Key: Hash,
    H: Hasher,
{
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        let entries = node.entries();
        entries.len().hash(state);
        for (key, child) in entries {
            key.hash(state);
            pending.push(child);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
