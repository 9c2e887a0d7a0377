//! Insertion-ordered tree.
//!
//! This module provides [`ListedHashTree`], a [`HashTree`] whose children
//! are iterated in the order their keys were first added.
//!
//! # Internal Structure
//!
//! Children are stored in a `Vec` of `(key, subtree)` entries, which defines
//! the order, together with a hash index from key to entry position. Both
//! halves live in the private `OrderedChildren` type and are only ever
//! modified together by its methods:
//!
//! - adding a key appends an entry and indexes it
//! - removing a key drops the entry and shifts the later positions
//! - renaming a key rewrites the entry in place and re-indexes it
//! - clearing empties both
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `get`          | O(1)       |
//! | `add`          | O(1)*      |
//! | `remove`       | O(N)       |
//! | `replace`      | O(1)*      |
//! | `children`     | O(1)       |
//! | `len`          | O(1)       |
//!
//! \* amortized

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::{EntryStorage, HashTree, KeyHasher, deep_clone, deep_eq, deep_hash, dismantle, display_tree};

// =============================================================================
// OrderedChildren Definition
// =============================================================================

/// Children of one node: ordered entries plus a key index.
///
/// Invariant: `index` holds exactly the keys of `entries`, each mapped to its
/// entry's position.
struct OrderedChildren<K> {
    entries: Vec<(K, ListedHashTree<K>)>,
    index: HashMap<K, usize, KeyHasher>,
}

impl<K> OrderedChildren<K> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::with_hasher(KeyHasher::default()),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<K: Clone + Eq + Hash> OrderedChildren<K> {
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    fn get<Q>(&self, key: &Q) -> Option<&ListedHashTree<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(key).map(|position| &self.entries[position].1)
    }

    fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut ListedHashTree<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(key)
            .map(|position| &mut self.entries[position].1)
    }

    fn get_or_insert(&mut self, key: K) -> &mut ListedHashTree<K> {
        let position = match self.position(&key) {
            Some(position) => position,
            None => self.append(key, ListedHashTree::new()),
        };
        &mut self.entries[position].1
    }

    fn insert(&mut self, key: K, subtree: ListedHashTree<K>) -> Option<ListedHashTree<K>> {
        match self.position(&key) {
            Some(position) => Some(std::mem::replace(&mut self.entries[position].1, subtree)),
            None => {
                self.append(key, subtree);
                None
            }
        }
    }

    fn append(&mut self, key: K, subtree: ListedHashTree<K>) -> usize {
        let position = self.entries.len();
        // Reserve first: once the index is updated the push must not fail.
        self.entries.reserve(1);
        self.index.insert(key.clone(), position);
        self.entries.push((key, subtree));
        position
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<ListedHashTree<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.index.remove(key)?;
        let (_, subtree) = self.entries.remove(position);
        self.reindex_from(position);
        Some(subtree)
    }

    /// Moves the index of every entry from `position` on down by one.
    fn reindex_from(&mut self, position: usize) {
        for (shifted, _) in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut(shifted) {
                *slot -= 1;
            }
        }
    }

    fn rename(&mut self, current: &K, new: K) -> bool {
        if !self.index.contains_key(current) {
            return false;
        }
        if *current == new {
            return true;
        }
        self.remove(&new);
        let Some(position) = self.index.remove(current) else {
            return false;
        };
        self.index.insert(new.clone(), position);
        self.entries[position].0 = new;
        true
    }
}

// =============================================================================
// ListedHashTree Definition
// =============================================================================

/// A tree whose children keep their insertion order.
///
/// New keys are appended after the existing ones, [`replace`] renames a key
/// without moving it, and [`put`] on an existing key swaps the subtree in
/// place.
///
/// Equality and hashing are order-sensitive: two trees holding the same keys
/// added in a different order are **not** equal. This preserves authoring
/// order as part of a tree's identity.
///
/// [`replace`]: HashTree::replace
/// [`put`]: HashTree::put
///
/// # Examples
///
/// ```rust
/// use hashtree::tree::{HashTree, ListedHashTree};
///
/// let mut tree = ListedHashTree::new();
/// tree.add("zeta");
/// tree.add("alpha");
/// tree.add_value("zeta", "child");
///
/// assert_eq!(tree.list(), vec![&"zeta", &"alpha"]);
///
/// tree.replace(&"zeta", "omega");
/// assert_eq!(tree.list(), vec![&"omega", &"alpha"]);
/// assert_eq!(tree.list_at(&["omega"]), Some(vec![&"child"]));
/// ```
pub struct ListedHashTree<K> {
    children: OrderedChildren<K>,
}

impl<K> ListedHashTree<K> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            children: OrderedChildren::new(),
        }
    }

    /// Returns an iterator over `(key, subtree)` pairs in insertion order.
    pub fn iter(&self) -> ListedChildren<'_, K> {
        ListedChildren {
            inner: self.children.entries.iter(),
        }
    }
}

impl<K: Clone + Eq + Hash> ListedHashTree<K> {
    /// Creates a tree with a single empty child.
    pub fn from_key(key: K) -> Self {
        let mut tree = Self::new();
        tree.add(key);
        tree
    }

    /// Creates a tree whose children are `keys`, in order.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().collect()
    }

    /// Looks up a child by any borrowed form of the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashtree::tree::{HashTree, ListedHashTree};
    ///
    /// let mut tree: ListedHashTree<String> = ListedHashTree::new();
    /// tree.add("name".to_string());
    /// assert!(tree.lookup("name").is_some());
    /// ```
    pub fn lookup<Q>(&self, key: &Q) -> Option<&Self>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.get(key)
    }

    /// Mutable counterpart of [`lookup`](Self::lookup).
    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut Self>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.get_mut(key)
    }

    /// Removes a child by any borrowed form of the key.
    pub fn take<Q>(&mut self, key: &Q) -> Option<Self>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.remove(key)
    }
}

impl<K: Clone + Eq + Hash> HashTree for ListedHashTree<K> {
    type Key = K;
    type Children<'a>
        = ListedChildren<'a, K>
    where
        Self: 'a;

    fn empty_like(&self) -> Self {
        Self::new()
    }

    fn children(&self) -> Self::Children<'_> {
        self.iter()
    }

    fn get(&self, key: &K) -> Option<&Self> {
        self.children.get(key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut Self> {
        self.children.get_mut(key)
    }

    fn add(&mut self, key: K) -> &mut Self {
        self.children.get_or_insert(key)
    }

    fn put(&mut self, key: K, subtree: Self) -> Option<Self> {
        self.children.insert(key, subtree)
    }

    fn remove(&mut self, key: &K) -> Option<Self> {
        self.children.remove(key)
    }

    fn replace(&mut self, current: &K, new: K) -> bool {
        self.children.rename(current, new)
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn len(&self) -> usize {
        self.children.len()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over the children of a [`ListedHashTree`], in insertion order.
pub struct ListedChildren<'a, K> {
    inner: std::slice::Iter<'a, (K, ListedHashTree<K>)>,
}

impl<'a, K> Iterator for ListedChildren<'a, K> {
    type Item = (&'a K, &'a ListedHashTree<K>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, subtree)| (key, subtree))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for ListedChildren<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, subtree)| (key, subtree))
    }
}

impl<K> ExactSizeIterator for ListedChildren<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for ListedHashTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> FromIterator<K> for ListedHashTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.add_all(iter);
        tree
    }
}

impl<K: Clone + Eq + Hash> Extend<K> for ListedHashTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, K> IntoIterator for &'a ListedHashTree<K> {
    type Item = (&'a K, &'a ListedHashTree<K>);
    type IntoIter = ListedChildren<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consumes the tree, yielding its children in insertion order.
impl<K> IntoIterator for ListedHashTree<K> {
    type Item = (K, Self);
    type IntoIter = std::vec::IntoIter<(K, Self)>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.take_entries().into_iter()
    }
}

impl<K> EntryStorage for ListedHashTree<K> {
    type Key = K;

    fn entries(&self) -> &[(K, Self)] {
        &self.children.entries
    }

    fn take_entries(&mut self) -> Vec<(K, Self)> {
        self.children.index.clear();
        std::mem::take(&mut self.children.entries)
    }
}

/// Deep copy; the index is copied as is since positions do not change.
impl<K: Clone> Clone for ListedHashTree<K> {
    fn clone(&self) -> Self {
        deep_clone(self, |source, entries| Self {
            children: OrderedChildren {
                entries,
                index: source.children.index.clone(),
            },
        })
    }
}

impl<K> Drop for ListedHashTree<K> {
    fn drop(&mut self) {
        dismantle(self);
    }
}

/// Order-sensitive structural equality.
///
/// Both trees must hold the same keys in the same order, with equal
/// subtrees under each key.
impl<K: PartialEq> PartialEq for ListedHashTree<K> {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other)
    }
}

impl<K: Eq> Eq for ListedHashTree<K> {}

/// Hashes the children in insertion order, consistent with `PartialEq`.
impl<K: Hash> Hash for ListedHashTree<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        deep_hash(self, state);
    }
}

impl<K: fmt::Debug> fmt::Debug for ListedHashTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Clone + Eq + Hash + fmt::Display> fmt::Display for ListedHashTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_tree(self, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K> serde::Serialize for ListedHashTree<K>
where
    K: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct ListedHashTreeVisitor<K> {
    key_marker: std::marker::PhantomData<K>,
}

#[cfg(feature = "serde")]
impl<'de, K> serde::de::Visitor<'de> for ListedHashTreeVisitor<K>
where
    K: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    type Value = ListedHashTree<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of keys to subtrees")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut tree = ListedHashTree::new();
        while let Some((key, subtree)) = access.next_entry::<K, ListedHashTree<K>>()? {
            tree.put(key, subtree);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for ListedHashTree<K>
where
    K: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ListedHashTreeVisitor {
            key_marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
