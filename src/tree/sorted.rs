//! Comparator-ordered tree.
//!
//! [`SortedHashTree`] keeps the children of every node sorted by a
//! [`Comparator`]. Iteration order depends only on the comparator, never on
//! the order keys were added, so equality is insertion-order independent.
//!
//! Children are held in a sorted `Vec` and located by binary search.
//!
//! # Examples
//!
//! ```rust
//! use hashtree::tree::{HashTree, Reverse, NaturalOrder, SortedHashTree};
//!
//! let mut tree = SortedHashTree::new();
//! tree.add_all([3, 1, 2]);
//! assert_eq!(tree.list(), vec![&1, &2, &3]);
//!
//! let mut descending = SortedHashTree::with_comparator(Reverse(NaturalOrder));
//! descending.add_all([3, 1, 2]);
//! assert_eq!(descending.list(), vec![&3, &2, &1]);
//!
//! let mut by_length = SortedHashTree::with_comparator(|left: &&str, right: &&str| {
//!     left.len().cmp(&right.len())
//! });
//! by_length.add_all(["ccc", "a", "bb"]);
//! assert_eq!(by_length.list(), vec![&"a", &"bb", &"ccc"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::{EntryStorage, HashTree, deep_clone, deep_eq, deep_hash, dismantle, display_tree};

// =============================================================================
// Comparators
// =============================================================================

/// A total order over keys.
///
/// Implemented for [`NaturalOrder`], [`Reverse`], and every
/// `Fn(&K, &K) -> Ordering`.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Reverses another comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reverse<C> {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.0.compare(right, left)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

// =============================================================================
// SortedHashTree Definition
// =============================================================================

/// A tree whose children are always iterated in comparator order.
///
/// Every node carries a copy of the comparator, so subtrees created by
/// [`add`](HashTree::add) sort the same way as their parent. Adding or
/// putting an existing key overwrites it in place; duplicates never appear.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `get`       | O(log N)   |
/// | `add`       | O(N)       |
/// | `remove`    | O(N)       |
/// | `children`  | O(1)       |
pub struct SortedHashTree<K, C = NaturalOrder> {
    entries: Vec<(K, Self)>,
    comparator: C,
}

impl<K: Ord> SortedHashTree<K> {
    /// Creates an empty tree ordered by `K`'s [`Ord`] implementation.
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates a tree whose children are `keys`.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().collect()
    }
}

impl<K, C> SortedHashTree<K, C> {
    /// Creates an empty tree ordered by `comparator`.
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            entries: Vec::new(),
            comparator,
        }
    }

    /// Returns the comparator of this tree.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns an iterator over `(key, subtree)` pairs in comparator order.
    pub fn iter(&self) -> SortedChildren<'_, K, C> {
        SortedChildren {
            inner: self.entries.iter(),
        }
    }
}

impl<K, C: Comparator<K>> SortedHashTree<K, C> {
    fn locate(&self, key: &K) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(candidate, _)| self.comparator.compare(candidate, key))
    }
}

impl<K, C: Comparator<K> + Clone> HashTree for SortedHashTree<K, C> {
    type Key = K;
    type Children<'a>
        = SortedChildren<'a, K, C>
    where
        Self: 'a;

    fn empty_like(&self) -> Self {
        Self::with_comparator(self.comparator.clone())
    }

    fn children(&self) -> Self::Children<'_> {
        self.iter()
    }

    fn get(&self, key: &K) -> Option<&Self> {
        let position = self.locate(key).ok()?;
        Some(&self.entries[position].1)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut Self> {
        let position = self.locate(key).ok()?;
        Some(&mut self.entries[position].1)
    }

    fn add(&mut self, key: K) -> &mut Self {
        let position = match self.locate(&key) {
            Ok(position) => position,
            Err(position) => {
                let subtree = self.empty_like();
                self.entries.insert(position, (key, subtree));
                position
            }
        };
        &mut self.entries[position].1
    }

    fn put(&mut self, key: K, subtree: Self) -> Option<Self> {
        match self.locate(&key) {
            Ok(position) => Some(std::mem::replace(&mut self.entries[position].1, subtree)),
            Err(position) => {
                self.entries.insert(position, (key, subtree));
                None
            }
        }
    }

    fn remove(&mut self, key: &K) -> Option<Self> {
        let position = self.locate(key).ok()?;
        Some(self.entries.remove(position).1)
    }

    fn replace(&mut self, current: &K, new: K) -> bool {
        match self.remove(current) {
            Some(subtree) => {
                self.put(new, subtree);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over the children of a [`SortedHashTree`], in comparator order.
pub struct SortedChildren<'a, K, C> {
    inner: std::slice::Iter<'a, (K, SortedHashTree<K, C>)>,
}

impl<'a, K, C> Iterator for SortedChildren<'a, K, C> {
    type Item = (&'a K, &'a SortedHashTree<K, C>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, subtree)| (key, subtree))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, C> DoubleEndedIterator for SortedChildren<'_, K, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, subtree)| (key, subtree))
    }
}

impl<K, C> ExactSizeIterator for SortedChildren<'_, K, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, C: Default> Default for SortedHashTree<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C: Comparator<K> + Clone + Default> FromIterator<K> for SortedHashTree<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.add_all(iter);
        tree
    }
}

impl<K, C: Comparator<K> + Clone> Extend<K> for SortedHashTree<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, K, C> IntoIterator for &'a SortedHashTree<K, C> {
    type Item = (&'a K, &'a SortedHashTree<K, C>);
    type IntoIter = SortedChildren<'a, K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> EntryStorage for SortedHashTree<K, C> {
    type Key = K;

    fn entries(&self) -> &[(K, Self)] {
        &self.entries
    }

    fn take_entries(&mut self) -> Vec<(K, Self)> {
        std::mem::take(&mut self.entries)
    }
}

impl<K: Clone, C: Clone> Clone for SortedHashTree<K, C> {
    fn clone(&self) -> Self {
        deep_clone(self, |source, entries| Self {
            entries,
            comparator: source.comparator.clone(),
        })
    }
}

impl<K, C> Drop for SortedHashTree<K, C> {
    fn drop(&mut self) {
        dismantle(self);
    }
}

/// Structural equality in comparator order.
///
/// Since the order is fixed by the comparator, trees holding the same keys
/// and subtrees are equal however they were built. Comparators themselves
/// are not compared.
impl<K: PartialEq, C> PartialEq for SortedHashTree<K, C> {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other)
    }
}

impl<K: Eq, C> Eq for SortedHashTree<K, C> {}

impl<K: Hash, C> Hash for SortedHashTree<K, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        deep_hash(self, state);
    }
}

impl<K: fmt::Debug, C> fmt::Debug for SortedHashTree<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, C: Comparator<K> + Clone> fmt::Display for SortedHashTree<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_tree(self, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, C> serde::Serialize for SortedHashTree<K, C>
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
struct SortedHashTreeVisitor<K, C> {
    marker: std::marker::PhantomData<(K, C)>,
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::de::Visitor<'de> for SortedHashTreeVisitor<K, C>
where
    K: serde::Deserialize<'de>,
    C: Comparator<K> + Clone + Default,
{
    type Value = SortedHashTree<K, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of keys to subtrees")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut tree = SortedHashTree::default();
        while let Some((key, subtree)) = access.next_entry::<K, SortedHashTree<K, C>>()? {
            tree.put(key, subtree);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::Deserialize<'de> for SortedHashTree<K, C>
where
    K: serde::Deserialize<'de>,
    C: Comparator<K> + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(SortedHashTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
