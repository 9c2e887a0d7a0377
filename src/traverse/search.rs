//! Kind-indexed search over a tree.
//!
//! [`SearchBy`] is a [`TreeVisitor`] that collects every key matching a
//! [`KeyMatcher`], in pre-order discovery order, together with the subtree
//! found under it. Matching on the kind of a key is done through the
//! [`Discriminant`] trait: keys expose an explicit kind value and
//! [`SearchByKind`] compares against it.
//!
//! # Repeated Keys
//!
//! When equal keys occur at several positions, every occurrence is recorded
//! in [`results`](SearchBy::results), but [`subtree`](SearchBy::subtree)
//! only returns the one visited last.
//!
//! # Examples
//!
//! ```rust
//! use hashtree::tree::{HashTree, ListedHashTree};
//! use hashtree::traverse::{Discriminant, SearchBy};
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Element {
//!     Group(&'static str),
//!     Sampler(&'static str),
//! }
//!
//! #[derive(PartialEq)]
//! enum Kind {
//!     Group,
//!     Sampler,
//! }
//!
//! impl Discriminant for Element {
//!     type Kind = Kind;
//!     fn kind(&self) -> Kind {
//!         match self {
//!             Element::Group(_) => Kind::Group,
//!             Element::Sampler(_) => Kind::Sampler,
//!         }
//!     }
//! }
//!
//! let mut plan = ListedHashTree::new();
//! plan.add_values(Element::Group("users"), [Element::Sampler("login"), Element::Sampler("logout")]);
//!
//! let mut search = SearchBy::of_kind(Kind::Sampler);
//! plan.traverse(&mut search);
//!
//! assert_eq!(search.results(), &[Element::Sampler("login"), Element::Sampler("logout")]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::TreeVisitor;
use crate::tree::HashTree;

/// Exposes the kind of a key as a plain value.
pub trait Discriminant {
    /// The kind type, typically a field-less enum.
    type Kind: PartialEq;

    /// Returns the kind of this key.
    fn kind(&self) -> Self::Kind;
}

/// Decides whether a key belongs in the search results.
pub trait KeyMatcher<K: ?Sized> {
    /// Returns `true` if `key` matches.
    fn matches(&mut self, key: &K) -> bool;
}

impl<K: ?Sized, F> KeyMatcher<K> for F
where
    F: FnMut(&K) -> bool,
{
    fn matches(&mut self, key: &K) -> bool {
        self(key)
    }
}

/// Matches keys whose [`Discriminant::kind`] equals a wanted kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfKind<Kind> {
    wanted: Kind,
}

impl<Kind> OfKind<Kind> {
    /// Creates a matcher for `wanted`.
    pub const fn new(wanted: Kind) -> Self {
        Self { wanted }
    }
}

impl<K: Discriminant> KeyMatcher<K> for OfKind<K::Kind> {
    fn matches(&mut self, key: &K) -> bool {
        key.kind() == self.wanted
    }
}

/// A [`SearchBy`] that matches on the kind of each key.
pub type SearchByKind<T, Kind> = SearchBy<T, OfKind<Kind>>;

/// Visitor collecting the keys accepted by a matcher.
pub struct SearchBy<T: HashTree, M> {
    matcher: M,
    results: Vec<T::Key>,
    subtrees: HashMap<T::Key, T>,
}

impl<T, M> SearchBy<T, M>
where
    T: HashTree,
    T::Key: Eq + Hash,
{
    /// Creates a search accepting the keys for which `predicate` holds.
    pub fn new(predicate: M) -> Self
    where
        M: FnMut(&T::Key) -> bool,
    {
        Self::with_matcher(predicate)
    }

    /// Creates a search driven by any [`KeyMatcher`].
    pub fn with_matcher(matcher: M) -> Self
    where
        M: KeyMatcher<T::Key>,
    {
        Self {
            matcher,
            results: Vec::new(),
            subtrees: HashMap::new(),
        }
    }

    /// Returns the matching keys, in pre-order discovery order.
    pub fn results(&self) -> &[T::Key] {
        &self.results
    }

    /// Returns a single-entry tree `{key -> subtree}` for a matched key.
    ///
    /// For a key matched more than once, this is the occurrence visited
    /// last.
    pub fn subtree(&self, key: &T::Key) -> Option<&T> {
        self.subtrees.get(key)
    }

    /// Consumes the search, returning the matching keys.
    pub fn into_results(self) -> Vec<T::Key> {
        self.results
    }
}

impl<T, Kind> SearchBy<T, OfKind<Kind>>
where
    T: HashTree,
    T::Key: Eq + Hash + Discriminant<Kind = Kind>,
    Kind: PartialEq,
{
    /// Creates a search accepting the keys of kind `wanted`.
    pub fn of_kind(wanted: Kind) -> Self {
        Self::with_matcher(OfKind::new(wanted))
    }
}

impl<T, M> TreeVisitor<T> for SearchBy<T, M>
where
    T: HashTree + Clone,
    T::Key: Clone + Eq + Hash,
    M: KeyMatcher<T::Key>,
{
    fn enter_node(&mut self, key: &T::Key, subtree: &T) {
        if !self.matcher.matches(key) {
            return;
        }
        self.results.push(key.clone());
        let mut single = subtree.empty_like();
        single.put(key.clone(), subtree.clone());
        self.subtrees.insert(key.clone(), single);
    }

    fn leave_node(&mut self) {}

    fn complete_path(&mut self) {}
}
