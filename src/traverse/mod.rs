//! Depth-first traversal of [`HashTree`]s.
//!
//! Two ways to walk a tree are provided:
//!
//! - [`traverse`] drives a [`TreeVisitor`] through the three-callback
//!   protocol (`enter_node`, `complete_path`, `leave_node`)
//! - [`Walk`] is a plain iterator over `(path, subtree)` pairs
//!
//! Both visit children in the tree's native order and keep their state on an
//! explicit heap-allocated stack, so the depth of a tree is bounded by
//! memory rather than by the call stack.
//!
//! # Visitor Protocol
//!
//! For every child of the node being walked, in order:
//!
//! 1. `enter_node(key, subtree)` is called
//! 2. if `subtree` has no children, `complete_path()` is called; otherwise
//!    the walk descends into `subtree`
//! 3. `leave_node()` is called
//!
//! Calls to `enter_node` and `leave_node` are therefore strictly paired and
//! nested. The root itself is never entered, so an empty tree produces no
//! calls at all. The engine keeps no path of its own: a visitor that needs
//! the current path tracks it from its `enter_node`/`leave_node` calls, or
//! uses [`PathCollector`] which does exactly that.
//!
//! # Examples
//!
//! ```rust
//! use hashtree::tree::{HashTree, ListedHashTree};
//! use hashtree::traverse::PathCollector;
//!
//! let mut tree = ListedHashTree::new();
//! tree.add_path(["plan", "group", "sampler"]);
//! tree.add_path(["plan", "listener"]);
//!
//! let mut collector = PathCollector::new();
//! tree.traverse(&mut collector);
//!
//! assert_eq!(
//!     collector.paths(),
//!     &[
//!         vec!["plan", "group", "sampler"],
//!         vec!["plan", "listener"],
//!     ]
//! );
//! ```

mod search;

pub use search::Discriminant;
pub use search::KeyMatcher;
pub use search::OfKind;
pub use search::SearchBy;
pub use search::SearchByKind;

use crate::tree::HashTree;

// =============================================================================
// Visitor Protocol
// =============================================================================

/// Callbacks invoked by [`traverse`].
pub trait TreeVisitor<T: HashTree> {
    /// Called when the walk moves onto the child `key`.
    fn enter_node(&mut self, key: &T::Key, subtree: &T);

    /// Called when the walk moves back out of the most recently entered
    /// node.
    fn leave_node(&mut self);

    /// Called when the most recently entered node has no children, i.e. the
    /// entered keys form a complete root-to-leaf path.
    fn complete_path(&mut self);
}

impl<T: HashTree, V: TreeVisitor<T> + ?Sized> TreeVisitor<T> for &mut V {
    fn enter_node(&mut self, key: &T::Key, subtree: &T) {
        (**self).enter_node(key, subtree);
    }

    fn leave_node(&mut self) {
        (**self).leave_node();
    }

    fn complete_path(&mut self) {
        (**self).complete_path();
    }
}

/// Walks `tree` in pre-order depth-first order, driving `visitor`.
///
/// # Examples
///
/// ```rust
/// use hashtree::tree::{HashTree, ListedHashTree};
/// use hashtree::traverse::{traverse, TreeVisitor};
///
/// #[derive(Default)]
/// struct Counter {
///     entered: usize,
///     left: usize,
///     leaves: usize,
/// }
///
/// impl TreeVisitor<ListedHashTree<&'static str>> for Counter {
///     fn enter_node(&mut self, _: &&'static str, _: &ListedHashTree<&'static str>) {
///         self.entered += 1;
///     }
///     fn leave_node(&mut self) {
///         self.left += 1;
///     }
///     fn complete_path(&mut self) {
///         self.leaves += 1;
///     }
/// }
///
/// let mut tree = ListedHashTree::new();
/// tree.add_values("a", ["b", "c"]);
///
/// let mut counter = Counter::default();
/// traverse(&tree, &mut counter);
/// assert_eq!((counter.entered, counter.left, counter.leaves), (3, 3, 2));
/// ```
pub fn traverse<T, V>(tree: &T, visitor: &mut V)
where
    T: HashTree,
    V: TreeVisitor<T> + ?Sized,
{
    let mut stack = vec![tree.children()];
    while let Some(frontier) = stack.last_mut() {
        if let Some((key, subtree)) = frontier.next() {
            visitor.enter_node(key, subtree);
            if subtree.is_empty() {
                visitor.complete_path();
                visitor.leave_node();
            } else {
                stack.push(subtree.children());
            }
        } else {
            stack.pop();
            // The exhausted frame belonged to an entered child, unless it was
            // the root's.
            if !stack.is_empty() {
                visitor.leave_node();
            }
        }
    }
}

// =============================================================================
// Walk Iterator
// =============================================================================

/// Pre-order iterator over every node below a tree's root.
///
/// Each item is the path of keys from the root to the node, together with
/// the node's subtree. Created by [`HashTree::walk`].
///
/// # Examples
///
/// ```rust
/// use hashtree::tree::{HashTree, ListedHashTree};
///
/// let mut tree = ListedHashTree::new();
/// tree.add_values("a", ["b", "c"]);
///
/// let paths: Vec<Vec<&&str>> = tree.walk().map(|(path, _)| path).collect();
/// assert_eq!(paths, vec![vec![&"a"], vec![&"a", &"b"], vec![&"a", &"c"]]);
/// ```
pub struct Walk<'a, T: HashTree + 'a> {
    stack: Vec<T::Children<'a>>,
    path: Vec<&'a T::Key>,
}

impl<'a, T: HashTree + 'a> Walk<'a, T> {
    pub(crate) fn new(tree: &'a T) -> Self {
        Self {
            stack: vec![tree.children()],
            path: Vec::new(),
        }
    }

    /// Returns the length of the path to the innermost node still being
    /// descended into.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

impl<'a, T: HashTree + 'a> Iterator for Walk<'a, T> {
    type Item = (Vec<&'a T::Key>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frontier = self.stack.last_mut()?;
            if let Some((key, subtree)) = frontier.next() {
                self.path.push(key);
                let item = (self.path.clone(), subtree);
                if subtree.is_empty() {
                    self.path.pop();
                } else {
                    self.stack.push(subtree.children());
                }
                return Some(item);
            }
            self.stack.pop();
            self.path.pop();
        }
    }
}

// =============================================================================
// Path Collector
// =============================================================================

/// A visitor that tracks its own path stack and records every complete
/// root-to-leaf path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCollector<K> {
    stack: Vec<K>,
    paths: Vec<Vec<K>>,
}

impl<K> PathCollector<K> {
    /// Creates an empty collector.
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Returns the keys entered and not yet left.
    pub fn current_path(&self) -> &[K] {
        &self.stack
    }

    /// Returns the completed paths, in traversal order.
    pub fn paths(&self) -> &[Vec<K>] {
        &self.paths
    }

    /// Consumes the collector, returning the completed paths.
    pub fn into_paths(self) -> Vec<Vec<K>> {
        self.paths
    }
}

impl<K> Default for PathCollector<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeVisitor<T> for PathCollector<T::Key>
where
    T: HashTree,
    T::Key: Clone,
{
    fn enter_node(&mut self, key: &T::Key, _subtree: &T) {
        self.stack.push(key.clone());
    }

    fn leave_node(&mut self) {
        self.stack.pop();
    }

    fn complete_path(&mut self) {
        self.paths.push(self.stack.clone());
    }
}

// =============================================================================
// Tests
// =============================================================================
