//! # hashtree
//!
//! Recursive keyed trees with pluggable child ordering, a visitor-driven
//! traversal engine, and a path-addressed configuration tree with a
//! brace-delimited text format.
//!
//! ## Overview
//!
//! - **Trees**: [`HashTree`](tree::HashTree) with an insertion-ordered
//!   ([`ListedHashTree`](tree::ListedHashTree)) and a comparator-ordered
//!   ([`SortedHashTree`](tree::SortedHashTree)) variant
//! - **Traversal**: the three-callback [`TreeVisitor`](traverse::TreeVisitor)
//!   protocol, a pre-order [`Walk`](traverse::Walk) iterator, and
//!   kind-indexed search with [`SearchBy`](traverse::SearchBy)
//! - **Configuration**: [`ConfigurationTree`](config::ConfigurationTree),
//!   delimited paths, per-node values, and text round-tripping
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for every tree type
//! - `fxhash`: use `rustc-hash` for the key index of `ListedHashTree`
//! - `ahash`: use `ahash` for the key index of `ListedHashTree`
//! - `full`: enable all optional functionality
//!
//! ## Example
//!
//! ```rust
//! use hashtree::prelude::*;
//!
//! let mut plan = ListedHashTree::new();
//! plan.add_path(["plan", "thread group", "sampler"]);
//! plan.add_path_value(["plan", "thread group"], "timer");
//!
//! let mut collector = PathCollector::new();
//! plan.traverse(&mut collector);
//! assert_eq!(collector.paths().len(), 2);
//!
//! let config: ConfigurationTree = "{\n    name=demo\n}\n".parse().unwrap();
//! assert_eq!(config.property("name"), Some("demo"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the tree types, the traversal protocol, and the configuration
/// tree.
///
/// # Usage
///
/// ```rust
/// use hashtree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigPath, ConfigView, ConfigurationTree, EofPolicy, ParseOptions};
    pub use crate::traverse::{Discriminant, PathCollector, SearchBy, SearchByKind, TreeVisitor};
    pub use crate::tree::{HashTree, ListedHashTree, SortedHashTree};
}

pub mod config;
pub mod traverse;
pub mod tree;
