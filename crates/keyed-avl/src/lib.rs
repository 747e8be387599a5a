//! Ordered in-memory container backed by an AVL tree.
//!
//! Values of any type are stored in a self-balancing binary search tree and
//! ordered by a key derived from each value through a key function. Insert,
//! lookup and removal are O(log n); ascending and descending in-order walks
//! are lazy and restartable.
//!
//! Nodes own their children (`Option<Box<Node<T>>>`), there are no parent
//! links. Every mutation takes the subtree out of its parent slot, rebuilds it
//! bottom-up and hands back the new subtree root.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`node`] | [`Node`], `height`, `balance_factor` |
//! [`util`] | `left_rotate`, `right_rotate`, `insert`, `remove`, `find` |
//! [`iter`] | [`Iter`] (both directions), [`IntoIter`] |
//! [`tree`] | [`AvlTree`] handle |
//! [`assert`] | invariant checker behind [`AvlTree::check_invariants`] |
//! [`print`] | debug tree dump |
//!
//! # Example
//!
//! ```
//! use keyed_avl::AvlTree;
//!
//! #[derive(Debug)]
//! struct Job {
//!     priority: u8,
//!     name: &'static str,
//! }
//!
//! let jobs = [
//!     Job { priority: 3, name: "index" },
//!     Job { priority: 1, name: "fetch" },
//!     Job { priority: 2, name: "parse" },
//! ];
//! let mut tree = AvlTree::from_items_with_key(jobs, |j: &Job| j.priority);
//!
//! assert_eq!(tree.get(&2).map(|j| j.name), Some("parse"));
//! tree.remove(&1);
//! let names: Vec<_> = tree.reversed().map(|j| j.name).collect();
//! assert_eq!(names, ["index", "parse"]);
//! tree.check_invariants().unwrap();
//! ```
//!
//! Keys that are equal under the key function collide: the first value
//! inserted under a key is kept and later ones are dropped.

pub mod assert;
pub mod error;
pub mod iter;
pub mod node;
pub mod print;
pub mod tree;
pub mod util;

pub use error::InvariantError;
pub use iter::{IntoIter, Iter, IteratorType};
pub use node::{balance_factor, height, Link, Node};
pub use tree::AvlTree;
pub use util::{left_rotate, right_rotate};
