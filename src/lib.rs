//! An unbalanced but monitored Binary Search Tree (BST) over unique ordered keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)`. This tree never rotates
//! on insert or delete, so appending ascending keys degrades it into a list.
//! Instead the tree can be *checked* with [`Tree::is_balanced`] and restored
//! wholesale with [`Tree::rebalance`], which rebuilds it from its sorted keys
//! by repeatedly picking the middle key as the subtree root.
//!
//! # Examples
//!
//! ```
//! use monitored_bst::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 3, 1].into_iter().collect();
//! assert_eq!(tree.keys(), vec![&1, &3, &5, &8]);
//!
//! for key in 9..14 {
//!     tree.append(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 9);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod render;
pub mod traversal;
pub mod tree;

mod util;


pub use error::{Error, Result};
pub use node::Node;
pub use traversal::Order;
pub use tree::Tree;
