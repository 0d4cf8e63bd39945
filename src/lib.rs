//! This crate exposes an ordered, mutable Binary Search Tree (BST) over
//! unique keys and a small interactive menu that drives it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. Here a `Node` stores only its
//! key (the key is both its identity and its sort key) and owns up to two
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). The [`Tree`] in this
//! crate does not rebalance itself, so inserting keys in sorted order builds
//! a fully skewed tree whose height is `O(N)`. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, Tree};
//!
//! let mut tree: Tree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//!
//! assert!(tree.search(&40));
//! assert!(tree.delete(&30));
//! assert_eq!(
//!     tree.traverse(Order::InOrder).copied().collect::<Vec<_>>(),
//!     vec![20, 40, 50, 60, 70, 80]
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod menu;
pub mod traversal;
pub mod tree;

pub use error::MenuError;
pub use menu::Menu;
pub use traversal::{Order, Traverse};
pub use tree::Tree;
