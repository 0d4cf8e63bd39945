//! Depth-first walks over a [`Tree`][crate::Tree].
//!
//! The walk keeps its own stack of pending steps instead of recursing, so iterating a fully
//! skewed tree needs heap space proportional to its height and no extra call stack.

use std::fmt;
use std::iter::FusedIterator;

use crate::tree::Node;

/// The order in which a traversal visits each node relative to its subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. On a BST this yields the keys in
    /// ascending order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

impl Order {
    /// Every order, in the order the menu lists them.
    pub const ALL: [Order; 3] = [Order::PreOrder, Order::InOrder, Order::PostOrder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::PreOrder => write!(f, "Pre-order"),
            Order::InOrder => write!(f, "In-order"),
            Order::PostOrder => write!(f, "Post-order"),
        }
    }
}

/// One pending unit of work.
enum Step<'a, K> {
    /// Yield this node's key.
    Visit(&'a Node<K>),
    /// Expand this node into steps for itself and its children.
    Descend(&'a Node<K>),
}

/// A lazy iterator over the keys of a tree in a given [`Order`]. Created by
/// [`Tree::traverse`][crate::Tree::traverse].
pub struct Traverse<'a, K> {
    order: Order,
    stack: Vec<Step<'a, K>>,
}

impl<'a, K> Traverse<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Step::Descend).into_iter().collect(),
        }
    }

    /// The order this traversal visits keys in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Pushes the steps for `node` so they pop off in the traversal's order. Absent children
    /// contribute nothing.
    fn expand(&mut self, node: &'a Node<K>) {
        let left = node.left.as_deref().map(Step::Descend);
        let right = node.right.as_deref().map(Step::Descend);
        let visit = Some(Step::Visit(node));

        let pushes = match self.order {
            Order::PreOrder => [right, left, visit],
            Order::InOrder => [right, visit, left],
            Order::PostOrder => [visit, right, left],
        };
        self.stack.extend(pushes.into_iter().flatten());
    }
}

impl<'a, K> Iterator for Traverse<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Step::Visit(node) => return Some(&node.key),
                Step::Descend(node) => self.expand(node),
            }
        }
    }
}

impl<'a, K> FusedIterator for Traverse<'a, K> {}
