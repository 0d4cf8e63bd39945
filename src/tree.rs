//! A mutable, unbalanced BST. Every `Node` exclusively owns its children through a `Box`, so the
//! structure is always a strict tree: no parent pointers, no sharing, no cycles.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // Inserting a key that is already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether a node was removed.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::traversal::{Order, Traverse};

/// A Binary Search Tree over unique keys. This can be used for inserting, searching, and deleting
/// keys and for walking them in pre-order, in-order, or post-order.
///
/// The tree never rebalances itself. Its height, and so the cost of every operation, depends on
/// the order keys were inserted in.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// An optional, owned child. `None` marks the empty spot at the bottom of a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` has a key that is used for searching/sorting. It may have a left and a right child.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given key into the tree. Returns `true` if a new node was created and `false`
    /// if the key was already present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = Node::insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Potentially finds the stored key equal to the given key. If no node has the corresponding
    /// key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        Node::find(&self.root, key)
    }

    /// Whether a node with the given key is in the tree.
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key in the tree, if there is one.
    pub fn min(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &root.find_minimum().key)
    }

    /// Deletes the node containing the given key from the tree. Returns `true` if a key was
    /// removed. If the tree does not contain a node with the key, nothing happens and `false` is
    /// returned.
    ///
    /// When the node has two children, its key is replaced by its in-order successor (the
    /// smallest key of its right subtree) and the node that held the successor is removed
    /// instead. That is why `K` must be `Clone`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.search(&2));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    ///
    /// assert!(!tree.delete(&42));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord + Clone,
    {
        let deleted = Node::delete(&mut self.root, key);
        if deleted {
            self.len -= 1;
        }
        deleted
    }

    /// Walks the keys of the tree in the given order. The returned iterator is lazy and borrows
    /// the tree; every call starts a fresh walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::PreOrder).copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    /// assert_eq!(tree.traverse(Order::InOrder).copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(tree.traverse(Order::PostOrder).copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_, K> {
        Traverse::new(self.root.as_deref(), order)
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Traverse<'_, K> {
        self.traverse(Order::InOrder)
    }

    /// Destroys every node in the tree, leaving it empty and ready for reuse. This happens
    /// automatically when the tree is dropped.
    ///
    /// Nodes are released from an explicit stack, so a fully skewed tree is torn down without
    /// recursing once per level.
    pub fn teardown(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            // `node` is childless now so dropping it here frees exactly one node.
        }
        self.len = 0;
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Traverse<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Node<K> {
    /// Construct a new, childless `Node` with the given `key`.
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    /// Inserts `key` into the subtree behind `link`, creating a node in the first empty spot
    /// found on the way down. Returns whether a node was created.
    fn insert(link: &mut Link<K>, key: K) -> bool
    where
        K: Ord,
    {
        match link {
            None => {
                *link = Some(Self::new_boxed(key));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert(&mut node.left, key),
                Ordering::Equal => false,
                Ordering::Greater => Self::insert(&mut node.right, key),
            },
        }
    }

    fn find<'a>(link: &'a Link<K>, key: &K) -> Option<&'a K>
    where
        K: Ord,
    {
        let node = link.as_deref()?;
        match key.cmp(&node.key) {
            Ordering::Equal => Some(&node.key),
            Ordering::Less => Self::find(&node.left, key),
            Ordering::Greater => Self::find(&node.right, key),
        }
    }

    /// Follows left children down to the leftmost node of this subtree.
    pub(crate) fn find_minimum(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// Deletes `key` from the subtree behind `link`, rebinding `link` when the matched node is
    /// replaced by one of its children. Returns whether a key was removed.
    fn delete(link: &mut Link<K>, key: &K) -> bool
    where
        K: Ord + Clone,
    {
        let Some(node) = link.as_mut() else {
            return false;
        };
        match key.cmp(&node.key) {
            Ordering::Less => Self::delete(&mut node.left, key),
            Ordering::Greater => Self::delete(&mut node.right, key),
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // The matched node is childless now; overwriting `link` frees it.
                (None, right) => {
                    *link = right;
                    true
                }
                (left, None) => {
                    *link = left;
                    true
                }
                // Two children: this node stays and takes its successor's key. The successor is
                // a minimum so it has no left child, and removing it from the right subtree
                // always ends in one of the cases above.
                (Some(left), Some(right)) => {
                    let successor = right.find_minimum().key.clone();
                    node.left = Some(left);
                    node.right = Some(right);
                    Self::delete(&mut node.right, &successor);
                    node.key = successor;
                    true
                }
            },
        }
    }
}
