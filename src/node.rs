//! The recursive structural unit of a [`Tree`][crate::Tree].
//!
//! A [`Node`] exclusively owns up to two children and carries no reference to its parent. Every
//! mutation is a top-down descent in which each level decides whether to rewire one of its own
//! child slots, so no ownership cycles can exist.

use std::cmp;

use crate::util::DeleteResult;

/// An exclusively owned child slot of a [`Node`]. An empty slot means "no child".
#[derive(Debug, Clone)]
pub(crate) struct Child<K>(Option<Box<Node<K>>>);

impl<K> Default for Child<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K> Child<K> {
    pub(crate) fn empty() -> Self {
        Self(None)
    }

    pub(crate) fn from_node(node: Node<K>) -> Self {
        Self(Some(Box::new(node)))
    }

    pub(crate) fn node(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<K>> {
        self.0.as_deref_mut()
    }

    pub(crate) fn into_node(self) -> Option<Node<K>> {
        self.0.map(|node| *node)
    }

    pub(crate) fn is_some(&self) -> bool {
        self.0.is_some()
    }

    pub(crate) fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    /// Height of the subtree in this slot, or `None` for an empty slot.
    fn height(&self) -> Option<usize> {
        self.node().map(Node::height)
    }

    fn insert(&mut self, key: K) -> bool
    where
        K: cmp::Ord,
    {
        match self.node_mut() {
            Some(node) => node.insert(key),
            None => {
                *self = Self::from_node(Node::new(key));
                true
            }
        }
    }

    /// Deletes `key` from the subtree in this slot. If the node in this slot is the one holding
    /// `key` it is spliced out here, otherwise the search continues below it.
    fn delete(&mut self, key: &K) -> DeleteResult
    where
        K: cmp::Ord,
    {
        let Some(child) = self.node_mut() else {
            return DeleteResult::NotFound;
        };
        if child.key != *key {
            return child.delete_and_repair(key);
        }

        self.splice();
        DeleteResult::Deleted
    }

    /// Removes the node in this slot while keeping everything below it in the tree.
    ///
    /// - A leaf is simply dropped.
    /// - A node with one child is replaced by that child.
    /// - A node with two children keeps its place but takes the key of its in-order successor,
    ///   which is removed from the right subtree instead.
    pub(crate) fn splice(&mut self) {
        let Some(mut node) = self.0.take() else {
            return;
        };

        match node.num_children() {
            0 => {}
            1 => {
                *self = if node.left.is_some() {
                    node.left.take()
                } else {
                    node.right.take()
                };
            }
            _ => {
                if let Some(successor) = node.right.take_min() {
                    node.key = successor;
                }
                self.0 = Some(node);
            }
        }
    }

    /// Detaches the leftmost node of the subtree in this slot and returns its key. The detached
    /// node's right child (it has no left child) takes its place.
    fn take_min(&mut self) -> Option<K> {
        if let Some(node) = self.node_mut() {
            if node.left.is_some() {
                return node.left.take_min();
            }
        }

        let node = self.0.take()?;
        let Node { key, right, .. } = *node;
        *self = right;
        Some(key)
    }
}

/// A `Node` holds a key that is used for searching/sorting and up to two children.
#[derive(Debug, Clone)]
pub struct Node<K> {
    key: K,
    left: Child<K>,
    right: Child<K>,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` with the given `key`.
    pub(crate) fn new(key: K) -> Self {
        Self::with_children(key, Child::empty(), Child::empty())
    }

    pub(crate) fn with_children(key: K, left: Child<K>, right: Child<K>) -> Self {
        Self { key, left, right }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// How many of this node's child slots are occupied: 0, 1 or 2.
    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a height
    /// of 0.
    pub fn height(&self) -> usize {
        self.left
            .height()
            .max(self.right.height())
            .map_or(0, |height| height + 1)
    }

    /// Finds the node in this subtree holding `key`.
    pub fn search(&self, key: &K) -> Option<&Self>
    where
        K: cmp::Ord,
    {
        match key.cmp(&self.key) {
            cmp::Ordering::Less => self.left.node()?.search(key),
            cmp::Ordering::Equal => Some(self),
            cmp::Ordering::Greater => self.right.node()?.search(key),
        }
    }

    /// Counts the edges between this node and the node holding `key`. Returns 0 if this node
    /// holds `key` and `None` if no node in this subtree does.
    pub fn search_depth(&self, key: &K) -> Option<usize>
    where
        K: cmp::Ord,
    {
        let child = match key.cmp(&self.key) {
            cmp::Ordering::Less => &self.left,
            cmp::Ordering::Equal => return Some(0),
            cmp::Ordering::Greater => &self.right,
        };
        child.node()?.search_depth(key).map(|depth| depth + 1)
    }

    /// Whether the heights of this node's subtrees differ by less than 2 and both subtrees are
    /// themselves balanced.
    ///
    /// **Note** A missing child counts as height 0 here, the same as a leaf, even though
    /// [`Tree::height`][crate::Tree::height] treats an empty subtree as one level lower. A chain of
    /// three nodes is therefore reported as balanced.
    pub fn is_balanced(&self) -> bool {
        let left_height = self.left.height().unwrap_or(0);
        let right_height = self.right.height().unwrap_or(0);

        left_height.abs_diff(right_height) < 2
            && self.left.node().map_or(true, Self::is_balanced)
            && self.right.node().map_or(true, Self::is_balanced)
    }

    /// Inserts `key` as a new leaf below this node. Returns `false`, leaving the tree untouched,
    /// if `key` is already present.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: cmp::Ord,
    {
        match key.cmp(&self.key) {
            cmp::Ordering::Less => self.left.insert(key),
            cmp::Ordering::Equal => false,
            cmp::Ordering::Greater => self.right.insert(key),
        }
    }

    /// Removes `key` from the subtree rooted at this node.
    ///
    /// If a child of this node holds `key`, that child is spliced out of its slot here. If this
    /// node holds `key` itself, it takes the key of its in-order successor. When there is no
    /// successor this returns [`DeleteResult::DeleteSelf`] and the owner of this node has to
    /// remove it.
    pub(crate) fn delete_and_repair(&mut self, key: &K) -> DeleteResult
    where
        K: cmp::Ord,
    {
        match key.cmp(&self.key) {
            cmp::Ordering::Less => self.left.delete(key),
            cmp::Ordering::Equal => match self.right.take_min() {
                Some(successor) => {
                    self.key = successor;
                    DeleteResult::Deleted
                }
                None => DeleteResult::DeleteSelf,
            },
            cmp::Ordering::Greater => self.right.delete(key),
        }
    }

    /// Visits the left subtree, then this node, then the right subtree.
    pub fn in_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Self),
    {
        if let Some(left) = self.left() {
            left.in_order(visit);
        }
        visit(self);
        if let Some(right) = self.right() {
            right.in_order(visit);
        }
    }

    /// Visits this node, then the left subtree, then the right subtree.
    pub fn pre_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Self),
    {
        visit(self);
        if let Some(left) = self.left() {
            left.pre_order(visit);
        }
        if let Some(right) = self.right() {
            right.pre_order(visit);
        }
    }

    /// Visits the left subtree, then the right subtree, then this node.
    pub fn post_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Self),
    {
        if let Some(left) = self.left() {
            left.post_order(visit);
        }
        if let Some(right) = self.right() {
            right.post_order(visit);
        }
        visit(self);
    }

    /// Moves every key of this subtree into `keys` in ascending order.
    pub(crate) fn into_sorted_keys(self, keys: &mut Vec<K>) {
        let Self { key, left, right } = self;
        if let Some(left) = left.into_node() {
            left.into_sorted_keys(keys);
        }
        keys.push(key);
        if let Some(right) = right.into_node() {
            right.into_sorted_keys(keys);
        }
    }
}
