//! The entry point of the crate: a [`Tree`] owning an optional root [`Node`].
//!
//! # Examples
//!
//! ```
//! use monitored_bst::Tree;
//!
//! let mut tree = Tree::from_keys([1, 2, 3, 4, 5, 6, 7]);
//!
//! // The middle key becomes the root.
//! assert_eq!(tree.root().map(|root| *root.key()), Some(4));
//! assert_eq!(tree.height(&4), Some(2));
//! assert_eq!(tree.depth(&1), Some(2));
//!
//! // Appending never rotates, so the tree drifts out of balance...
//! tree.extend(8..13);
//! assert!(!tree.is_balanced());
//!
//! // ...until it is rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 12);
//! ```

use std::cmp;
use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::node::{Child, Node};
use crate::traversal::Order;
use crate::util::DeleteResult;

/// An unbalanced Binary Search Tree over unique keys. Lookups, inserts and deletes walk down from
/// the root without ever rotating. Balance can be checked with [`Tree::is_balanced`] and restored
/// with [`Tree::rebalance`].
#[derive(Debug, Clone)]
pub struct Tree<K> {
    root: Child<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Child::empty(),
            len: 0,
        }
    }

    /// Builds a height-balanced tree from `values`. Duplicates are dropped and the input order
    /// doesn't matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitored_bst::Tree;
    ///
    /// let tree = Tree::from_keys([5, 3, 8, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.keys(), vec![&1, &3, &5, &8]);
    /// ```
    pub fn from_keys<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: cmp::Ord,
    {
        let mut keys: Vec<K> = values.into_iter().collect();
        let input_len = keys.len();
        keys.sort_unstable();
        keys.dedup();
        debug!(input_len, unique = keys.len(), "building tree");

        Self::from_sorted(keys)
    }

    /// Builds a tree from keys that are already sorted and unique.
    fn from_sorted(keys: Vec<K>) -> Self {
        let len = keys.len();
        Self {
            root: build_balanced(len, &mut keys.into_iter()),
            len,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.node()
    }

    /// Whether a node holds `key`.
    pub fn exists(&self, key: &K) -> bool
    where
        K: cmp::Ord,
    {
        self.find(key).is_some()
    }

    /// Finds the node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitored_bst::Tree;
    ///
    /// let tree = Tree::from_keys([2, 1, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|node| node.num_children()), Some(0));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: cmp::Ord,
    {
        self.root.node()?.search(key)
    }

    /// The number of edges between the root and the node holding `key`.
    pub fn depth(&self, key: &K) -> Option<usize>
    where
        K: cmp::Ord,
    {
        self.root.node()?.search_depth(key)
    }

    /// The height of the subtree rooted at the node holding `key`.
    pub fn height(&self, key: &K) -> Option<usize>
    where
        K: cmp::Ord,
    {
        self.find(key).map(Node::height)
    }

    /// Inserts `key` as a new leaf. Returns `false` and does nothing if `key` is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitored_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.append(1));
    /// assert!(!tree.append(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn append(&mut self, key: K) -> bool
    where
        K: cmp::Ord,
    {
        let inserted = match self.root.node_mut() {
            Some(root) => root.insert(key),
            None => {
                self.root = Child::from_node(Node::new(key));
                true
            }
        };

        if inserted {
            self.len += 1;
        } else {
            trace!("ignoring duplicate key");
        }
        inserted
    }

    /// Removes the node holding `key`, keeping the remaining keys in search order. Returns `false`
    /// and does nothing if `key` isn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use monitored_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys([2, 1, 3]);
    ///
    /// assert!(tree.delete(&2));
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(3));
    /// assert_eq!(tree.keys(), vec![&1, &3]);
    ///
    /// assert!(!tree.delete(&2));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: cmp::Ord,
    {
        let Some(root) = self.root.node_mut() else {
            return false;
        };

        let deleted = match root.delete_and_repair(key) {
            DeleteResult::NotFound => false,
            DeleteResult::DeleteSelf => {
                self.root.splice();
                true
            }
            DeleteResult::Deleted => true,
        };

        if deleted {
            self.len -= 1;
        } else {
            trace!("key to delete not found");
        }
        deleted
    }

    /// Whether every node's subtrees differ in height by less than 2. An empty tree is balanced.
    ///
    /// See [`Node::is_balanced`] for how missing children are measured.
    pub fn is_balanced(&self) -> bool {
        self.root.node().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the whole tree from its sorted keys so that it is balanced again.
    pub fn rebalance(&mut self) {
        let height_before = self.root.node().map(Node::height);

        let mut keys = Vec::with_capacity(self.len);
        if let Some(root) = self.root.take().into_node() {
            root.into_sorted_keys(&mut keys);
        }
        *self = Self::from_sorted(keys);

        debug!(
            len = self.len,
            ?height_before,
            height_after = ?self.root.node().map(Node::height),
            "rebalanced tree"
        );
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        self.in_order(|node| keys.push(node.key()));
        keys
    }

    /// Visits every node in the given `order`.
    pub fn traverse<'a, F>(&'a self, order: Order, visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        match order {
            Order::InOrder => self.in_order(visit),
            Order::PreOrder => self.pre_order(visit),
            Order::PostOrder => self.post_order(visit),
            Order::LevelOrder => self.level_order(visit),
        }
    }

    /// Visits every node in ascending key order.
    pub fn in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        if let Some(root) = self.root.node() {
            root.in_order(&mut visit);
        }
    }

    /// Visits every node before its subtrees.
    pub fn pre_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        if let Some(root) = self.root.node() {
            root.pre_order(&mut visit);
        }
    }

    /// Visits every node after its subtrees.
    pub fn post_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        if let Some(root) = self.root.node() {
            root.post_order(&mut visit);
        }
    }

    /// Visits every node breadth first: the root, then its children left to right, then their
    /// children and so on.
    pub fn level_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        let mut queue: VecDeque<_> = self.root.node().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Same visiting order as [`Tree::level_order`] but driving the queue by recursion instead of
    /// a loop. Recurses once per node.
    pub fn level_order_recursive<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        let mut queue: VecDeque<_> = self.root.node().into_iter().collect();
        level_order_step(&mut queue, &mut visit);
    }
}

fn level_order_step<'a, K, F>(queue: &mut VecDeque<&'a Node<K>>, visit: &mut F)
where
    F: FnMut(&'a Node<K>),
{
    let Some(node) = queue.pop_front() else {
        return;
    };
    visit(node);
    queue.extend(node.left());
    queue.extend(node.right());

    level_order_step(queue, visit);
}

/// Builds a subtree from the next `len` sorted keys. The middle key (the lower one for an even
/// `len`) becomes the subtree root, the keys before it its left subtree and the keys after it
/// its right subtree.
fn build_balanced<K, I>(len: usize, keys: &mut I) -> Child<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return Child::empty();
    }

    let mid = (len - 1) / 2;
    let left = build_balanced(mid, keys);
    let Some(key) = keys.next() else {
        return left;
    };
    let right = build_balanced(len - mid - 1, keys);

    Child::from_node(Node::with_children(key, left, right))
}

impl<K> FromIterator<K> for Tree<K>
where
    K: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: cmp::Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.append(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_order_keys(tree: &Tree<i32>) -> Vec<i32> {
        let mut keys = Vec::new();
        tree.level_order(|node| keys.push(*node.key()));
        keys
    }

    #[test]
    fn construct_picks_middle_keys() {
        let tree = Tree::from_keys([7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(level_order_keys(&tree), vec![4, 2, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn construct_picks_lower_middle_on_even_ranges() {
        let tree = Tree::from_keys([1, 2, 3, 4]);
        assert_eq!(level_order_keys(&tree), vec![2, 1, 3, 4]);
        assert_eq!(tree.find(&3).and_then(Node::right).map(Node::key), Some(&4));
    }

    #[test]
    fn construct_drops_duplicates() {
        let tree = Tree::from_keys([3, 3, 3, 1, 1]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.keys(), vec![&1, &3]);
    }

    #[test]
    fn empty_tree() {
        let mut tree: Tree<i32> = Tree::from_keys([]);

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(!tree.exists(&1));
        assert!(tree.find(&1).is_none());
        assert_eq!(tree.depth(&1), None);
        assert_eq!(tree.height(&1), None);
        assert!(tree.is_balanced());
        assert!(!tree.delete(&1));

        tree.rebalance();
        assert!(tree.is_empty());

        let mut visited = 0;
        for order in Order::ALL {
            tree.traverse(order, |_| visited += 1);
        }
        tree.level_order_recursive(|_| visited += 1);
        assert_eq!(visited, 0);
    }

    #[test]
    fn single_node_tree() {
        let tree = Tree::from_keys([9]);
        assert_eq!(tree.height(&9), Some(0));
        assert_eq!(tree.depth(&9), Some(0));
        assert!(tree.is_balanced());
    }

    #[test]
    fn append_to_empty_tree() {
        let mut tree = Tree::new();
        assert!(tree.append(5));
        assert_eq!(tree.root().map(Node::key), Some(&5));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn append_duplicate_keeps_node() {
        let mut tree = Tree::from_keys([2, 1, 3]);
        let before = tree.find(&1).map(|node| node as *const Node<i32>);

        assert!(!tree.append(1));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.find(&1).map(|node| node as *const Node<i32>), before);
    }

    #[test]
    fn delete_root_without_right_child_promotes_left() {
        let mut tree = Tree::new();
        tree.extend([5, 3, 1, 4]);

        assert!(tree.delete(&5));
        assert_eq!(tree.root().map(Node::key), Some(&3));
        assert_eq!(tree.keys(), vec![&1, &3, &4]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn delete_only_key() {
        let mut tree = Tree::from_keys([1]);

        assert!(tree.delete(&1));
        assert!(tree.is_empty());
        assert!(tree.root().is_none());

        assert!(tree.append(2));
        assert_eq!(tree.keys(), vec![&2]);
    }

    #[test]
    fn delete_everything() {
        let keys: Vec<i32> = (0..20).collect();
        let mut tree = Tree::from_keys(keys.clone());

        for (deleted, key) in keys.iter().enumerate() {
            assert!(tree.delete(key));
            assert!(!tree.exists(key));
            assert_eq!(tree.len(), keys.len() - deleted - 1);
            assert!(tree.keys().into_iter().eq(&keys[deleted + 1..]));
        }
        assert!(tree.root().is_none());
    }

    #[test]
    fn appending_ascending_keys_unbalances() {
        let mut tree = Tree::from_keys(1..=7);
        assert!(tree.is_balanced());

        tree.extend(8..=12);
        assert!(!tree.is_balanced());
        assert_eq!(tree.height(&7), Some(5));

        tree.rebalance();
        assert!(tree.is_balanced());
        assert_eq!(tree.len(), 12);
        assert_eq!(tree.root().map(Node::height), Some(3));
        assert!(tree.keys().into_iter().copied().eq(1..=12));
    }

    #[test]
    fn rebalance_balanced_tree_is_stable() {
        let mut tree = Tree::from_keys([10, 20, 30, 40, 50]);
        let before = level_order_keys(&tree);

        tree.rebalance();
        assert!(tree.is_balanced());
        assert_eq!(level_order_keys(&tree), before);
    }

    #[test]
    fn level_order_strategies_agree() {
        let mut tree = Tree::from_keys([8, 3, 10, 1, 6, 14, 4, 7, 13]);
        tree.extend([20, 30, 0]);

        let mut recursive = Vec::new();
        tree.level_order_recursive(|node| recursive.push(*node.key()));

        assert_eq!(recursive, level_order_keys(&tree));
    }

    #[test]
    fn traverse_dispatches_on_order() {
        let tree = Tree::from_keys(1..=7);

        let visit = |order| {
            let mut keys = Vec::new();
            tree.traverse(order, |node| keys.push(*node.key()));
            keys
        };

        assert_eq!(visit(Order::InOrder), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(visit(Order::PreOrder), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(visit(Order::PostOrder), vec![1, 3, 2, 5, 7, 6, 4]);
        assert_eq!(visit(Order::LevelOrder), vec![4, 2, 6, 1, 3, 5, 7]);
    }
}
