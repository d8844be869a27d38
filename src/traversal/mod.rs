//! Breadth-first traversal of splay trees, and teardown built on top of it.
//!
//! The module is home to the following items:
//! - [`Visitor`], a *trait for callbacks which inspect key-value pairs*, implemented for every `FnMut(&K, &V)` closure
//! - [`BreadthFirst`], an iterator over the key-value pairs of a tree in level order
//! - [`Drain`], a draining iterator which releases the nodes of a tree as it goes
//! - Traversal methods on [`SplayTree`]: `for_each_node`, `for_each`, `for_each_mut`, `breadth_first`, `drain` and `clear`
//!
//! All traversals visit the nodes in *level order*, starting from the root, which is **not** the sorted order of the keys. They keep the nodes which are yet to be visited in an explicit queue instead of recursing, so a tree which has degenerated into a chain (which is what inserting sorted keys produces) is traversed in constant stack space.
//!
//! [`Visitor`]: trait.Visitor.html " "
//! [`BreadthFirst`]: struct.BreadthFirst.html " "
//! [`Drain`]: struct.Drain.html " "
//! [`SplayTree`]: ../splay_tree/struct.SplayTree.html " "

mod teardown;
pub use teardown::Drain;

#[cfg(test)]
mod tests;

use core::{fmt::Debug, iter::FusedIterator};
use crate::{
    splay_tree::{Node, SplayTree},
    storage::Storage,
    util::{unreachable_debugchecked, work_list, WorkList},
};

/// Callbacks which inspect the key-value pairs of a tree one by one.
///
/// Visitors receive shared references only and thus cannot restructure the tree they are visiting. Any `FnMut(&K, &V)` closure is a visitor, so most callers never name the trait. Implementing it on a named type is for visitors which carry state that should outlive the traversal, or which have to be stored or passed around before being run.
///
/// # Example
/// ```rust
/// # use cinder::{SplayTree, Visitor};
/// /// Tracks the smallest and largest value seen.
/// struct Bounds<'a>(&'a mut Option<(u32, u32)>);
/// impl Visitor<char, u32> for Bounds<'_> {
///     fn visit(&mut self, _: &char, value: &u32) {
///         let (lo, hi) = self.0.unwrap_or((*value, *value));
///         *self.0 = Some((lo.min(*value), hi.max(*value)));
///     }
/// }
///
/// let tree: SplayTree<_, _> = vec![('a', 7), ('b', 2), ('c', 9)].into_iter().collect();
/// let mut bounds = None;
/// tree.for_each(Bounds(&mut bounds));
/// assert_eq!(bounds, Some((2, 9)));
/// ```
pub trait Visitor<K, V> {
    /// Inspects one key-value pair.
    fn visit(&mut self, key: &K, value: &V);
}
impl<K, V, F> Visitor<K, V> for F
where F: FnMut(&K, &V),
{
    #[inline(always)]
    fn visit(&mut self, key: &K, value: &V) {
        self(key, value)
    }
}

/// First-in-first-out queue of handles which are yet to be visited.
///
/// The work list is only ever appended to; consumed entries are skipped over by `position` and compacted away once they make up the larger half of the list.
#[derive(Clone, Debug)]
pub(crate) struct Pending<H> {
    list: WorkList<H>,
    position: usize,
}
impl<H> Pending<H> {
    #[inline]
    pub(crate) fn new(first: Option<H>) -> Self {
        let mut list = work_list();
        if let Some(first) = first {
            list.push(first);
        }
        Self { list, position: 0 }
    }
    #[inline]
    pub(crate) fn push(&mut self, handle: Option<H>) {
        if let Some(handle) = handle {
            self.list.push(handle);
        }
    }
    pub(crate) fn pop(&mut self) -> Option<H>
    where H: Clone,
    {
        let handle = self.list.get(self.position)?.clone();
        self.position += 1;
        if self.position * 2 > self.list.len() && self.position >= 16 {
            self.list.drain(..self.position);
            self.position = 0;
        }
        Some(handle)
    }
}

impl<K, V, C, H, S> SplayTree<K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    /// Visits every node reachable from the root exactly once, in level order. The children of a node are queued before the callback is called for it.
    ///
    /// Unlike the key-based operations, traversals never reshape the tree.
    pub fn for_each_node(&self, mut f: impl FnMut(&Node<K, V, H>)) {
        let mut pending = Pending::new(self.root.clone());
        while let Some(handle) = pending.pop() {
            let node = self.node(&handle);
            pending.push(node.left.clone());
            pending.push(node.right.clone());
            f(node);
        }
    }
    /// Calls the visitor with every key-value pair in the tree, in level order.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::SplayTree;
    /// let tree: SplayTree<_, _> = (1..=10).map(|x| (x, x * x)).collect();
    /// let mut sum = 0;
    /// tree.for_each(|_: &i32, value: &i32| sum += *value);
    /// assert_eq!(sum, 385);
    /// ```
    #[inline]
    pub fn for_each(&self, mut visitor: impl Visitor<K, V>) {
        self.for_each_node(|node| visitor.visit(&node.key, &node.value))
    }
    /// Calls the closure with every key in the tree and a *mutable* reference to its value, in level order.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&K, &mut V)) {
        let mut pending = Pending::new(self.root.clone());
        while let Some(handle) = pending.pop() {
            let node = self.node_mut(&handle);
            pending.push(node.left.clone());
            pending.push(node.right.clone());
            f(&node.key, &mut node.value);
        }
    }
    /// Returns an iterator over the key-value pairs of the tree in level order.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::SplayTree;
    /// let mut tree = SplayTree::<u8, ()>::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// // The most recently inserted key is the root
    /// let keys: Vec<_> = tree.breadth_first().map(|(k, _)| *k).collect();
    /// assert_eq!(keys[0], 3);
    /// assert_eq!(keys.len(), 3);
    /// ```
    #[inline]
    pub fn breadth_first(&self) -> BreadthFirst<'_, K, V, H, S> {
        BreadthFirst {
            storage: &self.storage,
            pending: Pending::new(self.root.clone()),
            remaining: self.len(),
        }
    }
}

/// An iterator over the key-value pairs of a splay tree in level order.
///
/// Created by [`SplayTree::breadth_first`].
///
/// [`SplayTree::breadth_first`]: ../splay_tree/struct.SplayTree.html#method.breadth_first " "
#[derive(Debug)]
pub struct BreadthFirst<'a, K, V, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq + 'a,
    K: 'a,
    V: 'a,
{
    storage: &'a S,
    pending: Pending<H>,
    remaining: usize,
}
impl<'a, K, V, H, S> Iterator for BreadthFirst<'a, K, V, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq + 'a,
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.pending.pop()?;
        let storage: &'a S = self.storage;
        let node = storage.get(&handle).unwrap_or_else(|| unsafe {
            // SAFETY: the tree only ever links to nodes which it has added and not yet removed
            unreachable_debugchecked("a tree link pointed to a released node")
        });
        self.pending.push(node.left.clone());
        self.pending.push(node.right.clone());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<'a, K, V, H, S> ExactSizeIterator for BreadthFirst<'a, K, V, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq + 'a,
    K: 'a,
    V: 'a,
{}
impl<'a, K, V, H, S> FusedIterator for BreadthFirst<'a, K, V, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq + 'a,
    K: 'a,
    V: 'a,
{}
