use core::{fmt::Debug, iter::FusedIterator};
use crate::{
    splay_tree::{Node, SplayTree},
    storage::Storage,
};
use super::Pending;

impl<K, V, C, H, S> SplayTree<K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    /// Removes every key from the tree, returning the key-value pairs in level order.
    ///
    /// The tree is empty as soon as the iterator is created. Pairs which have not been yielded yet are released when the iterator is dropped. If the iterator is leaked instead (with `mem::forget`, for example), the nodes it has not reached stay in the storage without being reachable from the tree.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::SplayTree;
    /// let mut tree: SplayTree<_, _> = vec![(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
    /// let mut pairs: Vec<_> = tree.drain().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, [(1, 'a'), (2, 'b'), (3, 'c')]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V, C, H, S> {
        tracing::trace!(nodes = self.len, "draining splay tree");
        let root = self.root.take();
        let remaining = core::mem::replace(&mut self.len, 0);
        Drain {
            tree: self,
            pending: Pending::new(root),
            remaining,
        }
    }
    /// Removes every key from the tree, releasing each node exactly once.
    pub fn clear(&mut self) {
        let mut released = 0_usize;
        let mut pending = Pending::new(self.root.take());
        while let Some(handle) = pending.pop() {
            let node = self.storage.remove(&handle);
            pending.push(node.left);
            pending.push(node.right);
            released += 1;
        }
        self.len = 0;
        tracing::trace!(released, "cleared splay tree");
    }
}

/// A draining iterator over the key-value pairs of a splay tree, in level order.
///
/// Created by [`SplayTree::drain`].
///
/// [`SplayTree::drain`]: ../splay_tree/struct.SplayTree.html#method.drain " "
#[derive(Debug)]
pub struct Drain<'a, K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    tree: &'a mut SplayTree<K, V, C, H, S>,
    pending: Pending<H>,
    remaining: usize,
}
impl<'a, K, V, C, H, S> Iterator for Drain<'a, K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    type Item = (K, V);
    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.pending.pop()?;
        let node = self.tree.storage.remove(&handle);
        self.pending.push(node.left.clone());
        self.pending.push(node.right.clone());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.into_key_value())
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<'a, K, V, C, H, S> ExactSizeIterator for Drain<'a, K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{}
impl<'a, K, V, C, H, S> FusedIterator for Drain<'a, K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{}
impl<'a, K, V, C, H, S> Drop for Drain<'a, K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}
