use core::{fmt::Debug, mem};
use crate::{
    compare::NaturalOrder,
    storage::{Storage, DefaultStorage},
};
use super::{Node, SplayTree};

/// A handle to one node of a splay tree, produced by a successful insertion or lookup.
///
/// The locator mutably borrows the tree, so nothing can restructure the tree (and possibly release the node) while the locator is alive. Use it to read the key and to read or replace the value right after the operation which produced it.
#[derive(Debug)]
pub struct Locator<'a, K, V, C = NaturalOrder, H = usize, S = DefaultStorage<Node<K, V, H>>>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    tree: &'a mut SplayTree<K, V, C, H, S>,
    handle: H,
}
impl<'a, K, V, C, H, S> Locator<'a, K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn new(tree: &'a mut SplayTree<K, V, C, H, S>, handle: H) -> Self {
        debug_assert!(
            tree.storage.contains_key(&handle),
            "tried to bind a locator to {:?}, which is not present in the storage",
            &handle,
        );
        Self { tree, handle }
    }
    /// Returns a reference to the raw storage key of the node.
    #[inline(always)]
    pub fn raw_handle(&self) -> &H {
        &self.handle
    }
    /// Returns a reference to the key of the node.
    #[inline]
    pub fn key(&self) -> &K {
        &self.tree.node(&self.handle).key
    }
    /// Returns a reference to the value stored in the node.
    #[inline]
    pub fn value(&self) -> &V {
        &self.tree.node(&self.handle).value
    }
    /// Returns a *mutable* reference to the value stored in the node.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.tree.node_mut(&self.handle).value
    }
    /// Replaces the value stored in the node, returning the previous one.
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        mem::replace(self.value_mut(), value)
    }
    /// Consumes the locator and returns a mutable reference to the value which lives as long as the borrow of the tree.
    #[inline]
    pub fn into_value_mut(self) -> &'a mut V {
        let Self { tree, handle } = self;
        &mut tree.node_mut(&handle).value
    }
    /// Consumes the locator and returns the key along with a mutable reference to the value, both living as long as the borrow of the tree.
    #[inline]
    pub fn into_key_value(self) -> (&'a K, &'a mut V) {
        let Self { tree, handle } = self;
        let node = tree.node_mut(&handle);
        (&node.key, &mut node.value)
    }
}
