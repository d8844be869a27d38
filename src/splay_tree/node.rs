use core::fmt::Debug;

/// A node of a splay tree.
///
/// Created by the tree internally and publicly exposed so that storages' generic arguments could be specified and so that traversal callbacks can look at the node they were given. The child links are raw storage keys; they are owned by the node, and no node is ever linked from two places at once.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<K, V, H>
where H: Clone + Debug + Eq,
{
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<H>,
    pub(crate) right: Option<H>,
}
impl<K, V, H> Node<K, V, H>
where H: Clone + Debug + Eq,
{
    /// Creates a detached node with no children.
    #[inline(always)]
    pub(super) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
    /// Returns a reference to the key of the node.
    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Returns a reference to the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.value
    }
    /// Returns references to both the key and the value.
    #[inline(always)]
    pub fn key_value(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
    /// Returns the raw storage key of the left child, whose subtree holds keys which are all less than this node's key.
    #[inline(always)]
    pub fn left(&self) -> Option<&H> {
        self.left.as_ref()
    }
    /// Returns the raw storage key of the right child, whose subtree holds keys which are all greater than this node's key.
    #[inline(always)]
    pub fn right(&self) -> Option<&H> {
        self.right.as_ref()
    }
    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    #[inline]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub(crate) fn into_key_value(self) -> (K, V) {
        (self.key, self.value)
    }
}
