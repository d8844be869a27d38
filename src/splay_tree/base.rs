use core::{
    cmp::Ordering,
    fmt::Debug,
    iter::FromIterator,
};
use crate::{
    compare::{Comparator, NaturalOrder},
    storage::{Storage, DefaultStorage},
    util::{unreachable_debugchecked, work_list, WorkList},
};
use super::Node;

/// A splay tree: an ordered map which moves every key it touches to the root.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug)]
pub struct SplayTree<K, V, C = NaturalOrder, H = usize, S = DefaultStorage<Node<K, V, H>>>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    pub(crate) storage: S,
    pub(crate) root: Option<H>,
    pub(crate) len: usize,
    pub(super) comparator: C,
}
impl<K, V, C, H, S> SplayTree<K, V, C, H, S>
where
    C: Default,
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    /// Creates an empty tree which compares keys with the default value of its comparator.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::SplayTree;
    /// // The turbofish there is needed to state that we are using the default comparator and
    /// // storage instead of asking the compiler to infer them, which would be impossible.
    /// let tree = SplayTree::<u32, &str>::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
    /// Creates an empty tree with the specified capacity for the node storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }
}
impl<K, V, C, H, S> SplayTree<K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    /// Creates an empty tree which orders its keys with the specified comparator.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::SplayTree;
    /// // Sort strings by length first, then alphabetically
    /// let mut tree = SplayTree::<&str, (), _>::with_comparator(|a: &&str, b: &&str| {
    ///     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    /// });
    /// tree.insert("pear");
    /// tree.insert("fig");
    /// assert_eq!(tree.least().map(|(k, _)| *k), Some("fig"));
    /// ```
    #[inline]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            storage: S::new(),
            root: None,
            len: 0,
            comparator,
        }
    }
    /// Creates an empty tree with the specified capacity for the node storage and the specified comparator.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        tracing::trace!(capacity, "preallocating splay tree storage");
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Returns the number of keys in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if the tree holds no keys, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns a reference to the comparator used to order the keys.
    #[inline(always)]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
    /// Returns a reference to the node storage.
    #[inline(always)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
    /// Returns the key currently at the root, i.e. the one most recently splayed, or `None` if the tree is empty.
    #[inline]
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref().map(|root| &self.node(root).key)
    }
    /// Reserves capacity for at least `additional` more nodes.
    ///
    /// # Panics
    /// Fixed-capacity storages panic if they cannot fit that many more nodes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Shrinks the node storage as much as the storage allows without moving nodes.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    #[inline]
    #[track_caller]
    pub(crate) fn node(&self, handle: &H) -> &Node<K, V, H> {
        self.storage.get(handle).unwrap_or_else(|| unsafe {
            // SAFETY: the tree only ever links to nodes which it has added and not yet removed
            unreachable_debugchecked("a tree link pointed to a released node")
        })
    }
    #[inline]
    #[track_caller]
    pub(crate) fn node_mut(&mut self, handle: &H) -> &mut Node<K, V, H> {
        self.storage.get_mut(handle).unwrap_or_else(|| unsafe {
            // SAFETY: as above
            unreachable_debugchecked("a tree link pointed to a released node")
        })
    }
    /// Follows left links from `handle` to the least node of its subtree.
    pub(super) fn leftmost_from(&self, mut handle: H) -> H {
        while let Some(left) = &self.node(&handle).left {
            handle = left.clone();
        }
        handle
    }
    /// Follows right links from `handle` to the greatest node of its subtree.
    pub(super) fn rightmost_from(&self, mut handle: H) -> H {
        while let Some(right) = &self.node(&handle).right {
            handle = right.clone();
        }
        handle
    }
}
impl<K, V, C, H, S> SplayTree<K, V, C, H, S>
where
    C: Comparator<K>,
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    /// Checks that every node is reachable from the root exactly once, that the storage holds no nodes which are unreachable, that the key count matches the number of nodes, and that the keys are in search tree order. Returns `false` if any of those do not hold.
    ///
    /// The check never recurses and runs in linear time. It is meant for tests and for debugging comparators which are suspected of not being a total order.
    pub fn is_well_formed(&self) -> bool {
        let mut pending: WorkList<(H, Option<&K>, Option<&K>)> = work_list();
        if let Some(root) = &self.root {
            pending.push((root.clone(), None, None));
        }
        let mut visited = 0_usize;
        while let Some((handle, lower, upper)) = pending.pop() {
            let node = match self.storage.get(&handle) {
                Some(node) => node,
                None => return false,
            };
            visited += 1;
            if visited > self.storage.len() {
                // Some node was linked twice
                return false;
            }
            let above_lower = lower.map_or(true, |lower| {
                self.comparator.compare(lower, &node.key) == Ordering::Less
            });
            let below_upper = upper.map_or(true, |upper| {
                self.comparator.compare(&node.key, upper) == Ordering::Less
            });
            if !(above_lower && below_upper) {
                return false;
            }
            if let Some(left) = &node.left {
                pending.push((left.clone(), lower, Some(&node.key)));
            }
            if let Some(right) = &node.right {
                pending.push((right.clone(), Some(&node.key), upper));
            }
        }
        visited == self.len && visited == self.storage.len()
    }
}
impl<K, V, C, H, S> Default for SplayTree<K, V, C, H, S>
where
    C: Default,
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
/// Inserts every pair in order. Like [`insert_with`], a key which is already present keeps its first value.
///
/// [`insert_with`]: struct.SplayTree.html#method.insert_with " "
impl<K, V, C, H, S> Extend<(K, V)> for SplayTree<K, V, C, H, S>
where
    C: Comparator<K>,
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_with(key, move || value);
        }
    }
}
impl<K, V, C, H, S> FromIterator<(K, V)> for SplayTree<K, V, C, H, S>
where
    C: Comparator<K> + Default,
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
