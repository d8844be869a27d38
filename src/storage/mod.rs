//! Utilities for treating the node arena of a splay tree generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the allocation strategy trait which the tree uses to create and release its nodes
//! - [`ListStorage`], a trait used for plugging list-like collections into [`SparseStorage`]
//! - [`SparseStorage`], a free-list arena built on top of a `ListStorage` which gives out stable keys
//! - [`DefaultStorage`], a type definition for the arena used by trees unless a different one is specified
//!
//! [`Storage`]: trait.Storage.html " "
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`SparseStorage`]: struct.SparseStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod list;
pub use list::*;

#[cfg(feature = "slotmap")]
mod slotmap_impl;

#[cfg(test)]
mod tests;

use core::fmt::Debug;

/// The allocation strategy of a tree: a container which hands out a key for every node it is given and takes the node back when the tree discards it.
///
/// The tree calls [`add`] exactly once per inserted key and [`remove`] exactly once per key that leaves the tree. Child links are the keys returned by `add`; the tree never holds a reference into the storage across operations.
///
/// # Safety
/// The tree dereferences its links with [`get_unchecked`] and [`get_unchecked_mut`] in release builds, so implementations must uphold the following:
/// - a fresh storage from `new` or `with_capacity` holds no nodes;
/// - `len` is the number of nodes currently held, which does not include released ones;
/// - a key returned by `add` names the same node, unchanged unless mutated through this trait, until that node is passed to `remove`, however many other nodes come and go in the meantime;
/// - `contains_key` returning `true` makes `get_unchecked` and `get_unchecked_mut` sound for that key;
/// - `remove` does not panic for a key which `contains_key` accepts, since the tree may be mid-restructure when it calls it.
///
/// [`add`]: #tymethod.add " "
/// [`remove`]: #tymethod.remove " "
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait Storage: Sized {
    /// The handle which child links store in place of pointers.
    type Key: Clone + Debug + Eq;
    /// The node type.
    type Element;

    /// Takes ownership of a node and returns the key it will be reachable under.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Releases the node behind `key` and gives it back. The key may be handed out again by a later `add`.
    ///
    /// # Panics
    /// Required to panic if nothing is stored under the key.
    fn remove(&mut self, key: &Self::Key) -> Self::Element;
    /// Returns the number of nodes currently held.
    fn len(&self) -> usize;
    /// Creates an empty storage with room for `capacity` nodes.
    ///
    /// # Panics
    /// Fixed-capacity storages should panic if `capacity` is not their actual capacity, and should override `new` so that it always succeeds.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the node behind `key` without checking that it is there.
    ///
    /// # Safety
    /// `contains_key` must hold for `key`. Otherwise the behavior is undefined.
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element;
    /// Returns a *mutable* reference to the node behind `key` without checking that it is there.
    ///
    /// # Safety
    /// `contains_key` must hold for `key`. Otherwise the behavior is undefined.
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element;
    /// Returns `true` if a node is stored under `key`.
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Returns a reference to the node behind `key`, or `None` if there is none.
    #[inline]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        if self.contains_key(key) {
            Some(unsafe {
                // SAFETY: presence was just checked
                self.get_unchecked(key)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the node behind `key`, or `None` if there is none.
    #[inline]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        if self.contains_key(key) {
            Some(unsafe {
                // SAFETY: as above
                self.get_unchecked_mut(key)
            })
        } else {
            None
        }
    }
    /// Creates an empty storage. Growable storages do not allocate here.
    ///
    /// The default implementation calls `Self::with_capacity(0)`, which fixed-capacity storages reject, so they must override it.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Returns `true` if the storage holds no nodes.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns how many nodes fit without allocating. Defaults to the current length.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Makes room for at least `additional` more nodes.
    ///
    /// The default implementation panics unless the room is already there, which suits fixed-capacity storages.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage cannot grow")
        }
    }
    /// Returns unused memory to the allocator where that does not move any node. Does nothing by default.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by the tree when a storage type is not provided.
///
/// This is a [`SparseVec`]: a `Vec` of slots with a free list threaded through the released ones, so that node handles stay valid across removals and released slots get reused by later insertions.
///
/// [`SparseVec`]: type.SparseVec.html " "
pub type DefaultStorage<T> = SparseVec<T>;
