//! Self-adjusting binary search trees.
//!
//! A splay tree is an ordered map which restructures itself on every access: the key which was looked up, inserted or removed (or, if it is absent, the last key on the search path for it) is rotated up to the root. Keys which are accessed often thus stay close to the root, and any sequence of operations runs in amortized logarithmic time per operation, even though a single operation can take linear time. The [Wikipedia article] covers the details.
//!
//! Because lookups reshape the tree, most methods of [`SplayTree`] take `&mut self`, including [`find`] and [`contains`]. Successful lookups and insertions return a [`Locator`], which mutably borrows the tree and gives access to the node that the operation landed on.
//!
//! # Example
//! ```rust
//! use cinder::SplayTree;
//!
//! // The turbofish there is needed to state that we are using the default comparator and storage
//! // instead of asking the compiler to infer them, which would be impossible.
//! let mut tree = SplayTree::<i32, &str>::new();
//! for (key, value) in [(5, "five"), (3, "three"), (8, "eight")].iter().copied() {
//!     let (mut locator, inserted) = tree.insert(key);
//!     assert!(inserted);
//!     locator.set_value(value);
//! }
//!
//! // The key we have just looked at is at the root now.
//! assert_eq!(tree.find(&3).map(|l| *l.value()), Some("three"));
//! assert_eq!(tree.root_key(), Some(&3));
//!
//! // Neighbor queries are strict: the key itself is never returned.
//! assert_eq!(tree.find_least_greater_than(&5).map(|l| *l.key()), Some(8));
//! assert_eq!(tree.find_greatest_less_than(&5).map(|l| *l.key()), Some(3));
//!
//! // Rename a key without touching its value.
//! tree.move_key(&8, 13).unwrap();
//! assert_eq!(tree.remove(&13), Some("eight"));
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Splay_tree " "
//! [`SplayTree`]: struct.SplayTree.html " "
//! [`Locator`]: struct.Locator.html " "
//! [`find`]: struct.SplayTree.html#method.find " "
//! [`contains`]: struct.SplayTree.html#method.contains " "

use core::fmt::{self, Formatter, Debug, Display};

mod base;
mod locator;
mod node;
mod ops;
mod splay;

#[cfg(test)]
mod tests;

pub use base::SplayTree;
pub use locator::Locator;
pub use node::Node;

use crate::compare::NaturalOrder;

/// The error type returned by [`SplayTree::move_key`].
///
/// [`SplayTree::move_key`]: struct.SplayTree.html#method.move_key " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveKeyError<K> {
    /// The key which was to be renamed is not present in the tree.
    NotFound {
        /// The provided new key, which was deemed useless when the operation failed and is returned to the caller to avoid dropping it.
        new_key: K,
    },
    /// The new key is already present in the tree. The node which was to be renamed is left under its old key.
    Occupied {
        /// The provided new key, which was deemed useless when the operation failed and is returned to the caller to avoid dropping it.
        new_key: K,
    },
}
impl<K> MoveKeyError<K> {
    /// Extracts the provided new key, which was deemed useless when the operation failed.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_key(self) -> K {
        match self {
            Self::NotFound { new_key } | Self::Occupied { new_key } => new_key,
        }
    }
}
impl<K> Display for MoveKeyError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NotFound { .. } => "the key to be moved is not present in the tree",
            Self::Occupied { .. } => "the new key is already present in the tree",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<K: Debug> std::error::Error for MoveKeyError<K> {}

/// A splay tree which uses a *sparse* `VecDeque` as backing storage.
///
/// `VecDeque` semantics are not used in any way, so there is little reason to pick this over the default `Vec`-based storage. Still, this is provided for convenience.
#[allow(unused_qualifications)]
pub type SparseVecDequeSplayTree<K, V, C = NaturalOrder> =
    SplayTree<K, V, C, usize, crate::storage::SparseVecDeque<Node<K, V, usize>>>;
/// A splay tree which uses a *sparse* `ArrayVec` as backing storage, never allocating. `A` is an array of [`SparseStorageSlot`]s whose length is the maximum number of keys.
///
/// Inserting a key into a full tree panics.
///
/// [`SparseStorageSlot`]: ../storage/struct.SparseStorageSlot.html " "
#[allow(unused_qualifications)]
pub type SparseArrayVecSplayTree<K, V, A, C = NaturalOrder> =
    SplayTree<K, V, C, usize, crate::storage::SparseArrayVec<Node<K, V, usize>, A>>;
/// A splay tree which uses a *sparse* `SmallVec` as backing storage, keeping the first few nodes inline. `A` is an array of [`SparseStorageSlot`]s.
///
/// [`SparseStorageSlot`]: ../storage/struct.SparseStorageSlot.html " "
#[cfg(feature = "smallvec")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "smallvec")))]
#[allow(unused_qualifications)]
pub type SparseSmallVecSplayTree<K, V, A, C = NaturalOrder> =
    SplayTree<K, V, C, usize, crate::storage::SparseSmallVec<Node<K, V, usize>, A>>;
