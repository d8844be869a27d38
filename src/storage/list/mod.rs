mod alloc_impl;
mod arrayvec_impl;
#[cfg(feature = "smallvec")]
mod smallvec_impl;

mod sparse;
pub use sparse::{
    SparseStorage,
    Slot as SparseStorageSlot,
    ArrayVec as SparseArrayVec,
    Vec as SparseVec,
    VecDeque as SparseVecDeque,
};
#[cfg(feature = "smallvec")]
pub use sparse::SmallVec as SparseSmallVec;

/// A list which can back a [`SparseStorage`]: it grows and shrinks at the end only, and is addressed by index everywhere else.
///
/// # Safety
/// `SparseStorage` indexes the list with [`get_unchecked`] and [`get_unchecked_mut`], so implementations must uphold the following:
/// - a fresh list from `new` or `with_capacity` is empty;
/// - any index below `len` is sound to pass to `get_unchecked` and `get_unchecked_mut`;
/// - `push` and `pop` touch the last position only, so every other element stays at its index and keeps its state.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait ListStorage: Sized {
    /// The item type.
    type Element;

    /// Creates an empty list with room for `capacity` items.
    ///
    /// # Panics
    /// Fixed-capacity lists should panic if `capacity` is not their actual capacity, and should override `new` so that it always succeeds.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an item at the end.
    ///
    /// # Panics
    /// Fixed-capacity lists panic when full.
    fn push(&mut self, element: Self::Element);
    /// Removes the last item, or returns `None` if the list is empty.
    fn pop(&mut self) -> Option<Self::Element>;
    /// Returns the number of items.
    fn len(&self) -> usize;
    /// Returns a reference to the item at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be below `len`. Otherwise the behavior is undefined.
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element;
    /// Returns a *mutable* reference to the item at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be below `len`. Otherwise the behavior is undefined.
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element;

    /// Returns a reference to the item at `index`, or `None` if it is out of bounds.
    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        if self.len() > index {
            Some(unsafe {
                // SAFETY: bounds were just checked
                self.get_unchecked(index)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the item at `index`, or `None` if it is out of bounds.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        if self.len() > index {
            Some(unsafe {
                // SAFETY: as above
                self.get_unchecked_mut(index)
            })
        } else {
            None
        }
    }
    /// Creates an empty list. Growable lists do not allocate here.
    ///
    /// The default implementation calls `Self::with_capacity(0)`, which fixed-capacity lists reject, so they must override it.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the list has no items.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns how many items fit without allocating. Defaults to the current length.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Makes room for at least `additional` more items.
    ///
    /// The default implementation panics unless the room is already there, which suits fixed-capacity lists.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this list cannot grow")
        }
    }
    /// Returns unused memory to the allocator. Does nothing by default.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}
