use core::mem;
use crate::util::unreachable_debugchecked;
use crate::storage::{ListStorage, Storage};

/// A `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type Vec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;
/// A `VecDeque` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type VecDeque<T> = SparseStorage<T, alloc::collections::VecDeque<Slot<T>>>;
/// An `ArrayVec` wrapped in [`SparseStorage`]: a fixed-capacity arena which never touches the global allocator. `A` is an array of [`Slot<T>`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
/// [`Slot<T>`]: struct.Slot.html " "
pub type ArrayVec<T, A> = SparseStorage<T, arrayvec::ArrayVec<A>>;
/// A `SmallVec` wrapped in [`SparseStorage`]. `A` is an array of [`Slot<T>`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
/// [`Slot<T>`]: struct.Slot.html " "
#[cfg(feature = "smallvec")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "smallvec")))]
pub type SmallVec<T, A> = SparseStorage<T, smallvec::SmallVec<A>>;

/// A wrapper around a list-like storage type which turns it into a node arena with stable keys.
///
/// Sparse storage with element type `E` wraps a list which stores `Slot<E>`, which is a tagged union storing either an element or a "hole". Removing an element never shifts anything: the slot is replaced with a hole and linked into a free list, and the next element added takes the most recently punched hole before the list is grown. Keys are plain indices into the list and stay valid until the element behind them is removed.
#[derive(Clone, Debug)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    storage: S,
    /// Most recently punched hole, which links to the one punched before it.
    free_head: Option<usize>,
    num_holes: usize,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.num_holes
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.num_holes == 0
    }
    /// Returns the number of slots in the underlying list, holes included.
    #[inline(always)]
    pub fn num_slots(&self) -> usize {
        self.storage.len()
    }

    /// Sets the specified slot to a hole and links it into the free list, returning the value or `None` if it was already a hole.
    fn punch_hole(&mut self, index: usize) -> Option<E> {
        let slot = self.storage.get_mut(index)?;
        if slot.is_hole() {
            return None;
        }
        let element = mem::replace(slot, Slot::new_hole(self.free_head)).into_element();
        self.free_head = Some(index);
        self.num_holes += 1;
        element
    }
    /// Pops holes off the end of the list and relinks the free list through the remaining ones.
    fn trim_trailing_holes(&mut self) {
        loop {
            let last_is_hole = match self.storage.len().checked_sub(1) {
                Some(last) => self.storage.get(last).map_or(false, Slot::is_hole),
                None => false,
            };
            if !last_is_hole {
                break;
            }
            self.storage.pop();
        }
        self.free_head = None;
        self.num_holes = 0;
        for i in 0..self.storage.len() {
            let free_head = self.free_head;
            let slot = unsafe {
                // SAFETY: get_unchecked_mut with index < len is always safe
                self.storage.get_unchecked_mut(i)
            };
            if let Some(link) = slot.hole_link_mut() {
                *link = free_head;
                self.free_head = Some(i);
                self.num_holes += 1;
            }
        }
    }
}
static HOLE_PANIC_MSG: &str = "\
the element at the specified index was a hole in the sparse storage";
unsafe impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Key = usize;
    type Element = E;

    #[inline]
    fn add(&mut self, element: Self::Element) -> usize {
        if let Some(index) = self.free_head {
            let slot = self.storage.get_mut(index).unwrap_or_else(|| unsafe {
                // SAFETY: the free list only ever points within bounds
                unreachable_debugchecked("free list pointed out of bounds")
            });
            let next = slot.hole_link_mut().map(|next| *next).unwrap_or_else(|| unsafe {
                // SAFETY: the free list only ever points to holes
                unreachable_debugchecked("free list pointed to an element")
            });
            *slot = Slot::new_element(element);
            self.free_head = next;
            self.num_holes -= 1;
            index
        } else {
            self.storage.push(Slot::new_element(element));
            self.storage.len() - 1
        }
    }
    #[inline]
    #[track_caller]
    fn remove(&mut self, key: &usize) -> Self::Element {
        assert!(self.storage.len() > *key, "index out of bounds");
        self.punch_hole(*key).expect(HOLE_PANIC_MSG)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len() - self.num_holes
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self {storage: S::with_capacity(capacity), free_head: None, num_holes: 0}
    }
    #[inline]
    unsafe fn get_unchecked(&self, key: &usize) -> &Self::Element {
        self.storage
            .get_unchecked(*key)
            .element()
            .unwrap_or_else(|| unreachable_debugchecked(HOLE_PANIC_MSG))
    }
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: &usize) -> &mut Self::Element {
        self.storage
            .get_unchecked_mut(*key)
            .element_mut()
            .unwrap_or_else(|| unreachable_debugchecked(HOLE_PANIC_MSG))
    }
    #[inline]
    fn contains_key(&self, key: &usize) -> bool {
        self.storage.get(*key).map_or(false, Slot::is_element)
    }

    #[inline]
    fn get(&self, key: &usize) -> Option<&Self::Element> {
        self.storage.get(*key).and_then(Slot::element)
    }
    #[inline]
    fn get_mut(&mut self, key: &usize) -> Option<&mut Self::Element> {
        self.storage.get_mut(*key).and_then(Slot::element_mut)
    }
    #[inline(always)]
    fn new() -> Self {
        Self {storage: S::new(), free_head: None, num_holes: 0}
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        // Holes are reused before the list grows
        let additional = additional.saturating_sub(self.num_holes);
        if additional > 0 {
            self.storage.reserve(additional)
        }
    }
    /// Drops the holes at the end of the list, then shrinks the list itself. Holes in the middle stay, since filling them would move elements and invalidate their keys.
    fn shrink_to_fit(&mut self) {
        self.trim_trailing_holes();
        self.storage.shrink_to_fit()
    }
}
impl<E, S> Default for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    #[inline(always)]
    fn default() -> Self {
        <Self as Storage>::new()
    }
}

/// A slot inside a sparse storage: either an element or a hole linking to the next free slot.
///
/// This is an opaque structure, only public so that the type of the list backing a `SparseStorage` can be spelled out, e.g. `[Slot<T>; 64]` for a fixed-capacity `ArrayVec` arena.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Slot<T> (SlotInner<T>);

#[derive(Copy, Clone, Debug, Hash)]
enum SlotInner<T> {
    Element(T),
    /// A hole, with an index to the next one.
    Hole(Option<usize>),
}
impl<T> Slot<T> {
    #[inline(always)]
    const fn new_element(val: T) -> Self {
        Self (SlotInner::Element(val))
    }
    #[inline(always)]
    const fn new_hole(next: Option<usize>) -> Self {
        Self (SlotInner::Hole(next))
    }
    #[inline(always)]
    const fn is_element(&self) -> bool {
        matches!(self.0, SlotInner::Element(..))
    }
    #[inline(always)]
    const fn is_hole(&self) -> bool {
        matches!(self.0, SlotInner::Hole(..))
    }
    #[inline(always)]
    fn element(&self) -> Option<&T> {
        match &self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline(always)]
    fn element_mut(&mut self) -> Option<&mut T> {
        match &mut self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline(always)]
    fn hole_link_mut(&mut self) -> Option<&mut Option<usize>> {
        match &mut self.0 {
            SlotInner::Hole(x) => Some(x),
            SlotInner::Element(..) => None,
        }
    }
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    fn into_element(self) -> Option<T> {
        match self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
}
