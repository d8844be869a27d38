use arrayvec::{ArrayVec, Array};
use super::ListStorage;

unsafe impl<A> ListStorage for ArrayVec<A>
where A: Array,
{
    type Element = A::Item;

    #[inline(always)]
    #[track_caller]
    fn with_capacity(capacity: usize) -> Self {
        assert_eq!(
            capacity,
            A::CAPACITY,
            "an ArrayVec node arena always has the capacity of its array",
        );
        Self::new()
    }
    #[inline(always)]
    #[track_caller]
    fn push(&mut self, element: Self::Element) {
        if self.try_push(element).is_err() {
            panic!("the node arena is full (capacity {})", A::CAPACITY)
        }
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<Self::Element> {
        self.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element {
        self.as_slice().get_unchecked(index)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element {
        self.as_mut_slice().get_unchecked_mut(index)
    }

    #[inline(always)]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.as_slice().get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        self.as_mut_slice().get_mut(index)
    }
    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        A::CAPACITY
    }
    #[inline(always)]
    #[track_caller]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > A::CAPACITY {
            panic!(
                "the node arena cannot fit {} more nodes (capacity {}, {} in use)",
                additional, A::CAPACITY, self.len(),
            )
        }
    }
}
