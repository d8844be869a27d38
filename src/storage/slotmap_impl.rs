use core::fmt::Debug;
use slotmap::{SlotMap, HopSlotMap, DenseSlotMap, Key, Slottable};
use super::Storage;

// All three maps share the same method names, only their iteration and removal tradeoffs differ.
macro_rules! impl_storage_for_slotmap {
    ($($map:ident),+ $(,)?) => {$(
        unsafe impl<K, V> Storage for $map<K, V>
        where
            K: Key + Debug + Eq,
            V: Slottable,
        {
            type Key = K;
            type Element = V;
            // Slotmap keys are Copy, so cloning them out of the references is free
            #[inline(always)]
            fn add(&mut self, element: Self::Element) -> Self::Key {
                self.insert(element)
            }
            #[inline(always)]
            #[track_caller]
            fn remove(&mut self, key: &Self::Key) -> Self::Element {
                self.remove(key.clone())
                    .expect("the node with this key has already been released")
            }
            #[inline(always)]
            fn len(&self) -> usize {
                self.len()
            }
            #[inline(always)]
            fn with_capacity(capacity: usize) -> Self {
                Self::with_capacity_and_key(capacity)
            }
            #[inline(always)]
            unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element {
                self.get_unchecked(key.clone())
            }
            #[inline(always)]
            unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element {
                self.get_unchecked_mut(key.clone())
            }
            #[inline(always)]
            fn contains_key(&self, key: &Self::Key) -> bool {
                self.contains_key(key.clone())
            }
            #[inline(always)]
            fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
                self.get(key.clone())
            }
            #[inline(always)]
            fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
                self.get_mut(key.clone())
            }
            #[inline(always)]
            fn new() -> Self {
                Self::with_key()
            }
            #[inline(always)]
            fn capacity(&self) -> usize {
                self.capacity()
            }
            #[inline(always)]
            fn reserve(&mut self, additional: usize) {
                self.reserve(additional)
            }
            // Slotmaps never give memory back, so shrink_to_fit keeps the default no-op
        }
    )+};
}

impl_storage_for_slotmap!(SlotMap, HopSlotMap, DenseSlotMap);
