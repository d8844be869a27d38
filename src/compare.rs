//! The key comparison policy used by splay trees.
//!
//! Trees never compare keys with `Ord` directly: every comparison goes through a [`Comparator`] stored inside the tree. [`NaturalOrder`] is the default and simply defers to `Ord`; closures of the form `Fn(&K, &K) -> Ordering` work out of the box for everything else.
//!
//! The comparator must describe a total order which stays the same for as long as the keys are in the tree. A comparator which contradicts itself will not cause undefined behavior, but the tree will stop finding keys which it contains.
//!
//! [`Comparator`]: trait.Comparator.html " "
//! [`NaturalOrder`]: struct.NaturalOrder.html " "

use core::cmp::Ordering;

/// A total order over keys of type `K`.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys, returning whether `a` sorts before, together with or after `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}
impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their `Ord` implementation. This is the default comparator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;
impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their `Ord` implementation, making the greatest key the "least" one as far as the tree is concerned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;
impl<K: Ord + ?Sized> Comparator<K> for ReverseOrder {
    #[inline(always)]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}
