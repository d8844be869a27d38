const INLINE_WORK_LIST_SIZE: usize = 32;

/// The queue of node handles used by breadth-first traversal. Trees shallow enough to fit into the inline buffer are walked without allocating.
#[cfg(feature = "smallvec")]
pub(crate) type WorkList<T> = smallvec::SmallVec<[T; INLINE_WORK_LIST_SIZE]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type WorkList<T> = alloc::vec::Vec<T>;

#[inline]
pub(crate) fn work_list<T>() -> WorkList<T> {
    #[cfg(feature = "smallvec")]
    {
        WorkList::new()
    }
    #[cfg(not(feature = "smallvec"))]
    {
        WorkList::with_capacity(INLINE_WORK_LIST_SIZE)
    }
}

#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub(crate) unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        // Most of those panics are in a tree corruption context, so we should
        // just abort the process to prevent unwinders from collecting corrupted data
        abort_on_panic(|| -> () { unreachable!("{}", msg) });
        unreachable!("{}", msg)
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = msg;
        core::hint::unreachable_unchecked()
    }
}

/// Runs `f`, turning a panic inside of it into a process abort if the `unwind_safety` feature is enabled.
///
/// Used around code which temporarily detaches parts of the tree, so that a panicking comparator cannot let a caller observe a half-rebuilt tree after catching the unwind.
#[inline]
pub(crate) fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "unwind_safety")]
    {
        std::panic::catch_unwind(
            std::panic::AssertUnwindSafe(f)
        ).unwrap_or_else(|_| std::process::abort())
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        f()
    }
}
