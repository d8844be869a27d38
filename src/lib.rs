//! An arena-allocated splay tree: an ordered map which keeps recently accessed keys close to the root.
//!
//! # Overview
//! Cinder implements a [splay tree], a self-adjusting binary search tree, using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The nodes live in some sort of backing storage, typically a [`Vec`], and instead of using pointers to link to children, keys into the storage are used instead. This keeps every node in one allocation, makes dropping a tree of any shape free of recursion and gives room for supporting configurations without a global memory allocator.
//!
//! Every operation which takes a key first *splays* it: the node with that key, or the last node on the search path for it, is rotated up to the root. The splay is done top-down in a single pass, without parent links and without a sentinel node. See the [`splay_tree`] module for an example.
//!
//! # Comparators
//! Keys are ordered by a [`Comparator`] stored inside the tree. The default one, [`NaturalOrder`], uses `Ord`; any `Fn(&K, &K) -> Ordering` closure can be used instead.
//!
//! # Storage
//! The trait used for defining the "arena" type used is `Storage`. Implementing it directly isn't the only way to get your type to be supported by the tree: `ListStorage` is a trait which allows you to define an arena storage in terms of a list-like collection, which then gets wrapped into a `SparseStorage` to get stable keys.
//!
//! Several types from both the standard library and external crates already implement `Storage` and `ListStorage` out of the box:
//! - [`Vec`], [`SmallVec`] and [`ArrayVec`]: `ListStorage`
//! - [`VecDeque`]: `ListStorage`, does not use `VecDeque` semantics and is simply provided for convenience
//! - [`SlotMap`], [`HopSlotMap`] and [`DenseSlotMap`]: `Storage`
//!
//! ## Sparse storage
//! By default, the tree uses a technique called "sparse storage" to make node removal constant-time without invalidating the keys of other nodes. Removed nodes leave holes behind themselves, which are linked into a free list and reused by the next insertions. Holes at the end of the list can be returned to the allocator with `shrink_to_fit`.
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Adds [`Error`] trait implementations for the error types. The crate always requires `alloc` for its default storage.
//! - `unwind_safety` (**enabled by default**): aborts the process if a comparator panics in the middle of a splay, since the tree is partially disassembled at that point and must not be observed afterwards. **Requires `std`.**
//! - `smallvec`: adds a `ListStorage` trait implementation for [`SmallVec`] and keeps the first entries of traversal work lists inline.
//! - `slotmap`: adds `Storage` trait implementations for [`SlotMap`], [`HopSlotMap`] and [`DenseSlotMap`].
//! - `doc_cfg`: marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**): `^0.5`
//! - `smallvec` (*optional*): `^1.4`
//! - `slotmap` (*optional*): `^0.4`
//!
//! # Logging
//! Cinder emits [`tracing`] events for bulk operations (clearing and draining a tree, preallocating storage) and for rejected key moves. The splay itself never logs.
//!
//! [splay tree]: https://en.wikipedia.org/wiki/Splay_tree " "
//! [`splay_tree`]: splay_tree/index.html " "
//! [`Comparator`]: compare/trait.Comparator.html " "
//! [`NaturalOrder`]: compare/struct.NaturalOrder.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`HopSlotMap`]: https://docs.rs/slotmap/*/slotmap/hop/struct.HopSlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    // Broken, will display warnings even for undocumented items, including trait impls
    //missing_doc_code_examples,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::await_holding_lock,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    // also sick of this one, gives too much false positives inherent to its design
    // clippy::shadow_unrelated,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::filetype_is_file,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
    clippy::verbose_file_reads,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, DefaultStorage};

pub mod compare;
#[doc(no_inline)]
pub use compare::{Comparator, NaturalOrder, ReverseOrder};

pub mod splay_tree;
pub use splay_tree::{SplayTree, Locator, Node, MoveKeyError};

pub mod traversal;
pub use traversal::{Visitor, BreadthFirst, Drain};

/// A prelude for using Cinder, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        SparseStorage as SparseTreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::compare::Comparator as KeyComparator;
    #[doc(no_inline)]
    pub use crate::splay_tree::{
        SplayTree,
        Locator as SplayTreeLocator,
        Node as SplayTreeNode,
        MoveKeyError,
    };
    #[doc(no_inline)]
    pub use crate::traversal::Visitor as SplayTreeVisitor;
}

pub(crate) mod util;
