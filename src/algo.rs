//! Instrumented sorting algorithms.
//!
//! - [`tree`]: **Binary tree sort**, insertion into an unbalanced search tree followed by
//!   an in-order walk.
//! - [`counting`]: **Counting sort**, stable and comparison-free over bounded integer keys.
//! - [`library`]: **Library sort**, stable gapped insertion sort with periodic rebalancing.
//!
//! Every entry point sorts the slice in place and records its primitive operations into
//! the [`Statistics`](crate::core::Statistics) passed by the caller.

pub mod counting;
pub mod library;
pub mod tree;

pub use counting::{MAX_KEY_RANGE, counting_sort, counting_sort_by_key};
pub use library::{
    LibrarySortConfig, MAX_GAP_FACTOR, library_sort, library_sort_by, library_sort_with,
};
pub use tree::{binary_tree_sort, binary_tree_sort_by};
