//! # Tallysort
//!
//! `tallysort` is a small library of instrumented, in-place sorting algorithms for
//! studying and benchmarking textbook complexity claims.
//!
//! Each algorithm sorts a mutable slice and, while doing so, counts its primitive
//! operations (comparisons, swaps, element reads and element writes) into a
//! [`Statistics`] value owned by the caller. The counts are exact, so closed-form
//! formulas for canonical inputs (sorted, reversed, all-equal) can be asserted directly.
//!
//! ## Algorithms
//!
//! - [`binary_tree_sort`]: inserts every element into an unbalanced binary search tree,
//!   then writes the in-order walk back. `n(n-1)/2` comparisons on sorted input.
//! - [`counting_sort`] / [`counting_sort_by_key`]: stable, comparison-free sort over
//!   integer keys spanning at most [`MAX_KEY_RANGE`]. Exactly `3n` reads and `2n` writes.
//! - [`library_sort`]: stable gapped insertion sort with periodic rebalancing.
//!
//! ## Usage
//!
//! ```rust
//! use tallysort::prelude::*;
//!
//! let mut data = vec![64, 34, 25, 12, 22, 11, 90, 88, 45, 50, 22, 34, 67, 100];
//! let mut stats = Statistics::new();
//! library_sort(&mut data, &mut stats);
//!
//! assert_eq!(data, vec![11, 12, 22, 22, 25, 34, 34, 45, 50, 64, 67, 88, 90, 100]);
//! assert_eq!(stats.swap_count(), 0);
//! ```
//!
//! ### Custom orderings
//!
//! The `_by` variants take any [`Comparator`]: a closure, [`Natural`], [`ByKey`] for
//! key extraction, or [`NanFirst`] for floats containing NaN.
//!
//! ```rust
//! use tallysort::prelude::*;
//!
//! let mut data = vec![2.5, f64::NAN, -1.0, 0.0];
//! let mut stats = Statistics::new();
//! binary_tree_sort_by(&mut data, &NanFirst, &mut stats);
//!
//! assert!(data[0].is_nan());
//! assert_eq!(&data[1..], &[-1.0, 0.0, 2.5]);
//! ```
//!
//! ## Errors
//!
//! Only counting sort can fail: keys spanning more than [`MAX_KEY_RANGE`] values are
//! rejected with [`SortError::RangeExceeded`] before the slice is touched.
//!
//! ## Logging
//!
//! Sorts report through the [`log`] facade at `debug` and `trace` level. Install any
//! logger to see them; nothing is emitted otherwise.

pub mod algo;
pub mod core;
pub mod error;
pub use algo::{
    LibrarySortConfig, MAX_GAP_FACTOR, MAX_KEY_RANGE, binary_tree_sort, binary_tree_sort_by,
    counting_sort, counting_sort_by_key, library_sort, library_sort_by, library_sort_with,
};
pub use core::{ByKey, Comparator, CountingKey, NanFirst, Natural, Statistics};
pub use error::{Result, SortError};

pub mod prelude {
    pub use crate::algo::{
        LibrarySortConfig, MAX_GAP_FACTOR, MAX_KEY_RANGE, binary_tree_sort, binary_tree_sort_by,
        counting_sort, counting_sort_by_key, library_sort, library_sort_by, library_sort_with,
    };
    pub use crate::core::{ByKey, Comparator, CountingKey, NanFirst, Natural, Statistics};
    pub use crate::error::SortError;
}
