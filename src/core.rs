//! Core traits and types shared by every algorithm.
//!
//! This module defines:
//! - [`Statistics`]: The counter sink each sort increments while it runs.
//! - [`Comparator`]: The ordering capability, with the stock adapters [`Natural`],
//!   [`NanFirst`] and [`ByKey`].
//! - [`CountingKey`]: Integer-like keys accepted by counting sort.

use cuneiform::cuneiform;
use std::cmp::Ordering;

/// Primitive operation counters filled in by a sort call.
///
/// Create a fresh value before each sort, pass it by `&mut`, and read it afterwards.
/// The algorithms only ever increment; nothing in this crate resets a counter.
///
/// # Examples
///
/// ```
/// use tallysort::prelude::*;
///
/// let mut data = vec![3, 1, 2];
/// let mut stats = Statistics::new();
/// binary_tree_sort(&mut data, &mut stats);
///
/// assert_eq!(data, vec![1, 2, 3]);
/// assert_eq!(stats.swap_count(), 0);
/// assert_eq!(stats.index_read_count(), 3);
/// ```
#[cuneiform]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    compare_count: u64,
    swap_count: u64,
    index_read_count: u64,
    index_write_count: u64,
}

impl Statistics {
    /// Returns a sink with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of element comparisons performed.
    pub fn compare_count(&self) -> u64 {
        self.compare_count
    }

    /// Number of pairwise element exchanges performed.
    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    /// Number of element reads from any indexed storage.
    pub fn index_read_count(&self) -> u64 {
        self.index_read_count
    }

    /// Number of element writes into any indexed storage.
    pub fn index_write_count(&self) -> u64 {
        self.index_write_count
    }

    #[inline(always)]
    pub(crate) fn compare(&mut self) {
        self.compare_count += 1;
    }

    #[inline(always)]
    pub(crate) fn read(&mut self) {
        self.index_read_count += 1;
    }

    #[inline(always)]
    pub(crate) fn write(&mut self) {
        self.index_write_count += 1;
    }
}

/// A total order over `T`, used by the comparison-based sorts.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator, so call sites can pass
/// `|a: &T, b: &T| a.cmp(b)` directly.
///
/// The relation must be a strict weak ordering; results are otherwise unspecified
/// (but the sorts never panic and never lose elements).
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Total order for floating point values.
///
/// Every NaN orders below all comparable values and equal to every other NaN.
/// Comparable values keep their IEEE order, so `-0.0` and `0.0` compare equal.
///
/// ```
/// use std::cmp::Ordering;
/// use tallysort::core::{Comparator, NanFirst};
///
/// assert_eq!(NanFirst.compare(&f64::NAN, &f64::NEG_INFINITY), Ordering::Less);
/// assert_eq!(NanFirst.compare(&f64::NAN, &-f64::NAN), Ordering::Equal);
/// assert_eq!(NanFirst.compare(&-0.0f64, &0.0), Ordering::Equal);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NanFirst;

macro_rules! impl_nan_first {
    ($($t:ty),*) => {
        $(
            impl Comparator<$t> for NanFirst {
                #[inline(always)]
                fn compare(&self, a: &$t, b: &$t) -> Ordering {
                    match (a.is_nan(), b.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        // Both comparable, partial_cmp cannot fail.
                        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )*
    };
}

impl_nan_first!(f32, f64);

/// Key-extraction adapter: orders elements by the [`Ord`] key `f` maps them to.
///
/// ```
/// use std::cmp::Ordering;
/// use tallysort::core::{ByKey, Comparator};
///
/// let by_len = ByKey(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"pear", &"fig"), Ordering::Greater);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// An integer-like key usable by counting sort.
///
/// Keys are widened to `i128`, so the span between any two keys of one type is
/// representable without overflow.
pub trait CountingKey: Copy {
    /// Returns the key as a wide signed integer, preserving order.
    fn widen(self) -> i128;
}

macro_rules! impl_counting_key {
    ($($t:ty),*) => {
        $(
            impl CountingKey for $t {
                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_counting_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl CountingKey for char {
    #[inline(always)]
    fn widen(self) -> i128 {
        u32::from(self) as i128
    }
}

impl CountingKey for bool {
    #[inline(always)]
    fn widen(self) -> i128 {
        i128::from(self)
    }
}
