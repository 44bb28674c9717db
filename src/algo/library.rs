//! Library sort (gapped insertion sort).
//!
//! Elements are inserted one by one into a sparse auxiliary array that keeps empty
//! gap slots between the occupied ones, the way a librarian leaves room on each
//! shelf. An insertion binary-searches the occupied slots, then drops the element
//! into an adjacent gap.
//!
//! When no gap is adjacent, the smallest aligned window around the insertion point
//! that can take one more element is spread out evenly, new element included. Window
//! density thresholds tighten linearly from "completely full" for the smallest windows
//! to the global threshold for the whole array, so every input order (sorted, reversed,
//! random) costs amortised `O(log² n)` element moves per insertion.
//!
//! Before an insertion would push the whole array past its density threshold, the array
//! moves to the next capacity tier and every placed element is redistributed evenly,
//! restoring the gaps. After the last insertion the occupied slots are compacted back
//! into the input slice.
//!
//! Counting conventions:
//! - Each search probe reads one slot and performs one comparison.
//! - Placing an element writes one slot; moving an element (window spread, rebalance)
//!   reads one slot and writes one slot.
//! - Checking whether a slot is a gap touches no element and is not counted.
//! - No pairwise swaps happen; `swap_count` is never touched.

use crate::core::{Comparator, Natural, Statistics};
use std::cmp::Ordering;

/// Largest accepted [`LibrarySortConfig::gap_factor`]; larger values are clamped.
///
/// The auxiliary array holds up to `2 * (1 + gap_factor) * n` slots.
pub const MAX_GAP_FACTOR: usize = 16;

/// Tuning for [`library_sort_with`].
///
/// # Examples
///
/// ```
/// use tallysort::prelude::*;
///
/// let config = LibrarySortConfig::default().with_gap_factor(3);
/// let mut data = vec![5, 3, 9, 1];
/// let mut stats = Statistics::new();
/// library_sort_with(&mut data, &Natural, config, &mut stats);
///
/// assert_eq!(data, vec![1, 3, 5, 9]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LibrarySortConfig {
    /// Average number of gaps left after each element by a rebalance.
    ///
    /// The array rebalances before `(placed + 1) * (1 + gap_factor)` would exceed its
    /// capacity, so with the default of `1` it is never more than half full. Values
    /// above [`MAX_GAP_FACTOR`] behave as `MAX_GAP_FACTOR`.
    pub gap_factor: usize,
}

impl Default for LibrarySortConfig {
    fn default() -> Self {
        Self { gap_factor: 1 }
    }
}

impl LibrarySortConfig {
    /// Sets the gap factor, clamped to [`MAX_GAP_FACTOR`].
    ///
    /// `0` is accepted and keeps the array dense between rebalances.
    pub fn with_gap_factor(mut self, gap_factor: usize) -> Self {
        self.gap_factor = gap_factor.min(MAX_GAP_FACTOR);
        self
    }

    /// Slots reserved per element, gaps included.
    fn spread(&self) -> usize {
        self.gap_factor.min(MAX_GAP_FACTOR) + 1
    }
}

/// Sorts `v` stably with library sort, ordering by [`Ord`].
///
/// # Examples
///
/// ```
/// use tallysort::prelude::*;
///
/// let mut data = vec![64, 34, 25, 12, 22, 11, 90];
/// let mut stats = Statistics::new();
/// library_sort(&mut data, &mut stats);
///
/// assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
/// assert_eq!(stats.swap_count(), 0);
/// ```
pub fn library_sort<T: Ord + Clone>(v: &mut [T], stats: &mut Statistics) {
    library_sort_with(v, &Natural, LibrarySortConfig::default(), stats);
}

/// Sorts `v` stably with library sort, ordering by `cmp`.
pub fn library_sort_by<T, C>(v: &mut [T], cmp: &C, stats: &mut Statistics)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    library_sort_with(v, cmp, LibrarySortConfig::default(), stats);
}

/// Sorts `v` stably with library sort, ordering by `cmp` and tuned by `config`.
pub fn library_sort_with<T, C>(
    v: &mut [T],
    cmp: &C,
    config: LibrarySortConfig,
    stats: &mut Statistics,
) where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let len = v.len();
    if len == 0 {
        return;
    }

    let mut shelf = GappedArray::new(config);
    for item in v.iter() {
        stats.read();
        if shelf.needs_rebalance() {
            shelf.rebalance(stats);
        }
        shelf.insert(item.clone(), cmp, stats);
    }

    shelf.compact_into(v, stats);

    log::debug!("library sort of {} elements: {:?}", len, stats);
}

/// Sparse array of elements in sorted order, interleaved with `None` gaps.
struct GappedArray<T> {
    slots: Vec<Option<T>>,
    placed: usize,
    spread: usize,
}

impl<T> GappedArray<T> {
    fn new(config: LibrarySortConfig) -> Self {
        Self {
            slots: Vec::new(),
            placed: 0,
            spread: config.spread(),
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether one more element would exceed the density threshold.
    fn needs_rebalance(&self) -> bool {
        (self.placed + 1).saturating_mul(self.spread) > self.capacity()
    }

    /// Moves to the next capacity tier and spreads the placed elements evenly over it.
    fn rebalance(&mut self, stats: &mut Statistics) {
        let old_capacity = self.capacity();
        let mut capacity = old_capacity.saturating_mul(2).max(self.spread);
        while (self.placed + 1).saturating_mul(self.spread) > capacity {
            capacity = capacity.saturating_mul(2);
        }

        let old = std::mem::take(&mut self.slots);
        self.slots = (0..capacity).map(|_| None).collect();

        let count = self.placed;
        for (k, item) in old.into_iter().flatten().enumerate() {
            stats.read();
            self.slots[centered(k, count, capacity)] = Some(item);
            stats.write();
        }

        log::trace!(
            "library sort rebalance: {} placed, capacity {} -> {}",
            count,
            old_capacity,
            capacity
        );
    }

    /// Inserts `value` after every placed element that does not order above it.
    fn insert<C>(&mut self, value: T, cmp: &C, stats: &mut Statistics)
    where
        C: Comparator<T> + ?Sized,
    {
        let point = self.upper_bound(&value, cmp, stats);
        let capacity = self.capacity();

        if point < capacity && self.slots[point].is_none() {
            self.slots[point] = Some(value);
            stats.write();
        } else if point > 0 && self.slots[point - 1].is_none() {
            self.slots[point - 1] = Some(value);
            stats.write();
        } else {
            let (start, end) = self.window_around(point);
            self.spread_window(start, end, point, value, stats);
        }

        self.placed += 1;
    }

    /// Finds `p` such that every occupied slot below `p` holds an element `<= value`
    /// and every occupied slot at or above `p` holds an element `> value`.
    fn upper_bound<C>(&self, value: &T, cmp: &C, stats: &mut Statistics) -> usize
    where
        C: Comparator<T> + ?Sized,
    {
        let mut lo = 0;
        let mut hi = self.capacity();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let probe = (mid..hi).find_map(|j| self.slots[j].as_ref().map(|item| (j, item)));

            match probe {
                // Only gaps in [mid, hi).
                None => hi = mid,
                Some((j, item)) => {
                    stats.read();
                    stats.compare();
                    match cmp.compare(value, item) {
                        Ordering::Less => hi = mid,
                        Ordering::Equal | Ordering::Greater => lo = j + 1,
                    }
                }
            }
        }

        lo
    }

    /// Returns the smallest aligned window containing `point` that stays within its
    /// density threshold after one more element.
    ///
    /// Windows start at `log2(capacity)` slots and double per level. A level-`l` window
    /// of `len` slots accepts `occupied + 1 <= len * (1 - (1 - 1 / spread) * l / height)`,
    /// which is "any gap at all" at level 0 and the global threshold at the root.
    fn window_around(&self, point: usize) -> (usize, usize) {
        let capacity = self.capacity();
        let leaf = (usize::BITS - capacity.leading_zeros()).max(2) as usize;
        let mut height = 0;
        while leaf << height < capacity {
            height += 1;
        }

        let anchor = point.min(capacity - 1);
        for level in 0..height {
            let width = leaf << level;
            let start = (anchor / width) * width;
            let end = (start + width).min(capacity);
            let occupied = self.slots[start..end]
                .iter()
                .filter(|slot| slot.is_some())
                .count();

            let limit = (end - start) * (self.spread * height - (self.spread - 1) * level);
            if (occupied + 1) * self.spread * height <= limit {
                return (start, end);
            }
        }

        // The global threshold holds for the whole array before every insertion.
        (0, capacity)
    }

    /// Spreads the elements of `slots[start..end]`, with `value` inserted at `point`,
    /// evenly over the window.
    fn spread_window(
        &mut self,
        start: usize,
        end: usize,
        point: usize,
        value: T,
        stats: &mut Statistics,
    ) {
        let mut value = Some(value);
        let mut items = Vec::with_capacity(end - start);
        for j in start..end {
            if j == point {
                items.extend(value.take());
            }
            if let Some(item) = self.slots[j].take() {
                stats.read();
                items.push(item);
            }
        }
        // Insertion point just past the window.
        items.extend(value.take());

        let count = items.len();
        let width = end - start;
        for (k, item) in items.into_iter().enumerate() {
            self.slots[start + centered(k, count, width)] = Some(item);
            stats.write();
        }
    }

    /// Writes the placed elements, in slot order, over `v`.
    fn compact_into(self, v: &mut [T], stats: &mut Statistics) {
        for (slot, item) in v.iter_mut().zip(self.slots.into_iter().flatten()) {
            stats.read();
            *slot = item;
            stats.write();
        }
    }
}

/// Position of the `k`-th of `count` elements spread evenly over `width` slots.
///
/// Strictly increasing in `k` and below `width` whenever `count <= width`.
fn centered(k: usize, count: usize, width: usize) -> usize {
    ((2 * k + 1) * width) / (2 * count)
}
