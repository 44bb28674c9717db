//! Stable counting sort over bounded integer keys.
//!
//! 1. Reads every element once, caching its key and tracking the key range.
//! 2. Tallies the cached keys into a count table indexed by `key - min` and turns the
//!    tallies into running totals.
//! 3. Walks the input backwards, decrementing the running total of each key to find
//!    its slot in an output buffer. Walking backwards keeps equal keys in input order.
//! 4. Copies the output buffer back into the slice.
//!
//! No pairwise comparisons happen at any point. With `n` elements and more than one
//! distinct key the sort reads `3n` times and writes `2n` times; when every key is
//! equal it stops after the first pass.

use crate::core::{CountingKey, Statistics};
use crate::error::{Result, SortError};

/// Largest accepted `max_key - min_key`. Caps the count table at ~80 MB.
pub const MAX_KEY_RANGE: u64 = 10_000_000;

/// Sorts a slice of integer-like values with counting sort.
///
/// # Errors
///
/// Returns [`SortError::RangeExceeded`] when the values span more than
/// [`MAX_KEY_RANGE`]. The slice is left untouched in that case.
///
/// # Examples
///
/// ```
/// use tallysort::prelude::*;
///
/// let mut data = vec![-5, -1, -10, 3, 0, -3];
/// let mut stats = Statistics::new();
/// counting_sort(&mut data, &mut stats).unwrap();
///
/// assert_eq!(data, vec![-10, -5, -3, -1, 0, 3]);
/// assert_eq!(stats.compare_count(), 0);
/// ```
pub fn counting_sort<T: CountingKey>(v: &mut [T], stats: &mut Statistics) -> Result<()> {
    counting_sort_by_key(v, |item: &T| *item, stats)
}

/// Sorts `v` stably by the integer key `key_of` extracts from each element.
///
/// `key_of` is called exactly once per element.
///
/// # Errors
///
/// Returns [`SortError::RangeExceeded`] when the keys span more than
/// [`MAX_KEY_RANGE`]. The check runs before the count table is allocated and before
/// the slice is mutated.
///
/// # Examples
///
/// ```
/// use tallysort::prelude::*;
///
/// let mut people = vec![("eve", 31), ("bob", 25), ("amy", 31), ("dan", 25)];
/// let mut stats = Statistics::new();
/// counting_sort_by_key(&mut people, |p| p.1, &mut stats).unwrap();
///
/// assert_eq!(people, vec![("bob", 25), ("dan", 25), ("eve", 31), ("amy", 31)]);
/// assert_eq!(stats.index_read_count(), 12);
/// assert_eq!(stats.index_write_count(), 8);
/// ```
pub fn counting_sort_by_key<T, K, F>(v: &mut [T], key_of: F, stats: &mut Statistics) -> Result<()>
where
    T: Clone,
    K: CountingKey,
    F: Fn(&T) -> K,
{
    let len = v.len();
    if len == 0 {
        return Ok(());
    }

    // 1. Extract and cache keys, tracking the range.
    let mut keys = Vec::with_capacity(len);
    let mut min = i128::MAX;
    let mut max = i128::MIN;
    for item in v.iter() {
        stats.read();
        let key = key_of(item).widen();
        min = min.min(key);
        max = max.max(key);
        keys.push(key);
    }

    if min == max {
        log::debug!("counting sort of {} elements: single key, nothing to move", len);
        return Ok(());
    }

    let range = (max - min) as u128;
    if range > u128::from(MAX_KEY_RANGE) {
        log::debug!(
            "counting sort rejected key range {} (limit {})",
            range,
            MAX_KEY_RANGE
        );
        return Err(SortError::RangeExceeded {
            range,
            limit: MAX_KEY_RANGE,
        });
    }

    // 2. Tally, then running totals: counts[k] = number of keys <= min + k.
    let mut counts = vec![0usize; range as usize + 1];
    keys.iter().for_each(|&key| counts[(key - min) as usize] += 1);

    let mut sum = 0;
    counts.iter_mut().for_each(|count| {
        sum += *count;
        *count = sum;
    });

    // 3. Stable placement into the output buffer, last element first.
    let mut buffer: Vec<Option<T>> = (0..len).map(|_| None).collect();
    for (item, &key) in v.iter().zip(keys.iter()).rev() {
        stats.read();
        let count = &mut counts[(key - min) as usize];
        *count -= 1;
        buffer[*count] = Some(item.clone());
        stats.write();
    }

    // 4. Copy back. Every buffer slot was filled exactly once above.
    for (slot, item) in v.iter_mut().zip(buffer.into_iter().flatten()) {
        stats.read();
        *slot = item;
        stats.write();
    }

    log::debug!("counting sort of {} elements: {:?}", len, stats);
    Ok(())
}
