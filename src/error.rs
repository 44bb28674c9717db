//! Error type for the fallible sorts.

use thiserror::Error;

/// Errors reported by the sorts in this crate.
///
/// Only counting sort can fail; the comparison sorts accept every finite input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The span `max_key - min_key` is larger than the count table may grow.
    ///
    /// Reported before the count table is allocated and before the input is mutated.
    #[error("key range {range} exceeds the counting sort limit of {limit}")]
    RangeExceeded { range: u128, limit: u64 },
}

pub type Result<T, E = SortError> = std::result::Result<T, E>;
