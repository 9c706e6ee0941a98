//! Error types.
//!
//! Ordinary set operations never fail: absent values, empty sets and
//! redundant inserts are reported through `bool` and `Option` results. The
//! only fallible entry point is adopting an existing vector as a set without
//! deduplicating it, see [`SliceOrderedSet`](crate::collections::SliceOrderedSet)'s
//! `TryFrom<Vec<T>>`.

use std::fmt;

/// Error returned when a vector handed over as a set contains the same value twice.
///
/// Both indices refer to the rejected vector: `first_index` is the earliest
/// occurrence of the repeated value and `duplicate_index` the next one.
///
/// # Examples
///
/// ```rust
/// use ordsets::collections::SliceOrderedSet;
/// use ordsets::error::DuplicateValueError;
///
/// let result = SliceOrderedSet::try_from(vec![20, 10, 20]);
/// assert_eq!(
///     result.unwrap_err(),
///     DuplicateValueError { first_index: 0, duplicate_index: 2 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateValueError {
    /// Index of the first occurrence of the repeated value.
    pub first_index: usize,
    /// Index of the second occurrence of the repeated value.
    pub duplicate_index: usize,
}

impl fmt::Display for DuplicateValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "duplicate set value: index {} repeats index {}",
            self.duplicate_index, self.first_index
        )
    }
}

impl std::error::Error for DuplicateValueError {}
