//! Ordered set implementations.
//!
//! This module provides three implementations of the
//! [`OrderedSet`](crate::set::OrderedSet) contract:
//!
//! - [`LinkedOrderedSet`]: hash index over a doubly-linked chain of nodes
//! - [`SliceOrderedSet`]: a single `Vec`, linear scans, no index
//! - [`SyncLinkedOrderedSet`]: [`LinkedOrderedSet`] behind a mutex
//!
//! # Choosing an Implementation
//!
//! | Operation                 | Linked   | Slice          | Sync linked       |
//! |---------------------------|----------|----------------|-------------------|
//! | `contains`                | O(1)     | O(n)           | O(1) + lock       |
//! | `try_add`                 | O(1)     | O(n)           | O(1) + lock       |
//! | `try_add_first` / `_last` | O(1)     | O(n)           | O(1) + lock       |
//! | `try_remove`              | O(1)     | O(n)           | O(1) + lock       |
//! | `pop_first` / `pop_last`  | O(1)     | O(n) / O(1)    | O(1) + lock       |
//! | `values`                  | O(n) copy| O(1) borrow    | O(n) copy + lock  |
//!
//! Linked complexities are averages over hashing. The slice set wins for a
//! handful of values (no hashing, one contiguous allocation) and falls behind
//! quickly as the set grows; where exactly depends on the value type and the
//! hardware, so measure with `benches/ordered_set_bench.rs` when it matters.
//!
//! # Examples
//!
//! ```rust
//! use ordsets::collections::LinkedOrderedSet;
//!
//! let mut set = LinkedOrderedSet::new();
//! set.add_first(20);
//! set.add_first(10);
//! set.add_first(30);
//! // Already present: moved to the front, not inserted.
//! assert!(!set.try_add_first(10));
//!
//! let values: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(values, vec![10, 30, 20]);
//! ```

use std::fmt;

// =============================================================================
// Hash Builder Type Alias
// =============================================================================

/// Hash builder used by the linked sets unless another one is supplied.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`, with the
/// `ahash` feature (and `fxhash` off) `ahash::RandomState`. Otherwise it is
/// the standard library's SipHash-based `RandomState`.
///
/// Neither `FxHash` nor `aHash` without runtime seeding is HashDoS-resistant;
/// only enable them when the stored values are trusted.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by the linked sets unless another one is supplied.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by the linked sets unless another one is supplied.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// The ordered set to reach for when there is no reason to pick another one.
pub type DefaultOrderedSet<T> = LinkedOrderedSet<T>;

mod linked;
mod slice;
mod synchronized;

pub use linked::IntoIter as LinkedOrderedSetIntoIterator;
pub use linked::Iter as LinkedOrderedSetIterator;
pub use linked::LinkedOrderedSet;
pub use slice::SliceOrderedSet;
pub use synchronized::SyncLinkedOrderedSet;

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Writes `[a b c]`.
fn write_bracketed<'a, T, I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    formatter.write_str("[")?;
    for (position, element) in elements.into_iter().enumerate() {
        if position > 0 {
            formatter.write_str(" ")?;
        }
        fmt::Display::fmt(element, formatter)?;
    }
    formatter.write_str("]")
}

/// Writes `Name::from([a, b, c])`, which rebuilds an equal set when pasted as source.
fn write_constructor<'a, T, I>(
    formatter: &mut fmt::Formatter<'_>,
    name: &str,
    elements: I,
) -> fmt::Result
where
    T: fmt::Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "{name}::from(")?;
    formatter.debug_list().entries(elements).finish()?;
    formatter.write_str(")")
}

// =============================================================================
// Tests
// =============================================================================
