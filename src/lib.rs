//! # ordsets
//!
//! Sets that remember order. Every set in this crate has unique membership
//! like a `HashSet`, but also keeps its values in a well-defined sequence that
//! callers can manipulate: append, prepend, move an existing value to either
//! end, and pop from either end.
//!
//! ## Overview
//!
//! - [`LinkedOrderedSet`](collections::LinkedOrderedSet): hash index plus a
//!   doubly-linked node chain. O(1) average membership, insertion, deletion
//!   and move-to-end. The default choice.
//! - [`SliceOrderedSet`](collections::SliceOrderedSet): a single `Vec` with
//!   linear scans. Simpler and faster for a handful of values, degrades to
//!   O(n) per operation as the set grows.
//! - [`SyncLinkedOrderedSet`](collections::SyncLinkedOrderedSet): a
//!   `LinkedOrderedSet` behind a mutex, usable from many threads at once.
//!
//! All of them implement the [`Set`](set::Set) and
//! [`OrderedSet`](set::OrderedSet) traits, so code can be written against the
//! contract and the implementation picked by expected size and sharing needs.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as an ordered sequence
//! - `tracing`: trace events on storage growth and lock contention
//! - `fxhash`: use `FxHash` for the linked sets' index (not HashDoS-resistant)
//! - `ahash`: use `aHash` for the linked sets' index
//! - `full`: `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use ordsets::prelude::*;
//!
//! let mut set: DefaultOrderedSet<i32> = DefaultOrderedSet::new();
//!
//! assert!(set.try_add(20));
//! assert!(set.try_add(10));
//! assert!(set.try_add(30));
//! // Redundant, and does not change the order.
//! assert!(!set.try_add(10));
//!
//! assert_eq!(set.values(), vec![20, 10, 30]);
//! assert_eq!(set.pop_first(), Some(20));
//! assert_eq!(set.pop_last(), Some(30));
//! assert_eq!(set.values(), vec![10]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set traits and every implementation.
///
/// # Usage
///
/// ```rust
/// use ordsets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::error::*;
    pub use crate::set::*;
}

pub mod collections;
pub mod error;
pub mod set;
