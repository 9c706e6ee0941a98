//! The set contracts shared by every implementation in this crate.
//!
//! [`Set`] describes plain set behaviour: membership, append-if-absent and
//! removal. [`OrderedSet`] extends it with the operations that only make sense
//! when values have a position: prepend or move to the front, append or move
//! to the back, pop from either end, and an ordered snapshot of the values.
//!
//! # Laws
//!
//! Every implementation must satisfy these properties:
//!
//! ## Membership
//!
//! ```text
//! set.try_add(v) == !old.contains(&v)      and afterwards set.contains(&v)
//! set.try_remove(&v) == old.contains(&v)   and afterwards !set.contains(&v)
//! ```
//!
//! ## Order
//!
//! ```text
//! try_add never reorders: a redundant add leaves values() unchanged
//! after try_add_first(v): values().first() == Some(&v)
//! after try_add_last(v):  values().last() == Some(&v)
//! ```
//!
//! ## Empty sets
//!
//! Operations on an empty set never fail: `len()` is `0`, `pop_first()` and
//! `pop_last()` are `None`, `values()` is empty, and `try_remove` is `false`.
//!
//! # Examples
//!
//! ```rust
//! use ordsets::collections::{LinkedOrderedSet, SliceOrderedSet};
//! use ordsets::set::OrderedSet;
//!
//! fn recently_used<S: OrderedSet<&'static str>>(mut set: S) -> Vec<&'static str> {
//!     set.add_first("docs");
//!     set.add_first("src");
//!     set.add_first("docs");
//!     set.values().into_owned()
//! }
//!
//! assert_eq!(recently_used(LinkedOrderedSet::new()), vec!["docs", "src"]);
//! assert_eq!(recently_used(SliceOrderedSet::new()), vec!["docs", "src"]);
//! ```

use std::borrow::Cow;

/// A collection with unique membership.
///
/// Insertion through [`Set::try_add`] appends at the end in ordered
/// implementations and must never change the position of a value that is
/// already present.
///
/// # Required Methods
///
/// - `len`, `contains`, `try_add`, `try_remove`
///
/// # Provided Methods
///
/// - `is_empty`, `add`, `remove`
pub trait Set<T> {
    /// Returns the current number of values.
    fn len(&self) -> usize;

    /// Returns `true` if the set holds no values.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `element` is in the set.
    fn contains(&self, element: &T) -> bool;

    /// Void version of [`Set::try_add`].
    #[inline]
    fn add(&mut self, element: T) {
        let _ = self.try_add(element);
    }

    /// Appends `element` if it is absent and returns `true`.
    ///
    /// If `element` is already present, does nothing and returns `false`;
    /// its position is left as it was.
    fn try_add(&mut self, element: T) -> bool;

    /// Void version of [`Set::try_remove`].
    #[inline]
    fn remove(&mut self, element: &T) {
        let _ = self.try_remove(element);
    }

    /// Removes `element` if present and returns `true`, otherwise returns `false`.
    fn try_remove(&mut self, element: &T) -> bool;
}

/// A [`Set`] whose values have a mutable, well-defined order.
///
/// Note the asymmetry between [`Set::try_add`] and the positional inserts:
/// `try_add` on a present value is a no-op, while [`OrderedSet::try_add_first`]
/// and [`OrderedSet::try_add_last`] *move* a present value to the requested
/// end. Their `bool` reports whether a new value was inserted, not whether
/// anything changed.
pub trait OrderedSet<T>: Set<T> {
    /// Void version of [`OrderedSet::try_add_first`].
    #[inline]
    fn add_first(&mut self, element: T) {
        let _ = self.try_add_first(element);
    }

    /// Moves `element` to the front if present and returns `false`, otherwise
    /// prepends it and returns `true`.
    fn try_add_first(&mut self, element: T) -> bool;

    /// Void version of [`OrderedSet::try_add_last`].
    #[inline]
    fn add_last(&mut self, element: T) {
        let _ = self.try_add_last(element);
    }

    /// Moves `element` to the back if present and returns `false`, otherwise
    /// appends it and returns `true`.
    fn try_add_last(&mut self, element: T) -> bool;

    /// Removes and returns the first value, or `None` if the set is empty.
    ///
    /// There is deliberately no variant returning a bare `T`: a stored value
    /// can itself look "empty" (`Option::None`, `0`, `""`) and must stay
    /// distinguishable from an empty set.
    fn pop_first(&mut self) -> Option<T>;

    /// Removes and returns the last value, or `None` if the set is empty.
    fn pop_last(&mut self) -> Option<T>;

    /// Returns the values in order, as of the moment of the call.
    ///
    /// Implementations either copy (`Cow::Owned`) or lend their backing
    /// storage (`Cow::Borrowed`). Either way the snapshot is isolated from the
    /// set: a borrowed snapshot is read-only while it lives, and
    /// [`Cow::to_mut`] copies before any write.
    fn values(&self) -> Cow<'_, [T]>
    where
        T: Clone;
}
