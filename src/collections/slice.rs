//! Slice-backed ordered set for small collections.
//!
//! This module provides [`SliceOrderedSet`], an ordered set stored as a single
//! `Vec` with no auxiliary index. Membership is a linear scan and every
//! positional change shifts elements, so each mutating operation is O(n).
//!
//! For a handful of values this beats [`LinkedOrderedSet`](super::LinkedOrderedSet):
//! there is no hashing, one contiguous allocation, and `values()` lends the
//! storage instead of copying it. For large sets it degrades badly; use the
//! linked set once the expected size goes beyond a few dozen values.
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity            |
//! |---------------------------|-----------------------|
//! | `contains`                | O(n)                  |
//! | `try_add`                 | O(n)                  |
//! | `try_add_first` / `_last` | O(n)                  |
//! | `try_remove`              | O(n)                  |
//! | `pop_first`               | O(n)                  |
//! | `pop_last`                | O(1)                  |
//! | `values`                  | O(1), no copy         |
//!
//! # Capacity Growth
//!
//! When a new value does not fit, capacity grows to `max(1, 2 * len)`. Spare
//! capacity left by removals is reused before growing.
//!
//! # Examples
//!
//! ```rust
//! use ordsets::collections::SliceOrderedSet;
//!
//! let mut set = SliceOrderedSet::new();
//! set.add(20);
//! set.add(10);
//! set.add(30);
//! assert_eq!(set.values(), &[20, 10, 30]);
//!
//! set.add_first(30);
//! assert_eq!(set.values(), &[30, 20, 10]);
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;

use crate::error::DuplicateValueError;
use crate::set::{OrderedSet, Set};

/// Capacity of the first allocation.
const MIN_CAPACITY: usize = 1;

/// An ordered set backed by a single `Vec`.
///
/// Only requires `T: Eq`. Every operation scans the storage, so prefer
/// [`LinkedOrderedSet`](super::LinkedOrderedSet) for anything but small sets.
///
/// # Examples
///
/// ```rust
/// use ordsets::collections::SliceOrderedSet;
///
/// let set: SliceOrderedSet<i32> = [20, 10, 30, 20].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(format!("{set:?}"), "SliceOrderedSet::from([20, 10, 30])");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SliceOrderedSet<T> {
    items: Vec<T>,
}

impl<T> SliceOrderedSet<T> {
    /// Creates an empty set. Does not allocate.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty set with room for at least `capacity` values.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of values in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of values the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the first value, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last value, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes and returns the first value, or `None` if the set is empty.
    ///
    /// Shifts every remaining value one slot to the left.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Removes and returns the last value, or `None` if the set is empty.
    #[inline]
    pub fn pop_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes every value. Allocated capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the values in order.
    ///
    /// This is the set's own storage, not a copy. The borrow keeps the set
    /// frozen for as long as the slice is in use.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.items
    }

    /// Same as [`values`](Self::values).
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the values, first to last.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the set and returns its storage.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Makes room for one more value following the doubling policy.
    fn reserve_one(&mut self) {
        let length = self.items.len();
        if length < self.items.capacity() {
            return;
        }
        let target = length.saturating_mul(2).max(MIN_CAPACITY);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.items.capacity(),
            new_capacity = target,
            "growing slice set storage"
        );
        self.items.reserve_exact(target - length);
    }
}

impl<T: Eq> SliceOrderedSet<T> {
    /// Returns `true` if the set contains `element`.
    ///
    /// # Complexity
    ///
    /// O(n), linear scan.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position_of(element).is_some()
    }

    /// Void version of [`try_add`](Self::try_add).
    #[inline]
    pub fn add(&mut self, element: T) {
        let _ = self.try_add(element);
    }

    /// Appends `element` if absent and returns `true`; returns `false` and
    /// leaves the order unchanged if it is already present.
    pub fn try_add(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.reserve_one();
        self.items.push(element);
        true
    }

    /// Void version of [`try_add_first`](Self::try_add_first).
    #[inline]
    pub fn add_first(&mut self, element: T) {
        let _ = self.try_add_first(element);
    }

    /// Moves `element` to the front if present and returns `false`, otherwise
    /// prepends it and returns `true`.
    ///
    /// Either way, the values before `element`'s old position (or all values,
    /// for an insertion) shift one slot to the right.
    pub fn try_add_first(&mut self, element: T) -> bool {
        if let Some(position) = self.position_of(&element) {
            self.items[..=position].rotate_right(1);
            return false;
        }
        self.reserve_one();
        self.items.insert(0, element);
        true
    }

    /// Void version of [`try_add_last`](Self::try_add_last).
    #[inline]
    pub fn add_last(&mut self, element: T) {
        let _ = self.try_add_last(element);
    }

    /// Moves `element` to the back if present and returns `false`, otherwise
    /// appends it and returns `true`.
    pub fn try_add_last(&mut self, element: T) -> bool {
        if let Some(position) = self.position_of(&element) {
            self.items[position..].rotate_left(1);
            return false;
        }
        self.reserve_one();
        self.items.push(element);
        true
    }

    /// Void version of [`try_remove`](Self::try_remove).
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q)
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let _ = self.try_remove(element);
    }

    /// Removes `element` if present and returns `true`, otherwise returns `false`.
    ///
    /// The values after it shift one slot to the left.
    pub fn try_remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.position_of(element) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    fn position_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.items.iter().position(|item| item.borrow() == element)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SliceOrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq> Extend<T> for SliceOrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Eq> FromIterator<T> for SliceOrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq, const N: usize> From<[T; N]> for SliceOrderedSet<T> {
    /// Builds a set from an array, keeping the first occurrence of each value.
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

/// Adopts a vector as the set's storage without copying it.
///
/// Unlike collecting, which silently drops later duplicates, this rejects a
/// vector that repeats a value.
///
/// # Examples
///
/// ```rust
/// use ordsets::collections::SliceOrderedSet;
///
/// let set = SliceOrderedSet::try_from(vec![20, 10, 30]).unwrap();
/// assert_eq!(set.values(), &[20, 10, 30]);
///
/// assert!(SliceOrderedSet::try_from(vec![20, 10, 20]).is_err());
/// ```
impl<T: Eq> TryFrom<Vec<T>> for SliceOrderedSet<T> {
    type Error = DuplicateValueError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        for (duplicate_index, item) in items.iter().enumerate() {
            if let Some(first_index) = items[..duplicate_index]
                .iter()
                .position(|earlier| earlier == item)
            {
                return Err(DuplicateValueError {
                    first_index,
                    duplicate_index,
                });
            }
        }
        Ok(Self { items })
    }
}

impl<T> From<SliceOrderedSet<T>> for Vec<T> {
    fn from(set: SliceOrderedSet<T>) -> Self {
        set.items
    }
}

impl<T> IntoIterator for SliceOrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SliceOrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for SliceOrderedSet<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

/// Renders a constructor call that rebuilds the set, e.g.
/// `SliceOrderedSet::from([20, 10, 30])`.
impl<T: fmt::Debug> fmt::Debug for SliceOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_constructor(formatter, "SliceOrderedSet", &self.items)
    }
}

/// Renders the values in order as `[20 10 30]`.
impl<T: fmt::Display> fmt::Display for SliceOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_bracketed(formatter, &self.items)
    }
}

// =============================================================================
// Set Contract
// =============================================================================

impl<T: Eq> Set<T> for SliceOrderedSet<T> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn try_add(&mut self, element: T) -> bool {
        Self::try_add(self, element)
    }

    #[inline]
    fn try_remove(&mut self, element: &T) -> bool {
        Self::try_remove(self, element)
    }
}

impl<T: Eq> OrderedSet<T> for SliceOrderedSet<T> {
    #[inline]
    fn try_add_first(&mut self, element: T) -> bool {
        Self::try_add_first(self, element)
    }

    #[inline]
    fn try_add_last(&mut self, element: T) -> bool {
        Self::try_add_last(self, element)
    }

    #[inline]
    fn pop_first(&mut self) -> Option<T> {
        Self::pop_first(self)
    }

    #[inline]
    fn pop_last(&mut self) -> Option<T> {
        Self::pop_last(self)
    }

    /// Lends the storage; no copy is made.
    #[inline]
    fn values(&self) -> Cow<'_, [T]>
    where
        T: Clone,
    {
        Cow::Borrowed(&self.items)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SliceOrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.items)
    }
}

#[cfg(feature = "serde")]
struct SliceOrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SliceOrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Eq,
{
    type Value = SliceOrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = SliceOrderedSet::new();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SliceOrderedSet<T>
where
    T: serde::Deserialize<'de> + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SliceOrderedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
