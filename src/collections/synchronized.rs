//! Mutex-synchronized linked ordered set.
//!
//! This module provides [`SyncLinkedOrderedSet`], a [`LinkedOrderedSet`]
//! guarded by a `parking_lot::Mutex`. Every operation takes `&self`, locks,
//! delegates to the inner set and unlocks when the guard drops, including when
//! the delegate unwinds. Exactly one operation runs at a time per instance,
//! reads included.
//!
//! # Re-entry Warning
//!
//! The lock is not re-entrant. The only way to run caller code while it is
//! held is [`SyncLinkedOrderedSet::for_each`]; calling back into the same set
//! from inside that closure deadlocks.
//!
//! # Examples
//!
//! ```rust
//! use ordsets::collections::SyncLinkedOrderedSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(SyncLinkedOrderedSet::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let set = Arc::clone(&set);
//!         thread::spawn(move || {
//!             for value in 0..100 {
//!                 set.add(worker * 100 + value);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(set.len(), 400);
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use parking_lot::{Mutex, MutexGuard};

use super::{DefaultHashBuilder, LinkedOrderedSet};
use crate::set::{OrderedSet, Set};

/// A [`LinkedOrderedSet`] that can be shared between threads.
///
/// The wrapped set is owned exclusively and never handed out by reference,
/// so there is no way around the lock. [`into_inner`](Self::into_inner)
/// gives it back by value once the wrapper itself is no longer shared.
///
/// Slightly slower than the bare [`LinkedOrderedSet`] because of the lock; use
/// that one when the set is not shared.
///
/// # Thread Safety
///
/// `Send` and `Sync` when `T: Send` and `S: Send`.
///
/// # Examples
///
/// ```rust
/// use ordsets::collections::SyncLinkedOrderedSet;
///
/// let set = SyncLinkedOrderedSet::new();
/// assert!(set.try_add(20));
/// assert!(set.try_add_first(10));
/// assert_eq!(set.values(), vec![10, 20]);
/// assert_eq!(format!("{set:?}"), "SyncLinkedOrderedSet::from([10, 20])");
/// ```
pub struct SyncLinkedOrderedSet<T, S = DefaultHashBuilder> {
    inner: Mutex<LinkedOrderedSet<T, S>>,
}

static_assertions::assert_impl_all!(SyncLinkedOrderedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(SyncLinkedOrderedSet<String>: Send, Sync);
static_assertions::assert_not_impl_any!(SyncLinkedOrderedSet<std::rc::Rc<i32>>: Send, Sync);

impl<T> SyncLinkedOrderedSet<T> {
    /// Creates an empty set. Does not allocate.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_set(LinkedOrderedSet::new())
    }

    /// Creates an empty set with room for at least `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_set(LinkedOrderedSet::with_capacity(capacity))
    }
}

impl<T, S> SyncLinkedOrderedSet<T, S> {
    /// Creates an empty set that hashes values with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::from_set(LinkedOrderedSet::with_hasher(hasher))
    }

    /// Creates an empty set with room for `capacity` values, hashing with `hasher`.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::from_set(LinkedOrderedSet::with_capacity_and_hasher(
            capacity, hasher,
        ))
    }

    /// Wraps an existing set.
    #[inline]
    #[must_use]
    pub fn from_set(set: LinkedOrderedSet<T, S>) -> Self {
        Self {
            inner: Mutex::new(set),
        }
    }

    /// Consumes the wrapper and returns the inner set.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> LinkedOrderedSet<T, S> {
        self.inner.into_inner()
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if the set holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns a clone of the first value, or `None` if the set is empty.
    #[must_use]
    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.lock().first().cloned()
    }

    /// Returns a clone of the last value, or `None` if the set is empty.
    #[must_use]
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.lock().last().cloned()
    }

    /// Removes and returns the first value, or `None` if the set is empty.
    pub fn pop_first(&self) -> Option<T> {
        self.lock().pop_first()
    }

    /// Removes and returns the last value, or `None` if the set is empty.
    pub fn pop_last(&self) -> Option<T> {
        self.lock().pop_last()
    }

    /// Removes every value.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns a copy of the values, first to last, taken under the lock.
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.lock().values()
    }

    /// Calls `function` on every value, first to last, while holding the lock.
    ///
    /// Avoids the copy made by [`values`](Self::values). `function` must not
    /// call back into this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::collections::SyncLinkedOrderedSet;
    ///
    /// let set = SyncLinkedOrderedSet::from([1, 2, 3]);
    /// let mut sum = 0;
    /// set.for_each(|value| sum += value);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(&T),
    {
        self.lock().iter().for_each(function);
    }

    fn lock(&self) -> MutexGuard<'_, LinkedOrderedSet<T, S>> {
        if let Some(guard) = self.inner.try_lock() {
            return guard;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("ordered set lock contended, waiting");
        self.inner.lock()
    }
}

impl<T, S> SyncLinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the set contains `element`.
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains(element)
    }

    /// Void version of [`try_add`](Self::try_add).
    pub fn add(&self, element: T) {
        self.lock().add(element);
    }

    /// Appends `element` if absent and returns `true`, otherwise returns `false`.
    pub fn try_add(&self, element: T) -> bool {
        self.lock().try_add(element)
    }

    /// Void version of [`try_add_first`](Self::try_add_first).
    pub fn add_first(&self, element: T) {
        self.lock().add_first(element);
    }

    /// Moves `element` to the front if present and returns `false`, otherwise
    /// prepends it and returns `true`.
    pub fn try_add_first(&self, element: T) -> bool {
        self.lock().try_add_first(element)
    }

    /// Void version of [`try_add_last`](Self::try_add_last).
    pub fn add_last(&self, element: T) {
        self.lock().add_last(element);
    }

    /// Moves `element` to the back if present and returns `false`, otherwise
    /// appends it and returns `true`.
    pub fn try_add_last(&self, element: T) -> bool {
        self.lock().try_add_last(element)
    }

    /// Void version of [`try_remove`](Self::try_remove).
    pub fn remove<Q>(&self, element: &Q)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().remove(element);
    }

    /// Removes `element` if present and returns `true`, otherwise returns `false`.
    pub fn try_remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().try_remove(element)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for SyncLinkedOrderedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::from_set(LinkedOrderedSet::default())
    }
}

impl<T: Clone, S: Clone> Clone for SyncLinkedOrderedSet<T, S> {
    fn clone(&self) -> Self {
        Self::from_set(self.lock().clone())
    }
}

impl<T, S> From<LinkedOrderedSet<T, S>> for SyncLinkedOrderedSet<T, S> {
    fn from(set: LinkedOrderedSet<T, S>) -> Self {
        Self::from_set(set)
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for SyncLinkedOrderedSet<T> {
    /// Builds a set from an array, keeping the first occurrence of each value.
    fn from(array: [T; N]) -> Self {
        Self::from_set(LinkedOrderedSet::from(array))
    }
}

impl<T: Eq + Hash> From<Vec<T>> for SyncLinkedOrderedSet<T> {
    /// Builds a set from a vector, keeping the first occurrence of each value.
    fn from(vec: Vec<T>) -> Self {
        Self::from_set(LinkedOrderedSet::from(vec))
    }
}

impl<T, S> FromIterator<T> for SyncLinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_set(iter.into_iter().collect())
    }
}

impl<T, S> Extend<T> for SyncLinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.get_mut().extend(iter);
    }
}

impl<T, S> IntoIterator for SyncLinkedOrderedSet<T, S> {
    type Item = T;
    type IntoIter = super::linked::IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

/// Renders a constructor call that rebuilds the set, e.g.
/// `SyncLinkedOrderedSet::from([20, 10, 30])`.
impl<T: fmt::Debug, S> fmt::Debug for SyncLinkedOrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.lock();
        super::write_constructor(formatter, "SyncLinkedOrderedSet", guard.iter())
    }
}

/// Renders the values in order as `[20 10 30]`.
impl<T: fmt::Display, S> fmt::Display for SyncLinkedOrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.lock();
        super::write_bracketed(formatter, guard.iter())
    }
}

// =============================================================================
// Set Contract
// =============================================================================

impl<T, S> Set<T> for SyncLinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
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

impl<T, S> OrderedSet<T> for SyncLinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
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

    fn values(&self) -> Cow<'_, [T]>
    where
        T: Clone,
    {
        Cow::Owned(Self::values(self))
    }
}

/// Shared references satisfy the contract too, so several threads can drive
/// one set through generic code.
impl<T, S> Set<T> for &SyncLinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        (**self).contains(element)
    }

    #[inline]
    fn try_add(&mut self, element: T) -> bool {
        (**self).try_add(element)
    }

    #[inline]
    fn try_remove(&mut self, element: &T) -> bool {
        (**self).try_remove(element)
    }
}

impl<T, S> OrderedSet<T> for &SyncLinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn try_add_first(&mut self, element: T) -> bool {
        (**self).try_add_first(element)
    }

    #[inline]
    fn try_add_last(&mut self, element: T) -> bool {
        (**self).try_add_last(element)
    }

    #[inline]
    fn pop_first(&mut self) -> Option<T> {
        (**self).pop_first()
    }

    #[inline]
    fn pop_last(&mut self) -> Option<T> {
        (**self).pop_last()
    }

    fn values(&self) -> Cow<'_, [T]>
    where
        T: Clone,
    {
        Cow::Owned((**self).values())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for SyncLinkedOrderedSet<T, S> {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        let guard = self.lock();
        serializer.collect_seq(guard.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for SyncLinkedOrderedSet<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <LinkedOrderedSet<T, S> as serde::Deserialize<'de>>::deserialize(deserializer)
            .map(Self::from_set)
    }
}

// =============================================================================
// Tests
// =============================================================================
