//! Hash-indexed ordered set with O(1) moves.
//!
//! This module provides [`LinkedOrderedSet`], an ordered set made of two
//! structures kept in lockstep:
//!
//! - an arena of nodes (`Vec` of slots) forming a doubly-linked chain through
//!   `previous`/`next` slot indices, which carries the order;
//! - a hash table of slot indices, hashed by each node's cached hash and
//!   compared through the arena, which answers membership.
//!
//! Slot indices stay valid for as long as the value they hold is in the set,
//! so relinking a node never touches the hash table. Slots freed by removals
//! are reused before the arena grows.
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity      |
//! |---------------------------|-----------------|
//! | `contains`                | O(1) average    |
//! | `try_add`                 | O(1) average    |
//! | `try_add_first` / `_last` | O(1) average    |
//! | `try_remove`              | O(1) average    |
//! | `pop_first` / `pop_last`  | O(1) average    |
//! | `len` / `first` / `last`  | O(1)            |
//! | `values`                  | O(n), allocates |
//!
//! # Examples
//!
//! ```rust
//! use ordsets::collections::LinkedOrderedSet;
//!
//! let mut set = LinkedOrderedSet::new();
//! set.add(20);
//! set.add(10);
//! set.add(30);
//!
//! // Move an existing value to the back.
//! assert!(!set.try_add_last(20));
//! assert_eq!(set.values(), vec![10, 30, 20]);
//!
//! assert_eq!(set.pop_first(), Some(10));
//! assert!(!set.contains(&10));
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use hashbrown::HashTable;

use super::DefaultHashBuilder;
use crate::set::{OrderedSet, Set};

/// One value and its position in the chain.
#[derive(Clone)]
struct Node<T> {
    element: T,
    hash: u64,
    previous: Option<usize>,
    next: Option<usize>,
}

/// Arena slot. `None` slots are listed in `vacant` for reuse.
type Slot<T> = Option<Node<T>>;

/// An ordered set with O(1) average insertion, removal and move-to-end.
///
/// Values are kept in the order they were added, and can be moved to either
/// end with [`try_add_first`](Self::try_add_first) and
/// [`try_add_last`](Self::try_add_last). A default-constructed set is empty
/// and does not allocate until the first insertion.
///
/// Not synchronized; see
/// [`SyncLinkedOrderedSet`](super::SyncLinkedOrderedSet) for shared use
/// across threads.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Eq` and `Hash`.
/// * `S` - The hash builder, [`DefaultHashBuilder`] unless specified.
///
/// # Examples
///
/// ```rust
/// use ordsets::collections::LinkedOrderedSet;
///
/// let set = LinkedOrderedSet::from([20, 10, 30, 20, 10]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_string(), "[20 10 30]");
/// ```
#[derive(Clone)]
pub struct LinkedOrderedSet<T, S = DefaultHashBuilder> {
    slots: Vec<Slot<T>>,
    vacant: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    index: HashTable<usize>,
    hasher: S,
}

impl<T> LinkedOrderedSet<T> {
    /// Creates an empty set. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::collections::LinkedOrderedSet;
    ///
    /// let set: LinkedOrderedSet<i32> = LinkedOrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> LinkedOrderedSet<T, S> {
    /// Creates an empty set that hashes values with `hasher`. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::collections::LinkedOrderedSet;
    /// use std::hash::RandomState;
    ///
    /// let mut set = LinkedOrderedSet::with_hasher(RandomState::new());
    /// set.add("value");
    /// assert!(set.contains("value"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            index: HashTable::new(),
            hasher,
        }
    }

    /// Creates an empty set with room for `capacity` values, hashing with `hasher`.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
            head: None,
            tail: None,
            index: HashTable::with_capacity(capacity),
            hasher,
        }
    }

    /// Returns the set's hash builder.
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Returns the number of values in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the set holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the first value, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.map(|position| &self.node(position).element)
    }

    /// Returns the last value, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|position| &self.node(position).element)
    }

    /// Removes and returns the first value, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::collections::LinkedOrderedSet;
    ///
    /// // A stored `None` is still a found value.
    /// let mut set = LinkedOrderedSet::from([None, Some(1)]);
    /// assert_eq!(set.pop_first(), Some(None));
    /// assert_eq!(set.pop_first(), Some(Some(1)));
    /// assert_eq!(set.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        let position = self.head?;
        Some(self.take(position))
    }

    /// Removes and returns the last value, or `None` if the set is empty.
    pub fn pop_last(&mut self) -> Option<T> {
        let position = self.tail?;
        Some(self.take(position))
    }

    /// Removes every value. Allocated capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator over the values, first to last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::collections::LinkedOrderedSet;
    ///
    /// let set = LinkedOrderedSet::from(["b", "a", "c"]);
    /// let reversed: Vec<&str> = set.iter().rev().copied().collect();
    /// assert_eq!(reversed, vec!["c", "a", "b"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns a freshly allocated copy of the values, first to last.
    ///
    /// The returned vector belongs to the caller and is free to mutate.
    #[must_use]
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // =========================================================================
    // Chain maintenance
    // =========================================================================

    fn node(&self, position: usize) -> &Node<T> {
        match &self.slots[position] {
            Some(node) => node,
            None => unreachable!("linked slot {position} is vacant"),
        }
    }

    fn node_mut(&mut self, position: usize) -> &mut Node<T> {
        match &mut self.slots[position] {
            Some(node) => node,
            None => unreachable!("linked slot {position} is vacant"),
        }
    }

    /// Stores a detached node, reusing a vacant slot when one exists.
    fn allocate(&mut self, element: T, hash: u64) -> usize {
        let node = Node {
            element,
            hash,
            previous: None,
            next: None,
        };
        if let Some(position) = self.vacant.pop() {
            self.slots[position] = Some(node);
            position
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    fn link_front(&mut self, position: usize) {
        let old_head = self.head;
        let node = self.node_mut(position);
        node.previous = None;
        node.next = old_head;
        match old_head {
            Some(head) => self.node_mut(head).previous = Some(position),
            None => self.tail = Some(position),
        }
        self.head = Some(position);
    }

    fn link_back(&mut self, position: usize) {
        let old_tail = self.tail;
        let node = self.node_mut(position);
        node.previous = old_tail;
        node.next = None;
        match old_tail {
            Some(tail) => self.node_mut(tail).next = Some(position),
            None => self.head = Some(position),
        }
        self.tail = Some(position);
    }

    fn unlink(&mut self, position: usize) {
        let Node { previous, next, .. } = *self.node(position);
        match previous {
            Some(previous) => self.node_mut(previous).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).previous = previous,
            None => self.tail = previous,
        }
    }

    /// Unlinks the node at `position`, drops its index entry and frees its slot.
    fn take(&mut self, position: usize) -> T {
        let hash = self.node(position).hash;
        if let Ok(entry) = self.index.find_entry(hash, |&candidate| candidate == position) {
            let _ = entry.remove();
        }
        self.unlink(position);
        self.release(position)
    }

    fn release(&mut self, position: usize) -> T {
        let Some(node) = self.slots[position].take() else {
            unreachable!("linked slot {position} is vacant")
        };
        if self.index.is_empty() {
            self.slots.clear();
            self.vacant.clear();
        } else {
            self.vacant.push(position);
        }
        node.element
    }
}

impl<T, S> LinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the set contains `element`.
    ///
    /// Accepts any borrowed form of the value type, so a
    /// `LinkedOrderedSet<String>` can be queried with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(1) average.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position_of(element).is_some()
    }

    /// Void version of [`try_add`](Self::try_add).
    #[inline]
    pub fn add(&mut self, element: T) {
        let _ = self.try_add(element);
    }

    /// Appends `element` if absent and returns `true`.
    ///
    /// If `element` is already present, does nothing and returns `false`; the
    /// existing value keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::collections::LinkedOrderedSet;
    ///
    /// let mut set = LinkedOrderedSet::new();
    /// assert!(set.try_add(20));
    /// assert!(set.try_add(10));
    /// assert!(!set.try_add(20));
    /// assert_eq!(set.values(), vec![20, 10]);
    /// ```
    pub fn try_add(&mut self, element: T) -> bool {
        let hash = self.hasher.hash_one(&element);
        if self.find(hash, &element).is_some() {
            return false;
        }
        let position = self.allocate(element, hash);
        self.link_back(position);
        self.register(hash, position);
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
    /// A move relinks the existing node; the value passed in is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::collections::LinkedOrderedSet;
    ///
    /// let mut set = LinkedOrderedSet::new();
    /// assert!(set.try_add_first(20));
    /// assert!(set.try_add_first(10));
    /// assert!(set.try_add_first(30));
    /// assert!(!set.try_add_first(10));
    /// assert_eq!(set.values(), vec![10, 30, 20]);
    /// ```
    pub fn try_add_first(&mut self, element: T) -> bool {
        let hash = self.hasher.hash_one(&element);
        if let Some(position) = self.find(hash, &element) {
            if self.head != Some(position) {
                self.unlink(position);
                self.link_front(position);
            }
            return false;
        }
        let position = self.allocate(element, hash);
        self.link_front(position);
        self.register(hash, position);
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
        let hash = self.hasher.hash_one(&element);
        if let Some(position) = self.find(hash, &element) {
            if self.tail != Some(position) {
                self.unlink(position);
                self.link_back(position);
            }
            return false;
        }
        let position = self.allocate(element, hash);
        self.link_back(position);
        self.register(hash, position);
        true
    }

    /// Void version of [`try_remove`](Self::try_remove).
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let _ = self.try_remove(element);
    }

    /// Removes `element` if present and returns `true`, otherwise returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::collections::LinkedOrderedSet;
    ///
    /// let mut set = LinkedOrderedSet::from(["20".to_string(), "10".to_string()]);
    /// assert!(set.try_remove("20"));
    /// assert!(!set.try_remove("20"));
    /// assert_eq!(set.values(), vec!["10".to_string()]);
    /// ```
    pub fn try_remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return false;
        }
        let hash = self.hasher.hash_one(element);
        let slots = &self.slots;
        let position = match self
            .index
            .find_entry(hash, |&candidate| holds(slots, candidate, element))
        {
            Ok(entry) => entry.remove().0,
            Err(_) => return false,
        };
        self.unlink(position);
        let _ = self.release(position);
        true
    }

    fn position_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        self.find(self.hasher.hash_one(element), element)
    }

    fn find<Q>(&self, hash: u64, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.index
            .find(hash, |&candidate| holds(&self.slots, candidate, element))
            .copied()
    }

    fn register(&mut self, hash: u64, position: usize) {
        let slots = &self.slots;
        let _ = self
            .index
            .insert_unique(hash, position, |&candidate| cached_hash(slots, candidate));
    }
}

fn holds<T, Q>(slots: &[Slot<T>], position: usize, element: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Eq + ?Sized,
{
    slots[position]
        .as_ref()
        .is_some_and(|node| node.element.borrow() == element)
}

fn cached_hash<T>(slots: &[Slot<T>], position: usize) -> u64 {
    slots[position].as_ref().map_or(0, |node| node.hash)
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the values of a [`LinkedOrderedSet`], in order.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slots = self.slots;
        let node = slots[self.front?].as_ref()?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slots = self.slots;
        let node = slots[self.back?].as_ref()?;
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over the values of a [`LinkedOrderedSet`], in order.
pub struct IntoIter<T, S = DefaultHashBuilder> {
    set: LinkedOrderedSet<T, S>,
}

impl<T, S> Iterator for IntoIter<T, S> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.set.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len(), Some(self.set.len()))
    }
}

impl<T, S> DoubleEndedIterator for IntoIter<T, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.set.pop_last()
    }
}

impl<T, S> ExactSizeIterator for IntoIter<T, S> {
    #[inline]
    fn len(&self) -> usize {
        self.set.len()
    }
}

impl<T, S> FusedIterator for IntoIter<T, S> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for LinkedOrderedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> Extend<T> for LinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T, S> FromIterator<T> for LinkedOrderedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for LinkedOrderedSet<T> {
    /// Builds a set from an array, keeping the first occurrence of each value.
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T: Eq + Hash> From<Vec<T>> for LinkedOrderedSet<T> {
    /// Builds a set from a vector, keeping the first occurrence of each value.
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, S> IntoIterator for LinkedOrderedSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { set: self }
    }
}

impl<'a, T, S> IntoIterator for &'a LinkedOrderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two ordered sets are equal when they hold the same values in the same order.
impl<T: PartialEq, S> PartialEq for LinkedOrderedSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S> Eq for LinkedOrderedSet<T, S> {}

/// Renders a constructor call that rebuilds the set, e.g.
/// `LinkedOrderedSet::from([20, 10, 30])`.
impl<T: fmt::Debug, S> fmt::Debug for LinkedOrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_constructor(formatter, "LinkedOrderedSet", self.iter())
    }
}

/// Renders the values in order as `[20 10 30]`.
impl<T: fmt::Display, S> fmt::Display for LinkedOrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_bracketed(formatter, self.iter())
    }
}

// =============================================================================
// Set Contract
// =============================================================================

impl<T, S> Set<T> for LinkedOrderedSet<T, S>
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

impl<T, S> OrderedSet<T> for LinkedOrderedSet<T, S>
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

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for LinkedOrderedSet<T, S> {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct LinkedOrderedSetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for LinkedOrderedSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = LinkedOrderedSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0);
        let mut set = LinkedOrderedSet::with_capacity_and_hasher(capacity, S::default());
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for LinkedOrderedSet<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedOrderedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
