//! Reader/writer-locked ordered set.
//!
//! This module provides the `GuardedOrderedSet<T>` type, a
//! concurrency-safe wrapper around
//! [`OrderedSet`](crate::collection::OrderedSet). Any number of caller
//! threads may invoke operations on the same instance concurrently and
//! observe a consistent, linearizable view.
//!
//! # Locking Discipline
//!
//! A single reader/writer lock guards the entire collection:
//!
//! - **Shared mode**: `contains`, `contains_slice`, `len`, `is_empty`,
//!   `first_sorted`, `last_sorted`, `to_sorted_vec`. Multiple readers
//!   may hold the lock concurrently.
//! - **Exclusive mode**: `insert`, `insert_slice`, `remove`,
//!   `remove_slice`, `clear`. Exactly one holder at a time, excluding
//!   all readers and writers.
//!
//! Every operation acquires the lock for its entire duration and
//! releases it on every exit path; the RAII guard makes holding the
//! lock past a return structurally impossible. Batch operations take
//! the lock once for the whole batch, so a batch is observed by other
//! threads as a single atomic unit: a concurrent reader never sees a
//! partially-applied batch.
//!
//! Operations from different threads interleave only at
//! lock-acquisition boundaries, never mid-operation. Blocking, if any,
//! happens only on lock acquisition; once acquired, every operation
//! runs to completion.
//!
//! # Examples
//!
//! ```rust
//! use guardset::sync::GuardedOrderedSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(GuardedOrderedSet::from_slice(&[10, 20]));
//!
//! let writer = {
//!     let set = Arc::clone(&set);
//!     thread::spawn(move || set.insert_slice(&[30, 40, 30]))
//! };
//!
//! assert_eq!(writer.join().unwrap(), vec![true, true, false]);
//! assert_eq!(set.to_sorted_vec(), vec![10, 20, 30, 40]);
//! ```

use parking_lot::RwLock;
use std::borrow::Borrow;

use crate::collection::OrderedSet;

/// A concurrency-safe ordered set.
///
/// `GuardedOrderedSet<T>` owns an [`OrderedSet`] behind a
/// reader/writer lock, exclusively; no other component can reach the
/// collection except through the wrapper's own operations. All
/// methods take `&self`, so a single instance can be shared across
/// threads (typically via `Arc`) and mutated from any of them.
///
/// Like the underlying collection, the API is total: "already
/// present", "not found", and "empty" are ordinary outcomes reported
/// as `bool` or empty results, never errors.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Ord`.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync` when `T: Send + Sync`; both are
/// derived structurally from the lock type. Concurrent operations
/// behave as if executed in some sequential order consistent with each
/// thread's own program order.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use guardset::sync::GuardedOrderedSet;
///
/// let set = GuardedOrderedSet::new();
/// assert!(set.insert(2));
/// assert!(set.insert(1));
/// assert!(!set.insert(2)); // duplicate
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.to_sorted_vec(), vec![1, 2]);
/// ```
///
/// ## Concurrent Access
///
/// ```rust
/// use guardset::sync::GuardedOrderedSet;
/// use std::sync::Arc;
/// use std::thread;
///
/// let set = Arc::new(GuardedOrderedSet::new());
///
/// // Each thread inserts a disjoint range under one lock acquisition
/// let handles: Vec<_> = (0..4)
///     .map(|index| {
///         let set = Arc::clone(&set);
///         thread::spawn(move || {
///             let batch: Vec<i32> = (index * 10..index * 10 + 10).collect();
///             set.insert_slice(&batch)
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap().into_iter().all(|inserted| inserted));
/// }
///
/// assert_eq!(set.len(), 40);
/// ```
pub struct GuardedOrderedSet<T: Ord> {
    collection: RwLock<OrderedSet<T>>,
}

impl<T: Ord> GuardedOrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set: GuardedOrderedSet<i32> = GuardedOrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collection: RwLock::new(OrderedSet::new()),
        }
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was not already present and has
    /// been inserted, `false` if it was already present (no-op).
    ///
    /// Acquires the lock in exclusive mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::new();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42));
    /// ```
    pub fn insert(&self, element: T) -> bool {
        self.collection.write().insert(element)
    }

    /// Inserts every element of a slice under a single lock
    /// acquisition.
    ///
    /// Elements are applied left to right; the result has the same
    /// length and index correspondence as the input, and `result[i]`
    /// reflects whether `elements[i]` was newly inserted at the time of
    /// its own application. A duplicate earlier in the slice therefore
    /// makes a later identical value report `false`.
    ///
    /// Because the whole batch runs under one exclusive acquisition,
    /// no other thread's operation can interleave mid-batch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::new();
    /// assert_eq!(
    ///     set.insert_slice(&[3, 1, 2, 1]),
    ///     vec![true, true, true, false]
    /// );
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn insert_slice(&self, elements: &[T]) -> Vec<bool>
    where
        T: Clone,
    {
        self.collection.write().insert_slice(elements)
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// Supports borrowed forms of the element type through the
    /// `Borrow` trait, so a `GuardedOrderedSet<String>` can be queried
    /// with `&str` directly.
    ///
    /// Acquires the lock in shared mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[1, 2]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&3));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.collection.read().contains(element)
    }

    /// Checks membership for every element of a slice under a single
    /// lock acquisition.
    ///
    /// Returns one `bool` per input element, in input order. The set is
    /// not mutated, and no writer can interleave mid-batch, so the
    /// results form a consistent point-in-time view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[1, 2]);
    /// assert_eq!(set.contains_slice(&[1, 3, 2]), vec![true, false, true]);
    /// ```
    #[must_use]
    pub fn contains_slice(&self, elements: &[T]) -> Vec<bool> {
        self.collection.read().contains_slice(elements)
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present and has been removed,
    /// `false` if it was absent (no-op).
    ///
    /// Acquires the lock in exclusive mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[1, 2]);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.collection.write().remove(element)
    }

    /// Removes every element of a slice under a single lock
    /// acquisition.
    ///
    /// Elements are applied left to right; duplicates within the slice
    /// after the first removal report `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&["a"]);
    /// assert_eq!(set.remove_slice(&["a", "a"]), vec![true, false]);
    /// ```
    pub fn remove_slice(&self, elements: &[T]) -> Vec<bool> {
        self.collection.write().remove_slice(elements)
    }

    /// Returns the number of elements in the set.
    ///
    /// Acquires the lock in shared mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[1, 2, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.read().len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// Acquires the lock in shared mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set: GuardedOrderedSet<i32> = GuardedOrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.read().is_empty()
    }

    /// Removes all elements from the set.
    ///
    /// Acquires the lock in exclusive mode; `len()` is 0 immediately
    /// after return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[1, 2, 3]);
    /// set.clear();
    /// assert_eq!(set.len(), 0);
    /// assert!(set.to_sorted_vec().is_empty());
    /// ```
    pub fn clear(&self) {
        self.collection.write().clear();
    }

    /// Consumes the wrapper and returns the underlying collection.
    ///
    /// No lock is needed: ownership proves no other thread can hold a
    /// reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[2, 1]);
    /// let inner = set.into_inner();
    /// assert_eq!(inner.to_sorted_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn into_inner(self) -> OrderedSet<T> {
        self.collection.into_inner()
    }
}

impl<T: Clone + Ord> GuardedOrderedSet<T> {
    /// Creates a set pre-populated with the unique elements of a
    /// slice.
    ///
    /// Duplicate inputs collapse to one stored element. An empty input
    /// slice is valid and yields an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&["b", "a", "a"]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.to_sorted_vec(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        Self {
            collection: RwLock::new(OrderedSet::from_slice(elements)),
        }
    }

    /// Returns a clone of the smallest element, or `None` if the set
    /// is empty.
    ///
    /// The element is cloned out so that no reference outlives the
    /// shared lock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[3, 1, 2]);
    /// assert_eq!(set.first_sorted(), Some(1));
    /// ```
    #[must_use]
    pub fn first_sorted(&self) -> Option<T> {
        self.collection.read().first_sorted().cloned()
    }

    /// Returns a clone of the largest element, or `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[3, 1, 2]);
    /// assert_eq!(set.last_sorted(), Some(3));
    /// ```
    #[must_use]
    pub fn last_sorted(&self) -> Option<T> {
        self.collection.read().last_sorted().cloned()
    }

    /// Returns a snapshot of all current elements in sorted order.
    ///
    /// The snapshot shares no storage with the live collection, so it
    /// is safe to use after the lock is released: later mutation of
    /// the set cannot affect it.
    ///
    /// Acquires the lock in shared mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guardset::sync::GuardedOrderedSet;
    ///
    /// let set = GuardedOrderedSet::from_slice(&[3, 1, 2]);
    /// let snapshot = set.to_sorted_vec();
    ///
    /// set.clear();
    /// assert_eq!(snapshot, vec![1, 2, 3]); // snapshot is unaffected
    /// ```
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.collection.read().to_sorted_vec()
    }
}

impl<T: Ord> Default for GuardedOrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<OrderedSet<T>> for GuardedOrderedSet<T> {
    /// Wraps an existing collection, taking exclusive ownership of it.
    #[inline]
    fn from(collection: OrderedSet<T>) -> Self {
        Self {
            collection: RwLock::new(collection),
        }
    }
}

impl<T: Ord> FromIterator<T> for GuardedOrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<OrderedSet<T>>())
    }
}

impl<T: Ord + std::fmt::Debug> std::fmt::Debug for GuardedOrderedSet<T> {
    /// Renders the current elements in sorted order under a shared
    /// lock.
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.collection.read();
        formatter.debug_set().entries(guard.iter_sorted()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Ord> serde::Serialize for GuardedOrderedSet<T> {
    /// Serializes the current elements as a sorted sequence under a
    /// shared lock.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let guard = self.collection.read();
        serde::Serialize::serialize(&*guard, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for GuardedOrderedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let collection = <OrderedSet<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(collection))
    }
}

// =============================================================================
// Tests
// =============================================================================
