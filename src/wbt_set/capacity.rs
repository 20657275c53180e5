use alloc::collections::TryReserveError;

use super::WbtSet;
use crate::comparator::{Comparator, NaturalOrder};
use crate::raw::RawWbt;

impl<T> WbtSet<T> {
    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set: WbtSet<i32> = WbtSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        WbtSet::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, C> WbtSet<T, C> {
    /// Creates an empty set ordered by `cmp` with room for at least `capacity`
    /// elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        WbtSet {
            tree: RawWbt::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of node slots allocated, whether in use or not.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Tries to make room for at least `additional` more elements.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity overflows or the allocator reports a
    /// failure. The set is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set: WbtSet<u64> = WbtSet::new();
    /// set.try_reserve(10).expect("why is the test harness OOMing on 10 elements?");
    /// assert!(set.capacity() >= 10);
    /// assert!(set.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.tree.try_reserve(additional)
    }
}

impl<T, C: Comparator<T>> WbtSet<T, C> {
    /// Adds a value to the set like [`insert`](Self::insert), but returns an
    /// error instead of aborting if a new node cannot be allocated.
    ///
    /// # Errors
    ///
    /// Returns an error if the allocator reports a failure. `value` is dropped
    /// and the set is unchanged in that case.
    ///
    /// # Panics
    ///
    /// Panics, like [`insert`](Self::insert), if `value` is new and the set
    /// already holds the maximum number of elements the node arena can address.
    /// Running out of handles is not an allocation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set = WbtSet::new();
    /// assert_eq!(set.try_insert(1), Ok(None));
    /// assert_eq!(set.try_insert(1), Ok(Some(1)));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn try_insert(&mut self, value: T) -> Result<Option<T>, TryReserveError> {
        self.tree.try_insert(value, &self.cmp)
    }
}
