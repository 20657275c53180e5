//! A sorted set based on a weight-balanced tree.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::comparator::{Comparator, NaturalOrder};
use crate::raw::{Handle, Link, RawWbt};

mod capacity;
mod order_statistic;

/// A sorted set based on a weight-balanced binary search tree.
///
/// Elements are kept in the order defined by the set's [`Comparator`], and no
/// two stored elements match. Alongside lookup, insertion and removal, the set
/// answers rank queries (see [`get_by_rank`](Self::get_by_rank) and
/// [`rank_of`](Self::rank_of)) in O(log n).
///
/// Unlike `BTreeSet::insert`, [`insert`](Self::insert) replaces a matching
/// element that is already stored. With [`NaturalOrder`] the two are
/// indistinguishable. With a key-only comparator the new payload wins.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element changes while it is in the set. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `WbtSet` that observed it and not result in undefined
/// behavior.
///
/// # Examples
///
/// ```
/// use wbt_set::WbtSet;
///
/// let mut finish_times = WbtSet::new();
///
/// for seconds in [4_012, 3_870, 4_455, 3_991] {
///     finish_times.insert(seconds);
/// }
///
/// // Places are one-based ranks.
/// assert_eq!(finish_times.rank_of(&3_991), Some(2));
/// assert_eq!(finish_times.get_by_rank(1), Some(&3_870));
///
/// // A disqualification moves everyone behind up one place.
/// finish_times.remove(&3_870);
/// assert_eq!(finish_times.rank_of(&3_991), Some(1));
///
/// for seconds in &finish_times {
///     println!("{seconds}");
/// }
/// ```
#[derive(Clone)]
pub struct WbtSet<T, C = NaturalOrder> {
    tree: RawWbt<T>,
    cmp: C,
}

/// An iterator over the elements of a `WbtSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`WbtSet`].
///
/// [`iter`]: WbtSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    tree: &'a RawWbt<T>,
    // Unvisited ancestors on each side; the top is the next element out.
    front: SmallVec<[Handle; 64]>,
    back: SmallVec<[Handle; 64]>,
    remaining: usize,
}

/// An owning iterator over the elements of a `WbtSet`, in ascending order.
///
/// This `struct` is created by the `into_iter` method on [`WbtSet`].
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> WbtSet<T> {
    /// Makes a new, empty `WbtSet` ordered by `T`'s [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set: WbtSet<i32> = WbtSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> WbtSet<T> {
        WbtSet::with_comparator(NaturalOrder)
    }
}

impl<T, C> WbtSet<T, C> {
    /// Makes a new, empty `WbtSet` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::{FnComparator, WbtSet};
    ///
    /// let descending = FnComparator::new(|a: &i32, b: &i32| a == b, |a: &i32, b: &i32| a > b);
    /// let mut set: WbtSet<i32, _> = WbtSet::with_comparator(descending);
    /// set.extend([1, 3, 2]);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        WbtSet {
            tree: RawWbt::new(),
            cmp,
        }
    }

    /// Returns the comparator ordering this set.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut v = WbtSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) - read from the root's subtree size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the set, removing all elements.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Gets an iterator that visits the elements in the `WbtSet` in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set = WbtSet::from([3, 1, 2]);
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.tree)
    }

    /// Calls `f` on every element in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set = WbtSet::from([2, 3, 1]);
    /// let mut seen = Vec::new();
    /// set.for_each_in_order(|x| seen.push(*x));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn for_each_in_order<F: FnMut(&T)>(&self, mut f: F) {
        self.tree.walk(false, &mut f);
    }

    /// Calls `f` on every element in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set = WbtSet::from([2, 3, 1]);
    /// let mut seen = Vec::new();
    /// set.for_each_in_reverse(|x| seen.push(*x));
    /// assert_eq!(seen, [3, 2, 1]);
    /// ```
    pub fn for_each_in_reverse<F: FnMut(&T)>(&self, mut f: F) {
        self.tree.walk(true, &mut f);
    }

    /// Returns the smallest element in the set, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set = WbtSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns the largest element in the set, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Removes and returns the smallest element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set = WbtSet::from([1, 2]);
    /// while let Some(n) = set.pop_first() {
    ///     assert!(set.iter().all(|&k| k > n));
    /// }
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.remove_by_rank(1)
    }

    /// Removes and returns the largest element in the set.
    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.remove_by_rank(self.len())
    }

    /// Retains only the elements specified by the predicate, visiting them in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set: WbtSet<i32> = (1..=6).collect();
    /// set.retain(|&k| k % 2 == 0);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.tree.retain(f);
    }
}

impl<T, C: Comparator<T>> WbtSet<T, C> {
    /// Returns `true` if the set holds an element matching `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set = WbtSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.tree.search(value, &self.cmp, false).node.is_some()
    }

    /// Returns a reference to the stored element matching `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::{FnComparator, WbtSet};
    ///
    /// let by_key = FnComparator::new(|a: &(u8, u8), b: &(u8, u8)| a.0 == b.0, |a: &(u8, u8), b: &(u8, u8)| a.0 < b.0);
    /// let mut set = WbtSet::with_comparator(by_key);
    /// set.insert((1, 100));
    /// assert_eq!(set.get(&(1, 0)), Some(&(1, 100)));
    /// assert_eq!(set.get(&(2, 0)), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get(&self, value: &T) -> Option<&T> {
        self.tree.search(value, &self.cmp, false).node.map(|h| self.tree.element(h))
    }

    /// Adds a value to the set.
    ///
    /// If the set already held a matching element, it is overwritten by `value`
    /// and returned; the set's size and shape do not change. Otherwise `value`
    /// is added as a new element and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set = WbtSet::new();
    ///
    /// assert_eq!(set.insert(2), None);
    /// assert_eq!(set.insert(2), Some(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the set already holds the maximum number of elements the
    /// node arena can address.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> Option<T> {
        self.tree.insert(value, &self.cmp, false).1
    }

    /// Removes the element matching `value` and returns it, if present.
    /// Removing an absent value leaves the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set = WbtSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), Some(2));
    /// assert_eq!(set.remove(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value, &self.cmp, false).map(|(_, element)| element)
    }
}

impl<T: Hash, C> Hash for WbtSet<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T: PartialEq, C> PartialEq for WbtSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for WbtSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for WbtSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Default> Default for WbtSet<T, C> {
    fn default() -> Self {
        WbtSet::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for WbtSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = WbtSet::default();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for WbtSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for WbtSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for WbtSet<T> {
    /// Converts a `[T; N]` into a `WbtSet<T>`. Later duplicates replace earlier ones.
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set1 = WbtSet::from([1, 2, 3, 4]);
    /// let set2: WbtSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T, C> IntoIterator for WbtSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `WbtSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set = WbtSet::from([3, 1, 2, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.tree.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a WbtSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a RawWbt<T>) -> Self {
        let mut iter = Iter {
            tree,
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter.push_right_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut link: Link) {
        while let Some(handle) = link {
            self.front.push(handle);
            link = self.tree.node(handle).left();
        }
    }

    fn push_right_spine(&mut self, mut link: Link) {
        while let Some(handle) = link {
            self.back.push(handle);
            link = self.tree.node(handle).right();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.pop()?;
        self.remaining -= 1;
        self.push_left_spine(self.tree.node(handle).right());
        Some(self.tree.element(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.pop()?;
        self.remaining -= 1;
        self.push_right_spine(self.tree.node(handle).left());
        Some(self.tree.element(handle))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<alloc::vec::Vec<_>>()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}
