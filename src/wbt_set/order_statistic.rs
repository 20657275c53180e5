use core::ops::Index;

use super::WbtSet;
use crate::Rank;
use crate::comparator::Comparator;

impl<T, C> WbtSet<T, C> {
    /// Returns the element at one-based position `rank` in sorted order, or
    /// `None` if `rank` is outside `1..=len`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set = WbtSet::from([10, 20, 30]);
    /// assert_eq!(set.get_by_rank(2), Some(&20));
    /// assert!(set.get_by_rank(0).is_none());
    /// assert!(set.get_by_rank(4).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.tree.get_by_rank(rank)
    }

    /// Removes and returns the element at one-based position `rank`, or
    /// returns `None` and leaves the set untouched if `rank` is outside
    /// `1..=len`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set = WbtSet::from([10, 20, 30]);
    /// assert_eq!(set.remove_by_rank(2), Some(20));
    /// assert_eq!(set.remove_by_rank(3), None);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove_by_rank(&mut self, rank: usize) -> Option<T> {
        self.tree.remove_by_rank(rank)
    }
}

impl<T, C: Comparator<T>> WbtSet<T, C> {
    /// Returns the one-based rank of the element matching `value`, or `None` if
    /// there is none.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set = WbtSet::from([10, 20]);
    ///
    /// assert_eq!(set.rank_of(&20), Some(2));
    /// assert_eq!(set.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, value: &T) -> Option<usize> {
        self.get_ranked(value).map(|(rank, _)| rank)
    }

    /// Returns the stored element matching `value` together with its one-based
    /// rank.
    ///
    /// # Panics
    ///
    /// Panics if the tree's internal state is corrupted (should never happen in normal use).
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let set = WbtSet::from(["b", "a", "c"]);
    /// assert_eq!(set.get_ranked(&"c"), Some((3, &"c")));
    /// assert_eq!(set.get_ranked(&"z"), None);
    /// ```
    #[must_use]
    pub fn get_ranked(&self, value: &T) -> Option<(usize, &T)> {
        let found = self.tree.search(value, &self.cmp, true);
        let handle = found.node?;
        let rank = found.rank.expect("`WbtSet::get_ranked()` - rank was not tracked");
        Some((rank, self.tree.element(handle)))
    }

    /// Like [`insert`](Self::insert), and also returns the one-based rank
    /// `value` holds after insertion.
    ///
    /// # Panics
    ///
    /// Panics if the tree's internal state is corrupted (should never happen in normal use).
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set = WbtSet::from([10, 30]);
    /// assert_eq!(set.insert_ranked(20), (2, None));
    /// assert_eq!(set.insert_ranked(30), (3, Some(30)));
    /// ```
    pub fn insert_ranked(&mut self, value: T) -> (usize, Option<T>) {
        let (rank, replaced) = self.tree.insert(value, &self.cmp, true);
        (rank.expect("`WbtSet::insert_ranked()` - rank was not tracked"), replaced)
    }

    /// Like [`remove`](Self::remove), and also returns the one-based rank the
    /// element held before removal.
    ///
    /// # Panics
    ///
    /// Panics if the tree's internal state is corrupted (should never happen in normal use).
    ///
    /// # Examples
    ///
    /// ```
    /// use wbt_set::WbtSet;
    ///
    /// let mut set = WbtSet::from([10, 20, 30]);
    /// assert_eq!(set.remove_ranked(&20), Some((2, 20)));
    /// assert_eq!(set.remove_ranked(&20), None);
    /// ```
    pub fn remove_ranked(&mut self, value: &T) -> Option<(usize, T)> {
        let (rank, element) = self.tree.remove(value, &self.cmp, true)?;
        Some((rank.expect("`WbtSet::remove_ranked()` - rank was not tracked"), element))
    }
}

/// Indexes into the set by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is outside `1..=len`.
///
/// # Examples
///
/// ```
/// use wbt_set::{Rank, WbtSet};
///
/// let set = WbtSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(2)], 20);
/// ```
impl<T, C> Index<Rank> for WbtSet<T, C> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
