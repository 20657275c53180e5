//! How a [`WbtSet`](crate::WbtSet) decides that two elements are the same, or
//! that one comes first.

use core::fmt;

/// Equality and strict ordering over set elements.
///
/// The set calls both predicates with the probe first and the stored element
/// second. Implementations must agree with each other: for any `a` and `b`,
/// exactly one of `is_match(a, b)`, `is_less(a, b)` and `is_less(b, a)` holds.
/// Breaking that is a logic error. The set stays memory safe, but lookups may
/// miss and ordering may be wrong.
///
/// Matching may look at less than the whole element. A comparator that only
/// inspects the key of a `(key, payload)` pair turns the set into a map, where
/// inserting an existing key overwrites the payload.
pub trait Comparator<T> {
    /// Returns `true` if `a` and `b` name the same set member.
    fn is_match(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if `a` sorts strictly before `b`.
    fn is_less(&self, a: &T, b: &T) -> bool;
}

/// The element type's own [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn is_match(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn is_less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// A comparator built from a pair of closures.
///
/// # Examples
///
/// ```
/// use wbt_set::{FnComparator, WbtSet};
///
/// // Order scores by key, ignoring the payload.
/// let by_key = FnComparator::new(
///     |a: &(u32, &str), b: &(u32, &str)| a.0 == b.0,
///     |a: &(u32, &str), b: &(u32, &str)| a.0 < b.0,
/// );
/// let mut scores = WbtSet::with_comparator(by_key);
/// scores.insert((7, "seven"));
/// assert_eq!(scores.insert((7, "SEVEN")), Some((7, "seven")));
/// assert_eq!(scores.len(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<M, L> {
    is_match: M,
    is_less: L,
}

impl<M, L> FnComparator<M, L> {
    pub const fn new(is_match: M, is_less: L) -> Self {
        Self {
            is_match,
            is_less,
        }
    }
}

impl<T, M, L> Comparator<T> for FnComparator<M, L>
where
    M: Fn(&T, &T) -> bool,
    L: Fn(&T, &T) -> bool,
{
    #[inline]
    fn is_match(&self, a: &T, b: &T) -> bool {
        (self.is_match)(a, b)
    }

    #[inline]
    fn is_less(&self, a: &T, b: &T) -> bool {
        (self.is_less)(a, b)
    }
}

impl<M, L> fmt::Debug for FnComparator<M, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<T, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    #[inline]
    fn is_match(&self, a: &T, b: &T) -> bool {
        (**self).is_match(a, b)
    }

    #[inline]
    fn is_less(&self, a: &T, b: &T) -> bool {
        (**self).is_less(a, b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn natural_order_follows_ord() {
        assert!(NaturalOrder.is_match(&3, &3));
        assert!(NaturalOrder.is_less(&2, &3));
        assert!(!NaturalOrder.is_less(&3, &3));
        assert!(!NaturalOrder.is_less(&"b", &"a"));
    }

    #[test]
    fn closures_can_reverse_the_order() {
        let reversed = FnComparator::new(|a: &i32, b: &i32| a == b, |a: &i32, b: &i32| a > b);
        assert!(reversed.is_less(&5, &1));
        assert!(!reversed.is_match(&5, &1));
        assert!((&reversed).is_less(&5, &1));
    }
}
