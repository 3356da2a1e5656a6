//! Sorting and ordering checks for identifier slices.
//!
//! Identifier types implement [`Ord`] by lexicographic byte order, so the
//! generic helpers below work for [`Id`](crate::Id), [`ShortId`](crate::ShortId)
//! and [`NodeId`](crate::NodeId) alike. The `_by` variants take a comparison
//! closure for types ordered some other way.

use std::cmp::Ordering;

/// Sort `items` in place.
pub fn sort<T: Ord>(items: &mut [T]) {
    items.sort_unstable();
}

/// Whether `items` is in non-decreasing order.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    is_sorted_by(items, T::cmp)
}

/// Whether `items` is in strictly increasing order (sorted, no duplicates).
pub fn is_sorted_and_unique<T: Ord>(items: &[T]) -> bool {
    is_sorted_and_unique_by(items, T::cmp)
}

/// [`is_sorted`] with a caller-supplied comparison.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// [`is_sorted_and_unique`] with a caller-supplied comparison.
pub fn is_sorted_and_unique_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) == Ordering::Less)
}

/// Whether the byte strings are in non-decreasing order.
pub fn is_sorted_bytes<B: AsRef<[u8]>>(items: &[B]) -> bool {
    is_sorted_by(items, |a, b| a.as_ref().cmp(b.as_ref()))
}

/// Whether the byte strings are in strictly increasing order.
pub fn is_sorted_and_unique_bytes<B: AsRef<[u8]>>(items: &[B]) -> bool {
    is_sorted_and_unique_by(items, |a, b| a.as_ref().cmp(b.as_ref()))
}
