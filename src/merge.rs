//! Top-down merge sort.
use std::cmp::Ordering;

use crate::compare::{by_key, natural_order};
use crate::{SortOptions, Sorted};

/// Returns a sorted copy of the slice in ascending order.
///
/// See [`merge_sort_by`] for algorithm details.
#[inline]
pub fn merge_sort<T: Ord + Clone>(target: &[T]) -> Vec<T> {
    merge_sort_by(target, natural_order)
}

/// Performs a [merge sort](https://en.wikipedia.org/wiki/Merge_sort)
/// on a copy of the specified slice,
/// using the specified comparison function.
///
/// The input is never modified.
/// This sort is stable and always takes `O(n log n)` comparisons,
/// using `O(n)` auxiliary memory.
#[inline]
pub fn merge_sort_by<T, F>(target: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sorted_vec(target.to_vec(), &mut compare)
}

/// Returns a sorted copy of the slice,
/// comparing values using the specified key function.
///
/// See [`merge_sort_by`] for algorithm details.
#[inline]
pub fn merge_sort_by_key<T, B, F>(target: &[T], func: F) -> Vec<T>
where
    T: Clone,
    B: Ord,
    F: FnMut(&T) -> B,
{
    merge_sort_by(target, by_key(func))
}

/// Merge sorts the slice, then moves the merged result back into
/// the slice's own storage.
///
/// The recursion still works on owned intermediate buffers.
/// Only the final merged sequence is written back.
pub fn merge_sort_in_place_by<T, F>(target: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let merged = merge_sort_by(target, compare);
    debug_assert_eq!(merged.len(), target.len());
    for (slot, value) in target.iter_mut().zip(merged) {
        *slot = value;
    }
}

/// Performs a merge sort according to the specified [`SortOptions`].
///
/// Unlike the other sorts, merge sort is usually run with [`SortOptions::COPY`].
/// If `options.mutable` is set the merged result is copied back into `target`,
/// which is then handed back.
pub fn merge_sort_with<'a, T, F>(
    target: &'a mut [T],
    compare: F,
    options: SortOptions,
) -> Sorted<'a, T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if options.mutable {
        merge_sort_in_place_by(target, compare);
        Sorted::InPlace(target)
    } else {
        Sorted::Copied(merge_sort_by(target, compare))
    }
}

/// Merge sorts an owned vector, reusing its elements without cloning.
///
/// The vector is split at `len / 2`,
/// so on odd lengths the right half receives the extra element.
pub fn merge_sorted_vec<T, F>(mut values: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if values.len() <= 1 {
        return values;
    }
    let right = values.split_off(values.len() / 2);
    let left = merge_sorted_vec(values, compare);
    let right = merge_sorted_vec(right, compare);
    merge(left, right, compare)
}

/// Merge two sorted runs.
///
/// Ties are taken from `left`, which keeps the sort stable
/// since `left` always originates earlier in the input.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(first), Some(second)) => compare(first, second) != Ordering::Greater,
            _ => break,
        };
        result.extend(if take_left { left.next() } else { right.next() });
    }
    // At most one of these is non-empty
    result.extend(left);
    result.extend(right);
    result
}
