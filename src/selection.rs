//! Selection sort.
use std::cmp::Ordering;

use crate::compare::{by_key, natural_order};
use crate::{SortOptions, Sorted};

/// Sorts the slice in place in ascending order.
///
/// See [`selection_sort_by`] for algorithm details.
#[inline]
pub fn selection_sort<T: Ord>(target: &mut [T]) {
    selection_sort_by(target, natural_order)
}

/// Performs a [selection sort](https://en.wikipedia.org/wiki/Selection_sort)
/// on the specified slice,
/// using the specified comparison function.
///
/// Always performs a quadratic number of comparisons,
/// but at most `n - 1` swaps.
///
/// This sort is **not** stable.
/// The minimum is swapped into place, which can carry the displaced element
/// past others that compare equal to it.
pub fn selection_sort_by<T, F>(target: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = target.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..len {
            if compare(&target[j], &target[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        target.swap(i, min_index);
    }
}

/// Performs a selection sort on the specified slice,
/// comparing values using the specified key function.
///
/// See [`selection_sort_by`] for algorithm details.
#[inline]
pub fn selection_sort_by_key<T, B, F>(target: &mut [T], func: F)
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    selection_sort_by(target, by_key(func))
}

/// Performs a selection sort according to the specified [`SortOptions`].
///
/// If `options.mutable` is set, the slice itself is sorted and handed back.
/// Otherwise a copy is sorted and returned, and `target` is left untouched.
pub fn selection_sort_with<'a, T, F>(
    target: &'a mut [T],
    compare: F,
    options: SortOptions,
) -> Sorted<'a, T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if options.mutable {
        selection_sort_by(target, compare);
        Sorted::InPlace(target)
    } else {
        let mut copy = target.to_vec();
        selection_sort_by(&mut copy, compare);
        Sorted::Copied(copy)
    }
}
