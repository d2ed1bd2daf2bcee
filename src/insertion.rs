//! Insertion sort.
use std::cmp::Ordering;

use crate::compare::{by_key, natural_order};
use crate::{SortOptions, Sorted};

/// Sorts the slice in place in ascending order.
///
/// See [`insertion_sort_by`] for algorithm details.
#[inline]
pub fn insertion_sort<T: Ord>(target: &mut [T]) {
    insertion_sort_by(target, natural_order)
}

/// Performs an [insertion sort](https://en.wikipedia.org/wiki/Insertion_sort)
/// on the specified slice,
/// using the specified comparison function.
///
/// This sort is stable: an element is only shifted past its predecessor
/// when the comparator says the predecessor is strictly [`Ordering::Greater`].
///
/// Unfortunately, this algorithm has quadratic worst-case complexity,
/// and is much slower than mergesort for large inputs.
/// It should only be used if the input is small or already mostly sorted,
/// where it approaches linear time.
pub fn insertion_sort_by<T, F>(target: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..target.len() {
        /*
         * Find the gap for `target[i]` by walking back over every
         * strictly greater element, then rotate the key into the gap.
         * The rotation shifts `target[j..i]` one place to the right.
         */
        let mut j = i;
        while j > 0 && compare(&target[j - 1], &target[i]) == Ordering::Greater {
            j -= 1;
        }
        if j != i {
            target[j..=i].rotate_right(1);
        }
    }
}

/// Performs an insertion sort on the specified slice,
/// comparing values using the specified key function.
///
/// See [`insertion_sort_by`] for algorithm details.
#[inline]
pub fn insertion_sort_by_key<T, B, F>(target: &mut [T], func: F)
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    insertion_sort_by(target, by_key(func))
}

/// Performs an insertion sort according to the specified [`SortOptions`].
///
/// If `options.mutable` is set, the slice itself is sorted and handed back.
/// Otherwise a copy is sorted and returned, and `target` is left untouched.
pub fn insertion_sort_with<'a, T, F>(
    target: &'a mut [T],
    compare: F,
    options: SortOptions,
) -> Sorted<'a, T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if options.mutable {
        insertion_sort_by(target, compare);
        Sorted::InPlace(target)
    } else {
        let mut copy = target.to_vec();
        insertion_sort_by(&mut copy, compare);
        Sorted::Copied(copy)
    }
}
