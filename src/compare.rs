//! Comparators shared by every sort in this crate.
//!
//! A comparator is any `FnMut(&T, &T) -> Ordering`.
//! [`Ordering::Less`] means the first argument belongs before the second,
//! [`Ordering::Greater`] means it belongs after.
//!
//! Comparators are never validated.
//! One that isn't a total preorder produces an unspecified order,
//! but the sorts still terminate without panicking.
use std::cmp::Ordering;

/// The default comparator: ascending order according to [`Ord`].
///
/// Structured types without a meaningful [`Ord`] should pass
/// an explicit comparator instead.
#[inline]
pub fn natural_order<T: Ord>(first: &T, second: &T) -> Ordering {
    first.cmp(second)
}

/// Adapts a comparator that returns a signed number into one returning an [`Ordering`].
///
/// Negative values map to [`Ordering::Less`], zero to [`Ordering::Equal`]
/// and positive values to [`Ordering::Greater`].
/// A value that can't be compared against zero (like `NaN`) counts as equal.
///
/// ```
/// use classic_sorts::{compare::from_signed, insertion_sort_by};
///
/// let mut values = [5, 3, 8, 4, 2];
/// insertion_sort_by(&mut values, from_signed(|a: &i32, b: &i32| b - a));
/// assert_eq!(values, [8, 5, 4, 3, 2]);
/// ```
#[inline]
pub fn from_signed<T, N, F>(mut func: F) -> impl FnMut(&T, &T) -> Ordering
where
    N: PartialOrd + Default,
    F: FnMut(&T, &T) -> N,
{
    move |first, second| {
        func(first, second)
            .partial_cmp(&N::default())
            .unwrap_or(Ordering::Equal)
    }
}

/// Orders values by the key extracted with `func`.
#[inline]
pub fn by_key<T, B, F>(mut func: F) -> impl FnMut(&T, &T) -> Ordering
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    move |first, second| func(first).cmp(&func(second))
}
