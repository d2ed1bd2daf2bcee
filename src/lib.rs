//! Classic comparison sorts: insertion, selection and merge sort.
//!
//! Every sort takes a comparator of the form `FnMut(&T, &T) -> Ordering`,
//! with [`natural_order`](compare::natural_order) as the default
//! (see the `insertion_sort`/`selection_sort`/`merge_sort` shorthands).
//!
//! The plain functions follow each algorithm's natural mode:
//! [`insertion_sort_by`] and [`selection_sort_by`] sort a slice in place,
//! while [`merge_sort_by`] returns a sorted copy and leaves its input alone.
//! The `*_with` variants take explicit [`SortOptions`] and return a [`Sorted`],
//! which is either the caller's own storage or a fresh copy.
//!
//! | Algorithm | Default mode | Stable | Comparisons |
//! |-----------|--------------|--------|-------------|
//! | insertion | in place     | yes    | `O(n^2)`, `O(n)` if already sorted |
//! | selection | in place     | no     | `O(n^2)` always |
//! | merge     | copy         | yes    | `O(n log n)` always |
//!
//! ```
//! use classic_sorts::{insertion_sort_with, merge_sort_with, SortOptions};
//! use classic_sorts::compare::natural_order;
//!
//! let mut values = vec![4, 2, 3, 1];
//! let sorted = merge_sort_with(&mut values, natural_order, SortOptions::COPY);
//! assert_eq!(*sorted, [1, 2, 3, 4]);
//! assert_eq!(values, [4, 2, 3, 1]);
//!
//! let sorted = insertion_sort_with(&mut values, natural_order, SortOptions::IN_PLACE);
//! assert!(sorted.is_in_place());
//! assert_eq!(values, [1, 2, 3, 4]);
//! ```
//!
//! None of the sorts can fail.
//! A comparator that isn't a total preorder gives an unspecified order,
//! but never a panic or an infinite loop.

mod algorithm;
pub mod compare;
mod config;
mod insertion;
mod merge;
mod options;
mod selection;
mod sorted;

pub use self::algorithm::{Algorithm, ParseAlgorithmError};
pub use self::config::SortConfig;
pub use self::insertion::{
    insertion_sort, insertion_sort_by, insertion_sort_by_key, insertion_sort_with,
};
pub use self::merge::{
    merge_sort, merge_sort_by, merge_sort_by_key, merge_sort_in_place_by, merge_sort_with,
    merge_sorted_vec,
};
pub use self::options::SortOptions;
pub use self::selection::{
    selection_sort, selection_sort_by, selection_sort_by_key, selection_sort_with,
};
pub use self::sorted::Sorted;
