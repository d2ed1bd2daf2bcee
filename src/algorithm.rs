//! Selecting a sort at runtime.
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{insertion_sort_with, merge_sort_with, selection_sort_with, SortOptions, Sorted};

/// One of the sorting algorithms provided by this crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// See [`insertion_sort_by`](crate::insertion_sort_by)
    Insertion,
    /// See [`selection_sort_by`](crate::selection_sort_by)
    Selection,
    /// See [`merge_sort_by`](crate::merge_sort_by)
    Merge,
}
impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
    ];

    /// The canonical name, as accepted by [`FromStr`]
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
        }
    }
    /// Whether elements that compare equal keep their original relative order
    #[inline]
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Insertion | Algorithm::Merge => true,
            Algorithm::Selection => false,
        }
    }
    /// The options used when the caller doesn't specify any.
    ///
    /// Insertion and selection sort run in place,
    /// while merge sort returns a copy.
    #[inline]
    pub fn default_options(self) -> SortOptions {
        match self {
            Algorithm::Insertion | Algorithm::Selection => SortOptions::IN_PLACE,
            Algorithm::Merge => SortOptions::COPY,
        }
    }
    /// Sort with this algorithm's [default options](Self::default_options)
    #[inline]
    pub fn sort_by<'a, T, F>(self, target: &'a mut [T], compare: F) -> Sorted<'a, T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_with(target, compare, self.default_options())
    }
    pub fn sort_with<'a, T, F>(
        self,
        target: &'a mut [T],
        compare: F,
        options: SortOptions,
    ) -> Sorted<'a, T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Insertion => insertion_sort_with(target, compare, options),
            Algorithm::Selection => selection_sort_with(target, compare, options),
            Algorithm::Merge => merge_sort_with(target, compare, options),
        }
    }
}
impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" | "insertion-sort" | "insert-sort" => Ok(Algorithm::Insertion),
            "selection" | "selection-sort" | "select-sort" => Ok(Algorithm::Selection),
            "merge" | "merge-sort" => Ok(Algorithm::Merge),
            _ => Err(ParseAlgorithmError {
                name: s.to_owned(),
            }),
        }
    }
}

/// Returned when parsing an unknown [`Algorithm`] name
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown sorting algorithm {name:?}")]
pub struct ParseAlgorithmError {
    /// The rejected name
    pub name: String,
}
