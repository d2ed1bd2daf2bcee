//! Options controlling whether a sort mutates its input.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a sort works on the caller's storage or on a copy.
///
/// There's no `Default` impl, since the default depends on the algorithm:
/// insertion and selection sort run [in place](SortOptions::IN_PLACE),
/// while merge sort [copies](SortOptions::COPY).
/// See [`Algorithm::default_options`](crate::Algorithm::default_options).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortOptions {
    /// Sort the input itself and hand it back,
    /// rather than sorting and returning a fresh copy.
    pub mutable: bool,
}
impl SortOptions {
    /// Sort the caller's storage directly
    pub const IN_PLACE: SortOptions = SortOptions { mutable: true };
    /// Leave the input untouched and sort a copy
    pub const COPY: SortOptions = SortOptions { mutable: false };

    #[inline]
    pub const fn mutable(mutable: bool) -> Self {
        SortOptions { mutable }
    }
}
