use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

/// The output of a sort that was configured with [`SortOptions`](crate::SortOptions).
///
/// A mutable sort hands back the caller's own storage,
/// so `sorted.as_ptr() == input.as_ptr()`.
/// A copying sort hands back a fresh vector and leaves the input as it was.
pub enum Sorted<'a, T> {
    /// The input itself, now sorted
    InPlace(&'a mut [T]),
    /// A sorted copy of the input
    Copied(Vec<T>),
}
impl<'a, T> Sorted<'a, T> {
    /// Determines whether the caller's storage was sorted directly
    #[inline]
    pub fn is_in_place(&self) -> bool {
        matches!(*self, Sorted::InPlace(_))
    }
    /// Convert into an owned vector,
    /// cloning the elements only if they still live in the caller's storage.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Sorted::InPlace(target) => target.to_vec(),
            Sorted::Copied(values) => values,
        }
    }
}
impl<'a, T> Deref for Sorted<'a, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        match *self {
            Sorted::InPlace(ref target) => target,
            Sorted::Copied(ref values) => values,
        }
    }
}
impl<'a, T> DerefMut for Sorted<'a, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        match *self {
            Sorted::InPlace(ref mut target) => target,
            Sorted::Copied(ref mut values) => values,
        }
    }
}
impl<'a, T> AsRef<[T]> for Sorted<'a, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}
impl<'a, T: Debug> Debug for Sorted<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Sorted")
            .field("in_place", &self.is_in_place())
            .field("values", &&**self)
            .finish()
    }
}
