//! Declarative sort configuration.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Algorithm, SortOptions};

/// Which algorithm to run and whether it may mutate its input.
///
/// Leaving `mutable` unset falls back to the algorithm's
/// [default options](Algorithm::default_options).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortConfig {
    pub algorithm: Algorithm,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub mutable: Option<bool>,
}
impl SortConfig {
    #[inline]
    pub fn new(algorithm: Algorithm) -> Self {
        SortConfig {
            algorithm,
            mutable: None,
        }
    }
    /// Override the algorithm's default mutability
    #[inline]
    pub fn with_mutable(self, mutable: bool) -> Self {
        SortConfig {
            mutable: Some(mutable),
            ..self
        }
    }
    /// Resolve the effective options
    #[inline]
    pub fn options(&self) -> SortOptions {
        match self.mutable {
            Some(mutable) => SortOptions::mutable(mutable),
            None => self.algorithm.default_options(),
        }
    }
}
impl From<Algorithm> for SortConfig {
    #[inline]
    fn from(algorithm: Algorithm) -> Self {
        SortConfig::new(algorithm)
    }
}
