//! `ShareIndex` newtype for secret reconstruction

use num_bigint::BigInt;

use crate::error::{ReconstructError, Result};

/// Share index (1..)
///
/// The index doubles as the share's x-coordinate on the polynomial.
/// Index 0 is rejected because f(0) is the secret itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u64);

impl ShareIndex {
    /// Smallest valid share index
    pub const MIN: u64 = 1;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`ReconstructError::InvalidShareIndex`] if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recombine::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(6).unwrap();
    /// assert_eq!(*index, 6);
    ///
    /// // Invalid: 0 is the point where the secret lives
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u64) -> Result<Self> {
        if value < Self::MIN {
            return Err(ReconstructError::InvalidShareIndex);
        }
        Ok(Self(value))
    }

    /// The x-coordinate this index stands for
    #[must_use]
    pub fn x(&self) -> BigInt {
        BigInt::from(self.0)
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
