//! Threshold newtype for secret reconstruction

use crate::error::{ReconstructError, Result};

/// Threshold k of a reconstruction (1..)
///
/// Invariant: threshold >= 1 (enforced at construction).
/// The threshold is both the minimum number of shares required and the
/// number of shares actually used; the polynomial has degree k - 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`ReconstructError::InvalidThreshold`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recombine::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // A single share is a constant polynomial
    /// assert!(Threshold::new(1).is_ok());
    ///
    /// // Invalid: at least one share is needed
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(ReconstructError::InvalidThreshold);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
