//! Configuration validation for reconstruction requests

use anyhow::{Result, bail};

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// A request that needs more shares than it declares can never succeed.
#[derive(Debug, Clone, Copy)]
pub struct ReconstructConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl ReconstructConfig {
    /// Creates a new reconstruction configuration
    ///
    /// # Errors
    /// Returns an error if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recombine::domain::{ReconstructConfig, Threshold, ShareCount};
    ///
    /// // Valid: threshold <= share_count
    /// let config = ReconstructConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(4).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 4);
    ///
    /// // Invalid: threshold > share_count
    /// let result = ReconstructConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if (*threshold as u64) > *share_count {
            bail!(
                "Threshold {} cannot exceed share count {}",
                *threshold,
                *share_count
            );
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
