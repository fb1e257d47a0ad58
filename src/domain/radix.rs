//! `Radix` newtype for share value bases

use std::str::FromStr;

use crate::error::{ReconstructError, Result};

/// Base a share value is written in (2..)
///
/// Digits are `0-9` followed by case-insensitive `a-z`, so every base above
/// 36 accepts the whole alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Minimum valid radix
    pub const MIN: u32 = 2;

    /// Largest radix with a digit for every value (`0-9a-z`)
    pub const ALPHABET_MAX: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns [`ReconstructError::InvalidBase`] if the radix is below 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recombine::domain::Radix;
    ///
    /// let hex = Radix::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Radix::new(1).is_err());
    /// assert!(Radix::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value < Self::MIN {
            return Err(ReconstructError::InvalidBase {
                base: value.to_string(),
            });
        }
        Ok(Self(value))
    }
}

impl FromStr for Radix {
    type Err = ReconstructError;

    /// Parses a decimal base such as `"15"`, tolerating surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s.trim().parse().map_err(|_| ReconstructError::InvalidBase {
            base: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl std::ops::Deref for Radix {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_radix_from_string() {
        assert_eq!(*"10".parse::<Radix>().unwrap(), 10);
        assert_eq!(*" 2 ".parse::<Radix>().unwrap(), 2);
    }

    #[test]
    fn test_parse_radix_rejects_garbage() {
        let err = "ten".parse::<Radix>().unwrap_err();
        assert_eq!(
            err,
            ReconstructError::InvalidBase {
                base: "ten".to_string()
            }
        );
        assert!("-4".parse::<Radix>().is_err());
        assert!("1".parse::<Radix>().is_err());
    }

    #[test]
    fn test_large_radix_is_accepted() {
        assert!(Radix::new(64).is_ok());
    }
}
