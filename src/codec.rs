//! Positional decoding of share values written in arbitrary bases
//!
//! Each share carries its y-value as a digit string together with the radix it
//! was written in. This module turns those strings into exact [`BigInt`]s.
//!
//! # Overview
//!
//! - Digits are `0-9` followed by `a-z`, case-insensitive (`a` = 10, `z` = 35)
//! - An optional leading `+` or `-` sign is accepted
//! - Accumulation is `result * base + digit`, left to right, on arbitrary-precision
//!   integers, so values far beyond 128 bits decode without loss
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use recombine::codec::{decode, encode};
//! use recombine::domain::Radix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Radix::new(2)?;
//! assert_eq!(decode("111", base)?, BigInt::from(7));
//!
//! let base = Radix::new(15)?;
//! let value = decode("aed7015a346d63", base)?;
//! assert_eq!(value, "21394886326566393".parse::<BigInt>()?);
//! assert_eq!(encode(&value, base)?, "aed7015a346d63");
//! # Ok(())
//! # }
//! ```

use num_bigint::BigInt;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::domain::{Radix, ShareIndex};
use crate::error::{ReconstructError, Result};
use crate::interpolation::Point;

/// A single share as received: index, base and the encoded value
///
/// The digit string is wrapped in `Zeroizing` so it is wiped on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: ShareIndex,
    base: Radix,
    digits: Zeroizing<String>,
}

impl Share {
    /// Creates a share record without decoding it
    pub fn new(index: ShareIndex, base: Radix, digits: impl Into<String>) -> Self {
        Self {
            index,
            base,
            digits: Zeroizing::new(digits.into()),
        }
    }

    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    #[must_use]
    pub fn base(&self) -> Radix {
        self.base
    }

    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Decodes the share into the point `(index, value)`
    ///
    /// # Errors
    /// Returns an error if the digit string is not valid in the share's base
    pub fn to_point(&self) -> Result<Point> {
        Ok(Point::new(self.index.x(), decode(&self.digits, self.base)?))
    }
}

/// Value of a single digit character, if it belongs to the alphabet
fn digit_value(ch: char) -> Option<u32> {
    ch.to_digit(Radix::ALPHABET_MAX)
}

/// Decodes a digit string written in `base` into its exact integer value
///
/// # Errors
/// Returns [`ReconstructError::InvalidDigit`] for a character outside the
/// alphabet or not smaller than `base`, and [`ReconstructError::EmptyDigits`]
/// if no digits follow the optional sign
pub fn decode(digits: &str, base: Radix) -> Result<BigInt> {
    let (negative, body, offset) = if let Some(rest) = digits.strip_prefix('-') {
        (true, rest, 1)
    } else if let Some(rest) = digits.strip_prefix('+') {
        (false, rest, 1)
    } else {
        (false, digits, 0)
    };

    if body.is_empty() {
        return Err(ReconstructError::EmptyDigits);
    }

    let radix = *base;
    let mut result = BigInt::zero();
    for (position, ch) in body.chars().enumerate() {
        let value = digit_value(ch)
            .filter(|&v| v < radix)
            .ok_or(ReconstructError::InvalidDigit {
                digit: ch,
                position: position + offset,
                base: radix,
            })?;
        result = result * radix + value;
    }

    Ok(if negative { -result } else { result })
}

/// Renders `value` in `base` using lowercase digits
///
/// Inverse of [`decode`] up to leading zeros and letter case.
///
/// # Errors
/// Returns [`ReconstructError::InvalidBase`] for bases above 36, which have
/// no digit alphabet to render with
pub fn encode(value: &BigInt, base: Radix) -> Result<String> {
    if *base > Radix::ALPHABET_MAX {
        return Err(ReconstructError::InvalidBase {
            base: base.to_string(),
        });
    }
    Ok(value.to_str_radix(*base))
}
