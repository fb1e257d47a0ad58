//! Error taxonomy for share decoding and secret reconstruction

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised while decoding shares or interpolating a secret
///
/// Every variant is an input-validation failure. None of them is transient,
/// so callers should surface them instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    /// The declared radix is below 2 or could not be parsed
    #[error("invalid base '{base}': base must be an integer >= 2")]
    InvalidBase { base: String },

    /// A character is outside the digit alphabet or not smaller than the base
    #[error("invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    /// Nothing but an optional sign was supplied
    #[error("share value contains no digits")]
    EmptyDigits,

    /// Threshold of zero
    #[error("threshold must be at least 1")]
    InvalidThreshold,

    /// Share index of zero (x = 0 would be the secret itself)
    #[error("share index must be at least 1")]
    InvalidShareIndex,

    /// Fewer points than the threshold requires
    #[error("insufficient points: need {required}, but only {available} available")]
    InsufficientPoints { required: usize, available: usize },

    /// Two selected points share an x-coordinate, so a denominator is zero
    #[error("singular configuration: x-coordinate {x} appears more than once")]
    SingularConfiguration { x: BigInt },

    /// The exact interpolated value at zero is not an integer
    #[error("shares are inconsistent: secret evaluates to {numerator}/{denominator}")]
    NonIntegralSecret {
        numerator: BigInt,
        denominator: BigInt,
    },
}

/// Result alias for core decoding and interpolation
pub type Result<T> = std::result::Result<T, ReconstructError>;
