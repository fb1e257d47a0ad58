//! Lagrange interpolation at x = 0
//!
//! Given k points with distinct x-coordinates, the unique polynomial of degree
//! at most k - 1 through them has constant term
//!
//! ```text
//! f(0) = sum_i  y_i * prod_{j != i} (-x_j) / prod_{j != i} (x_i - x_j)
//! ```
//!
//! Two evaluation modes are offered, see [`InterpolationMode`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::domain::Threshold;
use crate::error::{ReconstructError, Result};

/// A decoded share: x-coordinate and exact y-value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

/// How the Lagrange terms are divided and summed
///
/// `Exact` keeps each term as a reduced fraction and only requires the final
/// sum to be integral. `Truncating` divides every term on its own, rounding
/// toward zero, which is wrong whenever a single term is fractional but is
/// kept to reproduce existing golden outputs bit-for-bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    #[default]
    Exact,
    Truncating,
}

impl InterpolationMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Truncating => "truncating",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "truncating" | "truncate" => Ok(Self::Truncating),
            other => Err(format!(
                "unknown interpolation mode '{other}' (expected 'exact' or 'truncating')"
            )),
        }
    }
}

/// Fails with [`ReconstructError::SingularConfiguration`] on a repeated x
fn ensure_distinct<'a>(xs: impl IntoIterator<Item = &'a BigInt>) -> Result<()> {
    let mut seen = HashSet::new();
    for x in xs {
        if !seen.insert(x) {
            return Err(ReconstructError::SingularConfiguration { x: x.clone() });
        }
    }
    Ok(())
}

/// Numerator and denominator of the i-th Lagrange basis polynomial at zero
///
/// Caller guarantees the x-coordinates are distinct, so the denominator is non-zero.
fn basis_at_zero(xs: &[&BigInt], i: usize) -> (BigInt, BigInt) {
    let xi = xs[i];
    xs.iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold((BigInt::one(), BigInt::one()), |(num, den), (_, &xj)| {
            (num * -xj, den * (xi - xj))
        })
}

/// Exact Lagrange weights L_i(0) for the given x-coordinates
///
/// For any polynomial f of degree < `xs.len()`, `f(0) = sum_i L_i(0) * f(x_i)`.
///
/// # Errors
/// Returns [`ReconstructError::SingularConfiguration`] if an x-coordinate repeats
pub fn lagrange_coefficients_at_zero(xs: &[BigInt]) -> Result<Vec<BigRational>> {
    ensure_distinct(xs)?;
    let refs: Vec<&BigInt> = xs.iter().collect();
    Ok((0..refs.len())
        .map(|i| {
            let (num, den) = basis_at_zero(&refs, i);
            BigRational::new(num, den)
        })
        .collect())
}

/// Computes f(0) from the first `k` points, in the order supplied
///
/// # Errors
/// - [`ReconstructError::InsufficientPoints`] if fewer than `k` points are given
/// - [`ReconstructError::SingularConfiguration`] if two selected points share an x
/// - [`ReconstructError::NonIntegralSecret`] in exact mode when the result is a
///   proper fraction
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use recombine::domain::Threshold;
/// use recombine::interpolation::{interpolate, InterpolationMode, Point};
///
/// let points = [Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
/// let k = Threshold::new(3).unwrap();
///
/// let secret = interpolate(&points, k, InterpolationMode::Exact).unwrap();
/// assert_eq!(secret, BigInt::from(3));
/// ```
pub fn interpolate(points: &[Point], k: Threshold, mode: InterpolationMode) -> Result<BigInt> {
    let required = *k;
    if points.len() < required {
        return Err(ReconstructError::InsufficientPoints {
            required,
            available: points.len(),
        });
    }

    let selected = &points[..required];
    match mode {
        InterpolationMode::Exact => interpolate_exact(selected),
        InterpolationMode::Truncating => interpolate_truncating(selected),
    }
}

fn interpolate_exact(points: &[Point]) -> Result<BigInt> {
    let xs: Vec<BigInt> = points.iter().map(|p| p.x.clone()).collect();
    let weights = lagrange_coefficients_at_zero(&xs)?;

    let sum = points
        .iter()
        .zip(weights)
        .fold(BigRational::zero(), |acc, (point, weight)| {
            acc + weight * BigRational::from_integer(point.y.clone())
        });

    if sum.is_integer() {
        Ok(sum.to_integer())
    } else {
        let (numerator, denominator) = sum.into_raw();
        Err(ReconstructError::NonIntegralSecret {
            numerator,
            denominator,
        })
    }
}

fn interpolate_truncating(points: &[Point]) -> Result<BigInt> {
    ensure_distinct(points.iter().map(|p| &p.x))?;
    let xs: Vec<&BigInt> = points.iter().map(|p| &p.x).collect();

    // BigInt division rounds toward zero
    Ok(points
        .iter()
        .enumerate()
        .fold(BigInt::zero(), |acc, (i, point)| {
            let (num, den) = basis_at_zero(&xs, i);
            acc + (&point.y * num) / den
        }))
}
