//! Property tests for Lagrange interpolation

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_traits::Zero;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use recombine::ReconstructError;
use recombine::codec::{Share, encode};
use recombine::commands::reconstruct_secret;
use recombine::domain::{Radix, ShareIndex, Threshold};
use recombine::interpolation::{InterpolationMode, Point, interpolate};

/// Integer polynomial of degree k - 1 and k distinct sample coordinates
#[derive(Clone, Debug)]
struct SampledPolynomial {
    coefficients: Vec<i64>,
    xs: Vec<i64>,
}

impl Arbitrary for SampledPolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        // Threshold between 1 and 8 (keep it reasonable for testing)
        let k = (usize::arbitrary(g) % 8) + 1;
        let coefficients = (0..k).map(|_| i64::from(i32::arbitrary(g))).collect();

        let mut seen = BTreeSet::new();
        let mut xs = Vec::with_capacity(k);
        while xs.len() < k {
            let x = i64::from(i16::arbitrary(g));
            if x != 0 && seen.insert(x) {
                xs.push(x);
            }
        }

        SampledPolynomial { coefficients, xs }
    }
}

impl SampledPolynomial {
    fn threshold(&self) -> Threshold {
        Threshold::new(self.coefficients.len()).unwrap()
    }

    fn evaluate(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, &c| acc * &x + c)
    }

    fn points(&self) -> Vec<Point> {
        self.xs
            .iter()
            .map(|&x| Point::new(x, self.evaluate(x)))
            .collect()
    }
}

/// Sampling then interpolating recovers the constant term exactly
#[quickcheck]
fn prop_recovers_constant_term(poly: SampledPolynomial) -> bool {
    let Ok(secret) = interpolate(&poly.points(), poly.threshold(), InterpolationMode::Exact)
    else {
        return false;
    };
    secret == BigInt::from(poly.coefficients[0])
}

/// Exact mode does not depend on the order of the selected points
#[quickcheck]
fn prop_exact_is_order_invariant(poly: SampledPolynomial, rotation: usize, flip: bool) -> bool {
    let original = poly.points();
    let mut shuffled = original.clone();
    let len = shuffled.len();
    shuffled.rotate_left(rotation % len);
    if flip {
        shuffled.reverse();
    }

    let k = poly.threshold();
    interpolate(&original, k, InterpolationMode::Exact).ok()
        == interpolate(&shuffled, k, InterpolationMode::Exact).ok()
}

/// With consecutive indices 1..=k every term is integral, so both modes agree
#[quickcheck]
fn prop_modes_agree_on_consecutive_indices(poly: SampledPolynomial) -> bool {
    let k = poly.coefficients.len();
    let points: Vec<Point> = (1..=k as i64)
        .map(|x| Point::new(x, poly.evaluate(x)))
        .collect();
    let threshold = poly.threshold();

    let exact = interpolate(&points, threshold, InterpolationMode::Exact).ok();
    let truncated = interpolate(&points, threshold, InterpolationMode::Truncating).ok();
    exact.is_some() && exact == truncated
}

/// A single point is returned unchanged
#[quickcheck]
fn prop_single_point_identity(x: i64, y: i64) -> bool {
    let points = [Point::new(x, y)];
    let k = Threshold::new(1).unwrap();
    [InterpolationMode::Exact, InterpolationMode::Truncating]
        .into_iter()
        .all(|mode| interpolate(&points, k, mode).ok() == Some(BigInt::from(y)))
}

/// Repeating a selected x-coordinate is always singular
#[quickcheck]
fn prop_duplicate_x_is_singular(poly: SampledPolynomial, pick: usize) -> bool {
    let mut points = poly.points();
    let duplicate = points[pick % points.len()].clone();
    points.push(duplicate);
    let k = Threshold::new(points.len()).unwrap();

    matches!(
        interpolate(&points, k, InterpolationMode::Exact),
        Err(ReconstructError::SingularConfiguration { .. })
    )
}

/// Full pipeline: encode samples in random bases, supply extra shares, recover
#[quickcheck]
fn prop_reconstruct_from_encoded_shares(poly: SampledPolynomial, bases: Vec<u8>) -> bool {
    let k = poly.coefficients.len();
    // Indices 1..=k+2; the two highest are noise and must be ignored
    let mut shares: Vec<Share> = (1..=k as u64 + 2)
        .map(|i| {
            let base = bases.get(i as usize).map_or(10, |&b| u32::from(b) % 35 + 2);
            let radix = Radix::new(base).unwrap();
            let y = if i as usize > k {
                BigInt::from(i * 1_000_003)
            } else {
                poly.evaluate(i as i64)
            };
            Share::new(ShareIndex::new(i).unwrap(), radix, encode(&y, radix).unwrap())
        })
        .collect();
    shares.reverse();

    reconstruct_secret(&shares, poly.threshold(), InterpolationMode::Exact).ok()
        == Some(BigInt::from(poly.coefficients[0]))
}
