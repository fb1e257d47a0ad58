use anyhow::{Context, Result, anyhow, bail};
use num_bigint::BigInt;

use crate::codec::Share;
use crate::domain::{Radix, ShareIndex, Threshold};
use crate::error::ReconstructError;
use crate::interpolation::{InterpolationMode, Point, interpolate};
use crate::testcase::TestCase;

/// A share together with the point it decoded to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedShare {
    pub share: Share,
    pub point: Point,
}

/// Outcome of a reconstruction, with the points that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub secret: BigInt,
    pub mode: InterpolationMode,
    pub threshold: Threshold,
    /// Shares that took part, lowest indices first
    pub used: Vec<DecodedShare>,
    /// Shares that decoded fine but were beyond the threshold
    pub unused: Vec<DecodedShare>,
}

/// Reconstruct the secret from `shares` using the `k` lowest share indices
///
/// # Errors
/// Returns the first decoding error, or the interpolation error for the
/// selected points
pub fn reconstruct_secret(
    shares: &[Share],
    k: Threshold,
    mode: InterpolationMode,
) -> std::result::Result<BigInt, ReconstructError> {
    reconstruct_with_report(shares, k, mode).map(|r| r.secret)
}

/// Same as [`reconstruct_secret`], keeping the decoded points for reporting
///
/// # Errors
/// Returns the first decoding error, or the interpolation error for the
/// selected points
pub fn reconstruct_with_report(
    shares: &[Share],
    k: Threshold,
    mode: InterpolationMode,
) -> std::result::Result<Reconstruction, ReconstructError> {
    let mut decoded = shares
        .iter()
        .map(|share| {
            Ok(DecodedShare {
                share: share.clone(),
                point: share.to_point()?,
            })
        })
        .collect::<std::result::Result<Vec<_>, ReconstructError>>()?;

    // Stable: equal indices keep caller order and surface as singular below
    decoded.sort_by_key(|d| d.share.index());

    let points: Vec<Point> = decoded.iter().map(|d| d.point.clone()).collect();
    let secret = interpolate(&points, k, mode)?;

    let unused = decoded.split_off(*k);
    Ok(Reconstruction {
        secret,
        mode,
        threshold: k,
        used: decoded,
        unused,
    })
}

/// A solved test case and the label it is reported under
#[derive(Debug, Clone)]
pub struct SolvedCase {
    pub label: String,
    pub reconstruction: Reconstruction,
}

/// Solve every test case in a JSON document (one object or an array of them)
///
/// # Errors
/// Returns an error if the document is malformed or any test case fails
pub fn solve_test_cases(document: &str, mode: InterpolationMode) -> Result<Vec<SolvedCase>> {
    let cases = TestCase::parse_document(document)?;
    if cases.is_empty() {
        bail!("No test cases provided");
    }

    cases
        .iter()
        .enumerate()
        .map(|(idx, case)| {
            let label = case.label(idx + 1);
            let reconstruction = case
                .solve(mode)
                .with_context(|| format!("Failed to solve {label}"))?;
            Ok(SolvedCase {
                label,
                reconstruction,
            })
        })
        .collect()
}

/// Parse a share line of the form `index base value`
///
/// # Errors
/// Returns an error if a field is missing, extra fields follow, or the index
/// or base is invalid
pub fn parse_share_line(line: &str) -> Result<Share> {
    let mut fields = line.split_whitespace();
    let (Some(index), Some(base), Some(value)) = (fields.next(), fields.next(), fields.next())
    else {
        bail!("Expected 'index base value', got '{}' field(s)", line.split_whitespace().count());
    };
    if fields.next().is_some() {
        bail!("Unexpected trailing fields after share value");
    }

    let index: u64 = index
        .parse()
        .map_err(|_| anyhow!("Share index '{index}' is not a valid number"))?;
    let index = ShareIndex::new(index)?;
    let base: Radix = base.parse()?;

    Ok(Share::new(index, base, value))
}

/// Combine share lines (`index base value`) into the secret
///
/// # Errors
/// Returns an error if any share fails to parse or reconstruction fails
pub fn combine_shares(
    share_lines: &[String],
    k: Threshold,
    mode: InterpolationMode,
) -> Result<Reconstruction> {
    if share_lines.is_empty() {
        bail!("No shares provided");
    }

    let shares = share_lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            parse_share_line(line).with_context(|| format!("Failed to parse share #{}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    if shares.len() < *k {
        bail!(
            "Insufficient shares: need at least {}, but only {} provided",
            *k,
            shares.len()
        );
    }

    reconstruct_with_report(&shares, k, mode).context("Failed to recover secret")
}
