//! JSON test-case documents
//!
//! A test case declares `n` and `k` under `keys` and lists shares under their
//! decimal index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Only indices `1..=n` take part; share `6` above is skipped. A document is
//! either one such object or an array of them. An optional `"name"` labels
//! the case in reports.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use crate::codec::Share;
use crate::commands::{Reconstruction, reconstruct_with_report};
use crate::domain::{Radix, ReconstructConfig, ShareCount, ShareIndex, Threshold};
use crate::error::ReconstructError;
use crate::interpolation::InterpolationMode;

/// A field that may be written as a JSON number or a numeric string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(u64),
    Text(String),
}

impl Numeric {
    fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    fn to_u64(&self, field: &str) -> Result<u64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| anyhow!("'{field}' must be a non-negative integer, got '{s}'")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawKeys {
    n: Numeric,
    k: Numeric,
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: Numeric,
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawTestCase {
    #[serde(default)]
    name: Option<String>,
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

/// A validated test case: configuration plus the shares it will use
#[derive(Debug, Clone)]
pub struct TestCase {
    name: Option<String>,
    config: ReconstructConfig,
    shares: Vec<Share>,
    skipped: Vec<ShareIndex>,
}

impl TestCase {
    /// Parse a single test-case object
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, `n`/`k` are invalid, or a
    /// share key or base is invalid
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("Failed to parse test case JSON")?;
        Self::from_value(value)
    }

    /// Parse a document holding one test case or an array of them
    ///
    /// # Errors
    /// Returns an error naming the first test case that fails to parse
    pub fn parse_document(text: &str) -> Result<Vec<Self>> {
        let value: Value =
            serde_json::from_str(text).context("Failed to parse test case document")?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| {
                    Self::from_value(item)
                        .with_context(|| format!("Invalid test case #{}", idx + 1))
                })
                .collect(),
            other => Ok(vec![Self::from_value(other)?]),
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        let raw: RawTestCase =
            serde_json::from_value(value).context("Test case does not match the expected shape")?;

        let n = ShareCount::new(raw.keys.n.to_u64("n")?)?;
        let k = usize::try_from(raw.keys.k.to_u64("k")?).context("'k' is too large")?;
        let config = ReconstructConfig::new(Threshold::new(k)?, n)?;

        let mut shares = Vec::new();
        let mut skipped = Vec::new();
        for (key, raw_share) in raw.shares {
            let index: u64 = key
                .trim()
                .parse()
                .map_err(|_| anyhow!("Unexpected key '{key}': share keys must be indices"))?;
            let index = ShareIndex::new(index).with_context(|| format!("Invalid share '{key}'"))?;
            if *index > *n {
                skipped.push(index);
                continue;
            }

            let base: Radix = raw_share
                .base
                .as_text()
                .parse()
                .with_context(|| format!("Invalid base for share {index}"))?;
            shares.push(Share::new(index, base, raw_share.value));
        }

        // Keys sort as strings; order numerically
        shares.sort_by_key(Share::index);
        skipped.sort();

        Ok(Self {
            name: raw.name,
            config,
            shares,
            skipped,
        })
    }

    #[must_use]
    pub fn config(&self) -> ReconstructConfig {
        self.config
    }

    /// Shares with index in `1..=n`, ascending
    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Indices present in the document but above `n`
    #[must_use]
    pub fn skipped(&self) -> &[ShareIndex] {
        &self.skipped
    }

    /// Name from the document, or `Test Case {position}`
    #[must_use]
    pub fn label(&self, position: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Test Case {position}"))
    }

    /// Reconstruct this test case's secret
    ///
    /// # Errors
    /// Returns the decoding or interpolation error for this case
    pub fn solve(&self, mode: InterpolationMode) -> std::result::Result<Reconstruction, ReconstructError> {
        reconstruct_with_report(&self.shares, self.config.threshold(), mode)
    }
}
