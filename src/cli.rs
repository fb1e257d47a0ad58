use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Radix, Threshold};
use crate::interpolation::InterpolationMode;

/// Validates that threshold is at least 1
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

/// Validates that base is at least 2
fn validate_radix(s: &str) -> Result<Radix, String> {
    s.parse::<Radix>().map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "recombine")]
#[command(about = "Reconstruct Shamir secrets from shares written in arbitrary bases")]
pub struct Cli {
    /// Interpolation mode: exact rational arithmetic, or per-term truncating division
    #[arg(short, long, global = true, default_value = "exact")]
    pub mode: InterpolationMode,

    /// Report every decoded point on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve JSON test-case documents (reads stdin when no file is given)
    Solve {
        /// Test-case documents to solve
        files: Vec<PathBuf>,
    },
    /// Combine shares read from stdin, one `index base value` per line
    Combine {
        /// Threshold: number of shares used to reconstruct (must be >= 1)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,
    },
    /// Decode a single value to decimal
    Decode {
        /// Digit string to decode
        value: String,

        /// Base the value is written in (must be >= 2)
        #[arg(short, long, value_parser = validate_radix)]
        base: Radix,
    },
}
