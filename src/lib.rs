// Internal library for testing purposes
// Not intended for external use as a library

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod interpolation;
pub mod testcase;
pub mod wasm;

pub use codec::{Share, decode, encode};
pub use commands::{Reconstruction, reconstruct_secret, reconstruct_with_report};
pub use error::ReconstructError;
pub use interpolation::{InterpolationMode, Point, interpolate};
