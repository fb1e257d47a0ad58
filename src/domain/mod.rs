//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes and configuration for reconstruction requests:
//! - [`Threshold`] - Number of shares required and used for reconstruction (k >= 1)
//! - [`ShareIndex`] - Share identifier and x-coordinate (>= 1)
//! - [`ShareCount`] - Total number of shares declared for a request (n >= 1)
//! - [`Radix`] - Base in which a share value is written (>= 2)
//! - [`ReconstructConfig`] - Validated threshold and share count pair

mod config;
mod radix;
mod share_count;
mod share_index;
mod threshold;

pub use config::ReconstructConfig;
pub use radix::Radix;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
