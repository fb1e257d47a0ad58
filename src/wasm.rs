//! WASM bindings for recombine
//!
//! This module provides JavaScript-friendly bindings for test-case reconstruction
//! and single-value decoding.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::domain::Radix;
use crate::interpolation::InterpolationMode;
use crate::testcase::TestCase;

/// Initialize panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a reconstruction (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct ReconstructResult {
    /// The secret in decimal
    pub secret: String,
    /// Threshold used for interpolation
    pub threshold: usize,
    /// Share count declared by the test case
    pub share_count: u64,
    /// Interpolation mode that produced the secret
    pub mode: InterpolationMode,
    /// Share indices that took part, ascending
    pub points_used: Vec<u64>,
}

fn reconstruct_case(case: &TestCase, mode: &str) -> Result<String, String> {
    let mode: InterpolationMode = mode.parse()?;
    let reconstruction = case
        .solve(mode)
        .map_err(|e| format!("Reconstruction failed: {e}"))?;

    let result = ReconstructResult {
        secret: reconstruction.secret.to_string(),
        threshold: *reconstruction.threshold,
        share_count: *case.config().share_count(),
        mode,
        points_used: reconstruction
            .used
            .iter()
            .map(|d| *d.share.index())
            .collect(),
    };

    serde_json::to_string(&result).map_err(|e| format!("Serialization failed: {e}"))
}

fn reconstruct_json(test_case: &str, mode: &str) -> Result<String, String> {
    let case = TestCase::from_json(test_case).map_err(|e| format!("Invalid test case: {e:#}"))?;
    reconstruct_case(&case, mode)
}

fn decode_value(value: &str, base: u32) -> Result<String, String> {
    let radix = Radix::new(base).map_err(|e| e.to_string())?;
    codec::decode(value, radix)
        .map(|v| v.to_string())
        .map_err(|e| format!("Decode failed: {e}"))
}

/// Reconstruct the secret of a JSON test case
///
/// # Arguments
/// * `test_case` - Test case JSON: `{"keys": {"n", "k"}, "1": {"base", "value"}, ...}`
/// * `mode` - `"exact"` or `"truncating"`
///
/// # Returns
/// JSON string containing the secret and metadata, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_reconstruct(JSON.stringify({
///     keys: { n: 4, k: 3 },
///     "1": { base: "10", value: "4" },
///     "2": { base: "2", value: "111" },
///     "3": { base: "10", value: "12" },
/// }), "exact");
/// const data = JSON.parse(result);
/// console.log(`Secret: ${data.secret} (mode ${data.mode})`);
/// ```
#[wasm_bindgen]
pub fn wasm_reconstruct(test_case: &str, mode: &str) -> Result<String, JsValue> {
    reconstruct_json(test_case, mode).map_err(|e| JsValue::from_str(&e))
}

/// Reconstruct the secret of a test case passed as a JavaScript object
///
/// Same as [`wasm_reconstruct`] without the `JSON.stringify` round trip.
#[wasm_bindgen]
pub fn wasm_reconstruct_object(test_case: JsValue, mode: &str) -> Result<String, JsValue> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(test_case)
        .map_err(|e| JsValue::from_str(&format!("Invalid test case: {e}")))?;
    let text = value.to_string();
    reconstruct_json(&text, mode).map_err(|e| JsValue::from_str(&e))
}

/// Decode a digit string in the given base to a decimal string
///
/// # Example (JavaScript)
/// ```javascript
/// const y = wasm_decode("aed7015a346d63", 15);
/// console.log(`y = ${y}`);
/// ```
#[wasm_bindgen]
pub fn wasm_decode(value: &str, base: u32) -> Result<String, JsValue> {
    decode_value(value, base).map_err(|e| JsValue::from_str(&e))
}
