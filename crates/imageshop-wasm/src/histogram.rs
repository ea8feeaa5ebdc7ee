//! Luminance histogram WASM bindings.

use crate::types::JsPixelBuffer;
use imageshop_core::LuminanceHistogram;
use wasm_bindgen::prelude::*;

/// Luminance histogram accessible from JavaScript.
#[wasm_bindgen]
pub struct JsLuminanceHistogram {
    counts: Vec<u32>,
    lookup: Vec<u8>,
    max_count: u32,
}

#[wasm_bindgen]
impl JsLuminanceHistogram {
    /// Pixel count per luminance level (256 bins).
    pub fn counts(&self) -> Vec<u32> {
        self.counts.clone()
    }

    /// Level each luminance maps to under equalization (256 entries).
    pub fn equalization_lookup(&self) -> Vec<u8> {
        self.lookup.clone()
    }

    /// Largest bin, for normalizing the histogram display.
    #[wasm_bindgen(getter)]
    pub fn max_count(&self) -> u32 {
        self.max_count
    }
}

/// Compute the luminance histogram of an image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_luminance_histogram(image);
/// const bins = hist.counts();   // Uint32Array[256]
/// const max = hist.max_count;   // For normalization
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_luminance_histogram(image: &JsPixelBuffer) -> JsLuminanceHistogram {
    let hist = LuminanceHistogram::compute(image.buffer());
    JsLuminanceHistogram {
        counts: hist.counts().iter().map(|&c| saturate_bin(c)).collect(),
        lookup: hist.lookup_table().to_vec(),
        max_count: saturate_bin(hist.max_count()),
    }
}

/// Bins are exposed as a `Uint32Array`; counts past `u32::MAX` pin to it.
fn saturate_bin(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
