//! WASM bindings for the single-image transforms.
//!
//! Each binding borrows the source image and returns a new one, so the
//! JavaScript side can keep or free the original as it likes.

use crate::types::JsPixelBuffer;
use imageshop_core::{color, histogram, transform};
use wasm_bindgen::prelude::*;

/// Mirror the image top-to-bottom.
#[wasm_bindgen]
pub fn flip_vertical(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::flip_vertical(image.buffer()))
}

/// Mirror the image left-to-right.
#[wasm_bindgen]
pub fn flip_horizontal(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::flip_horizontal(image.buffer()))
}

/// Rotate 90 degrees clockwise. Width and height swap.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate_right(image);
/// console.log(`${rotated.width}x${rotated.height}`);
/// ```
#[wasm_bindgen]
pub fn rotate_right(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::rotate_right(image.buffer()))
}

/// Rotate 90 degrees counter-clockwise. Width and height swap.
#[wasm_bindgen]
pub fn rotate_left(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::rotate_left(image.buffer()))
}

/// Convert to grayscale using BT.601 luminance.
#[wasm_bindgen]
pub fn grayscale(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(color::grayscale(image.buffer()))
}

/// Histogram-equalize the image. The result is grayscale.
#[wasm_bindgen]
pub fn equalize(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(histogram::equalize(image.buffer()))
}
