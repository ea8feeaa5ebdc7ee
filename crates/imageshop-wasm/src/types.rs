//! WASM-compatible wrapper types for image data.
//!
//! JavaScript hands images across as packed RGB bytes; this module converts
//! them into validated core buffers and back.

use imageshop_core::{Pixel, PixelBuffer, TransformError};
use wasm_bindgen::prelude::*;

/// A pixel buffer wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// `Uint8Array`, so keep images on the WASM side while chaining transforms
/// and only extract pixels for display.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a JsPixelBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    ///
    /// Throws if either dimension is zero or the data length is not
    /// `width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        Self::try_new(width, height, &pixels).map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes `pixels()` returns (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixel_count() * 3
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.to_rgb_bytes()
    }

    /// Read one pixel as a packed `0xAARRGGBB` value.
    pub fn pixel_at(&self, row: usize, col: usize) -> Result<u32, JsValue> {
        self.try_pixel(row, col)
            .map(Pixel::to_argb)
            .map_err(to_js_error)
    }

    /// Read one pixel as an `{ r, g, b }` object.
    pub fn pixel_rgb(&self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let pixel = self.try_pixel(row, col).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&pixel).map_err(to_js_error)
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    pub(crate) fn try_new(width: u32, height: u32, pixels: &[u8]) -> Result<Self, TransformError> {
        PixelBuffer::from_rgb_bytes(width, height, pixels).map(Self::from_buffer)
    }

    pub(crate) fn try_pixel(&self, row: usize, col: usize) -> Result<Pixel, TransformError> {
        self.inner.get(row, col)
    }

    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}

/// Convert a core error into the string error JavaScript sees.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
