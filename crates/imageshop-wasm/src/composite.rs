//! Chroma-key compositing WASM bindings.

use crate::types::{to_js_error, JsPixelBuffer};
use imageshop_core::composite::{self, ChromaKey};
use imageshop_core::TransformError;
use wasm_bindgen::prelude::*;

/// Chroma-key settings wrapper for JavaScript
#[wasm_bindgen]
pub struct JsChromaKey {
    inner: ChromaKey,
}

#[wasm_bindgen]
impl JsChromaKey {
    /// Create a key with the default green dominance (2)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ChromaKey::default(),
        }
    }

    /// Get the green dominance factor
    #[wasm_bindgen(getter)]
    pub fn dominance(&self) -> u16 {
        self.inner.dominance
    }

    /// Set the green dominance factor
    #[wasm_bindgen(setter)]
    pub fn set_dominance(&mut self, value: u16) {
        self.inner.dominance = value;
    }

    /// Check whether an RGB color would be keyed out
    pub fn is_keyed(&self, r: u8, g: u8, b: u8) -> bool {
        self.inner.is_keyed(imageshop_core::Pixel::new(r, g, b))
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<JsChromaKey, JsValue> {
        let inner: ChromaKey = serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
        Ok(Self { inner })
    }
}

impl Default for JsChromaKey {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite `overlay` over `base`, letting `base` show through wherever
/// the overlay is green.
///
/// Throws if the two images differ in size; neither input is modified.
///
/// # Example (TypeScript)
/// ```typescript
/// const key = new JsChromaKey();
/// const merged = green_screen(current, chosenOverlay, key);
/// ```
#[wasm_bindgen]
pub fn green_screen(
    base: &JsPixelBuffer,
    overlay: &JsPixelBuffer,
    key: &JsChromaKey,
) -> Result<JsPixelBuffer, JsValue> {
    composite_buffers(base, overlay, &key.inner).map_err(to_js_error)
}

fn composite_buffers(
    base: &JsPixelBuffer,
    overlay: &JsPixelBuffer,
    key: &ChromaKey,
) -> Result<JsPixelBuffer, TransformError> {
    composite::composite_with_key(base.buffer(), overlay.buffer(), key)
        .map(JsPixelBuffer::from_buffer)
}
