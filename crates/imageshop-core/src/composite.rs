//! Chroma-key ("green screen") compositing.
//!
//! The overlay is laid over the base image. Wherever an overlay pixel is
//! keyed out (strongly green) the base pixel shows through instead; every
//! other overlay pixel wins.

use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::pixel::{Pixel, PixelBuffer};

/// Classification rule for keyed-out overlay pixels.
///
/// A pixel is keyed when its green channel exceeds `dominance` times the
/// larger of its red and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromaKey {
    /// Required ratio of green over `max(r, b)`.
    pub dominance: u16,
}

impl Default for ChromaKey {
    fn default() -> Self {
        Self { dominance: 2 }
    }
}

impl ChromaKey {
    pub fn new(dominance: u16) -> Self {
        Self { dominance }
    }

    /// Returns true if `pixel` should be replaced by the base image.
    #[inline]
    pub fn is_keyed(&self, pixel: Pixel) -> bool {
        let max_rb = pixel.r.max(pixel.b) as u32;
        pixel.g as u32 > self.dominance as u32 * max_rb
    }
}

/// Composite `overlay` over `base` using the default green key.
///
/// Fails with [`TransformError::DimensionMismatch`] before doing any work if
/// the two images differ in size.
pub fn green_screen(base: &PixelBuffer, overlay: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
    composite_with_key(base, overlay, &ChromaKey::default())
}

/// Composite `overlay` over `base`, letting `base` show through wherever
/// `key` classifies the overlay pixel as keyed.
pub fn composite_with_key(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    key: &ChromaKey,
) -> Result<PixelBuffer, TransformError> {
    if base.dimensions() != overlay.dimensions() {
        return Err(TransformError::DimensionMismatch {
            base: base.dimensions(),
            overlay: overlay.dimensions(),
        });
    }

    let pixels = base
        .pixels()
        .iter()
        .zip(overlay.pixels())
        .map(|(&under, &over)| if key.is_keyed(over) { under } else { over })
        .collect();

    Ok(PixelBuffer::from_parts(base.width(), base.height(), pixels))
}
