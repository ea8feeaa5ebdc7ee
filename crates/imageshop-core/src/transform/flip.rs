//! Mirror an image across its horizontal or vertical axis.

use crate::pixel::PixelBuffer;

/// Mirror top-to-bottom: output row `i` is input row `height - 1 - i`.
pub fn flip_vertical(image: &PixelBuffer) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(image.pixel_count());
    for row in image.rows().rev() {
        pixels.extend_from_slice(row);
    }
    PixelBuffer::from_parts(image.width(), image.height(), pixels)
}

/// Mirror left-to-right: output pixel `(i, j)` is input pixel
/// `(i, width - 1 - j)`.
pub fn flip_horizontal(image: &PixelBuffer) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(image.pixel_count());
    for row in image.rows() {
        pixels.extend(row.iter().rev().copied());
    }
    PixelBuffer::from_parts(image.width(), image.height(), pixels)
}
