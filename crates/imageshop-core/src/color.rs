//! Color reduction transforms.

use crate::luminance::luminance;
use crate::pixel::{Pixel, PixelBuffer};

/// Convert an image to grayscale.
///
/// Each pixel is replaced by a neutral gray at its [`luminance`]. Gray pixels
/// map to themselves, so applying this twice is the same as applying it once.
pub fn grayscale(image: &PixelBuffer) -> PixelBuffer {
    image.map_pixels(|pixel| Pixel::gray(luminance(pixel)))
}
