//! Luminance calculation using ITU-R BT.601 weights.
//!
//! Grayscale conversion and histogram equalization both key on this value, so
//! it is computed in exact integer arithmetic: the result is
//! `floor(0.299 * r + 0.587 * g + 0.114 * b)` with no floating point rounding
//! involved, and is identical on every platform.

use crate::pixel::Pixel;

/// BT.601 red weight, in thousandths.
pub const LUMINANCE_R: u32 = 299;

/// BT.601 green weight, in thousandths.
pub const LUMINANCE_G: u32 = 587;

/// BT.601 blue weight, in thousandths.
pub const LUMINANCE_B: u32 = 114;

const WEIGHT_SCALE: u32 = 1000;

/// Calculate luminance from u8 RGB values (0 to 255).
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
///
/// # Returns
/// Luminance value (0-255), rounded down
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMINANCE_R * r as u32 + LUMINANCE_G * g as u32 + LUMINANCE_B * b as u32;
    // Weights sum to WEIGHT_SCALE, so the quotient never exceeds 255.
    (weighted / WEIGHT_SCALE) as u8
}

/// Luminance of a single pixel.
#[inline]
pub fn luminance(pixel: Pixel) -> u8 {
    let (r, g, b) = pixel.decompose();
    calculate_luminance_u8(r, g, b)
}
