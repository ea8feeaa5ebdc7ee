//! Luminance histogram and histogram equalization.
//!
//! Equalization remaps each pixel's luminance `L` to
//! `floor(255 * cumulative[L] / pixel_count)` and writes it back as a neutral
//! gray. All arithmetic is integer, so results are bit-reproducible.

use crate::luminance::luminance;
use crate::pixel::{Pixel, PixelBuffer};

/// Number of luminance levels.
pub const LEVELS: usize = 256;

/// Per-level luminance counts of an image plus their running sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceHistogram {
    counts: [u64; LEVELS],
    cumulative: [u64; LEVELS],
}

impl LuminanceHistogram {
    /// Compute the histogram of `image`.
    ///
    /// # Performance
    /// Single pass over the pixels plus one pass over the 256 bins.
    pub fn compute(image: &PixelBuffer) -> Self {
        let mut counts = [0u64; LEVELS];
        for &pixel in image.pixels() {
            counts[luminance(pixel) as usize] += 1;
        }
        Self::from_counts(counts)
    }

    /// Build a histogram from precomputed per-level counts, e.g. bins merged
    /// from several tiles.
    pub fn from_counts(counts: [u64; LEVELS]) -> Self {
        let mut cumulative = [0u64; LEVELS];
        let mut total = 0u64;
        for (sum, &count) in cumulative.iter_mut().zip(counts.iter()) {
            total = total.saturating_add(count);
            *sum = total;
        }

        Self { counts, cumulative }
    }

    /// Pixel count at each luminance level.
    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    /// Number of pixels at or below each luminance level.
    pub fn cumulative(&self) -> &[u64; LEVELS] {
        &self.cumulative
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.cumulative[LEVELS - 1]
    }

    /// Largest single bin, for normalizing a histogram display.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Equalized output level for input luminance `level`.
    pub fn equalized_level(&self, level: u8) -> u8 {
        let total = self.total();
        if total == 0 {
            return level;
        }
        // cumulative <= total, so the quotient is at most 255
        (255 * self.cumulative[level as usize] as u128 / total as u128) as u8
    }

    /// Equalized output level for every input level.
    pub fn lookup_table(&self) -> [u8; LEVELS] {
        let mut lut = [0u8; LEVELS];
        for (level, out) in lut.iter_mut().enumerate() {
            *out = self.equalized_level(level as u8);
        }
        lut
    }
}

/// Histogram-equalize an image into a grayscale result of the same size.
pub fn equalize(image: &PixelBuffer) -> PixelBuffer {
    let lut = LuminanceHistogram::compute(image).lookup_table();
    image.map_pixels(|pixel| Pixel::gray(lut[luminance(pixel) as usize]))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing::buffer_strategy;
    use proptest::prelude::*;

    proptest! {
        /// Property: The luminance mapping is non-decreasing.
        #[test]
        fn prop_lookup_table_monotonic(img in buffer_strategy()) {
            let lut = LuminanceHistogram::compute(&img).lookup_table();
            for pair in lut.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        /// Property: The brightest input level maps to 255.
        #[test]
        fn prop_brightest_level_reaches_white(img in buffer_strategy()) {
            let brightest = img.pixels().iter().map(|&p| luminance(p)).max().unwrap();
            let eq = equalize(&img);
            let lut = LuminanceHistogram::compute(&img).lookup_table();
            prop_assert_eq!(lut[brightest as usize], 255);
            prop_assert!(eq.pixels().iter().any(|p| *p == Pixel::WHITE));
        }

        /// Property: Output is grayscale with the input's dimensions.
        #[test]
        fn prop_output_is_gray(img in buffer_strategy()) {
            let eq = equalize(&img);
            prop_assert_eq!(eq.dimensions(), img.dimensions());
            for p in eq.pixels() {
                prop_assert!(p.r == p.g && p.g == p.b);
            }
        }

        /// Property: Histogram bins sum to the pixel count.
        #[test]
        fn prop_counts_sum_to_total(img in buffer_strategy()) {
            let hist = LuminanceHistogram::compute(&img);
            let sum: u64 = hist.counts().iter().sum();
            prop_assert_eq!(sum, img.pixel_count() as u64);
            prop_assert_eq!(hist.total(), img.pixel_count() as u64);
        }
    }
}
