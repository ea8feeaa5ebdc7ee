//! Pixel and pixel buffer types.
//!
//! A [`PixelBuffer`] is always non-empty and rectangular: every constructor
//! validates its input and the fields are private, so transforms can rely on
//! `pixels.len() == width * height` without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// An opaque RGB pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Create a pixel from in-range channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from arbitrary integer channels, clamping each to 0-255.
    pub fn compose(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Split the pixel into its (r, g, b) channels.
    #[inline]
    pub fn decompose(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// A neutral gray pixel with all channels set to `level`.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Unpack a `0xAARRGGBB` integer. The alpha byte is ignored.
    pub fn from_argb(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` integer with alpha fully opaque.
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        [pixel.r, pixel.g, pixel.b]
    }
}

impl From<image::Rgb<u8>> for Pixel {
    fn from(rgb: image::Rgb<u8>) -> Self {
        Self::from(rgb.0)
    }
}

/// A rectangular grid of pixels stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create a buffer from row-major pixels.
    ///
    /// Fails if either dimension is zero or `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, TransformError> {
        let expected = checked_pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(TransformError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self, TransformError> {
        let count = checked_pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; count],
        })
    }

    /// Create a buffer from a list of rows.
    ///
    /// Every row must have the same, non-zero length; the first row defines
    /// the width.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, TransformError> {
        let width = rows.first().map_or(0, Vec::len);
        let (w, h) = match (u32::try_from(width), u32::try_from(rows.len())) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(TransformError::InvalidDimension {
                    width: u32::MAX,
                    height: u32::MAX,
                })
            }
        };
        checked_pixel_count(w, h)?;

        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(TransformError::RaggedRows {
                row,
                expected: width,
                actual: bad.len(),
            });
        }

        Ok(Self {
            width: w,
            height: h,
            pixels: rows.into_iter().flatten().collect(),
        })
    }

    /// Create a buffer from packed RGB bytes (3 bytes per pixel, row-major).
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, TransformError> {
        let count = checked_pixel_count(width, height)?;
        let expected = count
            .checked_mul(3)
            .ok_or(TransformError::InvalidDimension { width, height })?;
        if bytes.len() != expected {
            return Err(TransformError::PixelCountMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|chunk| Pixel::new(chunk[0], chunk[1], chunk[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pack the buffer into RGB bytes (3 bytes per pixel, row-major).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&[pixel.r, pixel.g, pixel.b]);
        }
        bytes
    }

    /// Create a buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, TransformError> {
        let (width, height) = img.dimensions();
        Self::from_rgb_bytes(width, height, img.as_raw())
    }

    /// Convert to an `image::RgbImage`.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let width = self.width as usize;
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let pixel = self.pixels[y as usize * width + x as usize];
            image::Rgb(pixel.into())
        })
    }

    /// Buffer assembled by a transform that already knows the layout is valid.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// A single row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        let width = self.width as usize;
        let start = row.checked_mul(width)?;
        self.pixels.get(start..start.checked_add(width)?)
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Read the pixel at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<Pixel, TransformError> {
        let idx = self.index(row, col)?;
        Ok(self.pixels[idx])
    }

    /// Overwrite the pixel at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<(), TransformError> {
        let idx = self.index(row, col)?;
        self.pixels[idx] = pixel;
        Ok(())
    }

    /// New buffer of the same size with `f` applied to every pixel.
    pub fn map_pixels(&self, f: impl FnMut(Pixel) -> Pixel) -> PixelBuffer {
        Self::from_parts(self.width, self.height, self.pixels.iter().copied().map(f).collect())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, TransformError> {
        if row >= self.height as usize || col >= self.width as usize {
            return Err(TransformError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width as usize + col)
    }
}

fn checked_pixel_count(width: u32, height: u32) -> Result<usize, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(TransformError::InvalidDimension { width, height })
}
