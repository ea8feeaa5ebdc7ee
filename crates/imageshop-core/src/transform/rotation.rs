//! Quarter-turn image rotation.
//!
//! Both rotations use forward mapping: every source pixel `(i, j)` is copied
//! to exactly one destination slot, so the output is a permutation of the
//! input and no interpolation is involved.
//!
//! For a source of `width` W and `height` H the destination is H wide and W
//! tall:
//! ```text
//! rotate_right: dst[j][H - 1 - i] = src[i][j]
//! rotate_left:  dst[W - 1 - j][i] = src[i][j]
//! ```

use crate::pixel::{Pixel, PixelBuffer};

/// Rotate 90 degrees clockwise.
pub fn rotate_right(image: &PixelBuffer) -> PixelBuffer {
    let height = image.height() as usize;
    rotate_with(image, |i, j| (j, height - 1 - i))
}

/// Rotate 90 degrees counter-clockwise.
pub fn rotate_left(image: &PixelBuffer) -> PixelBuffer {
    let width = image.width() as usize;
    rotate_with(image, |i, j| (width - 1 - j, i))
}

/// Copy every source pixel to the destination `(row, col)` given by `map`.
///
/// The destination has swapped dimensions, so its row stride is the source
/// height.
fn rotate_with(image: &PixelBuffer, map: impl Fn(usize, usize) -> (usize, usize)) -> PixelBuffer {
    let (src_w, src_h) = (image.width(), image.height());
    let dst_stride = src_h as usize;

    let mut output = vec![Pixel::BLACK; image.pixel_count()];

    for (i, row) in image.rows().enumerate() {
        for (j, &pixel) in row.iter().enumerate() {
            let (dst_row, dst_col) = map(i, j);
            output[dst_row * dst_stride + dst_col] = pixel;
        }
    }

    PixelBuffer::from_parts(src_h, src_w, output)
}
