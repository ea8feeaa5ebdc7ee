//! Error types shared by every transform in the crate.

use thiserror::Error;

/// Errors raised while building pixel buffers or running transforms.
///
/// Every operation checks its preconditions before producing output, so a
/// returned error never leaves a partially transformed buffer behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The buffer has no rows or no columns.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A row-by-row buffer had a row whose length differs from the first row.
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat pixel data does not match the declared dimensions.
    #[error("Pixel data size mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// A pixel access fell outside the buffer.
    #[error("Pixel ({row}, {col}) is outside a {width}x{height} image")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: u32,
        height: u32,
    },

    /// Two buffers that must share dimensions do not.
    #[error(
        "Image sizes differ: base is {}x{}, overlay is {}x{}",
        .base.0, .base.1, .overlay.0, .overlay.1
    )]
    DimensionMismatch {
        /// Base dimensions as (width, height).
        base: (u32, u32),
        /// Overlay dimensions as (width, height).
        overlay: (u32, u32),
    },
}

impl TransformError {
    /// Returns true for every error that means "this is not a valid
    /// rectangular, non-empty buffer".
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(
            self,
            TransformError::InvalidDimension { .. }
                | TransformError::RaggedRows { .. }
                | TransformError::PixelCountMismatch { .. }
        )
    }
}
