//! Shared proptest strategies.

use proptest::prelude::*;

use crate::pixel::{Pixel, PixelBuffer};

pub(crate) fn pixel_strategy() -> impl Strategy<Value = Pixel> + Clone {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Pixel::new(r, g, b))
}

/// Random buffers up to 12x12, including single rows and columns.
pub(crate) fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
    (1u32..=12, 1u32..=12).prop_flat_map(sized_buffer_strategy)
}

pub(crate) fn sized_buffer_strategy(
    (width, height): (u32, u32),
) -> impl Strategy<Value = PixelBuffer> {
    prop::collection::vec(pixel_strategy(), (width * height) as usize).prop_map(move |pixels| {
        PixelBuffer::new(width, height, pixels).expect("strategy produces valid sizes")
    })
}
