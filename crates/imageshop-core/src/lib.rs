//! ImageShop Core - Pixel buffer transforms
//!
//! This crate provides the transform engine behind the ImageShop editor:
//! flips and quarter-turn rotations, grayscale conversion, chroma-key
//! compositing and histogram equalization, plus an editing session that
//! dispatches toolbar actions against the current image.
//!
//! All transforms are pure: they borrow their input and return a new
//! [`PixelBuffer`]. File decoding and on-screen display belong to the UI
//! shell, reached through [`ImageSource`] and [`ImageDisplay`].

pub mod color;
pub mod composite;
pub mod error;
pub mod histogram;
pub mod luminance;
pub mod pixel;
pub mod session;
pub mod transform;

#[cfg(test)]
pub(crate) mod testing;

pub use color::grayscale;
pub use composite::{composite_with_key, green_screen, ChromaKey};
pub use error::TransformError;
pub use histogram::{equalize, LuminanceHistogram};
pub use luminance::luminance;
pub use pixel::{Pixel, PixelBuffer};
pub use session::{
    apply, Action, ImageDisplay, ImageSession, ImageSource, Outcome, SessionError, UnknownAction,
};
pub use transform::{flip_horizontal, flip_vertical, rotate_left, rotate_right};
