//! Geometric transforms: flips and quarter-turn rotations.
//!
//! Every transform copies pixels exactly; nothing is interpolated. Output is
//! always a new buffer and the input is left untouched.
//!
//! # Coordinate System
//!
//! - `(row, col)` with the origin at the top-left corner
//! - Rotations are quarter turns; `rotate_right` is clockwise
//! - Rotations swap width and height

mod flip;
mod rotation;

pub use flip::{flip_horizontal, flip_vertical};
pub use rotation::{rotate_left, rotate_right};
