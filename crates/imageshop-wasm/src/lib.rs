//! ImageShop WASM - WebAssembly bindings for ImageShop
//!
//! This crate exposes the imageshop-core transforms to the browser shell,
//! which owns file picking and drawing the current image.
//!
//! # Module Structure
//!
//! - `types` - `JsPixelBuffer`, the JavaScript-facing image wrapper
//! - `transform` - flips, rotations, grayscale and equalization
//! - `composite` - green-screen compositing and its settings
//! - `histogram` - luminance histogram for display
//! - `actions` - the toolbar command table
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixelBuffer, rotate_right } from '@imageshop/wasm';
//!
//! await init();
//!
//! const image = new JsPixelBuffer(width, height, rgbBytes);
//! const rotated = rotate_right(image);
//! ```

use wasm_bindgen::prelude::*;

mod actions;
mod composite;
mod histogram;
mod transform;
mod types;

pub use actions::{apply_action, list_actions};
pub use composite::{green_screen, JsChromaKey};
pub use histogram::{compute_luminance_histogram, JsLuminanceHistogram};
pub use transform::{equalize, flip_horizontal, flip_vertical, grayscale, rotate_left, rotate_right};
pub use types::JsPixelBuffer;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
