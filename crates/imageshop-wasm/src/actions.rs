//! The editor's command table, exposed to the browser toolbar.
//!
//! The shell builds its buttons from `list_actions()` and dispatches
//! single-image actions through `apply_action`. `load` and `green-screen`
//! need a file picker, so the shell handles those itself and calls
//! `green_screen` directly.

use crate::types::{to_js_error, JsPixelBuffer};
use imageshop_core::{session, Action};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One toolbar entry as seen from JavaScript.
#[derive(Debug, Serialize)]
struct ActionInfo {
    id: &'static str,
    label: &'static str,
    needs_source: bool,
}

fn action_table() -> Vec<ActionInfo> {
    Action::ALL
        .into_iter()
        .map(|action| ActionInfo {
            id: action.id(),
            label: action.label(),
            needs_source: action.needs_source(),
        })
        .collect()
}

/// List every action in toolbar order as `{ id, label, needs_source }`.
#[wasm_bindgen]
pub fn list_actions() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&action_table()).map_err(to_js_error)
}

/// Apply the single-image action named `name` (caption or id).
///
/// Returns `undefined` for actions that need a second image.
#[wasm_bindgen]
pub fn apply_action(name: &str, image: &JsPixelBuffer) -> Result<Option<JsPixelBuffer>, JsValue> {
    let action: Action = name.parse().map_err(to_js_error)?;
    Ok(run(action, image))
}

fn run(action: Action, image: &JsPixelBuffer) -> Option<JsPixelBuffer> {
    session::apply(action, image.buffer()).map(JsPixelBuffer::from_buffer)
}
