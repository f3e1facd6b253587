//! WASM bindings for kube-graph.
//!
//! Exposes `layout` and `details` to JavaScript via wasm-bindgen. Both take
//! snapshot JSON and return JSON.

use wasm_bindgen::prelude::*;

use crate::config::{Direction, LayoutConfig};
use crate::model::GraphSnapshot;

fn js_err(e: crate::Error) -> JsError {
    JsError::new(&e.to_string())
}

/// Lay out a snapshot and return the composed scene as JSON.
///
/// - `direction`: "LR", "TB", or empty string for the default
#[wasm_bindgen]
pub fn layout(json: &str, direction: &str) -> Result<String, JsError> {
    let mut config = LayoutConfig::default();
    if !direction.is_empty() {
        config.direction = direction.parse::<Direction>().map_err(js_err)?;
    }
    crate::render_json(json, &config, None, crate::Format::Json).map_err(js_err)
}

/// Detail panel for node `id` as JSON.
#[wasm_bindgen]
pub fn details(json: &str, id: &str) -> Result<String, JsError> {
    let snapshot = GraphSnapshot::from_json(json).map_err(js_err)?;
    let detail = crate::detail_for(snapshot, id).map_err(js_err)?;
    serde_json::to_string(&detail).map_err(|e| js_err(e.into()))
}
