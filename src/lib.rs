//! kube-graph: layered layout and click-to-inspect views for resource
//! dependency graphs such as a Kubernetes application's owned objects.
//!
//! Pipeline: snapshot JSON → `GraphModel` → Sugiyama layout → `Scene` →
//! renderer. Selection and the detail panel are driven by `viewer::Viewer`.
//!
//! Modules:
//!   config      LayoutConfig, Direction and the default dimensions
//!   model       Node, Edge, GraphSnapshot, validated GraphModel
//!   layout      ranking, median ordering, coordinates, smooth-step routing
//!   selection   SelectionState
//!   detail      per-kind detail fields and synthetic pods
//!   theme       icons and colours
//!   viewport    Scene composition and hit testing
//!   viewer      event-driven state with a memoized layout
//!   renderers   SVG, JSON and detail text output
//!   fixtures    bundled demo graph

pub mod config;
pub mod detail;
pub mod error;
pub mod fixtures;
pub mod layout;
pub mod model;
pub mod renderers;
pub mod selection;
pub mod theme;
pub mod viewer;
pub mod viewport;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{Direction, LayoutConfig};
pub use detail::NodeDetail;
pub use error::{Error, GraphValidationError, LayoutWarning, UnknownNodeSelected};
pub use layout::LayoutResult;
pub use model::{GraphModel, GraphSnapshot};
pub use renderers::Format;
pub use viewer::{ViewEvent, Viewer};
pub use viewport::Scene;

/// Lay out a snapshot and compose its scene, optionally with `selected`
/// marked. Unlike a click, selecting an unknown id here is an error.
pub fn compose_snapshot(
    snapshot: GraphSnapshot,
    config: &LayoutConfig,
    selected: Option<&str>,
) -> Result<Scene, Error> {
    let mut viewer = Viewer::from_snapshot(snapshot, config.clone())?;
    if let Some(id) = selected {
        viewer.node_clicked(id)?;
    }
    Ok(viewer.scene())
}

/// Parse snapshot JSON, lay it out and render it in `format`.
pub fn render_json(
    src: &str,
    config: &LayoutConfig,
    selected: Option<&str>,
    format: Format,
) -> Result<String, Error> {
    let scene = compose_snapshot(GraphSnapshot::from_json(src)?, config, selected)?;
    renderers::render(&scene, format)
}

/// Detail panel for node `id` of a snapshot.
pub fn detail_for(snapshot: GraphSnapshot, id: &str) -> Result<NodeDetail, Error> {
    let graph = snapshot.into_model()?;
    let node = graph
        .node(id)
        .ok_or_else(|| UnknownNodeSelected { id: id.to_string() })?;
    Ok(detail::resolve(node))
}
