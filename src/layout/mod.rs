//! Layout engine: ranking, ordering, coordinates and edge routing.

pub mod cache;
pub mod route;
pub mod sugiyama;
pub mod types;

pub use cache::{Memoized, Versioned};
pub use sugiyama::SugiyamaLayout;
pub use types::{
    ArrowMarker, CurveType, EdgeHints, LayoutEdge, LayoutNode, LayoutResult, Point, Rect, Size,
};

use crate::config::LayoutConfig;
use crate::error::GraphValidationError;
use crate::model::{GraphModel, GraphSnapshot};

/// Lay out an already validated graph.
pub fn layout(graph: &GraphModel, config: &LayoutConfig) -> LayoutResult {
    SugiyamaLayout::layout(graph, config)
}

/// Validate a snapshot and lay it out. A validation failure aborts before any
/// layout work, so there is never a partial result.
pub fn layout_snapshot(
    snapshot: GraphSnapshot,
    config: &LayoutConfig,
) -> Result<LayoutResult, GraphValidationError> {
    let graph = snapshot.into_model()?;
    Ok(layout(&graph, config))
}
