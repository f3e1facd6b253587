//! Scene composition: layout output plus selection, ready to draw.

use serde::Serialize;

use crate::config::Direction;
use crate::error::LayoutWarning;
use crate::layout::route::{BORDER_RADIUS, smooth_step_path};
use crate::layout::{ArrowMarker, CurveType, LayoutEdge, LayoutNode, LayoutResult, Point, Rect, Size};
use crate::model::{Health, SyncStatus};
use crate::selection::SelectionState;
use crate::theme;

/// One node card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub id: String,
    pub rect: Rect,
    pub kind: String,
    pub name: String,
    pub icon: &'static str,
    pub health: Health,
    pub health_color: &'static str,
    pub sync: SyncStatus,
    pub sync_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub selected: bool,
}

impl NodeView {
    fn from_layout(ln: &LayoutNode, selection: &SelectionState) -> Self {
        let node = &ln.node;
        Self {
            id: node.id.clone(),
            rect: ln.rect(),
            kind: node.kind.to_string(),
            name: node.name.clone(),
            icon: theme::kind_icon(&node.kind),
            health: node.health(),
            health_color: theme::health_color(node.health()),
            sync: node.sync(),
            sync_color: theme::sync_color(node.sync()),
            badge: node.attrs.badge.clone(),
            selected: selection.is_selected(&node.id),
        }
    }
}

/// One edge, with its SVG path already built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeView {
    pub id: String,
    pub source: String,
    pub target: String,
    pub waypoints: Vec<Point>,
    /// SVG path data.
    pub path: String,
    pub curve: CurveType,
    pub marker: ArrowMarker,
    pub stroke: &'static str,
    pub stroke_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

impl EdgeView {
    fn from_layout(le: &LayoutEdge) -> Self {
        Self {
            id: le.edge.id.clone(),
            source: le.edge.source.clone(),
            target: le.edge.target.clone(),
            path: smooth_step_path(&le.waypoints, BORDER_RADIUS),
            waypoints: le.waypoints.clone(),
            curve: le.hints.curve,
            marker: le.hints.marker,
            stroke: theme::EDGE_STROKE,
            stroke_width: theme::EDGE_STROKE_WIDTH,
            dash: theme::dash_pattern(le.edge.style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Container size; equals the layout bounding box.
    pub size: Size,
    pub direction: Direction,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LayoutWarning>,
}

impl Scene {
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

pub fn compose(layout: &LayoutResult, selection: &SelectionState) -> Scene {
    Scene {
        size: layout.bounding_box,
        direction: layout.direction,
        nodes: layout
            .nodes
            .iter()
            .map(|ln| NodeView::from_layout(ln, selection))
            .collect(),
        edges: layout.edges.iter().map(EdgeView::from_layout).collect(),
        selected: selection
            .selected()
            .filter(|id| layout.node(id).is_some())
            .map(str::to_string),
        warnings: layout.warnings.clone(),
    }
}

/// Id of the topmost node under `point`, or `None` for background.
///
/// Cards are drawn in scene order, so later cards are on top.
pub fn hit_test(scene: &Scene, point: Point) -> Option<&str> {
    scene
        .nodes
        .iter()
        .rev()
        .find(|n| n.rect.contains(point))
        .map(|n| n.id.as_str())
}

#[cfg(test)]
#[path = "../tests/rust/test_viewport.rs"]
mod tests;
