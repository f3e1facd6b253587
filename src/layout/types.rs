//! Layout types: Point, Size, Rect, LayoutNode, LayoutEdge, LayoutResult.

use serde::Serialize;

use crate::config::Direction;
use crate::error::LayoutWarning;
use crate::model::{Edge, EdgeStyle, Node};

// ─── Geometry ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle; `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Edges are inclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

// ─── Edge hints ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// Orthogonal elbow with rounded corners.
    SmoothStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowMarker {
    ArrowClosed,
}

/// Rendering hints; a pure function of the edge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeHints {
    pub curve: CurveType,
    pub marker: ArrowMarker,
}

impl EdgeHints {
    pub fn for_style(style: EdgeStyle) -> Self {
        match style {
            EdgeStyle::Solid | EdgeStyle::Dashed => Self {
                curve: CurveType::SmoothStep,
                marker: ArrowMarker::ArrowClosed,
            },
        }
    }
}

// ─── LayoutNode ──────────────────────────────────────────────────────────────

/// A node with its rank, in-rank order and canvas position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub node: Node,
    pub rank: usize,
    pub order: usize,
    /// Top-left corner.
    pub position: Point,
    pub size: Size,
}

impl LayoutNode {
    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

// ─── LayoutEdge ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    pub edge: Edge,
    #[serde(flatten)]
    pub hints: EdgeHints,
    /// Smooth-step polyline from the source box to the target box.
    pub waypoints: Vec<Point>,
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// The full output of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// Input order.
    pub nodes: Vec<LayoutNode>,
    /// Input order.
    pub edges: Vec<LayoutEdge>,
    pub bounding_box: Size,
    pub direction: Direction,
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutResult {
    pub fn empty(direction: Direction) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            bounding_box: Size::default(),
            direction,
            warnings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// True when the layout had to ignore edges to get a ranking.
    /// Topmost node whose card contains `p`.
    pub fn node_at(&self, p: Point) -> Option<&LayoutNode> {
        self.nodes.iter().rev().find(|n| n.rect().contains(p))
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
