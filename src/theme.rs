//! Icon and colour lookup tables for the node cards and edges.

use crate::model::{EdgeStyle, Health, Kind, SyncStatus};

pub const EDGE_STROKE: &str = "#94a3b8";
pub const EDGE_STROKE_WIDTH: f64 = 2.0;
pub const DASH_PATTERN: &str = "6 6";
/// Outline of the selected card.
pub const SELECTED_STROKE: &str = "#0ea5e9";

pub fn kind_icon(kind: &Kind) -> &'static str {
    match kind {
        Kind::Application => "📦",
        Kind::Ingress => "🔀",
        Kind::Service => "🗂️",
        Kind::Deployment => "🔄",
        Kind::ReplicaSet => "📚",
        Kind::StatefulSet => "💾",
        Kind::Pod => "🧫",
        Kind::ConfigMap => "🧬",
        Kind::Secret => "🔑",
        Kind::Other(_) => "📄",
    }
}

pub fn health_color(health: Health) -> &'static str {
    match health {
        Health::Healthy => "#10b981",
        Health::Degraded => "#f59e0b",
        Health::Missing => "#94a3b8",
        Health::Progressing => "#0ea5e9",
        Health::Unknown => "#94a3b8",
    }
}

pub fn sync_color(sync: SyncStatus) -> &'static str {
    match sync {
        SyncStatus::Synced => "#059669",
        SyncStatus::OutOfSync => "#b45309",
        SyncStatus::Unknown => "#64748b",
    }
}

/// SVG `stroke-dasharray` for an edge style, if any.
pub fn dash_pattern(style: EdgeStyle) -> Option<&'static str> {
    match style {
        EdgeStyle::Solid => None,
        EdgeStyle::Dashed => Some(DASH_PATTERN),
    }
}
