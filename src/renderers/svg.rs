//! SVG renderer: converts a composed `Scene` to a standalone SVG document.
//!
//! Edges are drawn first so the cards sit on top of them. Coordinates are
//! taken from the scene as-is; the document size is the scene size.

use crate::layout::ArrowMarker;
use crate::theme::{self, SELECTED_STROKE};
use crate::viewport::{EdgeView, NodeView, Scene};

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "system-ui, sans-serif";
const BACKGROUND: &str = "#f8fafc";
const CARD_STROKE: &str = r##"fill="#ffffff" stroke="#e2e8f0" stroke-width="1""##;
const CARD_RADIUS: f64 = 12.0;
const PAD_X: f64 = 10.0;
/// Left edge of the text column, right of the icon.
const TEXT_X: f64 = 44.0;
/// Names longer than this are cut and end in an ellipsis.
const NAME_MAX_CHARS: usize = 28;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn font(size: u32) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size}""#)
}

fn truncate(name: &str) -> String {
    if name.chars().count() <= NAME_MAX_CHARS {
        return name.to_string();
    }
    let mut cut: String = name.chars().take(NAME_MAX_CHARS - 1).collect();
    cut.push('…');
    cut
}

fn marker_id(marker: ArrowMarker) -> &'static str {
    match marker {
        ArrowMarker::ArrowClosed => "arrowclosed",
    }
}

// ── Edge rendering ────────────────────────────────────────────────────────────

fn render_edge(edge: &EdgeView) -> String {
    if edge.path.is_empty() {
        return String::new();
    }
    let dash = edge
        .dash
        .map(|d| format!(r#" stroke-dasharray="{d}""#))
        .unwrap_or_default();
    format!(
        r#"<path data-id="{}" d="{}" fill="none" stroke="{}" stroke-width="{}"{dash} marker-end="url(#{})"/>"#,
        escape(&edge.id),
        edge.path,
        edge.stroke,
        edge.stroke_width,
        marker_id(edge.marker),
    )
}

// ── Card rendering ────────────────────────────────────────────────────────────

fn render_node(node: &NodeView) -> String {
    let r = node.rect;
    let (x, y) = (r.x, r.y);
    let border = if node.selected {
        format!(r##"fill="#ffffff" stroke="{SELECTED_STROKE}" stroke-width="2""##)
    } else {
        CARD_STROKE.to_string()
    };

    let mut parts = vec![
        format!(r#"<g data-id="{}">"#, escape(&node.id)),
        format!("<title>{}</title>", escape(&node.name)),
        format!(
            r#"<rect x="{x}" y="{y}" width="{}" height="{}" rx="{CARD_RADIUS}" {border}/>"#,
            r.width, r.height
        ),
        format!(
            r#"<text x="{}" y="{}" {}>{}</text>"#,
            x + PAD_X,
            y + 32.0,
            font(22),
            node.icon
        ),
        format!(
            r##"<text x="{}" y="{}" {} fill="#64748b">{}</text>"##,
            x + TEXT_X,
            y + 18.0,
            font(11),
            escape(&node.kind.to_uppercase())
        ),
        format!(
            r##"<text x="{}" y="{}" {} font-weight="600" fill="#0f172a">{}</text>"##,
            x + TEXT_X,
            y + 36.0,
            font(14),
            escape(&truncate(&node.name))
        ),
    ];

    // Health and sync dots with their labels.
    let status_y = y + 50.0;
    let health_x = x + TEXT_X + 4.0;
    let sync_x = health_x + 96.0;
    parts.push(format!(
        r#"<circle cx="{health_x}" cy="{}" r="4" fill="{}"/>"#,
        status_y - 4.0,
        node.health_color
    ));
    parts.push(format!(
        r#"<text x="{}" y="{status_y}" {}>{}</text>"#,
        health_x + 8.0,
        font(11),
        node.health
    ));
    parts.push(format!(
        r#"<circle cx="{sync_x}" cy="{}" r="4" fill="{}"/>"#,
        status_y - 4.0,
        node.sync_color
    ));
    parts.push(format!(
        r#"<text x="{}" y="{status_y}" {}>{}</text>"#,
        sync_x + 8.0,
        font(11),
        node.sync
    ));

    if let Some(badge) = &node.badge {
        let by = y + 60.0;
        parts.push(format!(
            r##"<rect x="{}" y="{by}" width="{}" height="22" rx="6" fill="#f8fafc" stroke="#e2e8f0"/>"##,
            x + PAD_X,
            r.width - 2.0 * PAD_X
        ));
        parts.push(format!(
            r#"<text x="{}" y="{}" {}>{}</text>"#,
            x + PAD_X + 6.0,
            by + 15.0,
            font(12),
            escape(badge)
        ));
    }

    parts.push("</g>".to_string());
    parts.join("\n")
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Render a scene to an SVG document.
pub fn render(scene: &Scene) -> String {
    let w = scene.size.width;
    let h = scene.size.height;

    let mut parts = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        "<defs>".to_string(),
        format!(
            r#"  <marker id="{}" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="12" markerHeight="12" orient="auto-start-reverse">"#,
            marker_id(ArrowMarker::ArrowClosed)
        ),
        format!(
            r#"    <path d="M0 0 L10 5 L0 10 z" fill="{}"/>"#,
            theme::EDGE_STROKE
        ),
        "  </marker>".to_string(),
        "</defs>".to_string(),
        format!(r#"<rect width="{w}" height="{h}" fill="{BACKGROUND}"/>"#),
    ];

    for edge in &scene.edges {
        let svg = render_edge(edge);
        if !svg.is_empty() {
            parts.push(svg);
        }
    }
    for node in &scene.nodes {
        parts.push(render_node(node));
    }

    parts.push("</svg>".to_string());
    parts.join("\n")
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
