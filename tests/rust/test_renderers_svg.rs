use super::*;
use crate::config::LayoutConfig;
use crate::layout;
use crate::model::{Edge, GraphModel, Kind, Node, NodeAttrs};
use crate::selection::SelectionState;
use crate::viewport::compose;

fn scene_with(selected: Option<&str>) -> Scene {
    let g = GraphModel::new(
        vec![
            Node::new("rs", Kind::ReplicaSet, "api <v2> & co").with_attrs(NodeAttrs {
                badge: Some("2 pods".into()),
                ..NodeAttrs::default()
            }),
            Node::new("pod", Kind::Pod, "api-1"),
        ],
        vec![Edge::dashed("e1", "rs", "pod")],
    )
    .unwrap();
    let result = layout::layout(&g, &LayoutConfig::default());
    let mut selection = SelectionState::new();
    if let Some(id) = selected {
        selection.select(id, &g).unwrap();
    }
    compose(&result, &selection)
}

#[test]
fn test_escape() {
    assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
}

#[test]
fn test_truncate_long_names() {
    assert_eq!(truncate("short"), "short");
    let long = "x".repeat(40);
    let cut = truncate(&long);
    assert_eq!(cut.chars().count(), NAME_MAX_CHARS);
    assert!(cut.ends_with('…'));
}

#[test]
fn test_document_size_matches_scene() {
    let scene = scene_with(None);
    let svg = render(&scene);
    let header = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}""#,
        scene.size.width, scene.size.height
    );
    assert!(svg.starts_with(&header), "unexpected header: {}", &svg[..80]);
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_edges_drawn_before_nodes() {
    let svg = render(&scene_with(None));
    let edge_at = svg.find(r#"data-id="e1""#).unwrap();
    let node_at = svg.find(r#"data-id="rs""#).unwrap();
    assert!(edge_at < node_at);
    assert!(svg.contains(r#"stroke-dasharray="6 6""#));
    assert!(svg.contains(r#"marker-end="url(#arrowclosed)""#));
}

#[test]
fn test_card_contents_escaped() {
    let svg = render(&scene_with(None));
    assert!(svg.contains("api &lt;v2&gt; &amp; co"));
    assert!(!svg.contains("<v2>"));
    assert!(svg.contains("REPLICASET"));
    assert!(svg.contains("2 pods"));
    assert!(svg.contains("📚"));
}

#[test]
fn test_selected_card_highlighted() {
    let plain = render(&scene_with(None));
    assert!(!plain.contains(SELECTED_STROKE));
    let selected = render(&scene_with(Some("pod")));
    assert_eq!(selected.matches(SELECTED_STROKE).count(), 1);
}

#[test]
fn test_format_dispatch() {
    let scene = scene_with(None);
    let json = crate::renderers::render(&scene, crate::renderers::Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["edges"][0]["dash"], "6 6");
    assert_eq!("SVG".parse::<crate::renderers::Format>().unwrap(), crate::renderers::Format::Svg);
    assert!("png".parse::<crate::renderers::Format>().is_err());
}

#[test]
fn test_detail_text() {
    let node = Node::new("rs", Kind::ReplicaSet, "web-1").with_attrs(NodeAttrs {
        badge: Some("2 pods".into()),
        ..NodeAttrs::default()
    });
    let text = crate::renderers::text::render_detail(&crate::detail::resolve(&node));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "web-1");
    assert_eq!(lines[1], "Kind: ReplicaSet");
    assert_eq!(lines[2], "Pods: 2 pods");
    assert_eq!(lines[4], "Pods");
    assert_eq!(lines[5], "  🧫 web-1-1 — Healthy, 1/1 ready on node-0");
    assert_eq!(lines.len(), 7);
}
