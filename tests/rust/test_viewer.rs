use super::*;
use crate::config::Direction;
use crate::fixtures;
use crate::model::{Edge, Kind, Node};

fn demo_viewer() -> Viewer {
    Viewer::from_snapshot(fixtures::online_store().unwrap(), LayoutConfig::default()).unwrap()
}

fn small_graph() -> GraphModel {
    GraphModel::new(
        vec![Node::new("x", Kind::Pod, "x"), Node::new("y", Kind::Pod, "y")],
        vec![Edge::new("e1", "x", "y")],
    )
    .unwrap()
}

#[test]
fn test_layout_is_memoized() {
    let mut v = demo_viewer();
    assert_eq!(v.layout_computations(), 0);
    let first = v.layout().clone();
    let _ = v.scene();
    assert_eq!(v.layout().clone(), first);
    assert_eq!(v.layout_computations(), 1);
}

#[test]
fn test_selection_does_not_relayout() {
    let mut v = demo_viewer();
    v.layout();
    v.node_clicked("backend-rs").unwrap();
    v.background_clicked();
    v.layout();
    assert_eq!(v.layout_computations(), 1);
}

#[test]
fn test_config_change_relayouts() {
    let mut v = demo_viewer();
    v.layout();
    v.handle(ViewEvent::ConfigChanged(
        LayoutConfig::default().with_direction(Direction::TB),
    ))
    .unwrap();
    assert_eq!(v.layout().direction, Direction::TB);
    assert_eq!(v.layout_computations(), 2);

    // Same config again keeps the cached layout.
    v.set_config(LayoutConfig::default().with_direction(Direction::TB));
    v.layout();
    assert_eq!(v.layout_computations(), 2);
}

#[test]
fn test_node_click_selects_and_resolves_detail() {
    let mut v = demo_viewer();
    v.handle(ViewEvent::NodeClicked("frontend-rs".into())).unwrap();
    assert_eq!(v.selection().selected(), Some("frontend-rs"));
    let detail = v.detail().unwrap();
    assert_eq!(detail.title, "frontend-7f8d9c");
    assert_eq!(detail.synthetic_pods.len(), 3);
    assert!(v.scene().node("frontend-rs").unwrap().selected);
}

#[test]
fn test_unknown_click_keeps_selection() {
    let mut v = demo_viewer();
    v.node_clicked("db-sts").unwrap();
    let err = v.handle(ViewEvent::NodeClicked("nope".into())).unwrap_err();
    assert_eq!(err.id, "nope");
    assert_eq!(v.selection().selected(), Some("db-sts"));
}

#[test]
fn test_background_click_clears() {
    let mut v = demo_viewer();
    v.node_clicked("app").unwrap();
    v.handle(ViewEvent::BackgroundClicked).unwrap();
    assert_eq!(v.selection().selected(), None);
    assert!(v.detail().is_none());
}

#[test]
fn test_graph_loaded_clears_selection_and_relayouts() {
    let mut v = demo_viewer();
    v.layout();
    v.node_clicked("app").unwrap();
    let before = v.version();

    v.load(small_graph());
    assert_eq!(v.selection().selected(), None);
    assert_eq!(v.version(), before + 1);
    assert_eq!(v.layout().nodes.len(), 2);
    assert_eq!(v.layout_computations(), 2);
    assert!(v.node_clicked("app").is_err());
}

#[test]
fn test_click_at_positions() {
    let mut v = demo_viewer();
    let target = v.layout().node("ingress").unwrap().rect().center();
    v.click_at(target);
    assert_eq!(v.selection().selected(), Some("ingress"));

    v.click_at(crate::layout::Point::new(1.0, 1.0));
    assert_eq!(v.selection().selected(), None);
}

#[test]
fn test_click_at_reuses_layout() {
    let mut v = demo_viewer();
    let target = v.layout().node("db-sts").unwrap().rect().center();
    v.click_at(target);
    v.click_at(target);
    assert_eq!(v.selection().selected(), Some("db-sts"));
    assert_eq!(v.layout_computations(), 1);
}

#[test]
fn test_graph_accessor() {
    let v = Viewer::new(small_graph(), LayoutConfig::default());
    assert_eq!(v.graph().node_count(), 2);
    assert_eq!(v.config(), &LayoutConfig::default());
    assert_eq!(v.version(), 0);
}
