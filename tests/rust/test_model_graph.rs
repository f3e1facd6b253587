use super::*;
use crate::model::Kind;

fn pod(id: &str) -> Node {
    Node::new(id, Kind::Pod, id)
}

fn chain() -> GraphModel {
    GraphModel::new(
        vec![pod("a"), pod("b"), pod("c")],
        vec![Edge::new("e1", "a", "b"), Edge::new("e2", "b", "c")],
    )
    .unwrap()
}

#[test]
fn test_graph_counts() {
    let g = chain();
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert!(!g.is_empty());
}

#[test]
fn test_empty_graph() {
    let g = GraphModel::new(vec![], vec![]).unwrap();
    assert!(g.is_empty());
    assert_eq!(g.nodes().count(), 0);
    assert!(g.is_dag());
}

#[test]
fn test_nodes_and_edges_in_input_order() {
    let g = GraphModel::new(
        vec![pod("z"), pod("a"), pod("m")],
        vec![Edge::new("e2", "m", "a"), Edge::new("e1", "z", "m")],
    )
    .unwrap();
    let ids: Vec<&str> = g.nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
    let eids: Vec<&str> = g.edges().map(|e| e.id.as_str()).collect();
    assert_eq!(eids, vec!["e2", "e1"]);
    assert_eq!(g.position("m"), Some(2));
}

#[test]
fn test_lookup() {
    let g = chain();
    assert_eq!(g.node("b").map(|n| n.name.as_str()), Some("b"));
    assert!(g.contains("c"));
    assert!(!g.contains("x"));
    assert!(g.node("x").is_none());
}

#[test]
fn test_successors_and_predecessors() {
    let g = GraphModel::new(
        vec![pod("a"), pod("b"), pod("c")],
        vec![
            Edge::new("e1", "a", "c"),
            Edge::new("e2", "a", "b"),
            Edge::new("e3", "b", "c"),
        ],
    )
    .unwrap();
    assert_eq!(g.successors("a"), vec!["c", "b"]);
    assert_eq!(g.predecessors("c"), vec!["a", "b"]);
    assert!(g.successors("c").is_empty());
    assert!(g.successors("missing").is_empty());
}

#[test]
fn test_dangling_edges_all_reported() {
    let err = GraphModel::new(
        vec![pod("a")],
        vec![
            Edge::new("e1", "a", "ghost"),
            Edge::new("e2", "a", "a"),
            Edge::new("e3", "nobody", "a"),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err,
        GraphValidationError::DanglingEdges {
            edge_ids: vec!["e1".to_string(), "e3".to_string()]
        }
    );
    assert!(err.to_string().contains("e1, e3"));
}

#[test]
fn test_duplicate_node_rejected() {
    let err = GraphModel::new(vec![pod("a"), pod("a")], vec![]).unwrap_err();
    assert_eq!(err, GraphValidationError::DuplicateNode { id: "a".to_string() });
}

#[test]
fn test_is_dag() {
    assert!(chain().is_dag());
    let cyclic = GraphModel::new(
        vec![pod("a"), pod("b")],
        vec![Edge::new("e1", "a", "b"), Edge::new("e2", "b", "a")],
    )
    .unwrap();
    assert!(!cyclic.is_dag());
}

#[test]
fn test_edge_endpoints_use_positions() {
    let g = chain();
    assert_eq!(g.edge_endpoints(), vec![(0, 0, 1), (1, 1, 2)]);
    assert_eq!(g.node_at(2).id, "c");
    assert_eq!(g.edge_at(1).id, "e2");
}
