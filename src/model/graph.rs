//! GraphModel: validated, immutable resource graph.
//!
//! Wraps a petgraph DiGraph. Node and edge indices follow input order, which
//! the layout relies on for deterministic tie-breaking.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{Edge, Node};
use crate::error::GraphValidationError;

#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    digraph: DiGraph<Node, Edge>,
    /// Maps node id → petgraph NodeIndex.
    node_index: HashMap<String, NodeIndex>,
}

impl GraphModel {
    /// Build a model, rejecting duplicate node ids and dangling edge endpoints.
    ///
    /// Every dangling edge is reported, not only the first one.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphValidationError> {
        let mut digraph: DiGraph<Node, Edge> = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut node_index: HashMap<String, NodeIndex> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            if node_index.contains_key(&node.id) {
                return Err(GraphValidationError::DuplicateNode { id: node.id });
            }
            let id = node.id.clone();
            let idx = digraph.add_node(node);
            node_index.insert(id, idx);
        }

        let dangling: Vec<String> = edges
            .iter()
            .filter(|e| !node_index.contains_key(&e.source) || !node_index.contains_key(&e.target))
            .map(|e| e.id.clone())
            .collect();
        if !dangling.is_empty() {
            return Err(GraphValidationError::DanglingEdges { edge_ids: dangling });
        }

        for edge in edges {
            let from = node_index[&edge.source];
            let to = node_index[&edge.target];
            digraph.add_edge(from, to, edge);
        }

        Ok(Self {
            digraph,
            node_index,
        })
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.digraph.node_count() == 0
    }

    /// Nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.digraph.node_indices().map(move |idx| &self.digraph[idx])
    }

    /// Edges in input order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.digraph.edge_indices().map(move |idx| &self.digraph[idx])
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.digraph[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Successor ids, in edge input order.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, petgraph::Direction::Outgoing)
    }

    /// Predecessor ids, in edge input order.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, petgraph::Direction::Incoming)
    }

    /// Returns true if the graph has no directed cycles.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    /// Position of a node in input order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).map(|idx| idx.index())
    }

    /// (edge position, source position, target position) for every edge, in
    /// input order.
    pub(crate) fn edge_endpoints(&self) -> Vec<(usize, usize, usize)> {
        self.digraph
            .edge_references()
            .map(|e| (e.id().index(), e.source().index(), e.target().index()))
            .collect()
    }

    pub(crate) fn node_at(&self, position: usize) -> &Node {
        &self.digraph[NodeIndex::new(position)]
    }

    pub(crate) fn edge_at(&self, position: usize) -> &Edge {
        &self.digraph[EdgeIndex::new(position)]
    }

    fn neighbors(&self, id: &str, dir: petgraph::Direction) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        let mut found: Vec<(usize, &str)> = self
            .digraph
            .edges_directed(idx, dir)
            .map(|e| {
                let other = match dir {
                    petgraph::Direction::Outgoing => e.target(),
                    petgraph::Direction::Incoming => e.source(),
                };
                (e.id().index(), self.digraph[other].id.as_str())
            })
            .collect();
        found.sort_by_key(|(edge_pos, _)| *edge_pos);
        found.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_model_graph.rs"]
mod tests;
