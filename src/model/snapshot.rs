//! Plain-data graph snapshot, as supplied by a data source.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::graph::GraphModel;
use super::types::{Edge, Node};
use crate::error::{Error, GraphValidationError};

/// Unvalidated `{ "nodes": [...], "edges": [...] }` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn from_json(src: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and freeze the snapshot.
    pub fn into_model(self) -> Result<GraphModel, GraphValidationError> {
        GraphModel::new(self.nodes, self.edges)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_model_snapshot.rs"]
mod tests;
