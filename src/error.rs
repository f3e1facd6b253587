//! Error and warning taxonomy.
//!
//! Validation errors are fatal to layout, layout warnings ride along with a
//! still-valid result, and an unknown selection is reported but never fatal.

use serde::Serialize;
use thiserror::Error;

/// The input graph cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphValidationError {
    /// One or more edges reference a node id that is not in the graph.
    #[error("edges reference unknown nodes: {}", .edge_ids.join(", "))]
    DanglingEdges { edge_ids: Vec<String> },
    /// Two nodes share the same id.
    #[error("duplicate node id '{id}'")]
    DuplicateNode { id: String },
}

/// A non-fatal condition attached to a layout result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutWarning {
    /// The graph has cycles; these edges were ignored for ranking.
    #[error("graph contains cycles; ignored back-edges for ranking: {}", .edge_ids.join(", "))]
    #[serde(rename_all = "camelCase")]
    DegradedLayoutCycle { edge_ids: Vec<String> },
}

/// `select` was called with an id that is not in the current graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot select unknown node '{id}'")]
pub struct UnknownNodeSelected {
    pub id: String,
}

/// Crate-level error for snapshot loading and the outer surfaces.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] GraphValidationError),
    #[error("invalid graph snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unknown direction '{0}'; use LR or TB")]
    UnknownDirection(String),
    #[error("unknown output format '{0}'; use svg or json")]
    UnknownFormat(String),
    #[error(transparent)]
    UnknownNode(#[from] UnknownNodeSelected),
}
