//! Resource graph model: records, validation and snapshot loading.

pub mod graph;
pub mod snapshot;
pub mod types;

pub use graph::GraphModel;
pub use snapshot::GraphSnapshot;
pub use types::{Edge, EdgeStyle, Health, Kind, Node, NodeAttrs, SyncStatus};
