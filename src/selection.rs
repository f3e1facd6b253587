//! Which node, if any, is currently selected.

use serde::Serialize;

use crate::error::UnknownNodeSelected;
use crate::model::GraphModel;

/// At most one selected node.
///
/// A selected id always refers to a node of the graph it was selected
/// against; the owner clears the selection whenever that graph is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    selected_id: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if `graph` has such a node. Otherwise the current selection
    /// is kept and `UnknownNodeSelected` is returned; callers may ignore it.
    pub fn select(&mut self, id: &str, graph: &GraphModel) -> Result<(), UnknownNodeSelected> {
        if !graph.contains(id) {
            return Err(UnknownNodeSelected { id: id.to_string() });
        }
        self.selected_id = Some(id.to_string());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_selection.rs"]
mod tests;
