//! Interactive viewer state: the loaded graph, its memoized layout and the
//! current selection, driven by `ViewEvent`s.

use tracing::debug;

use crate::config::LayoutConfig;
use crate::detail::{self, NodeDetail};
use crate::error::{GraphValidationError, UnknownNodeSelected};
use crate::layout::{self, LayoutResult, Memoized, Point, Versioned};
use crate::model::{GraphModel, GraphSnapshot};
use crate::selection::SelectionState;
use crate::viewport::{self, Scene};

/// Inputs that layout depends on.
pub struct Store {
    pub graph: Versioned<GraphModel>,
    pub config: LayoutConfig,
}

impl Store {
    fn layout_key(&self) -> (u64, LayoutConfig) {
        (self.graph.version(), self.config.clone())
    }
}

/// Events the viewer reacts to.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// Replace the graph; the selection is cleared.
    GraphLoaded(GraphModel),
    /// A node card was clicked.
    NodeClicked(String),
    /// The empty canvas was clicked.
    BackgroundClicked,
    /// Switch layout direction or spacing.
    ConfigChanged(LayoutConfig),
}

pub struct Viewer {
    store: Store,
    layout: Memoized<Store, (u64, LayoutConfig), LayoutResult>,
    selection: SelectionState,
}

impl Viewer {
    pub fn new(graph: GraphModel, config: LayoutConfig) -> Self {
        Self {
            store: Store {
                graph: Versioned::new(graph),
                config,
            },
            layout: Memoized::new(Store::layout_key, |store: &Store| {
                layout::layout(store.graph.get(), &store.config)
            }),
            selection: SelectionState::new(),
        }
    }

    pub fn from_snapshot(
        snapshot: GraphSnapshot,
        config: LayoutConfig,
    ) -> Result<Self, GraphValidationError> {
        Ok(Self::new(snapshot.into_model()?, config))
    }

    /// Apply one event. Only a click on an unknown node fails, and it leaves
    /// the selection as it was.
    pub fn handle(&mut self, event: ViewEvent) -> Result<(), UnknownNodeSelected> {
        match event {
            ViewEvent::GraphLoaded(graph) => {
                self.store.graph.set(graph);
                self.selection.clear();
                debug!(
                    version = self.store.graph.version(),
                    nodes = self.store.graph.get().node_count(),
                    "graph loaded"
                );
            }
            ViewEvent::NodeClicked(id) => {
                if let Err(e) = self.selection.select(&id, self.store.graph.get()) {
                    debug!(id = %e.id, "ignoring click on unknown node");
                    return Err(e);
                }
            }
            ViewEvent::BackgroundClicked => self.selection.clear(),
            ViewEvent::ConfigChanged(config) => self.store.config = config,
        }
        Ok(())
    }

    pub fn load(&mut self, graph: GraphModel) {
        // GraphLoaded never fails.
        let _ = self.handle(ViewEvent::GraphLoaded(graph));
    }

    pub fn node_clicked(&mut self, id: &str) -> Result<(), UnknownNodeSelected> {
        self.handle(ViewEvent::NodeClicked(id.to_string()))
    }

    pub fn background_clicked(&mut self) {
        self.selection.clear();
    }

    /// Resolve a click at `point` in scene coordinates to a node or the
    /// background.
    pub fn click_at(&mut self, point: Point) {
        let hit = self.layout().node_at(point).map(|n| n.id().to_string());
        match hit {
            // The id came from the current layout, so selection cannot fail.
            Some(id) => {
                let _ = self.node_clicked(&id);
            }
            None => self.background_clicked(),
        }
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.store.config = config;
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.store.config
    }

    pub fn graph(&self) -> &GraphModel {
        self.store.graph.get()
    }

    /// Identifies the current graph snapshot; bumps on every load.
    pub fn version(&self) -> u64 {
        self.store.graph.version()
    }

    /// Layout of the current graph, recomputed only when the graph or the
    /// config changed.
    pub fn layout(&mut self) -> &LayoutResult {
        self.layout.get(&self.store)
    }

    pub fn layout_computations(&self) -> u64 {
        self.layout.computations()
    }

    pub fn scene(&mut self) -> Scene {
        let layout = self.layout.get(&self.store);
        viewport::compose(layout, &self.selection)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Detail panel content for the selected node, if any.
    pub fn detail(&self) -> Option<NodeDetail> {
        let id = self.selection.selected()?;
        self.store.graph.get().node(id).map(detail::resolve)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_viewer.rs"]
mod tests;
