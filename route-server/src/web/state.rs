//! Application state for the web layer.

use std::sync::Arc;

use crate::graph::RouteGraph;
use crate::planner::{PathfindingService, PlannerConfig};
use crate::stations::StationDirectory;
use crate::store::RouteStore;

/// Shared application state.
///
/// The station directory lives in the pathfinder's snapshot next to the
/// graph, so a request resolves and searches against the same load.
pub struct AppState<S> {
    /// Source of stations and segments
    pub store: Arc<S>,

    /// Route searches over the current network
    pub pathfinder: PathfindingService,

    /// Search configuration
    pub config: Arc<PlannerConfig>,
}

// Derived Clone would require `S: Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            pathfinder: self.pathfinder.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: RouteStore> AppState<S> {
    /// Create a new app state from an already loaded network.
    pub fn new(
        store: S,
        directory: StationDirectory,
        graph: RouteGraph,
        config: PlannerConfig,
    ) -> Self {
        Self {
            store: Arc::new(store),
            pathfinder: PathfindingService::with_directory(directory, graph, config.weight),
            config: Arc::new(config),
        }
    }

    /// The current station directory.
    pub async fn directory(&self) -> Arc<StationDirectory> {
        self.pathfinder.directory().await
    }

    /// Swap in a freshly loaded network.
    pub async fn replace_network(&self, directory: StationDirectory, graph: RouteGraph) {
        self.pathfinder
            .replace_network(directory, graph, self.config.weight)
            .await;
    }
}
