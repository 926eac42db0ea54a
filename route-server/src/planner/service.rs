//! Route queries against a swappable network snapshot.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::bfs::find_path_bfs;
use super::config::Algorithm;
use super::dijkstra::find_path_weighted;
use crate::domain::{RouteResult, StationId};
use crate::graph::{EdgeWeight, RouteGraph};
use crate::stations::StationDirectory;

/// A built graph, the attribute its edges are weighted by, and the stations
/// it was loaded with.
///
/// The three are always replaced together, so a snapshot never pairs a
/// directory with a graph from a different load.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    pub graph: Arc<RouteGraph>,
    pub weight: EdgeWeight,
    pub directory: Arc<StationDirectory>,
}

impl GraphSnapshot {
    /// Find a route in this snapshot with the given algorithm.
    ///
    /// Weighted search reports the cost in the unit the graph was built with.
    pub fn find_route(
        &self,
        origin: StationId,
        destination: StationId,
        algorithm: Algorithm,
    ) -> Option<RouteResult> {
        match algorithm {
            Algorithm::Bfs => find_path_bfs(&self.graph, origin, destination),
            Algorithm::Dijkstra => {
                find_path_weighted(&self.graph, origin, destination, self.weight)
            }
        }
    }
}

/// Thread-safe route planner over the current network.
///
/// Each query takes a cheap `Arc` clone of the current snapshot and
/// searches it without holding the lock. A reload never blocks behind a
/// running search, and a running search never sees a half-replaced network.
#[derive(Clone)]
pub struct PathfindingService {
    current: Arc<RwLock<GraphSnapshot>>,
}

impl PathfindingService {
    /// Create a service over `graph`, whose edges carry `weight`, with no
    /// station directory.
    pub fn new(graph: RouteGraph, weight: EdgeWeight) -> Self {
        Self::with_directory(StationDirectory::default(), graph, weight)
    }

    /// Create a service over `graph` and the stations it was loaded with.
    pub fn with_directory(directory: StationDirectory, graph: RouteGraph, weight: EdgeWeight) -> Self {
        Self {
            current: Arc::new(RwLock::new(GraphSnapshot {
                graph: Arc::new(graph),
                weight,
                directory: Arc::new(directory),
            })),
        }
    }

    /// Replace the graph wholesale, keeping the current directory.
    ///
    /// Queries already running keep searching the previous snapshot.
    pub async fn replace_graph(&self, graph: RouteGraph, weight: EdgeWeight) {
        let edges = graph.edge_count();
        let graph = Arc::new(graph);

        let mut guard = self.current.write().await;
        let directory = Arc::clone(&guard.directory);
        *guard = GraphSnapshot {
            graph,
            weight,
            directory,
        };

        info!(edges, %weight, "Replaced route graph");
    }

    /// Replace the graph and the station directory in one step.
    pub async fn replace_network(
        &self,
        directory: StationDirectory,
        graph: RouteGraph,
        weight: EdgeWeight,
    ) {
        let stations = directory.len();
        let edges = graph.edge_count();
        let snapshot = GraphSnapshot {
            graph: Arc::new(graph),
            weight,
            directory: Arc::new(directory),
        };

        *self.current.write().await = snapshot;

        info!(stations, edges, %weight, "Replaced route network");
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> GraphSnapshot {
        self.current.read().await.clone()
    }

    /// The current graph.
    pub async fn graph(&self) -> Arc<RouteGraph> {
        self.current.read().await.graph.clone()
    }

    /// The current station directory.
    pub async fn directory(&self) -> Arc<StationDirectory> {
        self.current.read().await.directory.clone()
    }

    /// The attribute the current graph is weighted by.
    pub async fn weight(&self) -> EdgeWeight {
        self.current.read().await.weight
    }

    /// Find a route in the current snapshot with the given algorithm.
    pub async fn find_route(
        &self,
        origin: StationId,
        destination: StationId,
        algorithm: Algorithm,
    ) -> Option<RouteResult> {
        self.snapshot()
            .await
            .find_route(origin, destination, algorithm)
    }
}
