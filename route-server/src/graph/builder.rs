//! Graph construction from route segments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::route_graph::RouteGraph;
use crate::domain::{RouteSegment, Station};
use crate::store::{RouteStore, StoreError};

/// Which segment attribute becomes the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeWeight {
    /// Travel time in minutes.
    #[default]
    Duration,
    /// Track distance in kilometres.
    Distance,
}

impl EdgeWeight {
    /// The weight of `segment` under this selection.
    pub fn of(self, segment: &RouteSegment) -> f64 {
        match self {
            EdgeWeight::Duration => f64::from(segment.duration_mins()),
            EdgeWeight::Distance => segment.distance_km(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EdgeWeight::Duration => "duration",
            EdgeWeight::Distance => "distance",
        }
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown weight name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown edge weight {0:?} (expected \"duration\" or \"distance\")")]
pub struct InvalidEdgeWeight(String);

impl FromStr for EdgeWeight {
    type Err = InvalidEdgeWeight;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duration" => Ok(EdgeWeight::Duration),
            "distance" => Ok(EdgeWeight::Distance),
            _ => Err(InvalidEdgeWeight(s.to_string())),
        }
    }
}

/// Build a graph with one directed edge per segment.
///
/// Reverse edges are not synthesized: the data must list both directions
/// of a bidirectional link. Per-station edge order follows input order.
pub fn build_graph<'a>(
    segments: impl IntoIterator<Item = &'a RouteSegment>,
    weight: EdgeWeight,
) -> RouteGraph {
    let mut graph = RouteGraph::new();
    for segment in segments {
        graph.add_edge(segment.from(), segment.to(), weight.of(segment));
    }
    graph
}

/// Fetch stations and segments from `store` and build the graph.
///
/// Store failures are returned unchanged.
pub async fn load_stations_and_graph<S: RouteStore>(
    store: &S,
    weight: EdgeWeight,
) -> Result<(Vec<Station>, RouteGraph), StoreError> {
    let stations = store.fetch_stations().await?;
    let segments = store.fetch_route_segments().await?;
    let graph = build_graph(&segments, weight);

    info!(
        stations = stations.len(),
        segments = segments.len(),
        nodes = graph.all_node_ids().len(),
        %weight,
        "Loaded route network"
    );

    Ok((stations, graph))
}
