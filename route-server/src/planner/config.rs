//! Search configuration for the route planner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::EdgeWeight;

/// Path search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fewest segments, ignoring weights.
    Bfs,
    /// Minimum total weight.
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected \"bfs\" or \"dijkstra\")")]
pub struct InvalidAlgorithm(String);

impl FromStr for Algorithm {
    type Err = InvalidAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            _ => Err(InvalidAlgorithm(s.to_string())),
        }
    }
}

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Segment attribute used as edge weight when the graph is built.
    pub weight: EdgeWeight,

    /// Algorithm used when a request does not name one.
    pub default_algorithm: Algorithm,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(weight: EdgeWeight, default_algorithm: Algorithm) -> Self {
        Self {
            weight,
            default_algorithm,
        }
    }
}
