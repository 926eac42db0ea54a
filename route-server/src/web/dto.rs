//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Station, StationId};
use crate::stations::StationDirectory;

/// Query for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station id or code
    pub from: String,

    /// Destination station id or code
    pub to: String,

    /// "bfs" or "dijkstra" (defaults to the configured algorithm)
    pub algorithm: Option<String>,
}

/// A station on a returned route.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StationInfo {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl StationInfo {
    /// Describe `id`, falling back to placeholders for unknown stations.
    pub fn lookup(directory: &StationDirectory, id: StationId) -> Self {
        Self {
            id: id.0,
            code: directory.code(id),
            name: directory.name(id),
        }
    }
}

/// A route found between two stations.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Stations from origin to destination
    pub stations: Vec<StationInfo>,

    /// Station names joined with arrows (e.g., "London Euston → Birmingham New Street")
    pub summary: String,

    /// Number of segments travelled
    pub segment_count: usize,

    /// Total minutes, for duration-weighted searches
    pub total_duration_mins: Option<u32>,

    /// Total kilometres, for distance-weighted searches
    pub total_distance_km: Option<f64>,

    /// Algorithm used ("bfs" or "dijkstra")
    pub algorithm: String,
}

/// A station in the station list.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationView {
    pub id: i64,

    /// Station code as stored (usually three letters)
    pub code: String,

    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&Station> for StationView {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.0,
            code: station.code.to_string(),
            name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
        }
    }
}

/// Station list response.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationsResponse {
    pub stations: Vec<StationView>,
}

/// Result of reloading the network from the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    /// Stations loaded
    pub stations: usize,

    /// Stations appearing in at least one segment
    pub nodes: usize,

    /// Directed edges in the new graph
    pub edges: usize,

    /// Stations with no segment in either direction
    pub isolated_stations: usize,

    /// When the reload finished (RFC 3339)
    pub loaded_at: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
