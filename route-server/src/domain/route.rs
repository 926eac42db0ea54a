//! Route result types.
//!
//! A `RouteResult` is the answer to a single path query: the stations
//! visited in order plus the aggregate cost, if the search was weighted.

use super::StationId;

/// Aggregate cost attached to a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteCost {
    /// Found by fewest-hop search; no cost is tracked.
    Unweighted,
    /// Minimum total duration in minutes.
    Duration(u32),
    /// Minimum total distance in kilometres.
    Distance(f64),
    /// Weighted query whose origin is its destination: every cost is zero.
    Zero,
}

/// A path between two stations.
///
/// # Invariants
///
/// - At least one station (origin == destination gives a single entry)
/// - At most one of duration/distance is set, except for the trivial
///   weighted route where both are zero
///
/// The fields are private so only the constructors below can produce a
/// value, which keeps the cost fields consistent with how the route was
/// found.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    station_ids: Vec<StationId>,
    total_duration_mins: Option<u32>,
    total_distance_km: Option<f64>,
}

impl RouteResult {
    /// A route found by fewest-hop search.
    pub fn unweighted(station_ids: Vec<StationId>) -> Self {
        Self {
            station_ids,
            total_duration_mins: None,
            total_distance_km: None,
        }
    }

    /// A minimum-duration route.
    pub fn by_duration(station_ids: Vec<StationId>, total_mins: u32) -> Self {
        Self {
            station_ids,
            total_duration_mins: Some(total_mins),
            total_distance_km: None,
        }
    }

    /// A minimum-distance route.
    pub fn by_distance(station_ids: Vec<StationId>, total_km: f64) -> Self {
        Self {
            station_ids,
            total_duration_mins: None,
            total_distance_km: Some(total_km),
        }
    }

    /// The weighted answer for origin == destination.
    pub fn trivial_weighted(station: StationId) -> Self {
        Self {
            station_ids: vec![station],
            total_duration_mins: Some(0),
            total_distance_km: Some(0.0),
        }
    }

    /// Station ids from origin to destination, inclusive.
    pub fn station_ids(&self) -> &[StationId] {
        &self.station_ids
    }

    pub fn origin(&self) -> Option<StationId> {
        self.station_ids.first().copied()
    }

    pub fn destination(&self) -> Option<StationId> {
        self.station_ids.last().copied()
    }

    pub fn total_duration_mins(&self) -> Option<u32> {
        self.total_duration_mins
    }

    pub fn total_distance_km(&self) -> Option<f64> {
        self.total_distance_km
    }

    /// Number of segments travelled.
    pub fn segment_count(&self) -> usize {
        self.station_ids.len().saturating_sub(1)
    }

    /// The cost fields as a single value.
    pub fn cost(&self) -> RouteCost {
        match (self.total_duration_mins, self.total_distance_km) {
            (None, None) => RouteCost::Unweighted,
            (Some(mins), None) => RouteCost::Duration(mins),
            (None, Some(km)) => RouteCost::Distance(km),
            (Some(_), Some(_)) => RouteCost::Zero,
        }
    }
}
