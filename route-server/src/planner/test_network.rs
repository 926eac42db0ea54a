//! The seeded ten-station network, as plain segments for search tests.

use crate::domain::{RouteSegment, StationId};
use crate::graph::{EdgeWeight, RouteGraph, build_graph};

/// (from, to, distance km, duration mins), both directions listed.
const SEEDED_LINKS: [(i64, i64, f64, u32); 11] = [
    (1, 2, 170.0, 82),
    (2, 3, 120.0, 88),
    (3, 4, 50.0, 35),
    (3, 6, 60.0, 48),
    (6, 5, 40.0, 35),
    (5, 7, 45.0, 25),
    (7, 8, 80.0, 55),
    (8, 9, 160.0, 90),
    (9, 10, 75.0, 50),
    (2, 6, 95.0, 58),
    (6, 7, 55.0, 38),
];

pub fn seeded_segments() -> Vec<RouteSegment> {
    let mut segments = Vec::new();
    for (from, to, km, mins) in SEEDED_LINKS {
        for (a, b) in [(from, to), (to, from)] {
            let id = segments.len() as i64 + 1;
            segments.push(RouteSegment::new(id, StationId(a), StationId(b), km, mins).unwrap());
        }
    }
    segments
}

pub fn seeded_graph(weight: EdgeWeight) -> RouteGraph {
    build_graph(&seeded_segments(), weight)
}

pub fn ids(raw: &[i64]) -> Vec<StationId> {
    raw.iter().copied().map(StationId).collect()
}
