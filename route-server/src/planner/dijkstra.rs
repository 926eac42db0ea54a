//! Minimum-cost route search (Dijkstra).
//!
//! The frontier is a binary min-heap keyed on tentative cost. Relaxing an
//! edge pushes a fresh entry rather than updating the old one, so a station
//! can sit in the heap several times; only the entry matching its best
//! known cost is expanded and the rest are skipped when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use super::path::reconstruct_path;
use crate::domain::{RouteResult, StationId};
use crate::graph::{EdgeWeight, RouteGraph};

/// Heap entry: a station and the cost of the best path found to it so far.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    cost: f64,
    station: StationId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the cheapest entry; station id breaks ties
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Find the minimum-cost route from `origin` to `destination`.
///
/// `weight` names the attribute the graph's edge weights were built from
/// and decides which cost field of the result is filled in. Edge weights
/// must be non-negative.
///
/// Returns a single-station route with both costs zero when origin and
/// destination coincide, and `None` when the destination cannot be reached
/// (including when either station is absent from the graph).
pub fn find_path_weighted(
    graph: &RouteGraph,
    origin: StationId,
    destination: StationId,
    weight: EdgeWeight,
) -> Option<RouteResult> {
    if origin == destination {
        return Some(RouteResult::trivial_weighted(origin));
    }

    let mut best: HashMap<StationId, f64> = HashMap::from([(origin, 0.0)]);
    let mut predecessors: HashMap<StationId, StationId> = HashMap::new();
    let mut frontier = BinaryHeap::from([FrontierEntry {
        cost: 0.0,
        station: origin,
    }]);
    let mut expanded = 0usize;

    while let Some(FrontierEntry { cost, station }) = frontier.pop() {
        if best.get(&station).is_some_and(|&known| cost > known) {
            continue;
        }
        expanded += 1;

        if station == destination {
            let path = reconstruct_path(&predecessors, origin, destination);
            debug!(
                %origin,
                %destination,
                %weight,
                cost,
                hops = path.len() - 1,
                expanded,
                "Dijkstra found route"
            );
            return Some(match weight {
                EdgeWeight::Duration => RouteResult::by_duration(path, cost.round() as u32),
                EdgeWeight::Distance => RouteResult::by_distance(path, cost),
            });
        }

        for edge in graph.neighbours(station) {
            let candidate = cost + edge.weight;
            let current = best.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                best.insert(edge.to, candidate);
                predecessors.insert(edge.to, station);
                frontier.push(FrontierEntry {
                    cost: candidate,
                    station: edge.to,
                });
            }
        }
    }

    debug!(%origin, %destination, %weight, expanded, "Dijkstra found no route");
    None
}
