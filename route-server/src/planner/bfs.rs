//! Fewest-segment route search.
//!
//! Breadth-first traversal from the origin. Stations are discovered in
//! non-decreasing hop count, so the first time the destination is
//! discovered the path to it has the minimum number of segments.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use super::path::reconstruct_path;
use crate::domain::{RouteResult, StationId};
use crate::graph::RouteGraph;

/// Find a route from `origin` to `destination` with the fewest segments.
///
/// Returns a single-station route with no cost when origin and destination
/// coincide, and `None` when the destination cannot be reached (including
/// when either station is absent from the graph). Among equally short
/// routes, the one found first in neighbour order wins.
pub fn find_path_bfs(
    graph: &RouteGraph,
    origin: StationId,
    destination: StationId,
) -> Option<RouteResult> {
    if origin == destination {
        return Some(RouteResult::unweighted(vec![origin]));
    }

    let mut visited: HashSet<StationId> = HashSet::from([origin]);
    let mut predecessors: HashMap<StationId, StationId> = HashMap::new();
    let mut queue: VecDeque<StationId> = VecDeque::from([origin]);
    let mut expanded = 0usize;

    while let Some(station) = queue.pop_front() {
        expanded += 1;

        for edge in graph.neighbours(station) {
            if !visited.insert(edge.to) {
                continue;
            }
            predecessors.insert(edge.to, station);

            if edge.to == destination {
                let path = reconstruct_path(&predecessors, origin, destination);
                debug!(
                    %origin,
                    %destination,
                    hops = path.len() - 1,
                    expanded,
                    "BFS found route"
                );
                return Some(RouteResult::unweighted(path));
            }

            queue.push_back(edge.to);
        }
    }

    debug!(%origin, %destination, expanded, "BFS found no route");
    None
}
