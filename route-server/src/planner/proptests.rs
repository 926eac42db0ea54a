//! Property tests for both searches against a Floyd-Warshall oracle.

use proptest::prelude::*;

use super::{find_path_bfs, find_path_weighted};
use crate::domain::{RouteCost, RouteResult, RouteSegment, StationId};
use crate::graph::{EdgeWeight, RouteGraph, build_graph};

const MAX_NODES: i64 = 7;

/// Random small networks: node ids 1..=n, integer weights so sums are exact.
fn network() -> impl Strategy<Value = (i64, Vec<RouteSegment>)> {
    (1..=MAX_NODES).prop_flat_map(|n| {
        let edge = (1..=n, 1..=n, 0u32..20);
        (Just(n), proptest::collection::vec(edge, 0..25)).prop_map(|(n, edges)| {
            let segments = edges
                .into_iter()
                .enumerate()
                .map(|(i, (from, to, w))| {
                    RouteSegment::new(i as i64, StationId(from), StationId(to), f64::from(w), w)
                        .unwrap()
                })
                .collect();
            (n, segments)
        })
    })
}

/// All-pairs shortest costs; `unit` counts hops instead of weights.
fn all_pairs(n: i64, graph: &RouteGraph, unit: bool) -> Vec<Vec<f64>> {
    let size = n as usize + 1;
    let mut dist = vec![vec![f64::INFINITY; size]; size];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for from in 1..=n {
        for edge in graph.neighbours(StationId(from)) {
            let w = if unit { 1.0 } else { edge.weight };
            let cell = &mut dist[from as usize][edge.to.0 as usize];
            *cell = cell.min(w);
        }
    }
    for k in 1..size {
        for i in 1..size {
            for j in 1..size {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }
    dist
}

/// Sum of the cheapest edge between each consecutive pair, or `None` if
/// some pair is not connected.
fn path_cost(graph: &RouteGraph, route: &RouteResult) -> Option<f64> {
    route
        .station_ids()
        .windows(2)
        .map(|pair| {
            graph
                .neighbours(pair[0])
                .iter()
                .filter(|e| e.to == pair[1])
                .map(|e| e.weight)
                .reduce(f64::min)
        })
        .sum()
}

proptest! {
    /// BFS returns exactly the minimum hop count, over real edges
    #[test]
    fn bfs_is_minimal((n, segments) in network()) {
        let graph = build_graph(&segments, EdgeWeight::Duration);
        let hops = all_pairs(n, &graph, true);

        for o in 1..=n {
            for d in 1..=n {
                let route = find_path_bfs(&graph, StationId(o), StationId(d));
                let best = hops[o as usize][d as usize];
                match route {
                    None => prop_assert!(best.is_infinite()),
                    Some(route) => {
                        prop_assert_eq!(route.origin(), Some(StationId(o)));
                        prop_assert_eq!(route.destination(), Some(StationId(d)));
                        prop_assert_eq!(route.segment_count() as f64, best);
                        prop_assert!(path_cost(&graph, &route).is_some());
                        prop_assert_eq!(route.cost(), RouteCost::Unweighted);
                    }
                }
            }
        }
    }

    /// Dijkstra returns exactly the minimum total weight, over real edges
    #[test]
    fn dijkstra_is_minimal((n, segments) in network()) {
        let graph = build_graph(&segments, EdgeWeight::Distance);
        let costs = all_pairs(n, &graph, false);

        for o in 1..=n {
            for d in 1..=n {
                let route = find_path_weighted(&graph, StationId(o), StationId(d), EdgeWeight::Distance);
                let best = costs[o as usize][d as usize];
                match route {
                    None => prop_assert!(best.is_infinite()),
                    Some(route) => {
                        prop_assert_eq!(route.origin(), Some(StationId(o)));
                        prop_assert_eq!(route.destination(), Some(StationId(d)));
                        prop_assert_eq!(route.total_distance_km(), Some(best));
                        prop_assert_eq!(path_cost(&graph, &route), Some(best));
                    }
                }
            }
        }
    }

    /// The cost field filled in follows the weight the graph was built with
    #[test]
    fn weight_selection_picks_cost_field((n, segments) in network()) {
        let by_duration = build_graph(&segments, EdgeWeight::Duration);
        let by_distance = build_graph(&segments, EdgeWeight::Distance);

        for o in 1..=n {
            for d in (1..=n).filter(|&d| d != o) {
                if let Some(route) = find_path_weighted(&by_duration, StationId(o), StationId(d), EdgeWeight::Duration) {
                    prop_assert!(route.total_duration_mins().is_some());
                    prop_assert!(route.total_distance_km().is_none());
                }
                if let Some(route) = find_path_weighted(&by_distance, StationId(o), StationId(d), EdgeWeight::Distance) {
                    prop_assert!(route.total_duration_mins().is_none());
                    prop_assert!(route.total_distance_km().is_some());
                }
            }
        }
    }

    /// Searching twice gives the same answer
    #[test]
    fn searches_are_idempotent((n, segments) in network()) {
        let graph = build_graph(&segments, EdgeWeight::Duration);

        for o in 1..=n {
            for d in 1..=n {
                prop_assert_eq!(
                    find_path_bfs(&graph, StationId(o), StationId(d)),
                    find_path_bfs(&graph, StationId(o), StationId(d))
                );
                prop_assert_eq!(
                    find_path_weighted(&graph, StationId(o), StationId(d), EdgeWeight::Duration),
                    find_path_weighted(&graph, StationId(o), StationId(d), EdgeWeight::Duration)
                );
            }
        }
    }

    /// segment_count is always one less than the number of stations
    #[test]
    fn segment_count_matches_length((n, segments) in network()) {
        let graph = build_graph(&segments, EdgeWeight::Duration);
        for o in 1..=n {
            for d in 1..=n {
                for route in [
                    find_path_bfs(&graph, StationId(o), StationId(d)),
                    find_path_weighted(&graph, StationId(o), StationId(d), EdgeWeight::Duration),
                ]
                .into_iter()
                .flatten()
                {
                    prop_assert_eq!(route.segment_count(), route.station_ids().len() - 1);
                }
            }
        }
    }
}
