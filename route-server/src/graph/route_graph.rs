//! Adjacency-list graph keyed by station id.

use std::collections::{HashMap, HashSet};

use crate::domain::StationId;

/// A directed edge to a neighbouring station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// The station this edge leads to.
    pub to: StationId,
    /// Cost of traversing the edge (minutes or kilometres).
    pub weight: f64,
}

/// A directed graph of stations.
///
/// Edges are stored per origin station in insertion order. Parallel edges
/// between the same pair are kept as given. A station with no outgoing
/// edges has no entry but can still be the target of other edges.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<StationId, Vec<Edge>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directed edge `from → to`.
    ///
    /// The weight is expected to be finite and non-negative; it is not
    /// checked here.
    pub fn add_edge(&mut self, from: StationId, to: StationId, weight: f64) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
    }

    /// Outgoing edges of `of`, empty if it has none or is unknown.
    pub fn neighbours(&self, of: StationId) -> &[Edge] {
        self.adjacency.get(&of).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every station id that appears as either end of an edge.
    pub fn all_node_ids(&self) -> HashSet<StationId> {
        let mut ids = HashSet::new();
        for (from, edges) in &self.adjacency {
            ids.insert(*from);
            ids.extend(edges.iter().map(|e| e.to));
        }
        ids
    }

    /// Whether `id` appears as either end of any edge.
    pub fn contains_node(&self, id: StationId) -> bool {
        self.adjacency.contains_key(&id)
            || self
                .adjacency
                .values()
                .any(|edges| edges.iter().any(|e| e.to == id))
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> StationId {
        StationId(n)
    }

    #[test]
    fn empty_graph() {
        let graph = RouteGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.all_node_ids().is_empty());
        assert!(graph.neighbours(id(1)).is_empty());
    }

    #[test]
    fn add_and_lookup() {
        let mut graph = RouteGraph::new();
        graph.add_edge(id(1), id(2), 82.0);

        assert!(!graph.is_empty());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            graph.neighbours(id(1)),
            &[Edge {
                to: id(2),
                weight: 82.0
            }]
        );
    }

    #[test]
    fn edges_are_directed() {
        let mut graph = RouteGraph::new();
        graph.add_edge(id(1), id(2), 82.0);

        // Destination-only node has no outgoing edges but is still a node
        assert!(graph.neighbours(id(2)).is_empty());
        assert!(graph.contains_node(id(2)));
        assert!(!graph.contains_node(id(3)));
    }

    #[test]
    fn neighbours_keep_insertion_order() {
        let mut graph = RouteGraph::new();
        graph.add_edge(id(2), id(1), 82.0);
        graph.add_edge(id(2), id(3), 88.0);
        graph.add_edge(id(2), id(6), 58.0);

        let targets: Vec<_> = graph.neighbours(id(2)).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![id(1), id(3), id(6)]);
    }

    #[test]
    fn parallel_edges_are_not_deduplicated() {
        let mut graph = RouteGraph::new();
        graph.add_edge(id(1), id(2), 82.0);
        graph.add_edge(id(1), id(2), 90.0);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbours(id(1)).len(), 2);
    }

    #[test]
    fn all_node_ids_includes_both_ends() {
        let mut graph = RouteGraph::new();
        graph.add_edge(id(1), id(2), 1.0);
        graph.add_edge(id(3), id(4), 1.0);

        let ids = graph.all_node_ids();
        assert_eq!(ids, HashSet::from([id(1), id(2), id(3), id(4)]));
    }
}
