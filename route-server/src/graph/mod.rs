//! Directed route graph and its construction from stored segments.
//!
//! The graph is built wholesale from a complete set of segments each time
//! the network is loaded and is never modified afterwards.

mod builder;
mod route_graph;

pub use builder::{EdgeWeight, InvalidEdgeWeight, build_graph, load_stations_and_graph};
pub use route_graph::{Edge, RouteGraph};
