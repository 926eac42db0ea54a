//! Route planner: fewest-hop and minimum-cost search.
//!
//! Both searches are pure functions of a built `RouteGraph` and an
//! origin/destination pair. `PathfindingService` wraps them around a graph
//! snapshot that can be swapped when the network is reloaded.

mod bfs;
mod config;
mod dijkstra;
mod path;
mod service;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_network;

pub use bfs::find_path_bfs;
pub use config::{Algorithm, InvalidAlgorithm, PlannerConfig};
pub use dijkstra::find_path_weighted;
pub use service::{GraphSnapshot, PathfindingService};
