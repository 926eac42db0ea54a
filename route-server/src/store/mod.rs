//! Persistent store for stations and route segments.
//!
//! The route graph is built from whatever the store returns; the store
//! itself knows nothing about graphs or searches.

mod error;
mod memory;
pub mod seed;
mod sqlite;

use std::future::Future;

use crate::domain::{RouteSegment, Station};

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

/// Source of the station list and segment list.
///
/// Each fetch returns the complete list or a failure; there is no paging
/// and no partial result.
pub trait RouteStore: Send + Sync {
    /// Fetch every station.
    fn fetch_stations(&self) -> impl Future<Output = Result<Vec<Station>, StoreError>> + Send;

    /// Fetch every directed route segment.
    fn fetch_route_segments(
        &self,
    ) -> impl Future<Output = Result<Vec<RouteSegment>, StoreError>> + Send;
}
