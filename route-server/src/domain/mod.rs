//! Domain types for the route finder.
//!
//! Stations, the segments that connect them, and the route values returned
//! by path queries. Types enforce their invariants at construction time, so
//! code that receives them can trust their validity.

mod error;
mod route;
mod segment;
mod station;

pub use error::DomainError;
pub use route::{RouteCost, RouteResult};
pub use segment::RouteSegment;
pub use station::{Station, StationCode, StationId};
