//! Web layer for the route finder.
//!
//! Provides JSON endpoints for listing stations, finding routes and
//! reloading the network from the store.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
