//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::graph::{EdgeWeight, InvalidEdgeWeight};
use crate::planner::{Algorithm, InvalidAlgorithm, PlannerConfig};

/// Listen address used when `ROUTE_SERVER_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Database file used when `ROUTE_DB_PATH` is unset.
const DEFAULT_DB_PATH: &str = "trainapp.db";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address does not parse
    #[error("invalid ROUTE_SERVER_ADDR {value:?}: {source}")]
    Addr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Weight name does not parse
    #[error("invalid ROUTE_WEIGHT: {0}")]
    Weight(#[from] InvalidEdgeWeight),

    /// Algorithm name does not parse
    #[error("invalid ROUTE_ALGORITHM: {0}")]
    Algorithm(#[from] InvalidAlgorithm),
}

/// Configuration for the route server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// SQLite database file; created and seeded if missing.
    pub database_path: PathBuf,

    /// Optional schema script replacing the built-in one.
    pub schema_path: Option<PathBuf>,

    /// Optional seed script replacing the built-in one.
    pub seed_path: Option<PathBuf>,

    /// Search settings.
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Unset and empty variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = get("ROUTE_SERVER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::Addr {
                value: addr.clone(),
                source,
            })?;

        let weight = get("ROUTE_WEIGHT")
            .map(|v| v.parse::<EdgeWeight>())
            .transpose()?
            .unwrap_or_default();

        let default_algorithm = get("ROUTE_ALGORITHM")
            .map(|v| v.parse::<Algorithm>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            database_path: get("ROUTE_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            schema_path: get("ROUTE_SCHEMA_PATH").map(PathBuf::from),
            seed_path: get("ROUTE_SEED_PATH").map(PathBuf::from),
            planner: PlannerConfig::new(weight, default_algorithm),
        })
    }
}
