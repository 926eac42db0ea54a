//! Store error types.

use crate::domain::DomainError;

/// Errors that can occur when reading the route database.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be opened or created
    #[error("failed to open database {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: sqlx::Error,
    },

    /// A statement failed to prepare or run
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A row was read but does not form a valid domain value
    #[error("invalid {table} row {id}: {source}")]
    InvalidRow {
        table: &'static str,
        id: i64,
        #[source]
        source: DomainError,
    },

    /// The store cannot serve requests
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
