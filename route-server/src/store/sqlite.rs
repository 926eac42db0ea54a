//! SQLite-backed route store.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::FromRow;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::{RouteStore, StoreError};
use crate::domain::{RouteSegment, Station, StationCode, StationId};

const STATIONS_QUERY: &str =
    "SELECT id, name, code, latitude, longitude FROM stations ORDER BY name";

const SEGMENTS_QUERY: &str = "SELECT id, from_station_id, to_station_id, \
     CAST(distance_km AS REAL) AS distance_km, duration_mins \
     FROM route_segments ORDER BY id";

/// Row shape of the `stations` table.
#[derive(Debug, FromRow)]
struct StationRow {
    id: i64,
    name: String,
    code: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station {
            id: StationId(row.id),
            name: row.name,
            code: StationCode::from(row.code),
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// Row shape of the `route_segments` table.
#[derive(Debug, FromRow)]
struct SegmentRow {
    id: i64,
    from_station_id: i64,
    to_station_id: i64,
    distance_km: f64,
    duration_mins: i64,
}

impl SegmentRow {
    fn into_segment(self) -> Result<RouteSegment, StoreError> {
        RouteSegment::from_columns(
            self.id,
            self.from_station_id,
            self.to_station_id,
            self.distance_km,
            self.duration_mins,
        )
        .map_err(|source| StoreError::InvalidRow {
            table: "route_segments",
            id: self.id,
            source,
        })
    }
}

/// Route store backed by an SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database at `path`, creating the file if it does not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Open {
                path: path.display().to_string(),
                source,
            })?;

        info!(path = %path.display(), "Opened route database");
        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// The pool keeps a single connection alive for its whole lifetime;
    /// the data disappears when the store is dropped.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let open_err = |source: sqlx::Error| StoreError::Open {
            path: ":memory:".to_string(),
            source,
        };

        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(open_err)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(open_err)?;

        Ok(Self { pool })
    }

    /// Number of tables called `name` (0 or 1).
    pub async fn table_count(&self, name: &str) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Run every statement of `script` in one transaction.
    ///
    /// The script goes to SQLite as a whole, so semicolons inside string
    /// literals and comments are fine.
    pub async fn execute_script(&self, script: &str) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::raw_sql(script).execute(&mut *tx).await?;
        tx.commit().await?;

        debug!(rows = result.rows_affected(), "Executed SQL script");
        Ok(())
    }

    /// Create the schema and load the seed if the database is new.
    ///
    /// A database counts as new when it has no `stations` table. Returns
    /// whether initialization ran.
    pub async fn initialize_if_needed(&self, schema: &str, seed: &str) -> Result<bool, StoreError> {
        if self.table_count("stations").await? > 0 {
            debug!("Route database already initialized");
            return Ok(false);
        }

        self.execute_script(schema).await?;
        self.execute_script(seed).await?;
        info!("Initialized route database from schema and seed");
        Ok(true)
    }
}

impl RouteStore for SqliteStore {
    async fn fetch_stations(&self) -> Result<Vec<Station>, StoreError> {
        let rows = sqlx::query_as::<_, StationRow>(STATIONS_QUERY)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Station::from).collect())
    }

    async fn fetch_route_segments(&self) -> Result<Vec<RouteSegment>, StoreError> {
        let rows = sqlx::query_as::<_, SegmentRow>(SEGMENTS_QUERY)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(SegmentRow::into_segment).collect()
    }
}
