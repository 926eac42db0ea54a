//! In-memory store for tests and database-free runs.

use tracing::debug;

use super::{RouteStore, StoreError};
use crate::domain::{RouteSegment, Station};

/// Store that serves a fixed station and segment list.
///
/// A store built with [`InMemoryStore::failing`] fails every fetch with
/// `StoreError::Unavailable`, which lets callers exercise their error path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    stations: Vec<Station>,
    segments: Vec<RouteSegment>,
    failure: Option<String>,
}

impl InMemoryStore {
    /// Create a store serving the given data.
    pub fn new(stations: Vec<Station>, segments: Vec<RouteSegment>) -> Self {
        Self {
            stations,
            segments,
            failure: None,
        }
    }

    /// Create a store whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl RouteStore for InMemoryStore {
    async fn fetch_stations(&self) -> Result<Vec<Station>, StoreError> {
        self.check()?;
        debug!(count = self.stations.len(), "Serving in-memory stations");
        Ok(self.stations.clone())
    }

    async fn fetch_route_segments(&self) -> Result<Vec<RouteSegment>, StoreError> {
        self.check()?;
        debug!(count = self.segments.len(), "Serving in-memory segments");
        Ok(self.segments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    #[tokio::test]
    async fn serves_given_data() {
        let station = Station::new(StationId(7), "York", "YRK");
        let segment = RouteSegment::new(1, StationId(7), StationId(8), 80.0, 55).unwrap();
        let store = InMemoryStore::new(vec![station.clone()], vec![segment.clone()]);

        assert_eq!(store.fetch_stations().await.unwrap(), vec![station]);
        assert_eq!(store.fetch_route_segments().await.unwrap(), vec![segment]);
    }

    #[tokio::test]
    async fn failing_store_fails_every_fetch() {
        let store = InMemoryStore::failing("disk full");

        assert!(matches!(
            store.fetch_stations().await,
            Err(StoreError::Unavailable(ref m)) if m == "disk full"
        ));
        assert!(store.fetch_route_segments().await.is_err());
    }

    #[tokio::test]
    async fn default_store_is_empty() {
        let store = InMemoryStore::default();
        assert!(store.fetch_stations().await.unwrap().is_empty());
        assert!(store.fetch_route_segments().await.unwrap().is_empty());
    }
}
