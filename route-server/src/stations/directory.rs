//! Station lookup by id or code, and route formatting.

use std::collections::HashMap;

use crate::domain::{Station, StationCode, StationId};

/// Separator placed between station names in a formatted route.
const PATH_SEPARATOR: &str = " → ";

/// Immutable station lookup built from the store's station list.
///
/// Stations keep the order the store returned them in. If two stations
/// share an id, the later one wins in lookups.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: Vec<Station>,
    by_id: HashMap<StationId, usize>,
    by_code: HashMap<String, usize>,
}

impl StationDirectory {
    /// Build a directory from a station list.
    pub fn new(stations: Vec<Station>) -> Self {
        let by_id = stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        let by_code = stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.code.lookup_key(), i))
            .collect();

        Self {
            stations,
            by_id,
            by_code,
        }
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id).map(|&i| &self.stations[i])
    }

    /// Look up a station by code, ignoring case and surrounding whitespace.
    pub fn by_code(&self, code: &str) -> Option<&Station> {
        self.by_code
            .get(&StationCode::normalize(code))
            .map(|&i| &self.stations[i])
    }

    /// Resolve user input: a numeric id, or a station code in any case.
    pub fn resolve(&self, query: &str) -> Option<&Station> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if let Ok(id) = query.parse::<i64>() {
            return self.get(StationId(id));
        }
        self.by_code(query)
    }

    /// Display name, or `"Station {id}"` for unknown ids.
    pub fn name(&self, id: StationId) -> String {
        self.get(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("Station {id}"))
    }

    /// Station code, or `"?"` for unknown ids.
    pub fn code(&self, id: StationId) -> String {
        self.get(id)
            .map(|s| s.code.to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Format a route as `"A → B → C"` using station names.
    pub fn format_path(&self, ids: &[StationId]) -> String {
        ids.iter()
            .map(|&id| self.name(id))
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR)
    }

    /// All stations, in store order.
    pub fn all(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
