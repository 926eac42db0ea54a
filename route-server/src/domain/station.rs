//! Station identifier, code and record types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Integer identifier of a station; the vertex key of the route graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub i64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StationId {
    fn from(id: i64) -> Self {
        StationId(id)
    }
}

/// A station's short code, such as `EUS` or `GLC`.
///
/// Codes are carried exactly as stored; most are three uppercase letters
/// but nothing relies on it. Lookups compare codes through
/// [`StationCode::normalize`], which ignores surrounding whitespace and case.
///
/// # Examples
///
/// ```
/// use route_server::domain::StationCode;
///
/// let eus = StationCode::new("eus ");
/// assert_eq!(eus.as_str(), "eus ");
/// assert_eq!(eus.lookup_key(), "EUS");
/// assert_eq!(StationCode::normalize(" Eus"), "EUS");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    pub fn new(code: impl Into<String>) -> Self {
        StationCode(code.into())
    }

    /// Returns the code as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The form used to match user input against stored codes.
    pub fn normalize(s: &str) -> String {
        s.trim().to_ascii_uppercase()
    }

    /// This code in normalized form.
    pub fn lookup_key(&self) -> String {
        Self::normalize(&self.0)
    }
}

impl From<&str> for StationCode {
    fn from(code: &str) -> Self {
        StationCode::new(code)
    }
}

impl From<String> for StationCode {
    fn from(code: String) -> Self {
        StationCode(code)
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station as persisted in the store.
///
/// Only `id` matters to the route graph; the remaining fields are carried
/// for display. Two stations are equal when their ids are equal.
#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub code: StationCode,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Station {
    /// Creates a station without coordinates.
    pub fn new(id: StationId, name: impl Into<String>, code: impl Into<StationCode>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Attach coordinates.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_code_as_stored() {
        assert_eq!(StationCode::new("EUS").as_str(), "EUS");
        assert_eq!(StationCode::new("GLA2").as_str(), "GLA2");
        assert_eq!(StationCode::new("eus").as_str(), "eus");
        assert_eq!(StationCode::new("").as_str(), "");
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(StationCode::normalize("  lds\n"), "LDS");
        assert_eq!(StationCode::normalize("Gla2"), "GLA2");
        assert_eq!(StationCode::new(" yrk ").lookup_key(), "YRK");
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::new("YRK");
        assert_eq!(format!("{}", code), "YRK");
        assert_eq!(format!("{:?}", code), "StationCode(YRK)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = StationCode::new("GLA2");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"GLA2\"");
    }

    #[test]
    fn station_equality_is_by_id() {
        let a = Station::new(StationId(5), "Leeds", "LDS");
        let b = Station::new(StationId(5), "Leeds City", "LDS").with_coordinates(53.79, -1.54);
        let c = Station::new(StationId(6), "Leeds", "LDS");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn station_id_display() {
        assert_eq!(StationId(10).to_string(), "10");
        assert_eq!(StationId::from(3), StationId(3));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any stored text survives unchanged
        #[test]
        fn stored_text_is_kept(s in ".{0,12}") {
            let code = StationCode::new(s.clone());
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Case and surrounding whitespace never change the lookup key
        #[test]
        fn lookup_key_ignores_case_and_padding(s in "[a-zA-Z0-9]{1,6}", pad in " {0,3}") {
            let padded = format!("{pad}{}{pad}", s.to_ascii_lowercase());
            prop_assert_eq!(
                StationCode::new(padded).lookup_key(),
                StationCode::new(s.to_ascii_uppercase()).lookup_key()
            );
        }

        /// Normalizing twice is the same as once
        #[test]
        fn normalize_is_idempotent(s in ".{0,12}") {
            let once = StationCode::normalize(&s);
            prop_assert_eq!(StationCode::normalize(&once), once.clone());
        }
    }
}
