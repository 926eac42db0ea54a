//! Route segment records.

use super::{DomainError, StationId};

/// A directed, measured connection between two stations.
///
/// Segments are one-directional: a bidirectional link is stored as two
/// segments. Distance is validated at construction to be finite and
/// non-negative; duration is whole minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    id: i64,
    from: StationId,
    to: StationId,
    distance_km: f64,
    duration_mins: u32,
}

impl RouteSegment {
    /// Creates a segment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDistance` if `distance_km` is negative,
    /// NaN or infinite.
    pub fn new(
        id: i64,
        from: StationId,
        to: StationId,
        distance_km: f64,
        duration_mins: u32,
    ) -> Result<Self, DomainError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(DomainError::InvalidDistance {
                segment: id,
                distance_km,
            });
        }

        Ok(Self {
            id,
            from,
            to,
            distance_km,
            duration_mins,
        })
    }

    /// Creates a segment from raw store columns, checking that the duration
    /// fits in whole non-negative minutes.
    pub fn from_columns(
        id: i64,
        from: i64,
        to: i64,
        distance_km: f64,
        duration_mins: i64,
    ) -> Result<Self, DomainError> {
        let duration = u32::try_from(duration_mins).map_err(|_| DomainError::InvalidDuration {
            segment: id,
            duration_mins,
        })?;
        Self::new(id, StationId(from), StationId(to), distance_km, duration)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn from(&self) -> StationId {
        self.from
    }

    pub fn to(&self) -> StationId {
        self.to
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_mins(&self) -> u32 {
        self.duration_mins
    }
}
