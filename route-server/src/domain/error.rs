//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from store/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Segment distance is negative, NaN or infinite
    #[error("segment {segment} has invalid distance {distance_km} km")]
    InvalidDistance { segment: i64, distance_km: f64 },

    /// Segment duration does not fit in whole non-negative minutes
    #[error("segment {segment} has invalid duration {duration_mins} min")]
    InvalidDuration { segment: i64, duration_mins: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidDistance {
            segment: 4,
            distance_km: -1.5,
        };
        assert_eq!(err.to_string(), "segment 4 has invalid distance -1.5 km");

        let err = DomainError::InvalidDuration {
            segment: 7,
            duration_mins: -3,
        };
        assert_eq!(err.to_string(), "segment 7 has invalid duration -3 min");
    }
}
