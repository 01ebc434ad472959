//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from ingestion and search errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Consecutive flights in an itinerary don't connect
    #[error("flights do not connect: arrival at {0} followed by departure from {1}")]
    FlightsNotConnected(AirportCode, AirportCode),

    /// An airport appears more than once among the itinerary's origins
    #[error("itinerary departs from {0} more than once")]
    RepeatedOrigin(AirportCode),
}
