//! Search configuration for the flight planner.

use chrono::Duration;

/// Default maximum number of changes when the caller doesn't specify one.
pub const DEFAULT_MAX_CHANGES: u32 = 1;

/// Default minimum days to stay for round-trip searches.
pub const DEFAULT_MIN_DAYS_TO_STAY: i64 = 1;

/// Default maximum days to stay for round-trip searches.
pub const DEFAULT_MAX_DAYS_TO_STAY: i64 = 10;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum time required for a connection (hours).
    /// Connections tighter than this are rejected.
    pub min_connection_hours: i64,

    /// Maximum layover before a path is considered broken (hours).
    pub max_layover_hours: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_connection_hours: i64, max_layover_hours: i64) -> Self {
        Self {
            min_connection_hours,
            max_layover_hours,
        }
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::hours(self.min_connection_hours)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::hours(self.max_layover_hours)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_hours: 1,
            max_layover_hours: 6,
        }
    }
}
