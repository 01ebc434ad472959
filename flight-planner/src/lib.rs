//! Flight itinerary planner.
//!
//! Finds all itineraries (optionally round-trip) between two airports in
//! a CSV flight catalog, subject to checked-bag, change-count, and
//! layover constraints, then prices and ranks the results.

pub mod catalog;
pub mod cli;
pub mod domain;
pub mod ingest;
pub mod output;
pub mod planner;

/// Timestamp format used by the CSV input and the JSON output:
/// ISO-8601 local time without timezone, e.g. `2021-09-01T10:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
