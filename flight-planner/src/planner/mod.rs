//! Itinerary planner using recursive depth-first search.
//!
//! This module implements the core search algorithm that answers:
//! "which itineraries connect these two airports, given my bags, change
//! budget, and layover constraints?", plus the round-trip pairing and
//! the pricing/ranking of the results.

mod config;
mod price;
mod search;

pub use config::{
    DEFAULT_MAX_CHANGES, DEFAULT_MAX_DAYS_TO_STAY, DEFAULT_MIN_DAYS_TO_STAY, SearchConfig,
};
pub use price::{PricedTrip, price_trips};
pub use search::{Planner, SearchError, SearchRequest};
