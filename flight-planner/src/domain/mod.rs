//! Domain types for the flight planner.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airport;
mod error;
mod flight;
mod itinerary;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use flight::Flight;
pub use itinerary::{Itinerary, Trip};
