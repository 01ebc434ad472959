//! Flight catalog: airports and their outbound flights.
//!
//! The catalog maps an airport code to the `Airport` record holding its
//! outbound flights, in input order. It is built once from the input data
//! and read-only during search.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{AirportCode, Flight};

/// Error returned when looking up an airport no flight record references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown airport: {0}")]
pub struct UnknownAirport(pub AirportCode);

/// An airport and its outbound flights.
///
/// Flights are kept in insertion order (input order), which makes the
/// search order deterministic.
#[derive(Debug, Clone)]
pub struct Airport {
    code: AirportCode,
    flights: Vec<Arc<Flight>>,
}

impl Airport {
    fn new(code: AirportCode) -> Self {
        Self {
            code,
            flights: Vec::new(),
        }
    }

    /// Returns the airport's code.
    pub fn code(&self) -> AirportCode {
        self.code
    }

    /// Returns the outbound flights in input order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }
}

/// Map from airport code to `Airport`.
///
/// # Examples
///
/// ```
/// use flight_planner::catalog::FlightCatalog;
/// use flight_planner::domain::{AirportCode, Flight};
/// use chrono::NaiveDateTime;
///
/// let prg = AirportCode::parse("PRG").unwrap();
/// let lhr = AirportCode::parse("LHR").unwrap();
///
/// let mut catalog = FlightCatalog::new();
/// catalog.add_flight(Flight {
///     flight_no: "ZH214".into(),
///     origin: prg,
///     destination: lhr,
///     departure: NaiveDateTime::parse_from_str("2021-09-01T10:00:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
///     arrival: NaiveDateTime::parse_from_str("2021-09-01T12:30:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
///     base_price: 95.0,
///     bag_price: 12.0,
///     bags_allowed: 2,
/// });
///
/// assert_eq!(catalog.lookup(&prg).unwrap().flights().len(), 1);
/// // The destination is registered too, even with no outbound flights
/// assert_eq!(catalog.lookup(&lhr).unwrap().flights().len(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlightCatalog {
    airports: HashMap<AirportCode, Airport>,
}

impl FlightCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flight, appending it to the origin airport's outbound list.
    ///
    /// Both endpoint airports are registered on first reference. No
    /// validation of chronological order or duplicate flight numbers is
    /// performed; that is the caller's responsibility.
    pub fn add_flight(&mut self, flight: Flight) {
        self.airports
            .entry(flight.destination)
            .or_insert_with(|| Airport::new(flight.destination));

        self.airports
            .entry(flight.origin)
            .or_insert_with(|| Airport::new(flight.origin))
            .flights
            .push(Arc::new(flight));
    }

    /// Look up an airport by code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAirport` if the code was never referenced by any
    /// flight record.
    pub fn lookup(&self, code: &AirportCode) -> Result<&Airport, UnknownAirport> {
        self.airports.get(code).ok_or(UnknownAirport(*code))
    }

    /// Returns the number of airports referenced by the catalog.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Returns the total number of flights in the catalog.
    pub fn flight_count(&self) -> usize {
        self.airports.values().map(|a| a.flights.len()).sum()
    }

    /// Returns true if no flight was ever added.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}
