//! Itinerary and trip types.
//!
//! An `Itinerary` represents one connected journey leg as an ordered
//! sequence of flights. A `Trip` pairs an outbound itinerary with an
//! optional return itinerary.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, DomainError, Flight};

/// An ordered sequence of flights forming one connected journey leg.
///
/// # Invariants
///
/// - Consecutive flights connect: each flight's destination equals the
///   next flight's origin
/// - No airport code appears more than once among the flights' origins
///
/// An itinerary may be empty: searching from an airport to itself yields
/// a single itinerary with no flights.
#[derive(Debug, Clone)]
pub struct Itinerary {
    flights: Vec<Arc<Flight>>,
}

impl Itinerary {
    /// Constructs an itinerary, validating the connection invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if consecutive flights don't connect, or if an
    /// airport repeats among the flights' origins.
    pub fn new(flights: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        for pair in flights.windows(2) {
            if pair[0].destination != pair[1].origin {
                return Err(DomainError::FlightsNotConnected(
                    pair[0].destination,
                    pair[1].origin,
                ));
            }
        }

        for (i, flight) in flights.iter().enumerate() {
            if flights[..i].iter().any(|f| f.origin == flight.origin) {
                return Err(DomainError::RepeatedOrigin(flight.origin));
            }
        }

        Ok(Self { flights })
    }

    /// Returns the flights in travel order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Returns true if the itinerary contains no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Returns the number of flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Departure time of the first flight, if any.
    pub fn departure_time(&self) -> Option<NaiveDateTime> {
        self.flights.first().map(|f| f.departure)
    }

    /// Arrival time of the last flight, if any.
    pub fn arrival_time(&self) -> Option<NaiveDateTime> {
        self.flights.last().map(|f| f.arrival)
    }

    /// Time spent between first departure and last arrival.
    ///
    /// Zero for an empty itinerary. Includes layover time between
    /// connecting flights.
    pub fn duration(&self) -> Duration {
        match (self.departure_time(), self.arrival_time()) {
            (Some(dep), Some(arr)) => arr - dep,
            _ => Duration::zero(),
        }
    }

    /// Origin airport of the first flight, if any.
    pub fn origin(&self) -> Option<AirportCode> {
        self.flights.first().map(|f| f.origin)
    }

    /// Destination airport of the last flight, if any.
    pub fn destination(&self) -> Option<AirportCode> {
        self.flights.last().map(|f| f.destination)
    }
}

/// An outbound itinerary paired with an optional return itinerary.
///
/// The return leg is `None` when round-trip search was not requested.
#[derive(Debug, Clone)]
pub struct Trip {
    /// Itinerary from source to destination
    pub outbound: Itinerary,

    /// Itinerary back from destination to source, when requested
    pub return_leg: Option<Itinerary>,
}

impl Trip {
    /// Creates a one-way trip.
    pub fn one_way(outbound: Itinerary) -> Self {
        Self {
            outbound,
            return_leg: None,
        }
    }

    /// Creates a round trip.
    pub fn round_trip(outbound: Itinerary, return_leg: Itinerary) -> Self {
        Self {
            outbound,
            return_leg: Some(return_leg),
        }
    }

    /// All flights of the trip: outbound first, then the return leg.
    pub fn flights(&self) -> impl Iterator<Item = &Arc<Flight>> {
        self.outbound
            .flights()
            .iter()
            .chain(self.return_leg.iter().flat_map(|leg| leg.flights()))
    }

    /// Total time spent flying and waiting for connections.
    ///
    /// Sum of the two legs' spans. Ground time at the destination between
    /// the outbound arrival and the return departure is excluded.
    pub fn travel_time(&self) -> Duration {
        let return_time = self
            .return_leg
            .as_ref()
            .map_or_else(Duration::zero, Itinerary::duration);
        self.outbound.duration() + return_time
    }
}
