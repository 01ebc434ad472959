//! Recursive itinerary search.
//!
//! Finds every itinerary from a source airport to a destination airport
//! that satisfies the bag, change-count, and layover constraints, by
//! depth-first search over the flight catalog. One recursion level per
//! flight taken; each branch owns its accumulated flight sequence.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::catalog::{Airport, FlightCatalog, UnknownAirport};
use crate::domain::{AirportCode, Flight, Itinerary, Trip};

use super::config::SearchConfig;

/// Error from itinerary search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Source or destination airport is not in the catalog
    #[error(transparent)]
    UnknownAirport(#[from] UnknownAirport),

    /// Maximum stay is shorter than minimum stay
    #[error("maximum stay of {max} days is less than minimum stay of {min} days")]
    InvalidStayRange { min: i64, max: i64 },
}

/// Request for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Source airport.
    pub origin: AirportCode,

    /// Destination airport.
    pub destination: AirportCode,

    /// Number of checked bags; flights allowing fewer are rejected.
    pub bags: u32,

    /// Maximum number of changes (0 = direct flights only).
    pub max_changes: u32,

    /// Minimum days at the destination before the return leg departs.
    pub min_days_to_stay: i64,

    /// Maximum days at the destination before the return leg departs.
    pub max_days_to_stay: i64,

    /// Whether to search for a return leg per outbound itinerary.
    pub round_trip: bool,
}

impl SearchRequest {
    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_days_to_stay < self.min_days_to_stay {
            return Err(SearchError::InvalidStayRange {
                min: self.min_days_to_stay,
                max: self.max_days_to_stay,
            });
        }

        Ok(())
    }
}

/// Allowed departure range for the next flight, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DepartureWindow {
    earliest: NaiveDateTime,
    latest: NaiveDateTime,
}

impl DepartureWindow {
    /// A window accepting any departure ("anytime").
    fn unbounded() -> Self {
        Self {
            earliest: NaiveDateTime::MIN,
            latest: NaiveDateTime::MAX,
        }
    }

    /// The connection window after arriving at `arrival`.
    fn layover_after(arrival: NaiveDateTime, config: &SearchConfig) -> Self {
        Self {
            earliest: arrival + config.min_connection(),
            latest: arrival + config.max_layover(),
        }
    }

    /// The return-departure window after a stay of `min..=max` days.
    fn stay_after(arrival: NaiveDateTime, min_days: i64, max_days: i64) -> Self {
        Self {
            earliest: arrival + Duration::days(min_days),
            latest: arrival + Duration::days(max_days),
        }
    }

    fn contains(&self, departure: NaiveDateTime) -> bool {
        self.earliest <= departure && departure <= self.latest
    }
}

/// Itinerary planner over a flight catalog.
pub struct Planner<'a> {
    catalog: &'a FlightCatalog,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a FlightCatalog, config: &'a SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Search for all trips satisfying the request.
    ///
    /// Runs the outbound search with an unbounded departure window. When a
    /// round trip is requested, runs one return search per outbound
    /// itinerary, with the return departure constrained to the stay window
    /// after the outbound arrival; every (outbound, return) pair forms one
    /// trip. Otherwise each outbound itinerary forms a one-way trip.
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Trip>, SearchError> {
        request.validate()?;

        let origin = self.catalog.lookup(&request.origin)?;
        let destination = self.catalog.lookup(&request.destination)?;

        let changes = i64::from(request.max_changes);
        let outbound_paths = self.paths_between(
            origin,
            request.destination,
            request.bags,
            changes,
            &DepartureWindow::unbounded(),
            &[],
        );

        if !request.round_trip {
            let trips: Vec<Trip> = outbound_paths.into_iter().map(Trip::one_way).collect();
            debug!(trips = trips.len(), "one-way search complete");
            return Ok(trips);
        }

        let mut trips = Vec::new();

        for outbound in outbound_paths {
            // An empty outbound (origin == destination) has no arrival to
            // anchor the stay window on.
            let Some(arrival) = outbound.arrival_time() else {
                continue;
            };

            let window = DepartureWindow::stay_after(
                arrival,
                request.min_days_to_stay,
                request.max_days_to_stay,
            );
            let return_paths = self.paths_between(
                destination,
                request.origin,
                request.bags,
                changes,
                &window,
                &[],
            );

            for return_leg in return_paths {
                trips.push(Trip::round_trip(outbound.clone(), return_leg));
            }
        }

        debug!(trips = trips.len(), "round-trip search complete");
        Ok(trips)
    }

    /// Recursively collect all itineraries from `from` to `destination`.
    ///
    /// `taken` is the flight sequence accumulated so far; each branch
    /// extends its own copy, so sibling branches never observe each
    /// other's flights. `changes_left` goes negative when the change
    /// budget is exhausted: the destination check comes first, so an
    /// itinerary of `max_changes + 1` flights is still accepted.
    fn paths_between(
        &self,
        from: &Airport,
        destination: AirportCode,
        bags: u32,
        changes_left: i64,
        window: &DepartureWindow,
        taken: &[Arc<Flight>],
    ) -> Vec<Itinerary> {
        if from.code() == destination {
            return Itinerary::new(taken.to_vec()).ok().into_iter().collect();
        }

        if changes_left < 0 {
            return Vec::new();
        }

        let mut found = Vec::new();

        for flight in from.flights() {
            if !admits(flight, bags, window, taken) {
                continue;
            }

            // add_flight registers both endpoints, so this cannot miss
            let Ok(next) = self.catalog.lookup(&flight.destination) else {
                continue;
            };

            let next_window = DepartureWindow::layover_after(flight.arrival, self.config);

            let mut extended = taken.to_vec();
            extended.push(Arc::clone(flight));

            found.extend(self.paths_between(
                next,
                destination,
                bags,
                changes_left - 1,
                &next_window,
                &extended,
            ));
        }

        found
    }
}

/// Whether a flight may extend the accumulated path.
fn admits(
    flight: &Flight,
    bags: u32,
    window: &DepartureWindow,
    taken: &[Arc<Flight>],
) -> bool {
    if bags > flight.bags_allowed {
        return false;
    }

    if !window.contains(flight.departure) {
        return false;
    }

    // Reject a flight back to an airport already departed from. The check
    // is against prior *origins*, not every visited airport; the source
    // airport is covered because it is the first flight's origin.
    if taken.iter().any(|prev| prev.origin == flight.destination) {
        return false;
    }

    true
}
