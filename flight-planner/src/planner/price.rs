//! Trip pricing and ranking.
//!
//! Turns raw trips into priced, ranked results: total price with bag
//! fees, the binding bag limit across the trip, and total travel time,
//! sorted ascending by total price.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::{AirportCode, Flight, Trip};

/// A priced, read-only view of a trip.
///
/// Computed once at output time; never mutated after creation.
#[derive(Debug, Clone)]
pub struct PricedTrip {
    /// All flights: outbound leg first, then the return leg.
    pub flights: Vec<Arc<Flight>>,

    /// Minimum `bags_allowed` across all flights (the binding constraint).
    pub bags_allowed: u32,

    /// The requested bag count.
    pub bags_count: u32,

    /// Origin of the first flight.
    pub origin: AirportCode,

    /// Destination of the last flight.
    pub destination: AirportCode,

    /// Sum over all flights of base price plus bag fees.
    pub total_price: f64,

    /// Flight time of both legs, excluding ground time at the destination.
    pub travel_time: Duration,
}

/// Price all trips and sort ascending by total price.
///
/// The sort is stable: equal-price trips keep the order in which they
/// were generated. Trips with no flights (source == destination searches)
/// have no origin or departure and are omitted.
pub fn price_trips(trips: Vec<Trip>, bags: u32) -> Vec<PricedTrip> {
    let mut priced: Vec<PricedTrip> = trips
        .iter()
        .filter_map(|trip| price_trip(trip, bags))
        .collect();

    priced.sort_by(|a, b| a.total_price.total_cmp(&b.total_price));
    priced
}

/// Price a single trip. Returns `None` for a trip with no flights.
fn price_trip(trip: &Trip, bags: u32) -> Option<PricedTrip> {
    let flights: Vec<Arc<Flight>> = trip.flights().cloned().collect();

    let first = flights.first()?;
    let last = flights.last()?;
    let origin = first.origin;
    let destination = last.destination;

    let total_price = flights.iter().map(|f| f.price_with_bags(bags)).sum();
    let bags_allowed = flights.iter().map(|f| f.bags_allowed).min()?;

    Some(PricedTrip {
        travel_time: trip.travel_time(),
        flights,
        bags_allowed,
        bags_count: bags,
        origin,
        destination,
        total_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Itinerary;
    use chrono::NaiveDateTime;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn flight(
        no: &str,
        origin: &str,
        dest: &str,
        dep: &str,
        arr: &str,
        base_price: f64,
        bag_price: f64,
        bags_allowed: u32,
    ) -> Arc<Flight> {
        Arc::new(Flight {
            flight_no: no.to_string(),
            origin: code(origin),
            destination: code(dest),
            departure: ts(dep),
            arrival: ts(arr),
            base_price,
            bag_price,
            bags_allowed,
        })
    }

    fn one_way(flights: Vec<Arc<Flight>>) -> Trip {
        Trip::one_way(Itinerary::new(flights).unwrap())
    }

    #[test]
    fn totals_include_bag_fees() {
        let trip = one_way(vec![
            flight(
                "F1", "PRG", "VIE",
                "2021-09-01T09:00:00", "2021-09-01T10:00:00",
                100.0, 10.0, 2,
            ),
            flight(
                "F2", "VIE", "LHR",
                "2021-09-01T11:30:00", "2021-09-01T13:30:00",
                200.0, 25.0, 1,
            ),
        ]);

        let priced = price_trips(vec![trip], 1);

        assert_eq!(priced.len(), 1);
        let result = &priced[0];
        assert_eq!(result.total_price, 110.0 + 225.0);
        assert_eq!(result.bags_allowed, 1);
        assert_eq!(result.bags_count, 1);
        assert_eq!(result.origin, code("PRG"));
        assert_eq!(result.destination, code("LHR"));
        assert_eq!(result.travel_time, Duration::minutes(270));
    }

    #[test]
    fn round_trip_travel_time_excludes_stay() {
        let outbound = Itinerary::new(vec![flight(
            "F1", "PRG", "LHR",
            "2021-09-01T10:00:00", "2021-09-01T12:00:00",
            100.0, 10.0, 2,
        )])
        .unwrap();
        let return_leg = Itinerary::new(vec![flight(
            "R1", "LHR", "PRG",
            "2021-09-05T10:00:00", "2021-09-05T13:00:00",
            100.0, 10.0, 2,
        )])
        .unwrap();

        let priced = price_trips(vec![Trip::round_trip(outbound, return_leg)], 0);

        assert_eq!(priced.len(), 1);
        assert_eq!(priced[0].travel_time, Duration::hours(5));
        assert_eq!(priced[0].origin, code("PRG"));
        assert_eq!(priced[0].destination, code("PRG"));
        assert_eq!(priced[0].flights.len(), 2);
    }

    #[test]
    fn sorted_ascending_by_total_price() {
        let expensive = one_way(vec![flight(
            "F1", "PRG", "LHR",
            "2021-09-01T10:00:00", "2021-09-01T12:00:00",
            300.0, 0.0, 2,
        )]);
        let cheap = one_way(vec![flight(
            "F2", "PRG", "LHR",
            "2021-09-01T14:00:00", "2021-09-01T16:00:00",
            80.0, 0.0, 2,
        )]);
        let middle = one_way(vec![flight(
            "F3", "PRG", "LHR",
            "2021-09-01T18:00:00", "2021-09-01T20:00:00",
            150.0, 0.0, 2,
        )]);

        let priced = price_trips(vec![expensive, cheap, middle], 0);

        let prices: Vec<f64> = priced.iter().map(|p| p.total_price).collect();
        assert_eq!(prices, vec![80.0, 150.0, 300.0]);
    }

    #[test]
    fn equal_prices_keep_generation_order() {
        let first = one_way(vec![flight(
            "F1", "PRG", "LHR",
            "2021-09-01T10:00:00", "2021-09-01T12:00:00",
            100.0, 0.0, 2,
        )]);
        let second = one_way(vec![flight(
            "F2", "PRG", "LHR",
            "2021-09-01T14:00:00", "2021-09-01T16:00:00",
            100.0, 0.0, 2,
        )]);

        let priced = price_trips(vec![first, second], 0);

        let numbers: Vec<&str> = priced
            .iter()
            .map(|p| p.flights[0].flight_no.as_str())
            .collect();
        assert_eq!(numbers, vec!["F1", "F2"]);
    }

    #[test]
    fn empty_trip_is_omitted() {
        let empty = Trip::one_way(Itinerary::new(vec![]).unwrap());
        assert!(price_trips(vec![empty], 0).is_empty());
    }
}
