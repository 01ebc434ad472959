//! Output objects for serializing priced trips.

use chrono::Duration;
use serde::Serialize;

use crate::TIMESTAMP_FORMAT;
use crate::domain::Flight;
use crate::planner::PricedTrip;

/// A flight in the serialized output.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    /// Flight number
    pub flight_no: String,

    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Departure as ISO-8601 local time
    pub departure: String,

    /// Arrival as ISO-8601 local time
    pub arrival: String,

    /// Ticket price without bags
    pub base_price: f64,

    /// Price per checked bag
    pub bag_price: f64,

    /// Maximum number of checked bags
    pub bags_allowed: u32,
}

impl From<&Flight> for FlightResult {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no.clone(),
            origin: flight.origin.to_string(),
            destination: flight.destination.to_string(),
            departure: flight.departure.format(TIMESTAMP_FORMAT).to_string(),
            arrival: flight.arrival.format(TIMESTAMP_FORMAT).to_string(),
            base_price: flight.base_price,
            bag_price: flight.bag_price,
            bags_allowed: flight.bags_allowed,
        }
    }
}

/// A priced trip in the serialized output.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// All flights, outbound leg first
    pub flights: Vec<FlightResult>,

    /// Minimum bags allowed across all flights
    pub bags_allowed: u32,

    /// Requested bag count
    pub bags_count: u32,

    /// Overall destination
    pub destination: String,

    /// Overall origin
    pub origin: String,

    /// Total price including bag fees
    pub total_price: f64,

    /// Total travel time, e.g. "5:10:00" or "1 day, 2:00:00"
    pub travel_time: String,
}

impl From<&PricedTrip> for TripResult {
    fn from(trip: &PricedTrip) -> Self {
        Self {
            flights: trip.flights.iter().map(|f| FlightResult::from(f.as_ref())).collect(),
            bags_allowed: trip.bags_allowed,
            bags_count: trip.bags_count,
            destination: trip.destination.to_string(),
            origin: trip.origin.to_string(),
            total_price: trip.total_price,
            travel_time: format_travel_time(trip.travel_time),
        }
    }
}

/// Serialize priced trips as a pretty JSON array.
pub fn to_json(trips: &[PricedTrip]) -> Result<String, serde_json::Error> {
    let results: Vec<TripResult> = trips.iter().map(TripResult::from).collect();
    serde_json::to_string_pretty(&results)
}

/// Render a travel time as `H:MM:SS`, with an unpadded hour and a
/// `N day(s), ` prefix once the duration reaches a day.
fn format_travel_time(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();
    let days = total_seconds / 86_400;
    let remainder = total_seconds % 86_400;
    let hours = remainder / 3_600;
    let minutes = remainder % 3_600 / 60;
    let seconds = remainder % 60;

    match days {
        0 => format!("{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("1 day, {hours}:{minutes:02}:{seconds:02}"),
        _ => format!("{days} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}
