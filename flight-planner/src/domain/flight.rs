//! Flight record type.
//!
//! A `Flight` is an immutable scheduled connection between two airports.
//! Flights are created once at catalog-build time and shared as
//! `Arc<Flight>` so that extending a search path is a cheap pointer copy.

use chrono::{Duration, NaiveDateTime};

use super::AirportCode;

/// A scheduled flight between two airports.
///
/// Never mutated after construction. Departure and arrival are local
/// timestamps without timezone, as they appear in the input catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Flight number, e.g. "ZH214"
    pub flight_no: String,

    /// Origin airport
    pub origin: AirportCode,

    /// Destination airport
    pub destination: AirportCode,

    /// Scheduled departure
    pub departure: NaiveDateTime,

    /// Scheduled arrival
    pub arrival: NaiveDateTime,

    /// Ticket price without bags
    pub base_price: f64,

    /// Price per checked bag
    pub bag_price: f64,

    /// Maximum number of checked bags
    pub bags_allowed: u32,
}

impl Flight {
    /// Returns the scheduled flight duration.
    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }

    /// Returns the ticket price when travelling with `bags` checked bags.
    pub fn price_with_bags(&self, bags: u32) -> f64 {
        self.base_price + f64::from(bags) * self.bag_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn flight() -> Flight {
        Flight {
            flight_no: "ZH214".to_string(),
            origin: code("PRG"),
            destination: code("LHR"),
            departure: ts("2021-09-01T10:00:00"),
            arrival: ts("2021-09-01T12:30:00"),
            base_price: 95.0,
            bag_price: 12.0,
            bags_allowed: 2,
        }
    }

    #[test]
    fn duration() {
        assert_eq!(flight().duration(), Duration::minutes(150));
    }

    #[test]
    fn price_without_bags() {
        assert_eq!(flight().price_with_bags(0), 95.0);
    }

    #[test]
    fn price_with_bags() {
        assert_eq!(flight().price_with_bags(2), 95.0 + 2.0 * 12.0);
    }
}
