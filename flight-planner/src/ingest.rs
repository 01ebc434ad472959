//! Catalog ingestion from CSV.
//!
//! Reads flight records from a CSV file with a header row, one flight per
//! record, and builds the flight catalog. Any malformed record is a fatal
//! error: no partial catalog is ever returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use crate::TIMESTAMP_FORMAT;
use crate::catalog::FlightCatalog;
use crate::domain::{AirportCode, Flight, InvalidAirportCode};

/// Errors that can occur while ingesting a flight catalog.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Failed to open or read the input file
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// CSV record with wrong field count or an unparsable field
    #[error("malformed flight record: {0}")]
    Csv(#[from] csv::Error),

    /// Timestamp field that is not ISO-8601 local time
    #[error("record {record}: invalid {field} timestamp {value:?}")]
    InvalidTimestamp {
        record: u64,
        field: &'static str,
        value: String,
    },

    /// Airport code field that is not a valid 3-letter code
    #[error("record {record}: {source}")]
    InvalidAirportCode {
        record: u64,
        source: InvalidAirportCode,
    },
}

/// A raw CSV flight record, before validation.
#[derive(Debug, Deserialize)]
struct FlightRecord {
    flight_no: String,
    origin: String,
    destination: String,
    departure: String,
    arrival: String,
    base_price: f64,
    bag_price: f64,
    bags_allowed: u32,
}

/// Load a flight catalog from a CSV file.
pub fn load_catalog(path: &Path) -> Result<FlightCatalog, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = read_catalog(file)?;

    info!(
        flights = catalog.flight_count(),
        airports = catalog.airport_count(),
        path = %path.display(),
        "catalog loaded"
    );

    Ok(catalog)
}

/// Read a flight catalog from CSV data with a header row.
///
/// Expected columns: `flight_no,origin,destination,departure,arrival,`
/// `base_price,bag_price,bags_allowed`, with timestamps in ISO-8601 local
/// time (`2021-09-01T10:00:00`).
pub fn read_catalog<R: Read>(reader: R) -> Result<FlightCatalog, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut catalog = FlightCatalog::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let record_no = (idx + 1) as u64;
        let record: FlightRecord = result?;

        catalog.add_flight(Flight {
            origin: parse_code(record_no, &record.origin)?,
            destination: parse_code(record_no, &record.destination)?,
            departure: parse_timestamp(record_no, "departure", &record.departure)?,
            arrival: parse_timestamp(record_no, "arrival", &record.arrival)?,
            flight_no: record.flight_no,
            base_price: record.base_price,
            bag_price: record.bag_price,
            bags_allowed: record.bags_allowed,
        });
    }

    Ok(catalog)
}

fn parse_code(record: u64, value: &str) -> Result<AirportCode, IngestError> {
    AirportCode::parse(value)
        .map_err(|source| IngestError::InvalidAirportCode { record, source })
}

fn parse_timestamp(
    record: u64,
    field: &'static str,
    value: &str,
) -> Result<NaiveDateTime, IngestError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        IngestError::InvalidTimestamp {
            record,
            field,
            value: value.to_string(),
        }
    })
}
