//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::planner::{DEFAULT_MAX_CHANGES, DEFAULT_MAX_DAYS_TO_STAY, DEFAULT_MIN_DAYS_TO_STAY};

/// Find all flight itineraries between two airports.
#[derive(Debug, Parser)]
#[command(name = "flight-planner", version, about)]
pub struct Args {
    /// CSV flight catalog
    pub input_csv: PathBuf,

    /// Origin airport code (e.g. PRG)
    pub origin: String,

    /// Destination airport code (e.g. LHR)
    pub destination: String,

    /// Number of checked bags
    #[arg(short, long, default_value_t = 0)]
    pub bags: u32,

    /// Maximum number of changes (0 = direct flights only)
    #[arg(short, long, default_value_t = DEFAULT_MAX_CHANGES)]
    pub changes: u32,

    /// Minimum days to stay before the return flight
    #[arg(short = 'd', long = "min-days", default_value_t = DEFAULT_MIN_DAYS_TO_STAY)]
    pub min_days: i64,

    /// Maximum days to stay before the return flight
    #[arg(short = 'l', long = "max-days", default_value_t = DEFAULT_MAX_DAYS_TO_STAY)]
    pub max_days: i64,

    /// Also search for a return itinerary per outbound itinerary
    #[arg(short = 'r', long = "return")]
    pub round_trip: bool,
}
