use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flight_planner::cli::Args;
use flight_planner::domain::{AirportCode, InvalidAirportCode};
use flight_planner::ingest::{self, IngestError};
use flight_planner::output;
use flight_planner::planner::{Planner, SearchConfig, SearchError, SearchRequest, price_trips};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    AirportCode(#[from] InvalidAirportCode),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, AppError> {
    let origin = AirportCode::parse(&args.origin)?;
    let destination = AirportCode::parse(&args.destination)?;

    let catalog = ingest::load_catalog(&args.input_csv)?;

    let request = SearchRequest {
        origin,
        destination,
        bags: args.bags,
        max_changes: args.changes,
        min_days_to_stay: args.min_days,
        max_days_to_stay: args.max_days,
        round_trip: args.round_trip,
    };

    let config = SearchConfig::default();
    let planner = Planner::new(&catalog, &config);
    let trips = planner.search(&request)?;
    let priced = price_trips(trips, args.bags);

    Ok(output::to_json(&priced)?)
}
