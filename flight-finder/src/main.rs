use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use flight_finder::catalog::FlightCatalog;
use flight_finder::domain::{Airline, Airport, Cabin, Constraints};
use flight_finder::ingest;
use flight_finder::search::{ExhaustiveSearch, ParallelSearch, SearchConfig, SequentialSearch};

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Brute-force depth-first search (the correctness oracle).
    Exhaustive,
    /// Sequential dynamic-programming sweep.
    Serial,
    /// Dependency-parallel dynamic programming.
    Parallel,
}

/// Find different flight routes.
#[derive(Debug, Parser)]
#[command(name = "flight-finder")]
struct Args {
    /// Directory of flight result JSON files.
    #[arg(short = 'f', long, default_value = "flight_arrival_results")]
    data_dir: PathBuf,

    /// Search strategy.
    #[arg(short, long, value_enum, default_value_t = Mode::Serial)]
    mode: Mode,

    /// Allowed airlines, comma separated; default: all.
    #[arg(short, long, value_delimiter = ',')]
    airlines: Option<Vec<String>>,

    /// Allowed cabin, default: all.
    #[arg(short, long)]
    cabin: Option<String>,

    /// Origin airport code all itineraries have to depart from.
    #[arg(short, long)]
    origin: Option<String>,

    /// Earliest departure time (epoch seconds or YYYY-MM-DDTHH:MM), default: any.
    #[arg(short, long)]
    start: Option<String>,

    /// Latest arrival time (epoch seconds or YYYY-MM-DDTHH:MM), default: any.
    #[arg(short, long)]
    end: Option<String>,

    /// Keep every Nth admitted flight, for scaling experiments.
    #[arg(short = 'd', long, default_value_t = 1)]
    div_n: u32,

    /// Minimum connection time between flights, in seconds.
    #[arg(long, default_value_t = 0)]
    layover_secs: i64,

    /// Arrival-time boundary for the exhaustive search (epoch seconds or
    /// YYYY-MM-DDTHH:MM); exploration does not continue past it.
    #[arg(long)]
    cutoff: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let constraints = constraints_from(&args)?;
    let config = SearchConfig::new(
        args.layover_secs,
        args.cutoff.as_deref().map(parse_time).transpose()?,
    );

    let flights = ingest::load_directory(&args.data_dir, &constraints)?;
    let catalog = FlightCatalog::new(flights, constraints.origin);

    info!(mode = ?args.mode, flights = catalog.len(), "running search");
    let best = match args.mode {
        Mode::Exhaustive => ExhaustiveSearch::new(&catalog, &config).search(),
        Mode::Serial => SequentialSearch::new(&catalog, &config).search(),
        Mode::Parallel => ParallelSearch::new(&catalog, &config).search(),
    };

    println!("{}", best.render(catalog.flights()));
    Ok(())
}

fn constraints_from(args: &Args) -> Result<Constraints, Box<dyn std::error::Error>> {
    let airlines = args
        .airlines
        .as_ref()
        .map(|names| {
            names
                .iter()
                .map(|name| Airline::parse(name))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    Ok(Constraints {
        airlines,
        cabin: args.cabin.as_deref().map(Cabin::parse).transpose()?,
        origin: args.origin.as_deref().map(Airport::parse).transpose()?,
        start_ts: args.start.as_deref().map(parse_time).transpose()?,
        end_ts: args.end.as_deref().map(parse_time).transpose()?,
        div_n: Some(args.div_n),
    })
}

/// Accept a raw epoch-seconds integer or a local date-time like
/// "2024-03-15T09:30" (a space also separates date and time).
fn parse_time(s: &str) -> Result<i64, Box<dyn std::error::Error>> {
    if let Ok(ts) = s.parse::<i64>() {
        return Ok(ts);
    }
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.and_utc().timestamp());
        }
    }
    Err(format!("unrecognized time: {s} (use epoch seconds or YYYY-MM-DDTHH:MM)").into())
}
