//! Flight ingestion from scraped JSON result files.
//!
//! Each file in the data directory holds one search's results: a top-level
//! `flights_data` array whose entries pair the `search_parameters` the
//! scrape ran with (airports, travel class) and the scraped `flight` fields
//! (airline string, times, stops, price). This module parses every file,
//! applies the [`Constraints`] filters and the keep-every-Nth sampling
//! divisor, and hands back plain [`Flight`] records with provisional ids;
//! the catalog reassigns ids when it sorts.
//!
//! Records that fail a filter are dropped silently; records whose fields
//! cannot be interpreted (unknown airline, malformed airport code, bad
//! price) are dropped with a warning. Unreadable files and malformed JSON
//! abort the whole ingest with an [`IngestError`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Airline, Airport, Cabin, Constraints, Flight, FlightId};

/// Error from flight ingestion.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The data directory or one of its files could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result file is not valid JSON of the expected shape.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One result file: the shape produced by the scraper.
#[derive(Debug, Deserialize)]
struct ResultsFile {
    flights_data: Vec<FlightRecord>,
}

#[derive(Debug, Deserialize)]
struct FlightRecord {
    search_parameters: SearchParameters,
    flight: FlightFields,
}

#[derive(Debug, Deserialize)]
struct SearchParameters {
    departure_iota: String,
    destination_iota: String,
    travel_class: String,
}

#[derive(Debug, Deserialize)]
struct FlightFields {
    airline: String,
    unix_departure_time: i64,
    unix_arrival_time: i64,
    departure_time: String,
    arrival_time: String,
    stops: String,
    price: String,
}

/// Load every admitted flight from the JSON files in `dir`.
///
/// Files are processed in path order so the sampling divisor selects a
/// stable subset across runs. Ids are assigned in admission order and are
/// provisional until the catalog sorts.
pub fn load_directory(dir: &Path, constraints: &Constraints) -> Result<Vec<Flight>, IngestError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|source| IngestError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let div_n = constraints.div_n.unwrap_or(1);
    let mut flights = Vec::new();
    let mut stats = IngestStats::default();
    let mut div_id = 0u64;

    for path in &paths {
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.clone(),
            source,
        })?;
        let file: ResultsFile =
            serde_json::from_str(&text).map_err(|source| IngestError::Json {
                path: path.clone(),
                source,
            })?;

        for record in file.flights_data {
            stats.total += 1;

            let Some(flight) = convert(&record, path) else {
                stats.removed += 1;
                continue;
            };

            if !constraints.admits(&flight) {
                stats.removed += 1;
                continue;
            }
            stats.valid += 1;

            // The divisor samples the stream of admitted flights
            if div_n <= 1 || div_id % u64::from(div_n) == 0 {
                stats.included += 1;
                flights.push(Flight {
                    id: FlightId(flights.len()),
                    ..flight
                });
            } else {
                stats.removed += 1;
            }
            div_id += 1;
        }
    }

    stats.log(paths.len());
    Ok(flights)
}

/// Interpret one raw record, or explain why it can't be used.
fn convert(record: &FlightRecord, path: &Path) -> Option<Flight> {
    let raw = &record.flight;
    let params = &record.search_parameters;

    let Some(airline) = Airline::detect(&raw.airline) else {
        warn!(path = %path.display(), airline = %raw.airline, "unrecognized airline, skipping record");
        return None;
    };

    let from = match Airport::parse(&params.departure_iota) {
        Ok(a) => a,
        Err(err) => {
            warn!(path = %path.display(), code = %params.departure_iota, %err, "bad departure airport, skipping record");
            return None;
        }
    };
    let to = match Airport::parse(&params.destination_iota) {
        Ok(a) => a,
        Err(err) => {
            warn!(path = %path.display(), code = %params.destination_iota, %err, "bad destination airport, skipping record");
            return None;
        }
    };

    let Some(num_stops) = parse_stop_count(&raw.stops) else {
        warn!(path = %path.display(), stops = %raw.stops, "unparseable stop description, skipping record");
        return None;
    };

    let Some(price) = parse_price(&raw.price) else {
        warn!(path = %path.display(), price = %raw.price, "unparseable price, skipping record");
        return None;
    };

    // The scraper never emits unknown cabins; treat one as the base class
    let cabin = Cabin::parse(&params.travel_class).unwrap_or(Cabin::Economy);

    Some(Flight {
        id: FlightId(usize::MAX),
        airline,
        from,
        to,
        depart_ts: raw.unix_departure_time,
        arrive_ts: raw.unix_arrival_time,
        depart_time: raw.departure_time.clone(),
        arrive_time: raw.arrival_time.clone(),
        stops: raw.stops.clone(),
        num_stops,
        cabin,
        price,
    })
}

/// "Nonstop" is zero; otherwise the description leads with the count,
/// e.g. "1 stop in PHX" or "2 stops in DTW, FLL".
fn parse_stop_count(stops: &str) -> Option<u32> {
    if stops == "Nonstop" {
        return Some(0);
    }
    stops.split_whitespace().next()?.parse().ok()
}

/// Prices arrive as "$1,234"; strip the currency mark and separators.
fn parse_price(price: &str) -> Option<u32> {
    let digits: String = price.strip_prefix('$')?.replace(',', "");
    digits.parse().ok()
}

#[derive(Debug, Default)]
struct IngestStats {
    total: u64,
    valid: u64,
    included: u64,
    removed: u64,
}

impl IngestStats {
    fn log(&self, files: usize) {
        if self.total == 0 {
            info!(files, "no flights found in the data directory");
            return;
        }
        info!(
            files,
            total = self.total,
            included = self.included,
            removed = self.removed,
            included_ratio = self.included as f64 / self.total as f64,
            valid_ratio = self.valid as f64 / self.total as f64,
            "ingest finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(
        airline: &str,
        from: &str,
        to: &str,
        depart_ts: i64,
        arrive_ts: i64,
        stops: &str,
        travel_class: &str,
        price: &str,
    ) -> String {
        format!(
            r#"{{
                "search_parameters": {{
                    "departure_iota": "{from}",
                    "destination_iota": "{to}",
                    "travel_class": "{travel_class}"
                }},
                "flight": {{
                    "airline": "{airline}",
                    "unix_departure_time": {depart_ts},
                    "unix_arrival_time": {arrive_ts},
                    "departure_time": "5:20 AM",
                    "arrival_time": "6:59 AM",
                    "stops": "{stops}",
                    "price": "{price}"
                }}
            }}"#
        )
    }

    fn write_results(dir: &Path, name: &str, records: &[String]) {
        let body = format!(r#"{{ "flights_data": [{}] }}"#, records.join(","));
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn loads_and_converts_records() {
        let dir = tempfile::tempdir().unwrap();
        write_results(
            dir.path(),
            "atl.json",
            &[record(
                "American",
                "ATL",
                "DFW",
                1_000,
                2_000,
                "Nonstop",
                "Economy",
                "$177",
            )],
        );

        let flights = load_directory(dir.path(), &Constraints::default()).unwrap();
        assert_eq!(flights.len(), 1);

        let f = &flights[0];
        assert_eq!(f.airline, Airline::American);
        assert_eq!(f.from, Airport::parse("ATL").unwrap());
        assert_eq!(f.to, Airport::parse("DFW").unwrap());
        assert_eq!(f.depart_ts, 1_000);
        assert_eq!(f.arrive_ts, 2_000);
        assert_eq!(f.num_stops, 0);
        assert_eq!(f.cabin, Cabin::Economy);
        assert_eq!(f.price, 177);
    }

    #[test]
    fn detects_airline_in_free_text_and_parses_commas_in_price() {
        let dir = tempfile::tempdir().unwrap();
        write_results(
            dir.path(),
            "lax.json",
            &[record(
                "Operated by SkyWest Airlines",
                "LAX",
                "SFO",
                1_000,
                2_000,
                "2 stops in DTW, FLL",
                "Premium",
                "$1,234",
            )],
        );

        let flights = load_directory(dir.path(), &Constraints::default()).unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].airline, Airline::SkyWest);
        assert_eq!(flights[0].num_stops, 2);
        assert_eq!(flights[0].cabin, Cabin::PremiumEconomy);
        assert_eq!(flights[0].price, 1_234);
    }

    #[test]
    fn applies_constraint_filters() {
        let dir = tempfile::tempdir().unwrap();
        write_results(
            dir.path(),
            "mix.json",
            &[
                record("Delta", "ATL", "DFW", 1_000, 2_000, "Nonstop", "Economy", "$100"),
                record("United", "ATL", "DFW", 1_000, 2_000, "Nonstop", "Economy", "$100"),
                record("Delta", "ATL", "DFW", 1_000, 2_000, "Nonstop", "First", "$900"),
                record("Delta", "ATL", "DFW", 100, 2_000, "Nonstop", "Economy", "$100"),
            ],
        );

        let constraints = Constraints {
            airlines: Some(vec![Airline::Delta]),
            cabin: Some(Cabin::Economy),
            start_ts: Some(500),
            ..Constraints::default()
        };
        let flights = load_directory(dir.path(), &constraints).unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].airline, Airline::Delta);
    }

    #[test]
    fn sampling_divisor_keeps_every_nth_admitted_flight() {
        let dir = tempfile::tempdir().unwrap();
        let records: Vec<String> = (0..9)
            .map(|i| {
                record(
                    "Delta",
                    "ATL",
                    "DFW",
                    1_000 + i,
                    2_000 + i,
                    "Nonstop",
                    "Economy",
                    "$100",
                )
            })
            .collect();
        write_results(dir.path(), "many.json", &records);

        let constraints = Constraints {
            div_n: Some(3),
            ..Constraints::default()
        };
        let flights = load_directory(dir.path(), &constraints).unwrap();

        assert_eq!(flights.len(), 3);
        let departs: Vec<i64> = flights.iter().map(|f| f.depart_ts).collect();
        assert_eq!(departs, vec![1_000, 1_003, 1_006]);
    }

    #[test]
    fn files_are_read_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        write_results(
            dir.path(),
            "b.json",
            &[record("Delta", "DFW", "DEN", 3_000, 4_000, "Nonstop", "Economy", "$100")],
        );
        write_results(
            dir.path(),
            "a.json",
            &[record("Delta", "ATL", "DFW", 1_000, 2_000, "Nonstop", "Economy", "$100")],
        );

        let flights = load_directory(dir.path(), &Constraints::default()).unwrap();
        assert_eq!(flights[0].from, Airport::parse("ATL").unwrap());
        assert_eq!(flights[1].from, Airport::parse("DFW").unwrap());
        // Ids follow admission order
        assert_eq!(flights[0].id, FlightId(0));
        assert_eq!(flights[1].id, FlightId(1));
    }

    #[test]
    fn skips_unrecognizable_records() {
        let dir = tempfile::tempdir().unwrap();
        write_results(
            dir.path(),
            "bad.json",
            &[
                record("Wright Brothers Air", "ATL", "DFW", 1_000, 2_000, "Nonstop", "Economy", "$100"),
                record("Delta", "Atlanta", "DFW", 1_000, 2_000, "Nonstop", "Economy", "$100"),
                record("Delta", "ATL", "DFW", 1_000, 2_000, "Nonstop", "Economy", "free"),
                record("Delta", "ATL", "DFW", 1_000, 2_000, "Nonstop", "Economy", "$100"),
            ],
        );

        let flights = load_directory(dir.path(), &Constraints::default()).unwrap();
        assert_eq!(flights.len(), 1);
    }

    #[test]
    fn non_json_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "not flight data").unwrap();
        write_results(
            dir.path(),
            "ok.json",
            &[record("Delta", "ATL", "DFW", 1_000, 2_000, "Nonstop", "Economy", "$100")],
        );

        let flights = load_directory(dir.path(), &Constraints::default()).unwrap();
        assert_eq!(flights.len(), 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let result = load_directory(dir.path(), &Constraints::default());
        assert!(matches!(result, Err(IngestError::Json { .. })));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = load_directory(Path::new("/nonexistent/flight/data"), &Constraints::default());
        assert!(matches!(result, Err(IngestError::Io { .. })));
    }
}
