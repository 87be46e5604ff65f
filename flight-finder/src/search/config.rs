//! Search configuration.

use std::time::Duration;

/// Configuration parameters shared by the search strategies.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum connection time between an arrival and the next departure,
    /// in seconds. Connections tighter than this are rejected.
    pub layover_floor_secs: i64,

    /// Arrival-time boundary for the exhaustive search, epoch seconds.
    /// Exploration does not continue forward from a flight arriving after
    /// this boundary. `None` leaves the exhaustive search unbounded; the
    /// DP strategies ignore it.
    pub cutoff_ts: Option<i64>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(layover_floor_secs: i64, cutoff_ts: Option<i64>) -> Self {
        Self {
            layover_floor_secs,
            cutoff_ts,
        }
    }

    /// Returns the layover floor as a Duration.
    pub fn layover_floor(&self) -> Duration {
        Duration::from_secs(self.layover_floor_secs.max(0) as u64)
    }

    /// The latest arrival timestamp at an airport that still permits a
    /// connection onto a flight departing at `depart_ts`.
    pub fn connection_bound(&self, depart_ts: i64) -> i64 {
        depart_ts - self.layover_floor_secs
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            layover_floor_secs: 0,
            cutoff_ts: None,
        }
    }
}
