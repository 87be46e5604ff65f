//! Search constraints.

use super::{Airline, Airport, Cabin, Flight};

/// Filters applied while ingesting flights, plus the origin preference the
/// searches honour when comparing itineraries.
///
/// Every field defaults to "unconstrained".
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Allowed airlines; `None` allows all.
    pub airlines: Option<Vec<Airline>>,
    /// Required cabin; `None` allows all.
    pub cabin: Option<Cabin>,
    /// Airport every itinerary must depart from.
    pub origin: Option<Airport>,
    /// Earliest allowed departure, epoch seconds.
    pub start_ts: Option<i64>,
    /// Latest allowed arrival, epoch seconds.
    pub end_ts: Option<i64>,
    /// Keep every Nth admitted flight, for scaling experiments.
    pub div_n: Option<u32>,
}

impl Constraints {
    /// Whether `flight` passes the airline, cabin and time-bound filters.
    ///
    /// The sampling divisor is deliberately not consulted here: it applies
    /// to the running count of admitted flights, not to any one record.
    pub fn admits(&self, flight: &Flight) -> bool {
        if let Some(airlines) = &self.airlines
            && !airlines.contains(&flight.airline)
        {
            return false;
        }

        if let Some(cabin) = self.cabin
            && flight.cabin != cabin
        {
            return false;
        }

        if let Some(start_ts) = self.start_ts
            && flight.depart_ts < start_ts
        {
            return false;
        }

        if let Some(end_ts) = self.end_ts
            && flight.arrive_ts > end_ts
        {
            return false;
        }

        true
    }
}
