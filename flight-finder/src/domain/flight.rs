//! Flight record and its catalog identifier.

use std::fmt;

use super::{Airline, Airport, Cabin};

/// Identifier of a flight within the catalog.
///
/// Assigned by the catalog after its arrival-time sort: a `FlightId` is the
/// flight's position in the sorted order, so ids also order by arrival time.
/// It is a distinct type from [`LocalArrivalIndex`] so a catalog position can
/// never be confused with a position in one airport's arrival list.
///
/// [`LocalArrivalIndex`]: crate::catalog::LocalArrivalIndex
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightId(pub usize);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled flight.
///
/// Immutable once built. Epoch timestamps drive all scheduling decisions;
/// the human-readable times and the stop description are preserved verbatim
/// from the feed and used only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Position in the arrival-sorted catalog.
    pub id: FlightId,
    pub airline: Airline,
    pub from: Airport,
    pub to: Airport,
    /// Departure, unix epoch seconds.
    pub depart_ts: i64,
    /// Arrival, unix epoch seconds.
    pub arrive_ts: i64,
    /// Departure in the feed's human-readable format, e.g. "5:20 AM".
    pub depart_time: String,
    /// Arrival in the feed's human-readable format, e.g. "3:15 PM+1".
    pub arrive_time: String,
    /// Stop description, e.g. "Nonstop" or "1 stop in PHX".
    pub stops: String,
    /// Intermediate stops within this flight; 0 means nonstop.
    pub num_stops: u32,
    pub cabin: Cabin,
    /// Ticket price in whole USD.
    pub price: u32,
}

impl Flight {
    /// Number of itinerary legs this flight contributes (its stops plus one).
    pub fn segments(&self) -> u32 {
        self.num_stops + 1
    }
}

impl fmt::Display for Flight {
    /// The one-line summary consumed by itinerary rendering. The exact
    /// punctuation and spacing are load-bearing: downstream tests compare
    /// rendered itineraries verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} flight from {} @ {} to {} @ {} ({}) in {} for ${}",
            self.airline,
            self.from,
            self.depart_time,
            self.to,
            self.arrive_time,
            self.stops,
            self.cabin,
            self.price
        )
    }
}
