//! Itinerary type.
//!
//! An `Itinerary` is an ordered chain of connecting flights, compared by a
//! fixed multi-key ordering (origin preference, effective leg count, flight
//! count, flight-id tie-break). It is the value stored in the search
//! strategies' DP tables, so growing one always produces a new value and
//! never mutates a chain another table entry may still reference.

use std::cmp::Ordering;

use super::{Airport, Flight, FlightId};

/// An ordered chain of connecting flights.
///
/// # Invariants
///
/// - When non-empty, consecutive flights connect: each flight's destination
///   is the next flight's origin.
/// - `legs` is the sum over all flights of `num_stops + 1`.
/// - `origin` is the first flight's origin when non-empty, otherwise the
///   airport the empty chain was seeded at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    flight_ids: Vec<FlightId>,
    legs: u32,
    origin: Airport,
}

impl Itinerary {
    /// The empty, zero-leg itinerary anchored at `origin`.
    ///
    /// This is the base case of every search: the chain you hold before
    /// boarding anything at `origin`.
    pub fn seed(origin: Airport) -> Self {
        Itinerary {
            flight_ids: Vec::new(),
            legs: 0,
            origin,
        }
    }

    /// Returns a new itinerary with `flight` appended.
    ///
    /// The receiver is left untouched; DP entries share no storage. Callers
    /// are responsible for only appending flights that actually connect (the
    /// searches guarantee this by construction).
    pub fn with_flight(&self, flight: &Flight) -> Self {
        let mut flight_ids = Vec::with_capacity(self.flight_ids.len() + 1);
        flight_ids.extend_from_slice(&self.flight_ids);
        flight_ids.push(flight.id);

        Itinerary {
            flight_ids,
            legs: self.legs + flight.segments(),
            origin: if self.flight_ids.is_empty() {
                flight.from
            } else {
                self.origin
            },
        }
    }

    /// The flight chain, in travel order.
    pub fn flight_ids(&self) -> &[FlightId] {
        &self.flight_ids
    }

    /// Effective leg count: every flight contributes its stop count plus one.
    pub fn legs(&self) -> u32 {
        self.legs
    }

    /// The airport this itinerary departs from (or was seeded at, if empty).
    pub fn origin(&self) -> Airport {
        self.origin
    }

    /// Returns true for a zero-leg seed itinerary.
    pub fn is_empty(&self) -> bool {
        self.flight_ids.is_empty()
    }

    /// Returns the stronger of two itineraries.
    ///
    /// Evaluated in strict precedence, first decisive rule wins:
    ///
    /// 1. If `origin` is given and exactly one side departs from it, that
    ///    side wins.
    /// 2. Strictly more legs wins.
    /// 3. More flights wins.
    /// 4. Comparing flight ids element-wise, the side whose first differing
    ///    id is larger wins.
    /// 5. Otherwise the left operand is returned.
    pub fn max(lhs: Self, rhs: Self, origin: Option<Airport>) -> Self {
        if rhs.ranking(&lhs, origin) == Ordering::Greater {
            rhs
        } else {
            lhs
        }
    }

    /// `Ordering::Greater` means `self` is preferred over `other`.
    fn ranking(&self, other: &Self, origin: Option<Airport>) -> Ordering {
        if let Some(origin) = origin {
            match (self.origin == origin, other.origin == origin) {
                (true, false) => return Ordering::Greater,
                (false, true) => return Ordering::Less,
                _ => {}
            }
        }

        self.legs
            .cmp(&other.legs)
            .then_with(|| self.flight_ids.len().cmp(&other.flight_ids.len()))
            // Same length here, so the first differing id decides
            .then_with(|| self.flight_ids.as_slice().cmp(other.flight_ids.as_slice()))
    }

    /// Render the itinerary as a 1-indexed, newline-joined list of leg
    /// summaries. An empty itinerary renders as the empty string.
    ///
    /// `flights` must be the arrival-sorted catalog storage, where a
    /// flight's id equals its position.
    pub fn render(&self, flights: &[Flight]) -> String {
        self.flight_ids
            .iter()
            .enumerate()
            .map(|(i, id)| format!("{}. {}", i + 1, flights[id.0]))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airline, Cabin};

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    fn flight(id: usize, from: &str, to: &str, num_stops: u32) -> Flight {
        Flight {
            id: FlightId(id),
            airline: Airline::American,
            from: airport(from),
            to: airport(to),
            depart_ts: 0,
            arrive_ts: 0,
            depart_time: "5:20 AM".to_string(),
            arrive_time: "6:59 AM".to_string(),
            stops: if num_stops == 0 {
                "Nonstop".to_string()
            } else {
                format!("{num_stops} stops")
            },
            num_stops,
            cabin: Cabin::Economy,
            price: 100,
        }
    }

    #[test]
    fn seed_is_empty() {
        let seed = Itinerary::seed(airport("ATL"));
        assert!(seed.is_empty());
        assert_eq!(seed.legs(), 0);
        assert_eq!(seed.origin(), airport("ATL"));
        assert!(seed.flight_ids().is_empty());
    }

    #[test]
    fn with_flight_appends_without_mutating() {
        let seed = Itinerary::seed(airport("ATL"));
        let one = seed.with_flight(&flight(0, "ATL", "DFW", 0));
        let two = one.with_flight(&flight(1, "DFW", "DEN", 1));

        assert!(seed.is_empty());
        assert_eq!(one.flight_ids(), &[FlightId(0)]);
        assert_eq!(one.legs(), 1);
        assert_eq!(two.flight_ids(), &[FlightId(0), FlightId(1)]);
        assert_eq!(two.legs(), 3); // 1 + (1 stop + 1)
        assert_eq!(two.origin(), airport("ATL"));
    }

    #[test]
    fn first_flight_sets_origin() {
        let seed = Itinerary::seed(airport("JFK"));
        let grown = seed.with_flight(&flight(0, "ATL", "DFW", 0));
        assert_eq!(grown.origin(), airport("ATL"));
    }

    #[test]
    fn max_prefers_origin_match() {
        let from_atl = Itinerary::seed(airport("ATL")).with_flight(&flight(0, "ATL", "DFW", 0));
        let long_from_lax = Itinerary::seed(airport("LAX"))
            .with_flight(&flight(1, "LAX", "DEN", 2))
            .with_flight(&flight(2, "DEN", "ORD", 2));

        let origin = Some(airport("ATL"));
        // Origin preference beats a longer chain from elsewhere
        assert_eq!(
            Itinerary::max(from_atl.clone(), long_from_lax.clone(), origin),
            from_atl
        );
        assert_eq!(
            Itinerary::max(long_from_lax.clone(), from_atl.clone(), origin),
            from_atl
        );
        // Without the constraint, legs decide
        assert_eq!(
            Itinerary::max(from_atl, long_from_lax.clone(), None),
            long_from_lax
        );
    }

    #[test]
    fn max_prefers_more_legs() {
        let one_leg = Itinerary::seed(airport("ATL")).with_flight(&flight(0, "ATL", "DFW", 0));
        let three_legs = Itinerary::seed(airport("ATL")).with_flight(&flight(1, "ATL", "DEN", 2));

        assert_eq!(
            Itinerary::max(one_leg.clone(), three_legs.clone(), None),
            three_legs
        );
        assert_eq!(Itinerary::max(three_legs.clone(), one_leg, None), three_legs);
    }

    #[test]
    fn max_breaks_leg_ties_by_flight_count() {
        // Both have 2 effective legs: one nonstop + one nonstop vs one 1-stop
        let two_flights = Itinerary::seed(airport("ATL"))
            .with_flight(&flight(0, "ATL", "DFW", 0))
            .with_flight(&flight(1, "DFW", "DEN", 0));
        let one_flight = Itinerary::seed(airport("ATL")).with_flight(&flight(2, "ATL", "DEN", 1));

        assert_eq!(two_flights.legs(), one_flight.legs());
        assert_eq!(
            Itinerary::max(one_flight.clone(), two_flights.clone(), None),
            two_flights
        );
        assert_eq!(
            Itinerary::max(two_flights.clone(), one_flight, None),
            two_flights
        );
    }

    #[test]
    fn max_breaks_full_ties_by_larger_flight_id() {
        let lower = Itinerary::seed(airport("ATL")).with_flight(&flight(3, "ATL", "DFW", 0));
        let higher = Itinerary::seed(airport("ATL")).with_flight(&flight(7, "ATL", "DFW", 0));

        assert_eq!(Itinerary::max(lower.clone(), higher.clone(), None), higher);
        assert_eq!(Itinerary::max(higher.clone(), lower, None), higher);
    }

    #[test]
    fn max_returns_left_on_equal() {
        let a = Itinerary::seed(airport("ATL")).with_flight(&flight(0, "ATL", "DFW", 0));
        let b = a.clone();
        assert_eq!(Itinerary::max(a.clone(), b, None), a);
    }

    #[test]
    fn render_empty_is_empty_string() {
        assert_eq!(Itinerary::seed(airport("ATL")).render(&[]), "");
    }

    #[test]
    fn render_numbers_and_joins_legs() {
        let flights = vec![flight(0, "ATL", "DFW", 0), flight(1, "DFW", "DEN", 0)];
        let itinerary = Itinerary::seed(airport("ATL"))
            .with_flight(&flights[0])
            .with_flight(&flights[1]);

        let rendered = itinerary.render(&flights);
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. American flight from ATL"));
        assert!(lines[1].starts_with("2. American flight from DFW"));
        assert!(!rendered.ends_with('\n'));
    }
}
