//! Flight catalog and per-airport arrival index.
//!
//! The catalog owns every flight under consideration, sorted by arrival
//! time, with ids reassigned to match the sorted positions. Sorting and id
//! assignment happen atomically inside [`FlightCatalog::new`]; no unsorted
//! intermediate state is ever observable, which is what lets the searches
//! treat "id order" and "arrival order" as the same thing.
//!
//! Per destination airport the catalog also keeps the list of arriving
//! flights (in the same order) and, per flight, its position within that
//! list. Both directions of that mapping are validated at construction;
//! a failure is a programming error and panics.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Airport, Flight, FlightId};

/// Position of a flight within its destination airport's arrival list.
///
/// Distinct from [`FlightId`] so the two index spaces cannot be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalArrivalIndex(pub usize);

/// Per-airport arrival state: every flight that lands at this airport,
/// ordered by arrival time (equivalently, by catalog id).
#[derive(Debug)]
pub struct AirportNode {
    airport: Airport,
    arriving: Vec<FlightId>,
}

impl AirportNode {
    /// The airport these flights arrive at.
    pub fn airport(&self) -> Airport {
        self.airport
    }

    /// Arriving flights in arrival order.
    pub fn arriving(&self) -> &[FlightId] {
        &self.arriving
    }

    /// The most recent arrival at this airport.
    pub fn last_arrival(&self) -> Option<FlightId> {
        self.arriving.last().copied()
    }
}

/// The arrival-sorted flight collection plus its airport index.
///
/// # Invariants
///
/// - `flights` is sorted by non-decreasing `arrive_ts` and `flights[i].id`
///   is `FlightId(i)`.
/// - For every flight `f`: `node(f.to).arriving()[local_index(f.id)] == f.id`.
/// - Each airport's arrival list is a subsequence of catalog order.
#[derive(Debug)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
    nodes: HashMap<Airport, AirportNode>,
    local_index: Vec<LocalArrivalIndex>,
    origin: Option<Airport>,
}

impl FlightCatalog {
    /// Build a catalog from an unordered flight collection.
    ///
    /// Sorts by arrival time, reassigns contiguous ids, and builds the
    /// airport index in one pass. `origin` is the airport itineraries are
    /// preferred to depart from; it biases comparisons during search but
    /// filters nothing here.
    ///
    /// # Panics
    ///
    /// Panics if the internal construction invariants fail verification
    /// (a bug in this module, never a property of the input data).
    pub fn new(mut flights: Vec<Flight>, origin: Option<Airport>) -> Self {
        flights.sort_by_key(|f| f.arrive_ts);
        for (pos, flight) in flights.iter_mut().enumerate() {
            flight.id = FlightId(pos);
        }

        let mut prev_arrive_ts = i64::MIN;
        for (pos, flight) in flights.iter().enumerate() {
            assert!(
                flight.arrive_ts >= prev_arrive_ts,
                "catalog order violates the arrival-time invariant at position {pos}"
            );
            assert_eq!(
                flight.id.0, pos,
                "flight id does not match its catalog position"
            );
            prev_arrive_ts = flight.arrive_ts;
        }

        let mut nodes: HashMap<Airport, AirportNode> = HashMap::new();
        let mut local_index = Vec::with_capacity(flights.len());
        for flight in &flights {
            let node = nodes.entry(flight.to).or_insert_with(|| AirportNode {
                airport: flight.to,
                arriving: Vec::new(),
            });
            local_index.push(LocalArrivalIndex(node.arriving.len()));
            node.arriving.push(flight.id);
        }

        let catalog = FlightCatalog {
            flights,
            nodes,
            local_index,
            origin,
        };
        catalog.validate();

        debug!(
            flights = catalog.flights.len(),
            airports = catalog.nodes.len(),
            "catalog built"
        );
        catalog
    }

    /// Verify both directions of the flight/local-index mapping.
    fn validate(&self) {
        for flight in &self.flights {
            let idx = self.local_index[flight.id.0];
            let node = &self.nodes[&flight.to];
            assert_eq!(
                node.arriving[idx.0], flight.id,
                "local arrival index for flight {} does not round-trip",
                flight.id
            );
        }

        for node in self.nodes.values() {
            for (pos, &id) in node.arriving.iter().enumerate() {
                assert_eq!(
                    self.local_index[id.0].0, pos,
                    "flight {} disagrees with its position in the {} arrival list",
                    id,
                    node.airport
                );
                assert_eq!(
                    self.flights[id.0].to,
                    node.airport,
                    "flight {} is indexed under an airport it does not arrive at",
                    id
                );
            }
        }
    }

    /// Number of flights in the catalog.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns true when the catalog holds no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// All flights, in arrival (= id) order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Look up one flight by id.
    pub fn flight(&self, id: FlightId) -> &Flight {
        &self.flights[id.0]
    }

    /// The mandated origin airport, if any.
    pub fn origin(&self) -> Option<Airport> {
        self.origin
    }

    /// The arrival state for one airport, if any flight lands there.
    pub fn node(&self, airport: Airport) -> Option<&AirportNode> {
        self.nodes.get(&airport)
    }

    /// All airport nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &AirportNode> {
        self.nodes.values()
    }

    /// A flight's position within its destination's arrival list.
    pub fn local_index(&self, id: FlightId) -> LocalArrivalIndex {
        self.local_index[id.0]
    }

    /// The arrival at the same destination immediately before `id`, if any.
    pub fn previous_arrival(&self, id: FlightId) -> Option<FlightId> {
        let idx = self.local_index[id.0];
        if idx.0 == 0 {
            return None;
        }
        Some(self.nodes[&self.flight(id).to].arriving[idx.0 - 1])
    }

    /// The latest arrival at `airport` with `arrive_ts <= latest_ts`.
    ///
    /// Binary search over the airport's arrival list, which is arrival
    /// sorted by construction.
    pub fn latest_arrival_by(&self, airport: Airport, latest_ts: i64) -> Option<FlightId> {
        let node = self.nodes.get(&airport)?;
        let eligible = node
            .arriving
            .partition_point(|&id| self.flights[id.0].arrive_ts <= latest_ts);
        if eligible == 0 {
            return None;
        }
        Some(node.arriving[eligible - 1])
    }

    /// The airport a degenerate empty result is anchored at: the mandated
    /// origin when given, otherwise a fixed placeholder (the anchor of an
    /// empty itinerary never shows in rendered output).
    pub fn seed_anchor(&self) -> Airport {
        self.origin.unwrap_or(Airport::PLACEHOLDER)
    }
}
