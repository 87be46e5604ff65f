//! The dynamic-programming table shared by the DP search strategies.
//!
//! One slot per flight, in catalog order: slot `i` holds the best itinerary
//! that ends with flight `i`'s arrival. A slot starts unresolved and is
//! populated exactly once by [`OptTable::commit`]; an unresolved entry is
//! simply absent, so a half-written value can never be observed. Reading an
//! unresolved slot means the caller's dependency ordering is broken, which
//! is a fatal programming error, not a data condition.

use crate::catalog::FlightCatalog;
use crate::domain::{FlightId, Itinerary};

/// Per-flight DP entries over a catalog.
pub struct OptTable<'a> {
    catalog: &'a FlightCatalog,
    entries: Vec<Option<Itinerary>>,
}

impl<'a> OptTable<'a> {
    /// A table with every slot unresolved.
    pub fn new(catalog: &'a FlightCatalog) -> Self {
        Self {
            catalog,
            entries: vec![None; catalog.len()],
        }
    }

    /// The committed entry for `id`.
    ///
    /// # Panics
    ///
    /// Panics if the entry has not been committed: the search asked for a
    /// predecessor that was not resolved first, so the arrival-order (or
    /// dependency-order) invariant was broken upstream.
    pub fn committed(&self, id: FlightId) -> &Itinerary {
        self.entries[id.0]
            .as_ref()
            .unwrap_or_else(|| panic!("DP entry for flight {id} read before it was resolved"))
    }

    /// Install the entry for `id`. Entries are write-once.
    ///
    /// # Panics
    ///
    /// Panics on a second commit for the same flight.
    pub fn commit(&mut self, id: FlightId, entry: Itinerary) {
        let slot = &mut self.entries[id.0];
        assert!(slot.is_none(), "DP entry for flight {id} resolved twice");
        *slot = Some(entry);
    }

    /// Compute the entry for `id` from its two optional predecessors.
    ///
    /// `incoming` is the last arrival at the departure airport still in time
    /// to connect; `previous` is the prior arrival at the destination. Where
    /// a predecessor is absent a seed itinerary stands in: anchored at the
    /// departure airport for the incoming chain, at the destination for the
    /// previous one.
    pub fn resolve(
        &self,
        id: FlightId,
        incoming: Option<FlightId>,
        previous: Option<FlightId>,
    ) -> Itinerary {
        let flight = self.catalog.flight(id);

        let incoming = match incoming {
            Some(pred) => self.committed(pred).with_flight(flight),
            None => Itinerary::seed(flight.from).with_flight(flight),
        };
        let previous = match previous {
            Some(pred) => self.committed(pred).clone(),
            None => Itinerary::seed(flight.to),
        };

        Itinerary::max(incoming, previous, self.catalog.origin())
    }

    /// The overall best itinerary: the `max`-reduction, under the catalog's
    /// origin constraint, of the most recent entry of every airport.
    ///
    /// With no flights at all this degenerates to the empty seed itinerary,
    /// which renders as an empty result.
    pub fn best(&self) -> Itinerary {
        let mut best = Itinerary::seed(self.catalog.seed_anchor());
        for node in self.catalog.nodes() {
            if let Some(last) = node.last_arrival() {
                best = Itinerary::max(best, self.committed(last).clone(), self.catalog.origin());
            }
        }
        best
    }
}
