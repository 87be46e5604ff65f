//! Sequential dynamic-programming search.
//!
//! A single sweep over the catalog in arrival order. Because every flight's
//! two predecessors (the last connectable arrival at its departure airport,
//! and the prior arrival at its destination) arrive strictly earlier, both
//! entries are already committed by the time they are read; the sweep order
//! alone is the synchronization.

use tracing::debug;

use crate::catalog::FlightCatalog;
use crate::domain::Itinerary;

use super::config::SearchConfig;
use super::table::OptTable;

/// Arrival-order DP sweep.
pub struct SequentialSearch<'a> {
    catalog: &'a FlightCatalog,
    config: &'a SearchConfig,
}

impl<'a> SequentialSearch<'a> {
    /// Create a new sequential search over `catalog`.
    pub fn new(catalog: &'a FlightCatalog, config: &'a SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Find the best itinerary in the catalog.
    ///
    /// For each flight in catalog order, its entry is the stronger of:
    /// the best chain that can connect onto it at its departure airport,
    /// extended by it; and the destination airport's best so far. After the
    /// sweep the result is the reduction over every airport's last entry.
    pub fn search(&self) -> Itinerary {
        let mut table = OptTable::new(self.catalog);

        for flight in self.catalog.flights() {
            let incoming = self
                .catalog
                .latest_arrival_by(flight.from, self.config.connection_bound(flight.depart_ts));
            let previous = self.catalog.previous_arrival(flight.id);

            let entry = table.resolve(flight.id, incoming, previous);
            table.commit(flight.id, entry);
        }

        let best = table.best();
        debug!(legs = best.legs(), "sequential search finished");
        best
    }
}
