//! Exhaustive depth-first search.
//!
//! Explores every chain of connecting flights reachable from every feasible
//! starting flight, keeping a running best under the itinerary ordering.
//! Nothing is memoized, so the cost is exponential in the worst case; this
//! strategy exists as the correctness oracle the DP strategies are checked
//! against, and for small catalogs where brute force is fine.

use tracing::debug;

use crate::catalog::FlightCatalog;
use crate::domain::{Flight, Itinerary};

use super::config::SearchConfig;

/// Brute-force search over all connectable flight chains.
pub struct ExhaustiveSearch<'a> {
    catalog: &'a FlightCatalog,
    config: &'a SearchConfig,
}

impl<'a> ExhaustiveSearch<'a> {
    /// Create a new exhaustive search over `catalog`.
    pub fn new(catalog: &'a FlightCatalog, config: &'a SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Find the best itinerary in the catalog.
    ///
    /// With an origin constraint only flights departing there seed the
    /// recursion; otherwise every flight does. Every chain visited along the
    /// way is a candidate, so prefixes of long chains compete too.
    pub fn search(&self) -> Itinerary {
        let mut best = Itinerary::seed(self.catalog.seed_anchor());

        for flight in self.catalog.flights() {
            if let Some(origin) = self.catalog.origin()
                && flight.from != origin
            {
                continue;
            }
            let chain = Itinerary::seed(flight.from).with_flight(flight);
            self.explore(flight, chain, &mut best);
        }

        debug!(legs = best.legs(), "exhaustive search finished");
        best
    }

    /// Depth-first extension of `chain`, whose last flight is `last`.
    fn explore(&self, last: &Flight, chain: Itinerary, best: &mut Itinerary) {
        *best = Itinerary::max(best.clone(), chain.clone(), self.catalog.origin());

        // Forward exploration stops at the cutoff boundary; the chain built
        // so far has already been considered above.
        if let Some(cutoff_ts) = self.config.cutoff_ts
            && last.arrive_ts > cutoff_ts
        {
            return;
        }

        let earliest_depart = last.arrive_ts + self.config.layover_floor_secs;
        for next in self.catalog.flights() {
            if next.from == last.to && next.depart_ts >= earliest_depart {
                self.explore(next, chain.with_flight(next), best);
            }
        }
    }
}
