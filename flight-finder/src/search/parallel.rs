//! Dependency-parallel dynamic-programming search.
//!
//! The sequential sweep (see [`super::SequentialSearch`]) orders all work
//! by arrival time, which serializes flights that have nothing to do with
//! each other. This strategy makes the real dependencies explicit instead: each
//! flight's entry depends on at most two earlier entries, so the work forms
//! a DAG that can be resolved with data-parallel fan-out.
//!
//! Phase 1 (discovery) computes, per flight, the ids of its two optional
//! predecessors. It reads only the immutable catalog, writes only its own
//! slot, and runs fully before phase 2 starts.
//!
//! Phase 2 (resolution) walks the dependency graph in depth order: wave `d`
//! holds every flight whose deepest predecessor chain has length `d`. All
//! flights in a wave are resolved concurrently from entries committed by
//! strictly earlier waves, then committed together before the next wave.
//! Each flight owns exactly one slot, so there are no write-write conflicts,
//! and a wave never reads a slot its own wave writes, so reading an
//! uncommitted entry is structurally impossible.

use rayon::prelude::*;
use tracing::debug;

use crate::catalog::FlightCatalog;
use crate::domain::{FlightId, Itinerary};

use super::config::SearchConfig;
use super::table::OptTable;

/// The two optional table entries a flight's entry is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Predecessors {
    /// Last arrival at the departure airport still in time to connect.
    incoming: Option<FlightId>,
    /// Prior arrival at the destination airport.
    previous: Option<FlightId>,
}

/// Two-phase dependency-parallel DP search.
pub struct ParallelSearch<'a> {
    catalog: &'a FlightCatalog,
    config: &'a SearchConfig,
}

impl<'a> ParallelSearch<'a> {
    /// Create a new parallel search over `catalog`.
    pub fn new(catalog: &'a FlightCatalog, config: &'a SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Find the best itinerary in the catalog.
    ///
    /// Produces exactly the result of [`super::SequentialSearch::search`]
    /// for the same catalog and configuration.
    pub fn search(&self) -> Itinerary {
        let predecessors = self.discover();
        let waves = dependency_waves(&predecessors);
        debug!(
            flights = predecessors.len(),
            waves = waves.len(),
            "dependencies discovered"
        );

        let mut table = OptTable::new(self.catalog);
        for wave in &waves {
            let resolved: Vec<(FlightId, Itinerary)> = wave
                .par_iter()
                .map(|&id| {
                    let preds = predecessors[id.0];
                    (id, table.resolve(id, preds.incoming, preds.previous))
                })
                .collect();
            for (id, entry) in resolved {
                table.commit(id, entry);
            }
        }

        let best = table.best();
        debug!(legs = best.legs(), "parallel search finished");
        best
    }

    /// Phase 1: record each flight's predecessor references.
    ///
    /// Reads only the immutable catalog, so every flight is independent.
    fn discover(&self) -> Vec<Predecessors> {
        self.catalog
            .flights()
            .par_iter()
            .map(|flight| Predecessors {
                incoming: self
                    .catalog
                    .latest_arrival_by(flight.from, self.config.connection_bound(flight.depart_ts)),
                previous: self.catalog.previous_arrival(flight.id),
            })
            .collect()
    }
}

/// Group flights into resolution waves by dependency depth: a flight with no
/// predecessors has depth 0, otherwise one more than its deepest predecessor.
///
/// # Panics
///
/// Panics if a predecessor reference does not point at an earlier flight;
/// both predecessor kinds arrive strictly before their dependent, so ids
/// (which follow arrival order) must decrease along every edge.
fn dependency_waves(predecessors: &[Predecessors]) -> Vec<Vec<FlightId>> {
    let mut depth = vec![0usize; predecessors.len()];
    let mut waves: Vec<Vec<FlightId>> = Vec::new();

    for (i, preds) in predecessors.iter().enumerate() {
        let pred_depth = |pred: Option<FlightId>| {
            pred.map(|id| {
                assert!(
                    id.0 < i,
                    "dependency of flight {i} on flight {id} is not arrival-ordered"
                );
                depth[id.0] + 1
            })
            .unwrap_or(0)
        };

        let d = pred_depth(preds.incoming).max(pred_depth(preds.previous));
        depth[i] = d;
        if waves.len() <= d {
            waves.resize_with(d + 1, Vec::new);
        }
        waves[d].push(FlightId(i));
    }

    waves
}
