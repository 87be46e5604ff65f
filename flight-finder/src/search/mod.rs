//! Itinerary search strategies.
//!
//! Three strategies over the same catalog, all maximizing the same
//! itinerary ordering: an exhaustive depth-first oracle, a sequential
//! dynamic-programming sweep in arrival order, and a dependency-parallel
//! reformulation of the same DP. For any catalog and configuration the
//! three agree on the result.

mod config;
mod exhaustive;
mod parallel;
mod sequential;
mod table;


pub use config::SearchConfig;
pub use exhaustive::ExhaustiveSearch;
pub use parallel::ParallelSearch;
pub use sequential::SequentialSearch;
