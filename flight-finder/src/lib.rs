//! Flight itinerary finder.
//!
//! Given a dataset of scheduled flights, finds the strongest chain of
//! connecting flights — maximum effective legs under a fixed multi-key
//! ordering — optionally preferring itineraries that depart from a mandated
//! origin airport. Three interchangeable strategies solve the same problem:
//! an exhaustive depth-first oracle and two dynamic-programming searches,
//! one sequential and one dependency-parallel.

pub mod catalog;
pub mod domain;
pub mod ingest;
pub mod search;
