//! Domain types for the flight itinerary finder.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airline;
mod airport;
mod cabin;
mod constraints;
mod flight;
mod itinerary;

pub use airline::{Airline, UnknownAirline};
pub use airport::{Airport, InvalidAirport};
pub use cabin::{Cabin, UnknownCabin};
pub use constraints::Constraints;
pub use flight::{Flight, FlightId};
pub use itinerary::Itinerary;
