//! Fare class type.

use std::fmt;

/// Error returned when a cabin name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cabin: {name}")]
pub struct UnknownCabin {
    name: String,
}

/// A fare class offered on a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cabin {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl Cabin {
    /// Returns the cabin's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Cabin::Economy => "Economy",
            Cabin::PremiumEconomy => "Premium Economy",
            Cabin::Business => "Business",
            Cabin::First => "First",
        }
    }

    /// Parse a cabin name. The feed abbreviates Premium Economy to
    /// "Premium"; both spellings are accepted.
    pub fn parse(s: &str) -> Result<Self, UnknownCabin> {
        match s {
            "Economy" => Ok(Cabin::Economy),
            "Premium" | "Premium Economy" => Ok(Cabin::PremiumEconomy),
            "Business" => Ok(Cabin::Business),
            "First" => Ok(Cabin::First),
            _ => Err(UnknownCabin {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
