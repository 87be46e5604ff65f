//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Airport` value is valid by construction, and is `Copy` so it can
/// be used freely as a map key.
///
/// # Examples
///
/// ```
/// use flight_finder::domain::Airport;
///
/// let atl = Airport::parse("ATL").unwrap();
/// assert_eq!(atl.as_str(), "ATL");
///
/// // Lowercase is rejected
/// assert!(Airport::parse("atl").is_err());
///
/// // Wrong length is rejected
/// assert!(Airport::parse("AT").is_err());
/// assert!(Airport::parse("ATLL").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Airport([u8; 3]);

impl Airport {
    /// Anchor used for a degenerate empty result when no origin was mandated.
    /// The anchor of an empty itinerary never appears in rendered output.
    pub(crate) const PLACEHOLDER: Airport = Airport(*b"ATL");

    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirport {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirport {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Airport([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.as_str())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
