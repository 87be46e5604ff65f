//! Airline carrier type.

use std::fmt;

/// Error returned when an airline name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown airline: {name}")]
pub struct UnknownAirline {
    name: String,
}

/// A known airline carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Airline {
    Delta,
    Southwest,
    American,
    Allegiant,
    Alaska,
    Southern,
    Tropic,
    Hawaiian,
    JetBlue,
    Key,
    Sun,
    Contour,
    Avelo,
    Swiss,
    Cape,
    Spirit,
    British,
    SkyWest,
    Breeze,
    United,
    Lufthansa,
    Frontier,
    Silver,
    Ita,
    Jsx,
}

/// All carriers paired with their display names, in declaration order.
const AIRLINE_NAMES: &[(Airline, &str)] = &[
    (Airline::Delta, "Delta"),
    (Airline::Southwest, "Southwest"),
    (Airline::American, "American"),
    (Airline::Allegiant, "Allegiant"),
    (Airline::Alaska, "Alaska"),
    (Airline::Southern, "Southern"),
    (Airline::Tropic, "Tropic"),
    (Airline::Hawaiian, "Hawaiian"),
    (Airline::JetBlue, "JetBlue"),
    (Airline::Key, "Key"),
    (Airline::Sun, "Sun"),
    (Airline::Contour, "Contour"),
    (Airline::Avelo, "Avelo"),
    (Airline::Swiss, "Swiss"),
    (Airline::Cape, "Cape"),
    (Airline::Spirit, "Spirit"),
    (Airline::British, "British"),
    (Airline::SkyWest, "SkyWest"),
    (Airline::Breeze, "Breeze"),
    (Airline::United, "United"),
    (Airline::Lufthansa, "Lufthansa"),
    (Airline::Frontier, "Frontier"),
    (Airline::Silver, "Silver"),
    (Airline::Ita, "ITA"),
    (Airline::Jsx, "JSX"),
];

impl Airline {
    /// Returns the carrier's display name.
    pub fn name(&self) -> &'static str {
        // Safe: every variant appears in AIRLINE_NAMES
        AIRLINE_NAMES
            .iter()
            .find(|(a, _)| a == self)
            .map(|(_, n)| *n)
            .unwrap()
    }

    /// Parse an exact carrier name, as entered on the command line.
    pub fn parse(s: &str) -> Result<Self, UnknownAirline> {
        AIRLINE_NAMES
            .iter()
            .find(|(_, n)| *n == s)
            .map(|(a, _)| *a)
            .ok_or_else(|| UnknownAirline {
                name: s.to_string(),
            })
    }

    /// Detect a carrier inside a free-form airline string from the feed.
    ///
    /// Feed strings embed the carrier name among other text (codeshare
    /// partners, "operated by" suffixes), so this scans for every known name
    /// and picks the one that occurs earliest in the string.
    pub fn detect(s: &str) -> Option<Self> {
        AIRLINE_NAMES
            .iter()
            .filter_map(|(a, n)| s.find(n).map(|pos| (pos, *a)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, a)| a)
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
