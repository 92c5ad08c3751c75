use serde::{Serialize, Serializer};
use std::fmt;

/// A place inside the store.
///
/// The symbol set is open: anything that is not one of the two reserved
/// boundary symbols is kept verbatim as a `Section` (aisle, category, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Entrance,
    Checkout,
    Section(String),
}

impl Location {
    pub const ENTRANCE: &'static str = "entrance";
    pub const CHECKOUT: &'static str = "checkout";

    pub fn as_str(&self) -> &str {
        match self {
            Location::Entrance => Self::ENTRANCE,
            Location::Checkout => Self::CHECKOUT,
            Location::Section(name) => name,
        }
    }

    /// Convert a raw log value → Location.
    /// Returns `None` for blank values: a missing location is never guessed.
    /// Only the exact lowercase symbols are reserved; `Checkout` is a section.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "" => None,
            Self::ENTRANCE => Some(Location::Entrance),
            Self::CHECKOUT => Some(Location::Checkout),
            other => Some(Location::Section(other.to_string())),
        }
    }

    pub fn is_checkout(&self) -> bool {
        matches!(self, Location::Checkout)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
