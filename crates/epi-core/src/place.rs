//! Place categories and the agent location sum type.

use std::fmt;

use crate::PlaceId;

// ── PlaceKind ─────────────────────────────────────────────────────────────────

/// Zoning category of a place.
///
/// Residential places are eligible homes; commercial places are eligible
/// workplaces.  The category is fixed at world-build time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceKind {
    Residential,
    Commercial,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceKind::Residential => write!(f, "residential"),
            PlaceKind::Commercial => write!(f, "commercial"),
        }
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// Where an agent currently is: inside a place, or between places.
///
/// An agent `InTransit` occupies no place and therefore appears in no
/// occupancy set and takes part in no contact scan.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// The agent is inside the place with this ID.
    AtPlace(PlaceId),
    /// The agent is travelling and is currently inside no place.
    InTransit,
}

impl Location {
    /// The occupied place, if any.
    #[inline]
    pub fn place(self) -> Option<PlaceId> {
        match self {
            Location::AtPlace(p) => Some(p),
            Location::InTransit => None,
        }
    }

    #[inline]
    pub fn is_at_place(self) -> bool {
        matches!(self, Location::AtPlace(_))
    }

    #[inline]
    pub fn is_in_transit(self) -> bool {
        matches!(self, Location::InTransit)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::AtPlace(p) => write!(f, "at {p}"),
            Location::InTransit => write!(f, "in transit"),
        }
    }
}
