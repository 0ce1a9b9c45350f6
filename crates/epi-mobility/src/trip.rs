//! Trip descriptions handed to a mobility provider.

use epi_agent::CommuteLeg;
use epi_core::PlaceId;

// ── UnitPoint ─────────────────────────────────────────────────────────────────

/// A point inside a place, in normalized `[0, 1] × [0, 1]` coordinates.
///
/// The scheduler draws both coordinates uniformly; a provider with real
/// geometry maps them onto the place's footprint, and a provider without
/// (like [`TransitMobility`][crate::TransitMobility]) ignores them.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct UnitPoint {
    pub u: f64,
    pub v: f64,
}

// ── TripKind ──────────────────────────────────────────────────────────────────

/// Why a trip was issued.  Providers may render or pace the kinds
/// differently; the simulation core uses the tag to keep commutes and local
/// wandering from interfering with each other.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TripKind {
    /// A scheduled home↔workplace relocation.
    Commute(CommuteLeg),
    /// Local wandering to another point of the place the agent is already in.
    Wander,
}

impl TripKind {
    #[inline]
    pub fn is_commute(self) -> bool {
        matches!(self, TripKind::Commute(_))
    }
}

// ── TripRequest ───────────────────────────────────────────────────────────────

/// A request for the mobility provider to move an agent.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TripRequest {
    /// Target point inside `destination`.
    pub point: UnitPoint,

    /// The place the trip ends in.  For `TripKind::Wander` this is the
    /// agent's current place.
    pub destination: PlaceId,

    pub kind: TripKind,

    /// Travel speed.  Commutes pass the world's current speed multiplier;
    /// wandering is always at unit speed.
    pub speed: f64,

    /// Replace any trip already under way instead of being dropped.
    /// Commutes replace; wandering never does.
    pub replace_current: bool,
}
