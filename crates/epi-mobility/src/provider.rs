//! The `MobilityProvider` trait — the simulation core's only view of space.

use epi_core::{AgentId, Location, PlaceId, Tick};

use crate::{MobilityResult, TripRequest};

/// Moves agents through space on behalf of the simulation core.
///
/// All methods are synchronous and non-blocking: `advance` updates internal
/// interpolation state, never performs I/O, and returns before the driver
/// moves on to the next agent.  The core calls, per agent per tick:
///
/// 1. [`location`][Self::location] — consumed by the occupancy tracker and
///    the infection model;
/// 2. possibly [`schedule_trip`][Self::schedule_trip] — from the commute
///    scheduler or the wandering draw;
/// 3. [`advance`][Self::advance] — move the agent toward any pending
///    destination.
///
/// [`set_speed`][Self::set_speed] arrives outside that cycle whenever the
/// operator changes the speed multiplier.
pub trait MobilityProvider {
    /// Teleport `agent` into `place` without a trip (initial placement).
    fn place(&mut self, agent: AgentId, place: PlaceId, now: Tick);

    /// Start (or replace, per `trip.replace_current`) a trip for `agent`.
    ///
    /// # Errors
    ///
    /// `MobilityError::NotPlaced` if the agent was never placed; the caller
    /// treats this as non-fatal and leaves the agent's bookkeeping untouched.
    fn schedule_trip(&mut self, agent: AgentId, trip: TripRequest, now: Tick) -> MobilityResult<()>;

    /// Where `agent` currently is: at a place, or in transit between places.
    fn location(&self, agent: AgentId) -> Location;

    /// Re-issue the travel speed for `agent`, rescaling any trip under way.
    fn set_speed(&mut self, agent: AgentId, speed: f64, now: Tick);

    /// Advance `agent`'s physical motion by one tick.
    fn advance(&mut self, agent: AgentId, now: Tick);
}
