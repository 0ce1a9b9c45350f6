//! Occupancy reconciliation — the single writer of occupancy sets.

use epi_core::{AgentId, Location, PlaceId};

use crate::PlaceRegistry;

/// Reconcile one agent's occupancy bookkeeping with its reported location.
///
/// `last_known` is the agent's own record of the place it was last listed
/// in (`None` while in transit).  The transition table:
///
/// - Now at a place different from `last_known`: insert into the new set and
///   update `last_known`.  On a direct place→place report — which the normal
///   flow never produces, since every trip interposes at least one
///   `InTransit` tick — the agent is also removed from the previous set, so
///   the single-occupancy invariant holds for any provider.
/// - Now in transit with `last_known` set: remove from that set and clear
///   `last_known`.
/// - No change: no-op.  Calling twice in a tick with the same location never
///   double-adds or double-removes.
pub fn reconcile(
    registry: &mut PlaceRegistry,
    agent: AgentId,
    location: Location,
    last_known: &mut Option<PlaceId>,
) {
    match location {
        Location::AtPlace(current) => {
            if *last_known == Some(current) {
                return;
            }
            if let Some(previous) = *last_known {
                registry.remove(previous, agent);
            }
            registry.insert(current, agent);
            *last_known = Some(current);
        }
        Location::InTransit => {
            if let Some(previous) = last_known.take() {
                registry.remove(previous, agent);
            }
        }
    }
}
