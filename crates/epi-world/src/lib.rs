//! `epi-world` — the place registry and occupancy bookkeeping.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`place`]     | `Place` — a home/workplace unit and its occupancy set    |
//! | [`registry`]  | `PlaceRegistry` — all places, zone pools, slot index     |
//! | [`occupancy`] | `reconcile` — keeps occupancy sets consistent with agent locations |
//! | [`loader`]    | `load_places_csv`, `load_places_reader`                  |
//! | [`error`]     | `WorldError`, `WorldResult<T>`                           |
//!
//! # Occupancy model (summary)
//!
//! Every place holds an insertion-ordered `Vec<AgentId>` of its current
//! occupants.  The registry maintains one `agent → slot` map across all
//! places, so removal is an O(1) swap instead of a linear scan.  The single
//! writer is [`occupancy::reconcile`], called once per agent per tick:
//!
//! ```text
//! AtPlace(p), last_known != Some(p)  →  insert into p, last_known = Some(p)
//! InTransit,  last_known == Some(q)  →  remove from q, last_known = None
//! anything else                      →  no-op (idempotent within a tick)
//! ```
//!
//! The invariant — an agent appears in exactly one occupancy set iff it is
//! at a place, otherwise in none — is checkable with
//! [`PlaceRegistry::check_consistency`].

pub mod error;
pub mod loader;
pub mod occupancy;
pub mod place;
pub mod registry;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use loader::{load_places_csv, load_places_reader};
pub use occupancy::reconcile;
pub use place::Place;
pub use registry::PlaceRegistry;
