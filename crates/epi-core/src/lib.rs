//! `epi-core` — foundational types for the `epi` epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`ids`]   | `AgentId`, `PlaceId`                                |
//! | [`place`] | `PlaceKind`, `Location`                             |
//! | [`time`]  | `Tick`, `SimConfig`, `Tunables`                     |
//! | [`rng`]   | `AgentRng` (per-agent), `SimRng` (world-level)      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |
//!
//! # Error handling
//!
//! There is no shared error enum here: each `epi-*` crate defines its own
//! `thiserror` enum for the failures it can actually produce, converted at
//! crate seams with `#[from]`.

pub mod ids;
pub mod place;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AgentId, PlaceId};
pub use place::{Location, PlaceKind};
pub use rng::{AgentRng, SimRng};
pub use time::{SimConfig, Tick, Tunables};
