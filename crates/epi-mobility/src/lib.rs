//! `epi-mobility` — the seam between the simulation core and whatever moves
//! agents through space.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`trip`]     | `UnitPoint`, `TripKind`, `TripRequest`                   |
//! | [`provider`] | `MobilityProvider` trait                                 |
//! | [`transit`]  | `TransitMobility` — built-in tick-based provider         |
//! | [`error`]    | `MobilityError`, `MobilityResult<T>`                     |
//!
//! # Division of labour
//!
//! The simulation core decides *that* an agent travels (commute scheduler,
//! wandering) and *where to* (a place plus a normalized in-place point).
//! The provider owns everything geometric: paths, interpolation, real-world
//! coordinates.  The core only ever reads back a [`Location`] — at a place,
//! or in transit — once per agent per tick.
//!
//! [`TransitMobility`] is the built-in provider: no geometry, just tick
//! accounting.  A commute spends `max(1, round(base_trip_ticks / speed))`
//! ticks in transit and then arrives; wander trips never leave the place.
//! Hosts with a real map swap in their own `MobilityProvider` impl.
//!
//! [`Location`]: epi_core::Location

pub mod error;
pub mod provider;
pub mod transit;
pub mod trip;


pub use error::{MobilityError, MobilityResult};
pub use provider::MobilityProvider;
pub use transit::TransitMobility;
pub use trip::{TripKind, TripRequest, UnitPoint};
