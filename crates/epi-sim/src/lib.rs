//! `epi-sim` — the tick driver and the epidemic behavior it coordinates.
//!
//! # Per-tick pipeline
//!
//! ```text
//! advance():
//!   current_tick += 1
//!   for every agent, in ascending AgentId order:
//!     ① Location  — read the mobility provider's report for this tick,
//!                   settle a completed commute (EnRoute → Idle).
//!     ② Commute   — fire a due commute (alarm reached, idle) or give the
//!                   agent its wander chance; trips go to the provider.
//!     ③ Occupancy — reconcile the place occupancy sets with ①'s report.
//!     ④ Infection — contact scan over co-occupants, or exact-tick recovery.
//!     ⑤ Motion    — provider advances the agent toward any destination.
//!   emit TickStats { tick, infected, healthy } to the observer
//! ```
//!
//! One agent is processed completely before the next; there is no
//! parallelism and no suspension inside a tick, so external observers only
//! ever see between-tick state.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`sim`]       | `Sim<M>` — state, tick loop, panel sync                 |
//! | [`commute`]   | commute state machine + wandering (decision/apply)      |
//! | [`infection`] | transmission, recovery, outbreak seeding                |
//! | [`builder`]   | `SimBuilder<M>` — validated construction                |
//! | [`observer`]  | `SimObserver`, `NoopObserver`, `TickStats`              |
//! | [`error`]     | `SimError`, `SimResult<T>`                              |

pub mod builder;
pub mod commute;
pub mod error;
pub mod infection;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickStats};
pub use sim::Sim;
