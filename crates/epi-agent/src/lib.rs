//! `epi-agent` — agent records, the population store, and the agent factory.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`agent`]   | `Agent`, `Health`, `CommuteLeg`, `CommutePhase`, `CommuteSchedule` |
//! | [`store`]   | `AgentStore` (population), `AgentRngs` (per-agent RNG)     |
//! | [`factory`] | `AgentFactory` — randomized population construction        |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                             |
//!
//! # Why `AgentStore` and `AgentRngs` are separate
//!
//! The infection scan needs `&mut` one agent's RNG while holding `&` the
//! whole population (to read co-occupants' health).  Rust's borrow checker
//! forbids this if both live inside a single struct; keeping RNGs in a
//! parallel `AgentRngs` resolves the conflict cleanly.

pub mod agent;
pub mod error;
pub mod factory;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, CommuteLeg, CommutePhase, CommuteSchedule, Health};
pub use error::{AgentError, AgentResult};
pub use factory::AgentFactory;
pub use store::{AgentRngs, AgentStore};
