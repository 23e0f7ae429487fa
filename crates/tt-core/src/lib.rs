//! `tt-core`: foundational types for the torus travelers simulation.
//!
//! This crate is a dependency of every other `tt-*` crate.  It intentionally
//! has no `tt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `TrapId`, `Owner`                              |
//! | [`torus`]   | `Position`, `Direction`, wrap-around stepping             |
//! | [`trace`]   | `Symbol`, `Trace`, `TraceSequence`, `Outcome`             |
//! | [`rng`]     | `DecisionSource` (per-agent), `SimRng` (coordinator)      |
//! | [`config`]  | `TravelConfig` and its validation                         |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod torus;
pub mod trace;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TravelConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, Owner, TrapId};
pub use rng::{DecisionSource, SimRng};
pub use torus::{Direction, Position};
pub use trace::{Outcome, Symbol, Trace, TraceSequence};
