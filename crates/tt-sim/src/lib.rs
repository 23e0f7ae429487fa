//! `tt-sim`: the coordinator and reporter of the torus travelers simulation.
//!
//! # One run
//!
//! ```text
//! Sim::run(sink):
//!   ① Grid: one actor task per cell.
//!   ② Traps: mark `traps` free cells; announce each (timestamp 0).
//!   ③ Agents: spawn travelers and wild travelers; each places itself
//!             and parks on the start signal.
//!   ④ Start: release the signal.
//!   ⑤ Drain: Reporter forwards every sequence to the sink while the
//!            agent join set is awaited; the first failure aborts.
//! ```
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`builder`]  | `SimBuilder`                                     |
//! | [`sim`]      | `Sim`, the coordinator                           |
//! | [`reporter`] | `Reporter`, `ReportSummary`                      |
//! | [`sink`]     | `TraceSink` trait, `NoopSink`, `CollectingSink`  |
//! | [`error`]    | `SimError`, `SimResult`                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_core::TravelConfig;
//! use tt_sim::{NoopSink, SimBuilder};
//!
//! let mut sim = SimBuilder::new(TravelConfig::default()).seed(7).build()?;
//! let summary = sim.run(&mut NoopSink).await?;
//! ```

pub mod builder;
pub mod error;
pub mod reporter;
pub mod sim;
pub mod sink;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use reporter::{ReportSummary, Reporter};
pub use sim::Sim;
pub use sink::{CollectingSink, NoopSink, TraceSink};
