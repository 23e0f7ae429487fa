//! `tt-agent`: the agents that move on the grid.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`context`]    | `AgentContext`, `RunClock`: what every agent is spawned with |
//! | [`signal`]     | `StartSignal` / `StartTrigger`: the shared start gate     |
//! | [`report`]     | `ReportSender`: the agent side of the reporter channel    |
//! | [`negotiator`] | `Negotiator`: turns a direction into a move outcome       |
//! | [`traveler`]   | `Traveler`: goal-directed agent with a step budget        |
//! | [`wild`]       | `WildTraveler`: displaceable agent with a lifespan        |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                             |
//!
//! # Lifecycles
//!
//! ```text
//! Traveler:  Initializing → WaitingForStart → Moving → Finished | Stuck | Trapped
//! Wild:      Spawned → WaitingForStart → Roaming → Disappeared | Trapped
//! ```
//!
//! Every agent reports its trace sequence exactly once.  A trapped agent
//! additionally reports the trap's collision announcement right after its own
//! sequence.

pub mod context;
pub mod error;
pub mod negotiator;
pub mod report;
pub mod signal;
pub mod traveler;
pub mod wild;


pub use context::{AgentContext, RunClock};
pub use error::{AgentError, AgentResult};
pub use negotiator::{MoveOutcome, Negotiator};
pub use report::{report_channel, ReportReceiver, ReportSender};
pub use signal::{start_signal, StartSignal, StartTrigger};
pub use traveler::Traveler;
pub use wild::WildTraveler;
