use thiserror::Error;

use tt_agent::AgentError;
use tt_core::CoreError;
use tt_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match traveler count {expected}")]
    TravelerCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("agent task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("report channel closed after {received} of {expected} sequences")]
    ReporterStarved {
        received: usize,
        expected: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
