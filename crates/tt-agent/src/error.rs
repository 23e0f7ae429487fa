use thiserror::Error;

use tt_core::{AgentId, Position, TrapId};
use tt_grid::GridError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("reporter channel closed")]
    ReporterClosed,

    #[error("start signal dropped before release")]
    StartAborted,

    #[error("{agent} sprang trap {trap} at {at} while being placed")]
    TrapAtPlacement {
        agent: AgentId,
        trap:  TrapId,
        at:    Position,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
