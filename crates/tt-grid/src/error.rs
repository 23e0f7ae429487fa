use thiserror::Error;

use tt_core::{AgentId, Position};

#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {0} is no longer running")]
    CellClosed(Position),

    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    /// Internal-consistency failure: an agent released a cell it did not
    /// hold.  Never reachable while agents follow the occupy/free protocol.
    #[error("{agent} freed cell {position} held by {holder:?}")]
    NotOccupant {
        position: Position,
        agent:    AgentId,
        holder:   Option<AgentId>,
    },
}

pub type GridResult<T> = Result<T, GridError>;
