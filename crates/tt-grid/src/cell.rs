//! The cell actor and its handle.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

use tt_core::{AgentId, Position, TrapId};

use crate::state::FreeRefused;
use crate::{CellSnapshot, CellState, Claim, GridError, GridResult, Occupant};

/// Pending requests per cell.
const MAILBOX_CAPACITY: usize = 32;

enum CellRequest {
    Query(oneshot::Sender<CellSnapshot>),
    Occupy {
        occupant: Occupant,
        reply:    oneshot::Sender<Claim>,
    },
    Free {
        agent: AgentId,
        reply: oneshot::Sender<Result<(), FreeRefused>>,
    },
    MarkTrap {
        trap:  TrapId,
        reply: oneshot::Sender<bool>,
    },
}

/// Handle to one cell's actor task.
///
/// Cheap to clone.  The task exits once every handle has been dropped.
#[derive(Clone, Debug)]
pub struct Cell {
    position: Position,
    tx:       mpsc::Sender<CellRequest>,
}

impl Cell {
    /// Spawn the actor for `position` on the current tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn(position: Position) -> Self {
        let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);
        tokio::spawn(serve(position, CellState::new(), rx));
        Self { position, tx }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current state, without changing it.
    pub async fn query(&self) -> GridResult<CellSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.send(CellRequest::Query(reply)).await?;
        rx.await.map_err(|_| GridError::CellClosed(self.position))
    }

    /// Try to take the cell.  Never waits for the cell to become free; a
    /// taken cell answers [`Claim::Refused`].
    pub async fn occupy(&self, occupant: Occupant) -> GridResult<Claim> {
        let (reply, rx) = oneshot::channel();
        self.send(CellRequest::Occupy { occupant, reply }).await?;
        rx.await.map_err(|_| GridError::CellClosed(self.position))
    }

    /// Release the cell held by `agent`.
    pub async fn free(&self, agent: AgentId) -> GridResult<()> {
        let (reply, rx) = oneshot::channel();
        self.send(CellRequest::Free { agent, reply }).await?;
        match rx.await.map_err(|_| GridError::CellClosed(self.position))? {
            Ok(()) => Ok(()),
            Err(refused) => {
                let holder = match refused {
                    FreeRefused::Vacant     => None,
                    FreeRefused::HeldBy(h)  => Some(h),
                };
                error!(position = %self.position, %agent, ?holder, "free by non-occupant");
                Err(GridError::NotOccupant { position: self.position, agent, holder })
            }
        }
    }

    /// Arm a trap.  Only meaningful before agents start moving.
    pub async fn mark_trap(&self, trap: TrapId) -> GridResult<bool> {
        let (reply, rx) = oneshot::channel();
        self.send(CellRequest::MarkTrap { trap, reply }).await?;
        rx.await.map_err(|_| GridError::CellClosed(self.position))
    }

    async fn send(&self, req: CellRequest) -> GridResult<()> {
        self.tx
            .send(req)
            .await
            .map_err(|_| GridError::CellClosed(self.position))
    }
}

/// Actor loop: one request at a time, answered from local state.
async fn serve(position: Position, mut state: CellState, mut rx: mpsc::Receiver<CellRequest>) {
    while let Some(req) = rx.recv().await {
        match req {
            CellRequest::Query(reply) => {
                let _ = reply.send(state.snapshot());
            }
            CellRequest::Occupy { occupant, reply } => {
                let agent = occupant.agent();
                let claim = state.occupy(occupant);
                if let Claim::Sprung(trap) = claim {
                    debug!(%position, %agent, %trap, "trap sprung");
                }
                let _ = reply.send(claim);
            }
            CellRequest::Free { agent, reply } => {
                let _ = reply.send(state.free(agent));
            }
            CellRequest::MarkTrap { trap, reply } => {
                let _ = reply.send(state.mark_trap(trap));
            }
        }
    }
}
