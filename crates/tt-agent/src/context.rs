//! Everything an agent is spawned with.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::error;

use tt_core::{DecisionSource, Position, TravelConfig};
use tt_grid::{Claim, Grid, Occupant};

use crate::{AgentError, AgentResult, ReportSender, StartSignal};

/// Time origin of a run.  Every trace timestamp is measured from it.
///
/// Uses tokio's clock so a paused test runtime controls it.
#[derive(Copy, Clone, Debug)]
pub struct RunClock {
    origin: Instant,
}

impl RunClock {
    pub fn start() -> Self {
        Self { origin: Instant::now() }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Shared dependencies injected into every agent.
///
/// Cloning is cheap: the grid and config are behind `Arc`s, the rest are
/// channel handles.
#[derive(Clone, Debug)]
pub struct AgentContext {
    pub grid:    Arc<Grid>,
    pub config:  Arc<TravelConfig>,
    pub clock:   RunClock,
    pub start:   StartSignal,
    pub reports: ReportSender,
}

impl AgentContext {
    /// Claim a random free, non-trap cell, retrying every `poll_interval`
    /// until one is won.  Returns the cell's position.
    pub(crate) async fn claim_random_cell<F>(
        &self,
        rng:      &mut DecisionSource,
        occupant: F,
    ) -> AgentResult<Position>
    where
        F: Fn() -> Occupant,
    {
        let (w, h) = (self.grid.width(), self.grid.height());
        loop {
            let pos  = Position::new(rng.gen_range(0..w), rng.gen_range(0..h));
            let cell = self.grid.cell(pos);
            let snap = cell.query().await?;
            if snap.is_free() && !snap.is_trap() && self.try_claim(pos, occupant()).await? {
                return Ok(pos);
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Occupy the cell at `pos` for placement.  Returns `false` when someone
    /// else got there first.
    ///
    /// Traps are armed before any agent spawns and placement only targets
    /// cells that queried as untrapped, so springing one here means the
    /// board is inconsistent.
    pub(crate) async fn try_claim(&self, pos: Position, occupant: Occupant) -> AgentResult<bool> {
        let agent = occupant.agent();
        match self.grid.cell(pos).occupy(occupant).await? {
            Claim::Entered => Ok(true),
            Claim::Refused { .. } => Ok(false),
            Claim::Sprung(trap) => {
                error!(%agent, %pos, %trap, "trap sprung during placement");
                Err(AgentError::TrapAtPlacement { agent, trap, at: pos })
            }
        }
    }
}
