//! The movement protocol shared by every traveler.
//!
//! # Protocol
//!
//! ```text
//! query target
//!   ├─ free            → occupy (conditional)
//!   │                      ├─ Entered  → free source, Moved
//!   │                      ├─ Sprung   → free source, Trapped
//!   │                      └─ Refused  → lost a race, re-query
//!   ├─ wild occupant   → ask it to move
//!   │                      ├─ Moved    → re-query
//!   │                      ├─ Gone     → wait one poll, re-query
//!   │                      └─ Refused  → wait one poll, pick a new direction
//!   └─ normal occupant → wait one poll, re-query
//! ```
//!
//! Waiting is bounded by `contention_timeout`, measured from the start of the
//! attempt.  When it runs out on a held cell (or after a refused
//! displacement) the attempt ends in [`MoveOutcome::Stuck`].
//!
//! The target is always occupied before the source is freed, so the mover
//! never holds zero cells.  Nothing here trusts a snapshot beyond the next
//! request: the conditional occupy is the only authority.

use tokio::time::{sleep, Instant};
use tracing::trace;

use tt_core::{AgentId, DecisionSource, Direction, Position, TrapId};
use tt_grid::{Claim, Displacement, Occupant, OccupantKind};

use crate::{AgentContext, AgentResult};

/// How a single move attempt ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// The agent now holds `Position` and has released its old cell.
    Moved(Position),
    /// The agent stepped on `trap` at `at`; it holds `at` and has released
    /// its old cell.
    Trapped { trap: TrapId, at: Position },
    /// The wait budget ran out; the agent still holds its old cell.
    Stuck,
}

/// Runs the move protocol on behalf of one agent.
pub struct Negotiator<'a> {
    ctx:   &'a AgentContext,
    agent: AgentId,
}

impl<'a> Negotiator<'a> {
    pub fn new(ctx: &'a AgentContext, agent: AgentId) -> Self {
        Self { ctx, agent }
    }

    /// Try to move from `from` one step in `dir`.
    ///
    /// `rng` supplies replacement directions when a wild occupant refuses to
    /// move.
    pub async fn negotiate(
        &self,
        from: Position,
        dir:  Direction,
        rng:  &mut DecisionSource,
    ) -> AgentResult<MoveOutcome> {
        let grid    = &self.ctx.grid;
        let budget  = self.ctx.config.contention_timeout;
        let poll    = self.ctx.config.poll_interval;
        let started = Instant::now();

        let mut target = grid.neighbour(from, dir);
        loop {
            let cell = grid.cell(target);
            let snap = cell.query().await?;

            match snap.occupant {
                OccupantKind::Free => match cell.occupy(Occupant::Normal(self.agent)).await? {
                    Claim::Entered => {
                        grid.cell(from).free(self.agent).await?;
                        trace!(agent = %self.agent, %from, to = %target, "moved");
                        return Ok(MoveOutcome::Moved(target));
                    }
                    Claim::Sprung(trap) => {
                        grid.cell(from).free(self.agent).await?;
                        return Ok(MoveOutcome::Trapped { trap, at: target });
                    }
                    Claim::Refused { holder } => {
                        trace!(agent = %self.agent, %target, %holder, "lost race");
                    }
                },

                OccupantKind::Wild => {
                    let answer = match &snap.displace {
                        Some(handle) => handle.request(self.agent).await,
                        None         => Displacement::Gone,
                    };
                    trace!(agent = %self.agent, %target, ?answer, "displacement");
                    match answer {
                        Displacement::Moved => {}
                        // The wild traveler stopped answering but may still
                        // hold the cell until it frees it.
                        Displacement::Gone => {
                            if started.elapsed() > budget {
                                return Ok(MoveOutcome::Stuck);
                            }
                            sleep(poll).await;
                        }
                        Displacement::Refused => {
                            if started.elapsed() > budget {
                                return Ok(MoveOutcome::Stuck);
                            }
                            sleep(poll).await;
                            target = grid.neighbour(from, rng.direction());
                        }
                    }
                }

                OccupantKind::Normal => {
                    if started.elapsed() > budget {
                        return Ok(MoveOutcome::Stuck);
                    }
                    sleep(poll).await;
                }
            }
        }
    }
}
