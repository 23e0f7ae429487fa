//! The wild traveler: passive, displaceable, short-lived.

use tokio::time::sleep;
use tracing::{debug, trace};

use tt_core::{AgentId, DecisionSource, Direction, Outcome, Position, Symbol, TraceSequence, TrapId};
use tt_grid::{displace_channel, Claim, DisplaceHandle, DisplaceInbox, Displacement, Occupant};

use crate::{AgentContext, AgentResult};

/// Result of trying to make room for a requester.
enum Relocation {
    Moved(Position),
    Trapped { trap: TrapId, at: Position },
    NoRoom,
}

/// A wild traveler.  Never decides to move on its own; it relocates only
/// when a traveler asks, and vanishes when its lifespan runs out.
pub struct WildTraveler {
    id:     AgentId,
    rng:    DecisionSource,
    ctx:    AgentContext,
    handle: DisplaceHandle,
    inbox:  DisplaceInbox,
}

impl WildTraveler {
    pub fn new(id: AgentId, ctx: AgentContext, rng: DecisionSource) -> Self {
        let (handle, inbox) = displace_channel();
        Self { id, rng, ctx, handle, inbox }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Run the whole lifecycle and report.  Returns the terminal outcome.
    pub async fn run(mut self) -> AgentResult<Outcome> {
        let ctx = self.ctx.clone();
        let cfg = &ctx.config;
        let mut seq = TraceSequence::new(self.id, Outcome::Disappeared);

        // ── Spawned ───────────────────────────────────────────────────────
        let (id, handle) = (self.id, self.handle.clone());
        let mut pos = ctx
            .claim_random_cell(&mut self.rng, || Occupant::Wild { agent: id, handle: handle.clone() })
            .await?;
        let mut symbol = Symbol::wild(self.rng.gen_range(0..10));
        let lifespan = self.rng.duration_between(cfg.wild_min_lifespan, cfg.wild_max_lifespan);
        seq.record(ctx.clock.elapsed(), pos, symbol);
        debug!(agent = %self.id, %pos, ?lifespan, "wild traveler spawned");

        self.ctx.start.wait().await?;

        // ── Roaming ───────────────────────────────────────────────────────
        let expiry = sleep(lifespan);
        tokio::pin!(expiry);

        loop {
            tokio::select! {
                Some(req) = self.inbox.recv() => {
                    match self.relocate(pos).await? {
                        Relocation::Moved(next) => {
                            req.answer(Displacement::Moved);
                            pos = next;
                            seq.record(ctx.clock.elapsed(), pos, symbol);
                            trace!(agent = %self.id, %pos, "wild traveler displaced");
                        }
                        Relocation::NoRoom => {
                            req.answer(Displacement::Refused);
                        }
                        Relocation::Trapped { trap, at } => {
                            req.answer(Displacement::Moved);
                            self.inbox.close();
                            symbol = Symbol::WILD_TRAPPED;
                            seq.record(ctx.clock.elapsed(), at, symbol);
                            seq.outcome = Outcome::Trapped(trap);
                            debug!(agent = %self.id, %at, %trap, "wild traveler trapped");

                            sleep(cfg.trap_block).await;
                            ctx.grid.cell(at).free(self.id).await?;

                            let collision = TraceSequence::trap_collision(trap, ctx.clock.elapsed(), at);
                            ctx.reports.send(seq)?;
                            ctx.reports.send(collision)?;
                            return Ok(Outcome::Trapped(trap));
                        }
                    }
                }
                () = &mut expiry => {
                    // ── Disappeared ───────────────────────────────────────
                    self.inbox.close();
                    ctx.grid.cell(pos).free(self.id).await?;
                    let gone = Position::vanished(ctx.grid.width(), ctx.grid.height());
                    seq.record(ctx.clock.elapsed(), gone, symbol);
                    debug!(agent = %self.id, %pos, "wild traveler disappeared");
                    ctx.reports.send(seq)?;
                    return Ok(Outcome::Disappeared);
                }
            }
        }
    }

    /// Move to the first free neighbour in fixed scan order.
    async fn relocate(&self, pos: Position) -> AgentResult<Relocation> {
        let grid = &self.ctx.grid;
        for dir in Direction::WILD_SCAN {
            let next = grid.neighbour(pos, dir);
            let cell = grid.cell(next);
            if !cell.query().await?.is_free() {
                continue;
            }
            let occupant = Occupant::Wild { agent: self.id, handle: self.handle.clone() };
            match cell.occupy(occupant).await? {
                Claim::Entered => {
                    grid.cell(pos).free(self.id).await?;
                    return Ok(Relocation::Moved(next));
                }
                Claim::Sprung(trap) => {
                    grid.cell(pos).free(self.id).await?;
                    return Ok(Relocation::Trapped { trap, at: next });
                }
                Claim::Refused { .. } => continue,
            }
        }
        Ok(Relocation::NoRoom)
    }
}
