//! The goal-directed traveler.

use tokio::time::sleep;
use tracing::debug;

use tt_core::{AgentId, DecisionSource, Outcome, Position, Symbol, TraceSequence};
use tt_grid::Occupant;

use crate::{AgentContext, AgentResult, MoveOutcome, Negotiator};

/// A traveler with a finite step budget.
///
/// Holds exactly one cell from placement until it terminates.  Finished and
/// stuck travelers keep their last cell; trapped travelers release the trap
/// cell after the block.
pub struct Traveler {
    id:       AgentId,
    symbol:   Symbol,
    rng:      DecisionSource,
    ctx:      AgentContext,
    start_at: Option<Position>,
}

impl Traveler {
    /// The `id`-th traveler gets symbol `'A' + id`.
    pub fn new(id: AgentId, ctx: AgentContext, rng: DecisionSource) -> Self {
        Self {
            id,
            symbol: Symbol::traveler(id.0),
            rng,
            ctx,
            start_at: None,
        }
    }

    /// Try `pos` as the start cell before falling back to random placement.
    pub fn starting_at(mut self, pos: Position) -> Self {
        self.start_at = Some(pos);
        self
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Run the whole lifecycle and report.  Returns the terminal outcome.
    pub async fn run(mut self) -> AgentResult<Outcome> {
        let ctx = self.ctx.clone();
        let cfg = &ctx.config;
        let mut seq = TraceSequence::new(self.id, Outcome::Finished);

        // ── Initializing ──────────────────────────────────────────────────
        let mut pos = self.place().await?;
        let steps = self.rng.gen_range(cfg.min_steps..=cfg.max_steps);
        seq.record(ctx.clock.elapsed(), pos, self.symbol);
        debug!(agent = %self.id, %pos, steps, "traveler placed");

        // ── WaitingForStart ───────────────────────────────────────────────
        self.ctx.start.wait().await?;

        // ── Moving ────────────────────────────────────────────────────────
        let negotiator = Negotiator::new(&ctx, self.id);
        for _ in 0..steps {
            sleep(self.rng.duration_between(cfg.min_delay, cfg.max_delay)).await;

            let dir = self.rng.direction();
            match negotiator.negotiate(pos, dir, &mut self.rng).await? {
                MoveOutcome::Moved(next) => {
                    pos = next;
                    seq.record(ctx.clock.elapsed(), pos, self.symbol);
                }
                MoveOutcome::Stuck => {
                    self.symbol = self.symbol.lowered();
                    seq.record(ctx.clock.elapsed(), pos, self.symbol);
                    seq.outcome = Outcome::Stuck;
                    debug!(agent = %self.id, %pos, "traveler stuck");
                    break;
                }
                MoveOutcome::Trapped { trap, at } => {
                    self.symbol = self.symbol.lowered();
                    seq.record(ctx.clock.elapsed(), at, self.symbol);
                    seq.outcome = Outcome::Trapped(trap);
                    debug!(agent = %self.id, %at, %trap, "traveler trapped");

                    sleep(cfg.trap_block).await;
                    ctx.grid.cell(at).free(self.id).await?;

                    let collision = TraceSequence::trap_collision(trap, ctx.clock.elapsed(), at);
                    ctx.reports.send(seq)?;
                    ctx.reports.send(collision)?;
                    return Ok(Outcome::Trapped(trap));
                }
            }
        }

        let outcome = seq.outcome;
        if outcome == Outcome::Finished {
            debug!(agent = %self.id, %pos, "traveler finished");
        }
        ctx.reports.send(seq)?;
        Ok(outcome)
    }

    async fn place(&mut self) -> AgentResult<Position> {
        let id = self.id;
        if let Some(pos) = self.start_at {
            let snap = self.ctx.grid.try_cell(pos)?.query().await?;
            if snap.is_free() && !snap.is_trap() && self.ctx.try_claim(pos, Occupant::Normal(id)).await? {
                return Ok(pos);
            }
        }
        self.ctx
            .claim_random_cell(&mut self.rng, || Occupant::Normal(id))
            .await
    }
}
