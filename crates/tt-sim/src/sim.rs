//! The `Sim` struct: the coordinator of one run.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, info};

use tt_agent::{
    report_channel, start_signal, AgentContext, AgentResult, ReportSender, RunClock, Traveler,
    WildTraveler,
};
use tt_core::{AgentId, DecisionSource, Outcome, Position, SimRng, TraceSequence, TrapId, TravelConfig};
use tt_grid::Grid;

use crate::{Reporter, ReportSummary, SimError, SimResult, TraceSink};

/// The coordinator.
///
/// A run goes through these phases:
///
/// 1. **Grid**: spawn one actor per cell.
/// 2. **Traps**: mark `traps` distinct free cells, announcing each.
/// 3. **Agents**: spawn travelers (`AgentId` `0..travelers`) and wild
///    travelers (the ids after them) into a `JoinSet`; each places itself
///    and parks on the start signal.
/// 4. **Start**: release the start signal.
/// 5. **Drain**: run the [`Reporter`] and join the agents together.  An agent
///    error or panic aborts the run; the remaining tasks are cancelled when
///    the join set drops.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated configuration shared with every agent.
    pub config: Arc<TravelConfig>,

    /// Preferred start cell per traveler, indexed by `AgentId`.
    start_positions: Vec<Option<Position>>,

    /// The board of the last run.  Cell actors stay alive while it is held,
    /// so the final occupancy can be inspected.
    grid: Option<Arc<Grid>>,
}

impl Sim {
    pub(crate) fn new(config: TravelConfig, start_positions: Vec<Option<Position>>) -> Self {
        Self {
            config: Arc::new(config),
            start_positions,
            grid: None,
        }
    }

    /// The board of the most recent run, if any.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_deref()
    }

    /// Run the simulation to completion and return the reporter's counts.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn run<S: TraceSink>(&mut self, sink: &mut S) -> SimResult<ReportSummary> {
        let cfg = Arc::clone(&self.config);

        // ── Grid ──────────────────────────────────────────────────────────
        let grid = Arc::new(Grid::spawn(cfg.width, cfg.height));
        self.grid = Some(Arc::clone(&grid));
        info!(width = cfg.width, height = cfg.height, "grid ready");

        let (reports, mut rx) = report_channel();
        let (trigger, start) = start_signal();
        let clock = RunClock::start();

        // ── Traps ─────────────────────────────────────────────────────────
        place_traps(&grid, &cfg, &reports).await?;
        info!(traps = cfg.traps, "traps placed");

        // ── Agents ────────────────────────────────────────────────────────
        let ctx = AgentContext {
            grid:    Arc::clone(&grid),
            config:  Arc::clone(&cfg),
            clock,
            start,
            reports,
        };

        let mut agents: JoinSet<AgentResult<Outcome>> = JoinSet::new();
        for i in 0..cfg.travelers {
            let id = AgentId(i);
            let mut traveler = Traveler::new(id, ctx.clone(), DecisionSource::new(cfg.seed, id));
            if let Some(pos) = self.start_positions[id.index()] {
                traveler = traveler.starting_at(pos);
            }
            agents.spawn(traveler.run());
        }
        for j in 0..cfg.wild_spawns {
            let id = AgentId(cfg.travelers + j);
            let wild = WildTraveler::new(id, ctx.clone(), DecisionSource::new(cfg.seed, id));
            agents.spawn(wild.run());
        }
        // Only agents may hold report senders from here on, so the channel
        // closes once they have all exited.
        drop(ctx);
        info!(travelers = cfg.travelers, wild = cfg.wild_spawns, "agents spawned");

        // ── Start ─────────────────────────────────────────────────────────
        trigger.release();
        info!("start released");

        // ── Drain ─────────────────────────────────────────────────────────
        let reporter = Reporter::new(&cfg).drain(&mut rx, sink);
        let joined = async {
            while let Some(res) = agents.join_next().await {
                res??;
            }
            Ok::<(), SimError>(())
        };
        let (summary, ()) = tokio::try_join!(reporter, joined).inspect_err(|e| {
            error!(error = %e, "run aborted");
        })?;

        info!(
            finished = summary.finished,
            stuck = summary.stuck,
            trapped = summary.trapped,
            disappeared = summary.disappeared,
            collisions = summary.collisions,
            "run complete"
        );
        Ok(summary)
    }
}

/// Mark `config.traps` distinct cells and announce each placement.
///
/// Runs before any agent exists, so every marked cell is free.
async fn place_traps(grid: &Grid, config: &TravelConfig, reports: &ReportSender) -> SimResult<()> {
    let mut rng = SimRng::new(config.seed);
    for k in 0..config.traps {
        let trap = TrapId(k);
        loop {
            let pos = Position::new(rng.gen_range(0..config.width), rng.gen_range(0..config.height));
            if grid.cell(pos).mark_trap(trap).await? {
                reports.send(TraceSequence::trap_placed(trap, pos))?;
                break;
            }
        }
    }
    Ok(())
}
