//! The reporter: drains the report channel into a [`TraceSink`].

use tracing::{debug, info};

use tt_agent::ReportReceiver;
use tt_core::{Outcome, TraceSequence, TravelConfig};

use crate::{SimError, SimResult, TraceSink};

/// Per-outcome counts of everything the reporter received.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ReportSummary {
    pub placed:      usize,
    pub finished:    usize,
    pub stuck:       usize,
    pub trapped:     usize,
    pub disappeared: usize,
    pub collisions:  usize,
}

impl ReportSummary {
    /// Total number of sequences received.
    pub fn total(&self) -> usize {
        self.placed + self.finished + self.stuck + self.trapped + self.disappeared + self.collisions
    }

    fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Placed       => self.placed += 1,
            Outcome::Finished     => self.finished += 1,
            Outcome::Stuck        => self.stuck += 1,
            Outcome::Trapped(_)   => self.trapped += 1,
            Outcome::Disappeared  => self.disappeared += 1,
            Outcome::Collision(_) => self.collisions += 1,
        }
    }
}

/// Forwards sequences to a sink in arrival order and knows when to stop.
///
/// Every agent reports once and every trap is announced once at placement,
/// so the reporter starts out expecting `travelers + wild + traps`
/// sequences.  A `Trapped` sequence is always followed by its collision
/// announcement, so each one raises the expectation by one.
#[derive(Debug)]
pub struct Reporter {
    expected:  usize,
    travelers: u32,
    width:     u32,
    height:    u32,
    summary:   ReportSummary,
}

impl Reporter {
    pub fn new(config: &TravelConfig) -> Self {
        Self {
            expected:  (config.travelers + config.wild_spawns + config.traps) as usize,
            travelers: config.travelers,
            width:     config.width,
            height:    config.height,
            summary:   ReportSummary::default(),
        }
    }

    /// Total sequences expected, given what has arrived so far.
    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Account for one sequence.  Returns `true` once the expectation is met.
    pub fn accept(&mut self, seq: &TraceSequence) -> bool {
        self.summary.tally(seq.outcome);
        if matches!(seq.outcome, Outcome::Trapped(_)) {
            self.expected += 1;
        }
        debug!(
            owner = %seq.owner,
            outcome = %seq.outcome,
            received = self.summary.total(),
            expected = self.expected,
            "sequence reported"
        );
        self.summary.total() >= self.expected
    }

    /// Drain `rx` into `sink` until every expected sequence has arrived,
    /// then call [`TraceSink::on_end`].
    ///
    /// Fails with [`SimError::ReporterStarved`] if every sender is dropped
    /// first.
    pub async fn drain<S: TraceSink>(
        mut self,
        rx:   &mut ReportReceiver,
        sink: &mut S,
    ) -> SimResult<ReportSummary> {
        if self.expected > 0 {
            loop {
                let Some(seq) = rx.recv().await else {
                    return Err(SimError::ReporterStarved {
                        received: self.summary.total(),
                        expected: self.expected,
                    });
                };
                sink.on_sequence(&seq);
                if self.accept(&seq) {
                    break;
                }
            }
        }
        sink.on_end(self.travelers, self.width, self.height);
        info!(received = self.summary.total(), "reporter done");
        Ok(self.summary)
    }
}
