//! Agent side of the reporter channel.
//!
//! Unbounded so that reporting never makes an agent wait on the printer.

use tokio::sync::mpsc;

use tt_core::TraceSequence;

use crate::{AgentError, AgentResult};

pub type ReportReceiver = mpsc::UnboundedReceiver<TraceSequence>;

#[derive(Clone, Debug)]
pub struct ReportSender {
    tx: mpsc::UnboundedSender<TraceSequence>,
}

impl ReportSender {
    /// Hand a finished sequence to the reporter.
    pub fn send(&self, seq: TraceSequence) -> AgentResult<()> {
        self.tx.send(seq).map_err(|_| AgentError::ReporterClosed)
    }
}

pub fn report_channel() -> (ReportSender, ReportReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ReportSender { tx }, rx)
}
