//! One-shot start gate shared by all agents.

use tokio::sync::watch;

use crate::{AgentError, AgentResult};

/// Held by the coordinator; releasing it lets every waiting agent go.
#[derive(Debug)]
pub struct StartTrigger {
    tx: watch::Sender<bool>,
}

impl StartTrigger {
    /// Open the gate.  Agents that wait afterwards pass immediately.
    pub fn release(&self) {
        self.tx.send_replace(true);
    }
}

/// Cloned into every agent.
#[derive(Clone, Debug)]
pub struct StartSignal {
    rx: watch::Receiver<bool>,
}

impl StartSignal {
    /// Suspend until the trigger is released.
    pub async fn wait(&mut self) -> AgentResult<()> {
        self.rx
            .wait_for(|released| *released)
            .await
            .map(|_| ())
            .map_err(|_| AgentError::StartAborted)
    }

    pub fn is_released(&self) -> bool {
        *self.rx.borrow()
    }
}

/// Create a connected trigger/signal pair, initially closed.
pub fn start_signal() -> (StartTrigger, StartSignal) {
    let (tx, rx) = watch::channel(false);
    (StartTrigger { tx }, StartSignal { rx })
}
