//! Displacement requests: how a traveler asks a wild traveler to make room.
//!
//! A wild traveler owns a [`DisplaceInbox`] and registers the matching
//! [`DisplaceHandle`] with the cell it occupies.  Anyone who queries that
//! cell receives a clone of the handle and may send a request; the wild
//! traveler answers each one with a [`Displacement`].

use tokio::sync::{mpsc, oneshot};

use tt_core::AgentId;

/// Queued displacement requests per wild traveler.
const INBOX_CAPACITY: usize = 16;

/// Answer to a displacement request.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Displacement {
    /// The wild traveler relocated; the cell may be free now.
    Moved,
    /// No neighbouring cell was free; the wild traveler stays.
    Refused,
    /// The wild traveler is gone (lifespan over or captured) and will never
    /// answer.  Re-query the cell.
    Gone,
}

/// One pending request, carrying the reply channel.
#[derive(Debug)]
pub struct DisplaceRequest {
    pub from: AgentId,
    reply:    oneshot::Sender<Displacement>,
}

impl DisplaceRequest {
    /// Send the answer.  A requester that stopped listening is ignored.
    pub fn answer(self, outcome: Displacement) {
        let _ = self.reply.send(outcome);
    }
}

/// Sending side, stored in the cell while the wild traveler occupies it.
#[derive(Clone, Debug)]
pub struct DisplaceHandle {
    tx: mpsc::Sender<DisplaceRequest>,
}

impl DisplaceHandle {
    /// Ask the wild traveler to move and wait for its answer.
    ///
    /// A closed inbox or a dropped reply both mean the wild traveler has
    /// stopped servicing requests and map to [`Displacement::Gone`].
    pub async fn request(&self, from: AgentId) -> Displacement {
        let (reply, answer) = oneshot::channel();
        if self.tx.send(DisplaceRequest { from, reply }).await.is_err() {
            return Displacement::Gone;
        }
        answer.await.unwrap_or(Displacement::Gone)
    }
}

/// Receiving side, owned by the wild traveler.
#[derive(Debug)]
pub struct DisplaceInbox {
    rx: mpsc::Receiver<DisplaceRequest>,
}

impl DisplaceInbox {
    /// Next request, or `None` once every handle has been dropped.
    pub async fn recv(&mut self) -> Option<DisplaceRequest> {
        self.rx.recv().await
    }

    /// Stop accepting requests and answer everything still queued with
    /// [`Displacement::Gone`].
    pub fn close(&mut self) {
        self.rx.close();
        while let Ok(req) = self.rx.try_recv() {
            req.answer(Displacement::Gone);
        }
    }
}

/// Create a connected handle/inbox pair.
pub fn displace_channel() -> (DisplaceHandle, DisplaceInbox) {
    let (tx, rx) = mpsc::channel(INBOX_CAPACITY);
    (DisplaceHandle { tx }, DisplaceInbox { rx })
}
