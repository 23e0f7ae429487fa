//! Occupancy state of a single cell.
//!
//! `CellState` is plain synchronous data.  The cell actor in [`crate::cell`]
//! is the only thing that owns one at runtime, which is what serializes all
//! transitions; keeping the transitions here makes them testable without a
//! runtime.

use tt_core::{AgentId, TrapId};

use crate::DisplaceHandle;

// ── Occupant ──────────────────────────────────────────────────────────────────

/// Who holds a cell.
#[derive(Clone, Debug)]
pub enum Occupant {
    /// A traveler, or anything else that cannot be asked to move.
    Normal(AgentId),
    /// A wild traveler, reachable through its displacement handle.
    Wild {
        agent:  AgentId,
        handle: DisplaceHandle,
    },
}

impl Occupant {
    pub fn agent(&self) -> AgentId {
        match self {
            Occupant::Normal(a)         => *a,
            Occupant::Wild { agent, .. } => *agent,
        }
    }

    pub fn kind(&self) -> OccupantKind {
        match self {
            Occupant::Normal(_)   => OccupantKind::Normal,
            Occupant::Wild { .. } => OccupantKind::Wild,
        }
    }
}

/// Occupancy as seen by a query.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum OccupantKind {
    Free,
    Normal,
    Wild,
}

// ── Snapshot / Claim ──────────────────────────────────────────────────────────

/// Answer to a query: the cell's state at the moment the actor handled it.
///
/// A snapshot is stale as soon as it is returned; callers must treat it as a
/// hint and rely on [`Claim`] for the authoritative outcome of an occupation.
#[derive(Clone, Debug)]
pub struct CellSnapshot {
    pub occupant: OccupantKind,
    pub holder:   Option<AgentId>,
    /// Present only when a wild traveler holds the cell.
    pub displace: Option<DisplaceHandle>,
    /// Present only while the trap is armed.
    pub trap:     Option<TrapId>,
}

impl CellSnapshot {
    #[inline]
    pub fn is_free(&self) -> bool {
        self.occupant == OccupantKind::Free
    }

    #[inline]
    pub fn is_trap(&self) -> bool {
        self.trap.is_some()
    }
}

/// Result of an occupation attempt.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Claim {
    /// The caller now holds the cell.
    Entered,
    /// The caller now holds the cell and sprang its trap.  The trap is
    /// disarmed; nobody else will see this claim for it.
    Sprung(TrapId),
    /// The cell was taken; nothing changed.
    Refused { holder: AgentId },
}

/// Why a `free` was rejected.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FreeRefused {
    Vacant,
    HeldBy(AgentId),
}

// ── CellState ─────────────────────────────────────────────────────────────────

/// The exclusive-access state of one grid location.
///
/// `occupant` is an `Option`, so two simultaneous occupants are not
/// representable.  The trap id is set at most once and never cleared;
/// `armed` flips to `false` the first time the trap is entered.
#[derive(Debug, Default)]
pub struct CellState {
    occupant: Option<Occupant>,
    trap:     Option<TrapId>,
    armed:    bool,
}

impl CellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> CellSnapshot {
        let (occupant, holder, displace) = match &self.occupant {
            None => (OccupantKind::Free, None, None),
            Some(Occupant::Normal(a)) => (OccupantKind::Normal, Some(*a), None),
            Some(Occupant::Wild { agent, handle }) => {
                (OccupantKind::Wild, Some(*agent), Some(handle.clone()))
            }
        };
        CellSnapshot {
            occupant,
            holder,
            displace,
            trap: self.armed_trap(),
        }
    }

    /// Occupy the cell if it is free.
    ///
    /// Entering an armed trap springs it.  A wild occupant that springs a trap
    /// is stored as [`Occupant::Normal`]: it is pinned and can no longer be
    /// asked to move.
    pub fn occupy(&mut self, occupant: Occupant) -> Claim {
        if let Some(current) = &self.occupant {
            return Claim::Refused { holder: current.agent() };
        }
        match self.armed_trap() {
            Some(trap) => {
                self.armed = false;
                self.occupant = Some(Occupant::Normal(occupant.agent()));
                Claim::Sprung(trap)
            }
            None => {
                self.occupant = Some(occupant);
                Claim::Entered
            }
        }
    }

    /// Release the cell.  Only the current holder may free it.
    pub fn free(&mut self, agent: AgentId) -> Result<(), FreeRefused> {
        match &self.occupant {
            None => Err(FreeRefused::Vacant),
            Some(current) if current.agent() != agent => {
                Err(FreeRefused::HeldBy(current.agent()))
            }
            Some(_) => {
                self.occupant = None;
                Ok(())
            }
        }
    }

    /// Arm a trap on this cell.  Returns `false` (and changes nothing) if the
    /// cell is occupied or already carries a trap.
    pub fn mark_trap(&mut self, trap: TrapId) -> bool {
        if self.occupant.is_some() || self.trap.is_some() {
            return false;
        }
        self.trap = Some(trap);
        self.armed = true;
        true
    }

    /// The placement id of this cell's trap, armed or not.
    pub fn trap_id(&self) -> Option<TrapId> {
        self.trap
    }

    fn armed_trap(&self) -> Option<TrapId> {
        if self.armed { self.trap } else { None }
    }
}
