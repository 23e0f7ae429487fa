//! Trace records and the per-agent sequences handed to the reporter.

use std::fmt;
use std::time::Duration;

use crate::{Owner, Position, TrapId};

// ── Symbol ────────────────────────────────────────────────────────────────────

/// The single character that shows an agent's identity and state.
///
/// | Symbol   | Meaning                          |
/// |----------|----------------------------------|
/// | `A`..`Z` | traveler, active                 |
/// | `a`..`z` | same traveler, stuck or trapped  |
/// | `0`..`9` | wild traveler                    |
/// | `*`      | wild traveler caught in a trap   |
/// | `#`      | trap                             |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(pub char);

impl Symbol {
    pub const TRAP: Symbol = Symbol('#');
    pub const WILD_TRAPPED: Symbol = Symbol('*');

    /// Symbol of the `index`-th traveler (`0 → 'A'`).  Callers keep `index`
    /// below 26; [`TravelConfig::validate`][crate::TravelConfig::validate]
    /// enforces it.
    pub fn traveler(index: u32) -> Symbol {
        Symbol(char::from(b'A' + (index % 26) as u8))
    }

    /// Symbol of a wild traveler with the given digit (taken modulo 10).
    pub fn wild(digit: u32) -> Symbol {
        Symbol(char::from(b'0' + (digit % 10) as u8))
    }

    /// The stuck/trapped variant of a traveler symbol.  Already-lowered and
    /// non-letter symbols are returned unchanged.
    pub fn lowered(self) -> Symbol {
        Symbol(self.0.to_ascii_lowercase())
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Trace ─────────────────────────────────────────────────────────────────────

/// One observation of an agent (or trap) at a point in time.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    /// Time since the run's time origin.
    pub timestamp: Duration,
    pub owner:     Owner,
    pub position:  Position,
    pub symbol:    Symbol,
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Why a sequence was reported.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Trap placement announcement.
    Placed,
    /// Traveler exhausted its step budget.
    Finished,
    /// Traveler gave up on a contended cell.
    Stuck,
    /// Agent stepped on the given trap.  A `Collision` for the same trap
    /// follows on the report channel.
    Trapped(TrapId),
    /// Wild traveler's lifespan ran out.
    Disappeared,
    /// Trap collision announcement.
    Collision(TrapId),
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Placed       => "placed",
            Outcome::Finished     => "finished",
            Outcome::Stuck        => "stuck",
            Outcome::Trapped(_)   => "trapped",
            Outcome::Disappeared  => "disappeared",
            Outcome::Collision(_) => "collision",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TraceSequence ─────────────────────────────────────────────────────────────

/// An ordered, growable list of traces owned by one agent until it reports.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceSequence {
    pub owner:   Owner,
    pub traces:  Vec<Trace>,
    pub outcome: Outcome,
}

impl TraceSequence {
    /// An empty sequence.  `outcome` is provisional until the agent seals it.
    pub fn new(owner: impl Into<Owner>, outcome: Outcome) -> Self {
        Self {
            owner:   owner.into(),
            traces:  Vec::new(),
            outcome,
        }
    }

    /// Append one trace for this sequence's owner.
    pub fn record(&mut self, timestamp: Duration, position: Position, symbol: Symbol) {
        self.traces.push(Trace {
            timestamp,
            owner: self.owner,
            position,
            symbol,
        });
    }

    /// The single-trace sequence announcing a placed trap.
    pub fn trap_placed(trap: TrapId, position: Position) -> Self {
        let mut seq = Self::new(trap, Outcome::Placed);
        seq.record(Duration::ZERO, position, Symbol::TRAP);
        seq
    }

    /// The single-trace sequence announcing that `trap` was sprung.  The
    /// trap keeps its placement id.
    pub fn trap_collision(trap: TrapId, timestamp: Duration, position: Position) -> Self {
        let mut seq = Self::new(trap, Outcome::Collision(trap));
        seq.record(timestamp, position, Symbol::TRAP);
        seq
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn last(&self) -> Option<&Trace> {
        self.traces.last()
    }
}
