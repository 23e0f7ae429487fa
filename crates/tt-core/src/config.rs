//! Run configuration.
//!
//! Every tunable of a run lives in [`TravelConfig`].  The defaults reproduce
//! the classic 15 × 15 board with 15 travelers, 10 wild spawns and 15 traps.
//! Applications typically start from `TravelConfig::default()`, override a
//! few fields (or load a JSON file with the `serde` feature), and call
//! [`TravelConfig::validate`] before building a simulation.

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Number of distinct traveler symbols (`A`..`Z`).
pub const MAX_TRAVELERS: u32 = 26;

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TravelConfig {
    /// Board columns.
    pub width: u32,
    /// Board rows.
    pub height: u32,

    /// Goal-directed travelers (`A`..`Z`).
    pub travelers: u32,
    /// Wild travelers spawned at start.
    pub wild_spawns: u32,
    /// Traps placed before the start signal.
    pub traps: u32,

    /// Inclusive range of a traveler's step budget.
    pub min_steps: u32,
    pub max_steps: u32,

    /// Range of the pause before each step.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub min_delay: Duration,
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub max_delay: Duration,

    /// How long a traveler waits on a cell held by another traveler before
    /// giving up and turning stuck.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub contention_timeout: Duration,

    /// Re-query interval while waiting on a held cell.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub poll_interval: Duration,

    /// Range of a wild traveler's lifespan.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub wild_min_lifespan: Duration,
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub wild_max_lifespan: Duration,

    /// How long a trap holds its victim before freeing the cell.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub trap_block: Duration,

    /// Master seed.  Drives trap placement and seeds every agent's
    /// decision source.
    pub seed: u64,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            width:              15,
            height:             15,
            travelers:          15,
            wild_spawns:        10,
            traps:              15,
            min_steps:          10,
            max_steps:          100,
            min_delay:          Duration::from_millis(10),
            max_delay:          Duration::from_millis(50),
            contention_timeout: Duration::from_millis(50),
            poll_interval:      Duration::from_millis(1),
            wild_min_lifespan:  Duration::from_millis(500),
            wild_max_lifespan:  Duration::from_millis(2_000),
            trap_block:         Duration::from_millis(500),
            seed:               0,
        }
    }
}

impl TravelConfig {
    /// Total cells on the board.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Agents that will report a trace sequence (travelers + wild spawns).
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.travelers as usize + self.wild_spawns as usize
    }

    /// Check the configuration can produce a run that terminates.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width < 2 || self.height < 2 {
            return Err(CoreError::Config(format!(
                "board must be at least 2 × 2, got {} × {}",
                self.width, self.height
            )));
        }
        if self.travelers > MAX_TRAVELERS {
            return Err(CoreError::Config(format!(
                "at most {MAX_TRAVELERS} travelers are supported, got {}",
                self.travelers
            )));
        }
        if self.min_steps > self.max_steps {
            return Err(CoreError::Config(format!(
                "min_steps {} exceeds max_steps {}",
                self.min_steps, self.max_steps
            )));
        }
        if self.min_delay > self.max_delay {
            return Err(CoreError::Config("min_delay exceeds max_delay".into()));
        }
        if self.wild_min_lifespan > self.wild_max_lifespan {
            return Err(CoreError::Config(
                "wild_min_lifespan exceeds wild_max_lifespan".into(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(CoreError::Config("poll_interval must be non-zero".into()));
        }
        let population = self.agent_count() + self.traps as usize;
        if population > self.cell_count() {
            return Err(CoreError::Config(format!(
                "{population} agents and traps do not fit on {} cells",
                self.cell_count()
            )));
        }
        Ok(())
    }
}

// ── Millisecond (de)serialization ─────────────────────────────────────────────

#[cfg(feature = "serde")]
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
