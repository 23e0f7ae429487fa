//! Deterministic per-agent and coordinator-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Agents never share RNG state, so the sequence of draws an agent makes is
//! reproducible from the seed alone.  What is *not* reproducible is the
//! interleaving of agents, which depends on the scheduler.
//!
//! The coordinator's trap-placement stream is seeded with
//! `global_seed XOR SIM_SALT`, disjoint from every agent stream.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Direction};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Salt for the coordinator stream.  Agent 0 mixes to `global_seed` itself,
/// so the coordinator must not seed from it unchanged.
const SIM_SALT: u64 = 0x5851_f42d_4c95_7f2d;

// ── DecisionSource ────────────────────────────────────────────────────────────

/// Per-agent source of every random choice: start cell, step budget,
/// per-step delay, direction, wild symbol and lifespan.
///
/// Owned by exactly one agent task and moved into it at spawn.
pub struct DecisionSource(SmallRng);

impl DecisionSource {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        DecisionSource(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// One of the four directions, uniformly.
    #[inline]
    pub fn direction(&mut self) -> Direction {
        Direction::ALL[self.0.gen_range(0..Direction::ALL.len())]
    }

    /// A duration uniformly in `[min, max)`; `min` when the range is empty.
    pub fn duration_between(&mut self, min: Duration, max: Duration) -> Duration {
        if max <= min {
            return min;
        }
        let span = (max - min).as_nanos() as u64;
        min + Duration::from_nanos(self.0.gen_range(0..span))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Coordinator RNG, used only for trap placement.
///
/// Lives in the coordinator's single task; agents never see it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed ^ SIM_SALT))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
