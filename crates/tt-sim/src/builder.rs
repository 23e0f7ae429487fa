//! Fluent builder for constructing a [`Sim`].

use tt_core::{Position, TravelConfig};
use tt_grid::GridError;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                          |
/// |------------------------|----------------------------------|
/// | `.seed(s)`             | `config.seed`                    |
/// | `.start_positions(v)`  | Every traveler placed at random  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(TravelConfig::default())
///     .seed(42)
///     .build()?;
/// let summary = sim.run(&mut NoopSink).await?;
/// ```
pub struct SimBuilder {
    config:    TravelConfig,
    positions: Option<Vec<Option<Position>>>,
}

impl SimBuilder {
    pub fn new(config: TravelConfig) -> Self {
        Self { config, positions: None }
    }

    /// Override the seed for trap placement and every decision source.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Preferred start cell per traveler (must be length `travelers`).
    ///
    /// A traveler whose preferred cell is taken, trapped, or `None` falls
    /// back to random placement.
    pub fn start_positions(mut self, positions: Vec<Option<Position>>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let travelers = self.config.travelers as usize;

        let positions = match self.positions {
            Some(p) => {
                if p.len() != travelers {
                    return Err(SimError::TravelerCountMismatch {
                        expected: travelers,
                        got:      p.len(),
                        what:     "start positions",
                    });
                }
                let (w, h) = (self.config.width, self.config.height);
                if let Some(&bad) = p.iter().flatten().find(|pos| !pos.in_bounds(w, h)) {
                    return Err(GridError::OutOfBounds(bad).into());
                }
                p
            }
            None => vec![None; travelers],
        };

        Ok(Sim::new(self.config, positions))
    }
}
