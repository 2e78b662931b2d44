//! Simulation parameters.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::engine::Engine;
use crate::error::EngineResult;

/// Everything a driver needs to build and run a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub columns: i16,
    pub rows: i16,
    pub depth: i16,
    /// Chance that a cell starts alive.
    pub seed_probability: f64,
    /// Time between generations.
    pub step_interval: Duration,
    /// Fixed RNG seed for reproducible runs. `None` draws a fresh one.
    pub rng_seed: Option<u64>,
    /// Stepping worker threads; 0 steps serially.
    pub threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            columns: 100,
            rows: 100,
            depth: 100,
            seed_probability: 0.4,
            step_interval: Duration::from_millis(100),
            rng_seed: None,
            threads: 0,
        }
    }
}

impl SimulationConfig {
    /// Default parameters on a different grid size.
    pub fn with_dimensions(columns: i16, rows: i16, depth: i16) -> Self {
        Self {
            columns,
            rows,
            depth,
            ..Self::default()
        }
    }

    /// Build an all-dead engine for these parameters.
    pub fn build_engine(&self) -> EngineResult<Engine> {
        Engine::with_threads(self.columns, self.rows, self.depth, self.threads)
    }

    /// Build the seeding RNG. An unseeded config draws a seed and logs it so the run
    /// can be replayed.
    pub fn rng(&self) -> ChaCha8Rng {
        let seed = self.rng_seed.unwrap_or_else(|| {
            let seed: u64 = rand::rng().random();
            info!(seed, "drew simulation seed");
            seed
        });
        ChaCha8Rng::seed_from_u64(seed)
    }
}
