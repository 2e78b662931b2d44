//! Fixed-cadence driver that forwards cell deltas to a rendering collaborator.
//!
//! The engine has no notion of time. A host hands the driver its own clock readings
//! through [`Driver::poll`], and the driver steps at most once per call whenever the
//! interval has elapsed, the way a repeating timer callback would.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::automaton::CellChange;
use crate::config::SimulationConfig;
use crate::engine::{Engine, StepReport};
use crate::error::EngineResult;

/// Receives per-cell state flips, typically to swap a voxel's material.
pub trait CellSink {
    fn cell_changed(&mut self, change: CellChange);

    /// Called once after all changes of a generation were delivered.
    fn generation_finished(&mut self, _generation: u64, _population: usize) {}
}

/// Collects every delta, mostly useful for tests and batch hosts.
impl CellSink for Vec<CellChange> {
    fn cell_changed(&mut self, change: CellChange) {
        self.push(change);
    }
}

/// Seeds an engine once and steps it on a fixed interval.
pub struct Driver<R> {
    engine: Engine,
    rng: R,
    seed_probability: f64,
    interval: Duration,
    started: bool,
    /// When the next step is due; `None` before [`Driver::start`] or when the
    /// interval runs past the clock's range.
    next_due: Option<Instant>,
}

impl<R: Rng> Driver<R> {
    pub fn new(config: &SimulationConfig, rng: R) -> EngineResult<Self> {
        let engine = config.build_engine()?;
        info!(
            interval = ?config.step_interval,
            probability = config.seed_probability,
            "created driver"
        );

        Ok(Self {
            engine,
            rng,
            seed_probability: config.seed_probability,
            interval: config.step_interval,
            started: false,
            next_due: None,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// When the next step is due, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Seed the grid, report every alive cell, and schedule the first step at `now`.
    ///
    /// The sink is assumed to start with every cell shown dead.
    pub fn start<S: CellSink + ?Sized>(&mut self, now: Instant, sink: &mut S) {
        self.engine.seed(self.seed_probability, &mut self.rng);

        for (x, y, z) in self.engine.grid().alive_cells() {
            sink.cell_changed(CellChange {
                x,
                y,
                z,
                alive: true,
            });
        }
        sink.generation_finished(self.engine.generation(), self.engine.population());

        self.started = true;
        self.next_due = Some(now);
    }

    /// Step once if a step is due at `now`. Returns whether a step happened.
    pub fn poll<S: CellSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        self.step_into(sink);

        // Fell a whole interval behind: restart the schedule rather than burst
        self.next_due = match due.checked_add(self.interval) {
            Some(next) if next <= now => {
                debug!(behind = ?(now - due), "driver fell behind, rescheduling");
                now.checked_add(self.interval)
            }
            next => next,
        };

        true
    }

    /// Step `generations` times back to back, ignoring the clock.
    pub fn run_generations<S: CellSink + ?Sized>(&mut self, generations: u64, sink: &mut S) {
        for _ in 0..generations {
            self.step_into(sink);
        }
    }

    fn step_into<S: CellSink + ?Sized>(&mut self, sink: &mut S) {
        let StepReport {
            generation,
            changes,
        } = self.engine.step();
        for change in changes {
            sink.cell_changed(change);
        }
        sink.generation_finished(generation, self.engine.population());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            rng_seed: Some(5),
            ..SimulationConfig::with_dimensions(8, 8, 8)
        }
    }

    /// Mirrors a renderer: tracks which cells it currently shows alive.
    #[derive(Default)]
    struct Visuals {
        alive: HashSet<(i16, i16, i16)>,
        generations: Vec<u64>,
    }

    impl CellSink for Visuals {
        fn cell_changed(&mut self, change: CellChange) {
            let coord = (change.x, change.y, change.z);
            if change.alive {
                assert!(self.alive.insert(coord), "born twice: {coord:?}");
            } else {
                assert!(self.alive.remove(&coord), "died while dead: {coord:?}");
            }
        }

        fn generation_finished(&mut self, generation: u64, population: usize) {
            assert_eq!(self.alive.len(), population);
            self.generations.push(generation);
        }
    }

    fn shown_cells(engine: &Engine) -> HashSet<(i16, i16, i16)> {
        engine.grid().alive_cells().collect()
    }

    #[test]
    fn test_poll_before_start_does_nothing() {
        let config = small_config();
        let mut driver = Driver::new(&config, config.rng()).unwrap();
        let mut sink: Vec<CellChange> = Vec::new();

        assert!(!driver.poll(Instant::now(), &mut sink));
        assert!(sink.is_empty());
        assert_eq!(driver.engine().generation(), 0);
    }

    #[test]
    fn test_start_reports_seeded_cells() {
        let config = small_config();
        let mut driver = Driver::new(&config, config.rng()).unwrap();
        let mut visuals = Visuals::default();

        driver.start(Instant::now(), &mut visuals);

        assert!(driver.is_started());
        assert!(!visuals.alive.is_empty());
        assert_eq!(visuals.alive, shown_cells(driver.engine()));
        assert_eq!(visuals.generations, vec![0]);
    }

    #[test]
    fn test_poll_steps_on_interval() {
        let config = small_config();
        let mut driver = Driver::new(&config, config.rng()).unwrap();
        let mut visuals = Visuals::default();
        let t0 = Instant::now();

        driver.start(t0, &mut visuals);

        // First evolution happens immediately
        assert!(driver.poll(t0, &mut visuals));
        assert_eq!(driver.engine().generation(), 1);

        // Not due again until one interval later
        assert!(!driver.poll(t0 + Duration::from_millis(50), &mut visuals));
        assert!(driver.poll(t0 + Duration::from_millis(100), &mut visuals));
        assert!(driver.poll(t0 + Duration::from_millis(210), &mut visuals));
        assert_eq!(driver.engine().generation(), 3);

        assert_eq!(visuals.alive, shown_cells(driver.engine()));
        assert_eq!(visuals.generations, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_poll_does_not_burst_after_stall() {
        let config = small_config();
        let mut driver = Driver::new(&config, config.rng()).unwrap();
        let mut sink: Vec<CellChange> = Vec::new();
        let t0 = Instant::now();

        driver.start(t0, &mut sink);
        let late = t0 + Duration::from_secs(2);

        assert!(driver.poll(late, &mut sink));
        assert!(!driver.poll(late, &mut sink));
        assert_eq!(driver.next_due(), Some(late + config.step_interval));
        assert_eq!(driver.engine().generation(), 1);
    }

    #[test]
    fn test_runs_are_reproducible() {
        let config = small_config();
        let mut a = Driver::new(&config, ChaCha8Rng::seed_from_u64(11)).unwrap();
        let mut b = Driver::new(&config, ChaCha8Rng::seed_from_u64(11)).unwrap();
        let mut deltas_a: Vec<CellChange> = Vec::new();
        let mut deltas_b: Vec<CellChange> = Vec::new();

        let now = Instant::now();
        a.start(now, &mut deltas_a);
        b.start(now, &mut deltas_b);
        a.run_generations(10, &mut deltas_a);
        b.run_generations(10, &mut deltas_b);

        assert_eq!(deltas_a, deltas_b);
        assert_eq!(a.engine().grid(), b.engine().grid());
    }

    #[test]
    fn test_unbounded_interval_is_never_due_again() {
        let config = SimulationConfig {
            step_interval: Duration::MAX,
            ..small_config()
        };
        let mut driver = Driver::new(&config, config.rng()).unwrap();
        let mut sink: Vec<CellChange> = Vec::new();
        let t0 = Instant::now();

        driver.start(t0, &mut sink);
        assert!(driver.poll(t0, &mut sink));

        assert!(driver.is_started());
        assert_eq!(driver.next_due(), None);
        assert!(!driver.poll(t0 + Duration::from_secs(3600), &mut sink));
        assert_eq!(driver.engine().generation(), 1);
    }
}
