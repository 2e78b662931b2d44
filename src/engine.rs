//! The automaton engine: a grid, its generation counter and an optional worker pool.

use rand::Rng;
use tracing::{debug, info};

use crate::automaton::{self, Bounds, CellChange, Grid};
use crate::error::EngineResult;

/// Result of a single [`Engine::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Generation number the grid is now at.
    pub generation: u64,
    /// Cells whose state flipped, in linear index order.
    pub changes: Vec<CellChange>,
}

impl StepReport {
    pub fn births(&self) -> usize {
        self.changes.iter().filter(|c| c.alive).count()
    }

    pub fn deaths(&self) -> usize {
        self.changes.len() - self.births()
    }
}

/// Owns a voxel grid and advances it with the B3/S23 rule.
///
/// Lifecycle: constructed, seeded, stepped repeatedly, dropped. The engine keeps no
/// timing state; callers decide when to step.
pub struct Engine {
    grid: Grid,
    generation: u64,
    /// Rayon pool for parallel steps, or `None` to step serially.
    thread_pool: Option<rayon::ThreadPool>,
}

impl Engine {
    /// Create an all-dead engine that steps serially.
    pub fn new(columns: i16, rows: i16, depth: i16) -> EngineResult<Self> {
        Self::with_threads(columns, rows, depth, 0)
    }

    /// Create an all-dead engine stepping on a private pool of `threads` workers.
    /// Zero threads means serial stepping.
    pub fn with_threads(columns: i16, rows: i16, depth: i16, threads: usize) -> EngineResult<Self> {
        let grid = Grid::new(columns, rows, depth)?;
        let thread_pool = if threads == 0 {
            None
        } else {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?,
            )
        };

        info!(columns, rows, depth, threads, "created automaton engine");

        Ok(Self {
            grid,
            generation: 0,
            thread_pool,
        })
    }

    /// Wrap an existing grid. The generation counter starts at 0.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            thread_pool: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Overwrite a box of cells from a z,y,x byte buffer, clamped to the grid.
    /// Returns the number of bytes read.
    pub fn import_region(&mut self, in_buf: &[u8], bounds: Bounds) -> EngineResult<usize> {
        automaton::import_region(&mut self.grid, in_buf, bounds)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dimensions(&self) -> (i16, i16, i16) {
        self.grid.dimensions()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_alive(&self, x: i16, y: i16, z: i16) -> EngineResult<bool> {
        self.grid.get(x, y, z)
    }

    pub fn set_alive(&mut self, x: i16, y: i16, z: i16, alive: bool) -> EngineResult<()> {
        self.grid.set(x, y, z, alive)
    }

    /// Alive neighbors of `(x, y, z)`, in `0..=26`.
    pub fn neighbor_count(&self, x: i16, y: i16, z: i16) -> EngineResult<u8> {
        self.grid.count_neighbors(x, y, z)
    }

    /// Kill every cell. The generation counter is untouched.
    pub fn clear(&mut self) {
        self.grid.fill(false);
    }

    /// Overwrite the grid with a random population.
    ///
    /// Each cell is independently alive with `probability`. Passing a seeded generator
    /// makes the result reproducible.
    pub fn seed<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        automaton::seed(&mut self.grid, probability, rng);
        info!(
            probability,
            population = self.grid.population(),
            "seeded grid"
        );
    }

    /// Compute the next generation without applying it.
    pub fn next_generation(&self) -> Grid {
        match &self.thread_pool {
            Some(pool) => pool.install(|| automaton::next_generation_parallel(&self.grid)),
            None => automaton::next_generation(&self.grid),
        }
    }

    /// Advance one generation and report which cells flipped.
    pub fn step(&mut self) -> StepReport {
        let next = self.next_generation();
        let changes = automaton::diff(&self.grid, &next);

        self.grid = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            changed = changes.len(),
            population = self.grid.population(),
            "stepped automaton"
        );

        StepReport {
            generation: self.generation,
            changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_rejects_invalid_dimension() {
        assert!(matches!(
            Engine::new(0, 3, 3),
            Err(EngineError::InvalidDimension {
                columns: 0,
                rows: 3,
                depth: 3
            })
        ));
        assert!(Engine::new(3, 3, -1).is_err());
    }

    #[test]
    fn test_new_engine_is_dead() {
        let engine = Engine::new(5, 6, 7).unwrap();
        assert_eq!(engine.dimensions(), (5, 6, 7));
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_generation_increments() {
        let mut engine = Engine::new(4, 4, 4).unwrap();

        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.step().generation, 1);
        assert_eq!(engine.step().generation, 2);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_seed_does_not_advance_generation() {
        let mut engine = Engine::new(4, 4, 4).unwrap();
        engine.seed(0.5, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_single_cell_world() {
        let mut engine = Engine::new(1, 1, 1).unwrap();
        assert_eq!(engine.neighbor_count(0, 0, 0).unwrap(), 0);

        // A lone dead cell stays dead
        assert!(engine.step().changes.is_empty());
        assert!(!engine.is_alive(0, 0, 0).unwrap());

        // A lone alive cell dies
        engine.set_alive(0, 0, 0, true).unwrap();
        let report = engine.step();
        assert_eq!(
            report.changes,
            vec![CellChange {
                x: 0,
                y: 0,
                z: 0,
                alive: false
            }]
        );
        assert_eq!(report.deaths(), 1);
        assert!(!engine.is_alive(0, 0, 0).unwrap());
    }

    #[test]
    fn test_full_two_cube_dies() {
        let mut engine = Engine::new(2, 2, 2).unwrap();
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    engine.set_alive(x, y, z, true).unwrap();
                }
            }
        }

        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    assert_eq!(engine.neighbor_count(x, y, z).unwrap(), 7);
                }
            }
        }

        let report = engine.step();
        assert_eq!(report.deaths(), 8);
        assert_eq!(report.births(), 0);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_next_generation_does_not_mutate() {
        let mut engine = Engine::new(3, 3, 3).unwrap();
        for x in 0..3 {
            engine.set_alive(x, 1, 1, true).unwrap();
        }

        let before = engine.grid().clone();
        let preview = engine.next_generation();
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.generation(), 0);

        engine.step();
        assert_eq!(engine.grid(), &preview);
    }

    #[test]
    fn test_neighbor_count_bounds() {
        let mut engine = Engine::new(5, 5, 5).unwrap();
        engine.seed(1.0, &mut ChaCha8Rng::seed_from_u64(0));

        for z in 0..5 {
            for y in 0..5 {
                for x in 0..5 {
                    assert!(engine.neighbor_count(x, y, z).unwrap() <= 26);
                }
            }
        }
        assert_eq!(engine.neighbor_count(2, 2, 2).unwrap(), 26);
        assert_eq!(engine.neighbor_count(0, 0, 0).unwrap(), 7);
        assert!(engine.neighbor_count(5, 0, 0).is_err());
    }

    #[test]
    fn test_threaded_engine_matches_serial() {
        let mut serial = Engine::new(12, 10, 8).unwrap();
        let mut threaded = Engine::with_threads(12, 10, 8, 4).unwrap();

        serial.seed(0.4, &mut ChaCha8Rng::seed_from_u64(99));
        threaded.seed(0.4, &mut ChaCha8Rng::seed_from_u64(99));

        for _ in 0..8 {
            assert_eq!(serial.step(), threaded.step());
            assert_eq!(serial.grid(), threaded.grid());
        }
    }

    #[test]
    fn test_clear() {
        let mut engine = Engine::new(3, 3, 3).unwrap();
        engine.seed(1.0, &mut ChaCha8Rng::seed_from_u64(0));
        engine.clear();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_import_region_keeps_shape() {
        let mut engine = Engine::new(3, 3, 3).unwrap();

        // A box larger than the grid only touches the cells inside it
        let buffer = vec![1u8; 9 * 2];
        let read = engine
            .import_region(&buffer, Bounds::new((0, 0, 0), (9, 2, 1)))
            .unwrap();

        assert_eq!(read, 6);
        assert_eq!(engine.dimensions(), (3, 3, 3));
        assert_eq!(engine.population(), 6);
        assert_eq!(engine.generation(), 0);
    }
}
