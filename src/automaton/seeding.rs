//! Random initial populations.

use rand::Rng;

use super::grid::Grid;

/// Overwrite every cell with an independent Bernoulli sample.
///
/// Cells are visited in linear index order and each is alive iff a uniform sample in
/// `[0, 1)` falls below `probability`. A probability of 0 (or NaN) leaves the grid dead,
/// 1 or more fills it.
pub fn seed<R: Rng + ?Sized>(grid: &mut Grid, probability: f64, rng: &mut R) {
    for cell in grid.cells_mut() {
        *cell = rng.random::<f64>() < probability;
    }
}
