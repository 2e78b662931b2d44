//! Cellular automaton stepping with B3/S23 rules.

use rayon::prelude::*;

use super::grid::Grid;

/// A cell whose alive state flipped during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellChange {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    /// State after the step.
    pub alive: bool,
}

/// B3/S23 transition for a single cell.
///
/// - Birth: a dead cell with exactly 3 neighbors becomes alive
/// - Survival: an alive cell with 2 or 3 neighbors survives
/// - Everything else is dead in the next generation
#[inline]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

#[inline]
fn evolve_cell(grid: &Grid, idx: usize, alive: bool) -> bool {
    let (x, y, z) = grid.coord_of(idx);
    next_state(alive, grid.count_neighbors_unchecked(x, y, z))
}

/// Compute the next generation from a read-only snapshot.
///
/// Every cell reads only `grid`, never the buffer being written, so the update is
/// synchronous regardless of iteration order.
pub fn next_generation(grid: &Grid) -> Grid {
    let next_cells = grid
        .cells()
        .iter()
        .enumerate()
        .map(|(idx, &alive)| evolve_cell(grid, idx, alive))
        .collect();

    grid.with_cells(next_cells)
}

/// Parallel version of [`next_generation`] using rayon.
///
/// Runs on whichever pool is current, so wrap it in `ThreadPool::install` to pin it.
/// Output is identical to the serial version.
pub fn next_generation_parallel(grid: &Grid) -> Grid {
    let next_cells = grid
        .cells()
        .par_iter()
        .enumerate()
        .map(|(idx, &alive)| evolve_cell(grid, idx, alive))
        .collect();

    grid.with_cells(next_cells)
}

/// List the cells whose state differs between two grids of the same shape.
pub fn diff(before: &Grid, after: &Grid) -> Vec<CellChange> {
    debug_assert_eq!(before.dimensions(), after.dimensions());

    before
        .cells()
        .iter()
        .zip(after.cells())
        .enumerate()
        .filter(|&(_, (old, new))| old != new)
        .map(|(idx, (_, &alive))| {
            let (x, y, z) = after.coord_of(idx);
            CellChange { x, y, z, alive }
        })
        .collect()
}
