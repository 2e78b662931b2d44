//! Dense voxel grid storage and neighbor counting.

use crate::error::{EngineError, EngineResult};

/// A fixed-size 3D grid of alive/dead cells.
///
/// `x` indexes columns, `y` rows and `z` depth layers. Cells are stored densely in
/// z,y,x order (z changes slowest, x changes fastest).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: i16,
    rows: i16,
    depth: i16,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid. Every axis must be positive.
    pub fn new(columns: i16, rows: i16, depth: i16) -> EngineResult<Self> {
        if columns <= 0 || rows <= 0 || depth <= 0 {
            return Err(EngineError::InvalidDimension {
                columns,
                rows,
                depth,
            });
        }

        let size = (columns as usize) * (rows as usize) * (depth as usize);
        Ok(Self {
            columns,
            rows,
            depth,
            cells: vec![false; size],
        })
    }

    /// Grid dimensions as `(columns, rows, depth)`.
    pub const fn dimensions(&self) -> (i16, i16, i16) {
        (self.columns, self.rows, self.depth)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Calculate the linear index for an in-bounds coordinate.
    #[inline]
    pub fn index_of(&self, x: i16, y: i16, z: i16) -> usize {
        z as usize * self.rows as usize * self.columns as usize
            + y as usize * self.columns as usize
            + x as usize
    }

    /// Inverse of [`Grid::index_of`].
    #[inline]
    pub fn coord_of(&self, idx: usize) -> (i16, i16, i16) {
        let columns = self.columns as usize;
        let plane = columns * self.rows as usize;
        let x = idx % columns;
        let y = (idx % plane) / columns;
        let z = idx / plane;
        (x as i16, y as i16, z as i16)
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i16, y: i16, z: i16) -> bool {
        x >= 0 && x < self.columns && y >= 0 && y < self.rows && z >= 0 && z < self.depth
    }

    fn checked_index(&self, x: i16, y: i16, z: i16) -> EngineResult<usize> {
        if self.in_bounds(x, y, z) {
            Ok(self.index_of(x, y, z))
        } else {
            Err(EngineError::OutOfBounds { x, y, z })
        }
    }

    pub fn get(&self, x: i16, y: i16, z: i16) -> EngineResult<bool> {
        self.checked_index(x, y, z).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, x: i16, y: i16, z: i16, alive: bool) -> EngineResult<()> {
        let idx = self.checked_index(x, y, z)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Count alive neighbors using the Moore neighborhood (26 neighbors).
    ///
    /// Neighbors outside the grid are skipped; the grid does not wrap.
    pub fn count_neighbors(&self, x: i16, y: i16, z: i16) -> EngineResult<u8> {
        if !self.in_bounds(x, y, z) {
            return Err(EngineError::OutOfBounds { x, y, z });
        }
        Ok(self.count_neighbors_unchecked(x, y, z))
    }

    /// Neighbor count for a coordinate already known to be in bounds.
    pub(crate) fn count_neighbors_unchecked(&self, x: i16, y: i16, z: i16) -> u8 {
        let mut count = 0;

        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    // Skip the center cell
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }

                    let nx = x + dx;
                    let ny = y + dy;
                    let nz = z + dz;

                    if self.in_bounds(nx, ny, nz) && self.cells[self.index_of(nx, ny, nz)] {
                        count += 1;
                    }
                }
            }
        }

        count
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Set every cell to the same state.
    pub fn fill(&mut self, alive: bool) {
        self.cells.iter_mut().for_each(|cell| *cell = alive);
    }

    /// Cell states in linear index order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Build a grid with the same shape as `self` from a full cell buffer.
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            columns: self.columns,
            rows: self.rows,
            depth: self.depth,
            cells,
        }
    }

    /// Coordinates of every alive cell, in linear index order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (i16, i16, i16)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| self.coord_of(idx))
    }
}
