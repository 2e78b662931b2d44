//! Region extraction and import operations.

use super::grid::Grid;
use crate::error::{EngineError, EngineResult};

/// A half-open box of cells: `min` inclusive, `max` exclusive on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: (i16, i16, i16),
    pub max: (i16, i16, i16),
}

impl Bounds {
    pub const fn new(min: (i16, i16, i16), max: (i16, i16, i16)) -> Self {
        Self { min, max }
    }

    /// The whole grid.
    pub fn of(grid: &Grid) -> Self {
        Self::new((0, 0, 0), grid.dimensions())
    }

    /// Clamp to the grid. Returns `None` for empty or inverted boxes.
    pub fn clamp_to(self, grid: &Grid) -> Option<Self> {
        let (columns, rows, depth) = grid.dimensions();
        let min_x = self.min.0.max(0).min(columns);
        let min_y = self.min.1.max(0).min(rows);
        let min_z = self.min.2.max(0).min(depth);
        let max_x = self.max.0.max(0).min(columns);
        let max_y = self.max.1.max(0).min(rows);
        let max_z = self.max.2.max(0).min(depth);

        if min_x >= max_x || min_y >= max_y || min_z >= max_z {
            return None;
        }

        Some(Self::new((min_x, min_y, min_z), (max_x, max_y, max_z)))
    }

    /// Number of cells in the box, treating inverted axes as empty.
    pub fn volume(&self) -> usize {
        let span = |min: i16, max: i16| (i32::from(max) - i32::from(min)).max(0) as usize;
        span(self.min.0, self.max.0) * span(self.min.1, self.max.1) * span(self.min.2, self.max.2)
    }
}

/// Extract a box of cells from the grid into a flat buffer, one byte per cell.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// This order matches the order used by [`import_region`].
///
/// The box is clamped to the grid first. Returns the number of bytes written.
pub fn extract_region(grid: &Grid, out_buf: &mut [u8], bounds: Bounds) -> EngineResult<usize> {
    let Some(bounds) = bounds.clamp_to(grid) else {
        return Ok(0);
    };

    let total_size = bounds.volume();
    if out_buf.len() < total_size {
        return Err(EngineError::BufferTooSmall {
            required: total_size,
            actual: out_buf.len(),
        });
    }

    let cells = grid.cells();
    let mut offset = 0;
    for z in bounds.min.2..bounds.max.2 {
        for y in bounds.min.1..bounds.max.1 {
            for x in bounds.min.0..bounds.max.0 {
                out_buf[offset] = u8::from(cells[grid.index_of(x, y, z)]);
                offset += 1;
            }
        }
    }

    Ok(offset)
}

/// Import a box of cells from a flat buffer into the grid.
///
/// # Layout
/// The buffer is expected to be in z,y,x order (matching [`extract_region`]).
/// Input values are normalized: 0 = dead, any non-zero = alive.
///
/// Returns the number of bytes read.
pub fn import_region(grid: &mut Grid, in_buf: &[u8], bounds: Bounds) -> EngineResult<usize> {
    let Some(bounds) = bounds.clamp_to(grid) else {
        return Ok(0);
    };

    let total_size = bounds.volume();
    if in_buf.len() < total_size {
        return Err(EngineError::BufferTooSmall {
            required: total_size,
            actual: in_buf.len(),
        });
    }

    let mut offset = 0;
    for z in bounds.min.2..bounds.max.2 {
        for y in bounds.min.1..bounds.max.1 {
            for x in bounds.min.0..bounds.max.0 {
                let idx = grid.index_of(x, y, z);
                grid.cells_mut()[idx] = in_buf[offset] != 0;
                offset += 1;
            }
        }
    }

    Ok(offset)
}
