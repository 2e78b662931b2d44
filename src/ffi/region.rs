//! Region extraction and import FFI functions.

use tracing::warn;

use crate::automaton::{self, Bounds};
use crate::state::State;

/// Extracts a box of cells into a flat output buffer, one byte per cell.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// This matches the layout expected by `vl_import_region`. The box is clamped to the
/// grid first, and the buffer only needs to hold the clamped box.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to a buffer with at least one byte per cell of the box
///   after clamping it to the grid
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn vl_extract_region(
    ptr: *const State,
    out_buf: *mut u8,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let Some(bounds) = Bounds::new((min_x, min_y, min_z), (max_x, max_y, max_z))
        .clamp_to(state.engine.grid())
    else {
        return 0;
    };
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, bounds.volume());

    match automaton::extract_region(state.engine.grid(), buf_slice, bounds) {
        Ok(written) => written as u64,
        Err(err) => {
            warn!(%err, "vl_extract_region failed");
            0
        }
    }
}

/// Imports a box of cells from a flat buffer.
///
/// # Layout
/// The buffer is expected to be in z,y,x order (matching `vl_extract_region`).
/// Input values are normalized: 0 = dead, non-zero = alive. The box is clamped to
/// the grid first.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `in_buf` must point to a buffer with at least one byte per cell of the box
///   after clamping it to the grid
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn vl_import_region(
    ptr: *mut State,
    in_buf: *const u8,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let state = &mut *ptr;
    let Some(bounds) = Bounds::new((min_x, min_y, min_z), (max_x, max_y, max_z))
        .clamp_to(state.engine.grid())
    else {
        return 0;
    };
    let buf_slice = std::slice::from_raw_parts(in_buf, bounds.volume());

    // Imported cells are not deltas of a step
    state.changes.clear();

    match state.engine.import_region(buf_slice, bounds) {
        Ok(read) => read as u64,
        Err(err) => {
            warn!(%err, "vl_import_region failed");
            0
        }
    }
}
