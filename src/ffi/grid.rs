//! Cell access, neighbor queries, and stepping.

use tracing::warn;

use crate::state::State;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 if the coordinate is out of bounds.
#[no_mangle]
pub unsafe extern "C" fn vl_set_cell(ptr: *mut State, x: i16, y: i16, z: i16, alive: u8) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    match state.engine.set_alive(x, y, z, alive != 0) {
        Ok(()) => 0,
        Err(err) => {
            warn!(%err, "vl_set_cell rejected");
            2
        }
    }
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn vl_get_cell(ptr: *const State, x: i16, y: i16, z: i16) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let state = &*ptr;
    state.engine.is_alive(x, y, z).map(u8::from).unwrap_or(0)
}

/// Counts the alive cells among the 26 neighbors of a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The count in `0..=26`, or -1 for a null pointer or out-of-bounds coordinate.
#[no_mangle]
pub unsafe extern "C" fn vl_neighbor_count(ptr: *const State, x: i16, y: i16, z: i16) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let state = &*ptr;
    state
        .engine
        .neighbor_count(x, y, z)
        .map(i32::from)
        .unwrap_or(-1)
}

/// Advances the automaton by one generation using B3/S23 rules.
///
/// The flipped cells are kept for `vl_copy_changes` until the next step or seed.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// Number of cells whose state changed, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_step(ptr: *mut State) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    let state = &mut *ptr;
    state.changes = state.engine.step().changes;
    state.changes.len() as u64
}
