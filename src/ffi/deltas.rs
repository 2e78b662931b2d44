//! Per-cell deltas from the most recent step.
//!
//! A host renderer calls `vl_step`, then copies the flipped cells out and updates only
//! those voxels.

use crate::automaton::CellChange;
use crate::state::State;

/// C layout of a single delta.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VlCellChange {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    /// 1 if the cell was born, 0 if it died.
    pub alive: u8,
}

impl From<CellChange> for VlCellChange {
    fn from(change: CellChange) -> Self {
        Self {
            x: change.x,
            y: change.y,
            z: change.z,
            alive: u8::from(change.alive),
        }
    }
}

/// Number of deltas recorded by the most recent step.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_change_count(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).changes.len() as u64
}

/// Copies up to `capacity` deltas into `out_buf`, in linear index order.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
/// - `out_buf` must point to at least `capacity` writable `VlCellChange` slots, or be null
///
/// # Returns
/// Number of deltas written, or 0 on null pointers.
#[no_mangle]
pub unsafe extern "C" fn vl_copy_changes(
    ptr: *const State,
    out_buf: *mut VlCellChange,
    capacity: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let state = &*ptr;
    let count = state.changes.len().min(capacity as usize);
    let out = std::slice::from_raw_parts_mut(out_buf, count);
    for (slot, &change) in out.iter_mut().zip(&state.changes) {
        *slot = change.into();
    }

    count as u64
}
