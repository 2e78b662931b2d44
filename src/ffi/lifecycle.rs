//! State creation, destruction, and generation queries.

use tracing::warn;

use crate::engine::Engine;
use crate::state::State;

/// Creates an all-dead automaton and returns an opaque pointer.
///
/// `threads` selects the stepping worker pool size; 0 steps serially.
///
/// # Returns
/// A pointer to a new State, or null if any dimension is not positive or the worker
/// pool cannot be built.
///
/// # Safety
/// The returned pointer must eventually be freed with `vl_destroy()`.
#[no_mangle]
pub extern "C" fn vl_create(columns: i16, rows: i16, depth: i16, threads: u8) -> *mut State {
    match Engine::with_threads(columns, rows, depth, threads as usize) {
        Ok(engine) => Box::into_raw(Box::new(State::new(engine))),
        Err(err) => {
            warn!(%err, "vl_create rejected");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an automaton and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `vl_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn vl_destroy(ptr: *mut State) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_get_generation(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).engine.generation()
}

/// Gets the number of alive cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The population, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_get_population(ptr: *const State) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).engine.population() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let state = vl_create(4, 4, 4, 0);
            assert!(!state.is_null());

            // Should not crash
            vl_destroy(state);
        }
    }

    #[test]
    fn test_create_rejects_invalid_dimensions() {
        assert!(vl_create(0, 4, 4, 0).is_null());
        assert!(vl_create(4, -2, 4, 0).is_null());
    }

    #[test]
    fn test_initial_generation_and_population() {
        unsafe {
            let state = vl_create(4, 4, 4, 2);
            assert_eq!(vl_get_generation(state), 0);
            assert_eq!(vl_get_population(state), 0);
            vl_destroy(state);
        }
    }

    #[test]
    fn test_null_handling() {
        unsafe {
            // Should not crash
            vl_destroy(ptr::null_mut());
            assert_eq!(vl_get_generation(ptr::null()), 0);
            assert_eq!(vl_get_population(ptr::null()), 0);
        }
    }
}
