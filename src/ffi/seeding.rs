//! Random seeding from the host.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::state::State;

/// Overwrites the grid with a random population drawn from `seed`.
///
/// The same `probability` and `seed` always produce the same grid. Pending changes
/// from the previous step are discarded.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// 0 on success, 1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_seed(ptr: *mut State, probability: f64, seed: u64) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let state = &mut *ptr;
    state
        .engine
        .seed(probability, &mut ChaCha8Rng::seed_from_u64(seed));
    state.changes.clear();
    0
}

/// Seeds from a freshly drawn seed and returns it, so the run can be replayed with
/// `vl_seed`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a State, or null
///
/// # Returns
/// The seed used, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_seed_entropy(ptr: *mut State, probability: f64) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    let seed: u64 = rand::rng().random();
    vl_seed(ptr, probability, seed);
    seed
}
