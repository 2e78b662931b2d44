//! C FFI layer for game-engine hosts.
//!
//! This module exports C ABI functions for hosts that keep the voxel visuals and drive
//! the simulation from their own timer. All functions are marked with `#[no_mangle]`
//! and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module and [`crate::engine::Engine`]. These
//! functions are thin wrappers that handle null checks, pointer safety, and C-to-Rust
//! conversions.

pub mod deltas;
pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod seeding;

pub use deltas::{vl_change_count, vl_copy_changes, VlCellChange};
pub use grid::{vl_get_cell, vl_neighbor_count, vl_set_cell, vl_step};
pub use lifecycle::{vl_create, vl_destroy, vl_get_generation, vl_get_population};
pub use region::{vl_extract_region, vl_import_region};
pub use seeding::{vl_seed, vl_seed_entropy};
