//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for seeding, stepping and reading the
//! voxel grid. [`crate::engine::Engine`] and the FFI layer in `ffi/` call into it.

pub mod grid;
pub mod region;
pub mod seeding;
pub mod stepping;

pub use grid::Grid;
pub use region::{extract_region, import_region, Bounds};
pub use seeding::seed;
pub use stepping::{diff, next_generation, next_generation_parallel, next_state, CellChange};
