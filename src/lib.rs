//! Voxel Life - Conway's Game of Life on a 3D voxel grid
//!
//! The engine applies the B3/S23 rule over the 26-cell Moore neighborhood of a
//! fixed-size, non-wrapping grid. Hosts either drive it from Rust through
//! [`Engine`] and [`Driver`], or own it through the C ABI in [`ffi`].

pub mod automaton;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::{Bounds, CellChange, Grid};
pub use config::SimulationConfig;
pub use driver::{CellSink, Driver};
pub use engine::{Engine, StepReport};
pub use error::{EngineError, EngineResult};
