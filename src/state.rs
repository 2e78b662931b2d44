//! Host-facing state behind the opaque FFI pointer.

use crate::automaton::CellChange;
use crate::engine::Engine;

/// The internal state of an automaton owned by a host through FFI.
pub struct State {
    pub engine: Engine,
    /// Cells flipped by the most recent step, kept until the next step or seed.
    pub changes: Vec<CellChange>,
}

impl State {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            changes: Vec::new(),
        }
    }
}
