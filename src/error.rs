//! Engine error types.

use thiserror::Error;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An axis length was zero or negative.
    #[error("invalid dimension {columns}x{rows}x{depth}: every axis must be positive")]
    InvalidDimension { columns: i16, rows: i16, depth: i16 },

    /// A checked coordinate lies outside the grid.
    #[error("coordinate ({x}, {y}, {z}) is out of bounds")]
    OutOfBounds { x: i16, y: i16, z: i16 },

    /// A region buffer cannot hold the requested box.
    #[error("region buffer holds {actual} cells but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },

    /// The stepping worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
