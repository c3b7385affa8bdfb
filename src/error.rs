//! Error types for the heat-loss model.
//!
//! The four categories keep distinct failure modes distinct for callers:
//! rejected input, incomplete model, unusable file content, and plain I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for heat-loss model operations.
pub type HeatLossResult<T> = Result<T, HeatLossError>;

/// Top-level error type for model, computation, and persistence failures.
#[derive(Error, Debug)]
pub enum HeatLossError {
    /// An input value was rejected before it reached the model.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A derived value was requested while a required input is undefined.
    #[error(transparent)]
    Computation(#[from] ComputationError),

    /// The persisted representation is unusable.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Underlying file-system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid user-supplied input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("U-value must be non-negative and finite, got {value}")]
    InvalidUValue { value: f64 },

    #[error("temperature must be finite, got {value}")]
    InvalidTemperature { value: f64 },

    #[error("wall index {index} out of range (a room has walls 0-5)")]
    WallIndexOutOfRange { index: usize },
}

/// A computation was requested while one of its inputs is undefined.
#[derive(Error, Debug)]
pub enum ComputationError {
    #[error("wall {wall} has no area yet")]
    UndefinedArea { wall: usize },

    #[error("wall {wall} has no U-value yet")]
    UndefinedUValue { wall: usize },

    #[error("room temperature has not been set")]
    UndefinedTemperature,

    #[error("wall {wall} has no heat flow yet; compute wall heat flows first")]
    UndefinedHeatFlow { wall: usize },
}

/// The persisted model file cannot be used.
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("not a .vfs file: {}", .path.display())]
    NotAVfsFile { path: PathBuf },

    #[error("malformed model file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wall at position {position} carries index {index}")]
    WallIndexMismatch { position: usize, index: usize },
}
