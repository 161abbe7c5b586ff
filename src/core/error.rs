//! Engine error type.
//!
//! Only caller bugs and bad configuration are errors. Gameplay actions
//! whose preconditions do not hold are no-ops, not failures.

use thiserror::Error;

/// Errors returned by the round engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Target score must be positive.
    #[error("invalid target score {target}: must be greater than zero")]
    InvalidConfig { target: i64 },

    /// Target score text is not an integer.
    #[error("target score {input:?} is not an integer")]
    UnparseableTarget { input: String },

    /// Die index outside `[0, 4]`.
    #[error("die index {index} out of range 0..=4")]
    IndexOutOfRange { index: usize },

    /// Snapshot could not be encoded, decoded, or failed validation.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
