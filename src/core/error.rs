//! Error types for the engine.
//!
//! The engine does no I/O, so the taxonomy is narrow: bad input rejected at
//! the boundary, and configuration that cannot produce a playable grid.

use thiserror::Error;

/// Errors reported by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Input that does not map to a valid value (unknown key, bad cell value, ragged grid).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration that cannot produce a playable grid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, GameError>;
