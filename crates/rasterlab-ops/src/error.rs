//! Error types for rasterlab-ops

use thiserror::Error;

/// Errors that can occur in the transformation catalogue
#[derive(Debug, Error)]
pub enum OpError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Invalid operation parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Images participating in one operation disagree on size
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Images participating in one operation disagree on channel ceiling
    #[error("channel ceiling mismatch: {0} vs {1}")]
    MaxValueMismatch(u16, u16),
}

/// Result type for catalogue operations
pub type OpResult<T> = Result<T, OpError>;
