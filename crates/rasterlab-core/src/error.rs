//! Error types for rasterlab-core
//!
//! Provides a unified error type for the core data structures. Each
//! variant captures enough context for diagnostics without exposing
//! internal representation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid per-channel ceiling
    #[error("invalid channel ceiling: {0} (must be > 0)")]
    InvalidMaxValue(u32),

    /// Pixel coordinate outside the grid
    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Image dimension mismatch between collaborating images
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Name absent from the image store
    #[error("no image named \"{0}\"")]
    ImageNotFound(String),

    /// Invalid argument value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
