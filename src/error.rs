//! Error types for colorstrip.
//!
//! The engine itself never fails at runtime: degenerate inputs fall back to
//! safe defaults. Errors come from the surrounding plumbing (configuration,
//! grid loading, PNG export) and from constructors that need a grid.

use thiserror::Error;

/// The main error type for colorstrip operations.
#[derive(Error, Debug)]
pub enum ColorStripError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Malformed grid data
    #[error("Invalid grid: {message}")]
    InvalidGrid { message: String },

    /// A grid-range constructor was called without a grid
    #[error("No grid available to scan for a value range")]
    GridUnavailable,
}

/// Convenience type alias for Results with ColorStripError
pub type Result<T> = std::result::Result<T, ColorStripError>;
