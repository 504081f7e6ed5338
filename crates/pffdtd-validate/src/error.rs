//! Error types for the validation crate.

use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while diffing decoded artifacts or saving reports.
///
/// File comparison itself never returns these; it reports problems as a
/// failing [`Verdict`](crate::Verdict).
#[derive(Debug, Error)]
pub enum Error {
    /// Decoding an output file failed.
    #[error("decode error: {0}")]
    Decode(#[from] pffdtd_io::Error),

    /// Frequency-domain processing failed.
    #[error("spectral error: {0}")]
    Spectral(#[from] pffdtd_spectral::Error),

    /// Two artifacts that must match in shape do not.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
