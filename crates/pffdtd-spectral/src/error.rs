//! Error types for pffdtd-spectral.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid caller-supplied parameters, e.g. a malformed frequency
    /// specification.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("need at least {needed} samples, got {actual}")]
    InsufficientSamples { needed: usize, actual: usize },

    #[error("length mismatch: {what} has {actual} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("frequency axes differ at bin {bin}: {left} Hz vs {right} Hz")]
    AxisMismatch { bin: usize, left: f64, right: f64 },
}

impl Error {
    /// True for [`Error::Config`].
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
