//! Error types for noise field and noise image construction.

use thiserror::Error;

/// Errors raised when a noise field, noise image, or configuration is invalid.
///
/// All of these are precondition violations on the caller's side; sampling
/// itself never fails.
#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid samples per node {0}: must be at least 1")]
    InvalidSamplesPerNode(u32),

    #[error("invalid channel count {0}: a noise image has 3 or 4 channels")]
    InvalidChannelCount(usize),

    #[error("noise fields have mismatched dimensions: expected {expected:?}, got {actual:?}")]
    MismatchedFields {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("invalid gradient at index {index}: {reason}")]
    InvalidGradient { index: usize, reason: String },

    #[error("image of {width}x{height} samples exceeds addressable size")]
    ImageTooLarge { width: u64, height: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse noise config: {0}")]
    Config(#[from] serde_json::Error),
}

impl NoiseError {
    /// Convenience constructor for gradient list errors.
    pub(crate) fn gradient(index: usize, reason: impl Into<String>) -> Self {
        NoiseError::InvalidGradient {
            index,
            reason: reason.into(),
        }
    }
}
