//! Error types for tone synthesis.

use thiserror::Error;

/// Result type for synthesis operations.
pub type ToneResult<T> = Result<T, ToneError>;

/// Errors that can occur while building a tone buffer.
///
/// Synthesis itself is total; only the request parameters can be wrong.
#[derive(Debug, Error, PartialEq)]
pub enum ToneError {
    /// Frequency must be finite and positive.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Sample rate must be positive.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// A zero-length buffer was requested.
    #[error("requested an empty sample buffer")]
    EmptyBuffer,
}
