//! Error handling for password generation

use thiserror::Error;

/// Password generation errors
#[derive(Debug, Error)]
pub enum PwgenError {
    /// The operating system random source could not provide a seed
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// Appending to the output buffer failed
    #[error("Output write failure: {0}")]
    OutputWrite(#[from] std::fmt::Error),

    /// Requested password length is not positive
    #[error("Invalid password length: {0} (must be at least 1)")]
    InvalidLength(usize),

    /// The active phoneme table has no units to draw from
    #[error("Phoneme table is empty")]
    EmptyTable,

    /// Too many consecutive draws were rejected by the walk filters
    #[error("Gave up after {rejections} consecutive rejected draws for target length {target}")]
    RejectionLimit {
        /// Requested password length
        target: usize,
        /// Consecutive rejections observed
        rejections: usize,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PwgenError {
    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a random source error
    #[must_use]
    pub fn random_source(msg: impl Into<String>) -> Self {
        Self::RandomSourceUnavailable(msg.into())
    }
}

/// Result type for password generation
pub type Result<T> = std::result::Result<T, PwgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_length() {
        let err = PwgenError::InvalidLength(0);
        assert_eq!(
            err.to_string(),
            "Invalid password length: 0 (must be at least 1)"
        );
    }

    #[test]
    fn test_display_rejection_limit() {
        let err = PwgenError::RejectionLimit {
            target: 1,
            rejections: 10,
        };
        assert_eq!(
            err.to_string(),
            "Gave up after 10 consecutive rejected draws for target length 1"
        );
    }

    #[test]
    fn test_from_fmt_error() {
        let err: PwgenError = std::fmt::Error.into();
        assert!(matches!(err, PwgenError::OutputWrite(_)));
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(
            PwgenError::config("bad json"),
            PwgenError::Config(msg) if msg == "bad json"
        ));
        assert!(matches!(
            PwgenError::random_source("short read"),
            PwgenError::RandomSourceUnavailable(msg) if msg == "short read"
        ));
    }
}
