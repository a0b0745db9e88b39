//! Error types for Prospekt Guard.

use thiserror::Error;

/// Main error type for guard operations.
///
/// A rate limit denial is not an error: the gate reports it as an
/// ordinary decision. Only the configuration surface can fail.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for guard operations.
pub type Result<T> = std::result::Result<T, GuardError>;
