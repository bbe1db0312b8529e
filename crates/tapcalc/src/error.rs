//! Result and error types for the calculator frontends.
//!
//! The state machine itself cannot fail; these cover the terminal, the
//! logging setup and headless key sequences.

use thiserror::Error;

/// Result type for calculator frontends
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur outside the state machine
#[derive(Debug, Error)]
pub enum CalcError {
    /// A key sequence contained a character with no button
    #[error("No calculator button for key '{0}'")]
    UnknownKey(char),

    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Serializing a state snapshot failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
