//! Error types for the agenda ecosystem.

use thiserror::Error;

/// Errors that can occur at the configuration/session boundary. The
/// filtering and grouping engine itself never fails.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
