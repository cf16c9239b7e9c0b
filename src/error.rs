//! Error types for remote-mgr

use std::time::Duration;

use thiserror::Error;

/// Main error type for remote command execution
#[derive(Debug, Error)]
pub enum RemoteMgrError {
    /// The ssh client did not finish within the allotted time
    #[error("Connection timed out.")]
    Timeout(Duration),

    /// The ssh client could not be started
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameters provided
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode a report as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using RemoteMgrError
pub type Result<T> = std::result::Result<T, RemoteMgrError>;

impl RemoteMgrError {
    /// Create a spawn error for the given client program
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        RemoteMgrError::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create an invalid params error from a string
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        RemoteMgrError::InvalidParams(msg.into())
    }

    /// Create a config error from a string
    pub fn config(msg: impl Into<String>) -> Self {
        RemoteMgrError::Config(msg.into())
    }
}
