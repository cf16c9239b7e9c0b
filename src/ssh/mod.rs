//! Remote execution module
//!
//! This module drives the system ssh client: it builds the argument vector
//! for a target, runs one command under a timeout and reports the outcome.

pub mod command;
pub mod config;
pub mod sanitize;

// Re-exports
pub use command::{execute, ExecutionResult, FAILURE_EXIT_CODE};
pub use config::{SshTarget, SSH_OPTIONS};
pub use sanitize::{clean_output, validate_command};
