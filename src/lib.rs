//! remote-mgr - run a single command on a remote host over SSH
//!
//! This crate wraps the system `ssh` client: it spawns one non-interactive
//! invocation, waits for it under a timeout and turns the outcome into an
//! [`ExecutionResult`]. Authentication, key exchange and transport are left
//! entirely to the client.
//!
//! # Features
//!
//! - Batch-mode ssh (no password or host-key prompts), optional identity file
//! - 30 second default timeout, the client is killed when it is exceeded
//! - Trimmed stdout/stderr and the real remote exit code
//! - Text or JSON reports
//! - A `mock-ssh` binary that prints canned output without any network
//!
//! # Example Usage (CLI)
//!
//! ```bash
//! remote-mgr 192.168.1.100 "uptime" --user admin --key ~/.ssh/id_ed25519
//! mock-ssh server1 uptime
//! ```

pub mod config;
pub mod error;
pub mod mock;
pub mod report;
pub mod ssh;

// Re-exports for convenience
pub use config::{Args, Config};
pub use error::{RemoteMgrError, Result};
pub use ssh::{execute, validate_command, ExecutionResult, SshTarget};
