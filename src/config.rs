//! Configuration and CLI argument parsing for remote-mgr

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, RemoteMgrError};
use crate::ssh::{validate_command, SshTarget};

/// Upper bound on a single remote invocation, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote user when none is given
pub const DEFAULT_USER: &str = "root";

/// External client invoked for every call
pub const DEFAULT_SSH_PROGRAM: &str = "ssh";

/// remote-mgr CLI Arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "remote-mgr")]
#[command(version)]
#[command(about = "Remote host manager: run one command over SSH and report the result")]
pub struct Args {
    /// Target host IP or hostname
    pub host: String,

    /// Command to execute
    pub command: String,

    /// SSH username
    #[arg(long, default_value = DEFAULT_USER, env = "REMOTE_MGR_USER")]
    pub user: String,

    /// Path to SSH private key file
    #[arg(long, env = "REMOTE_MGR_KEY")]
    pub key: Option<PathBuf>,

    /// Seconds to wait for the remote command before giving up
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "REMOTE_MGR_TIMEOUT")]
    pub timeout: u64,

    /// ssh client binary to invoke
    #[arg(long = "ssh-program", default_value = DEFAULT_SSH_PROGRAM, env = "REMOTE_MGR_SSH")]
    pub ssh_program: String,

    /// Print the execution result as JSON instead of the text report
    #[arg(long, default_value = "false")]
    pub json: bool,
}

/// Parsed and validated configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote host
    pub host: String,

    /// Remote username
    pub user: String,

    /// Command to run, exactly as given
    pub command: String,

    /// Path to SSH private key
    pub key: Option<PathBuf>,

    /// Invocation timeout
    pub timeout: Duration,

    /// ssh client binary
    pub ssh_program: String,

    /// Emit JSON instead of the text report
    pub json: bool,
}

impl Config {
    /// Create Config from CLI Args
    pub fn from_args(args: Args) -> Result<Self> {
        validate_args(&args)?;

        validate_command(&args.command)?;

        Ok(Config {
            host: args.host.trim().to_string(),
            user: args.user.trim().to_string(),
            command: args.command,
            key: args.key,
            timeout: Duration::from_secs(args.timeout),
            ssh_program: args.ssh_program,
            json: args.json,
        })
    }

    /// Build the SSH target this configuration points at
    pub fn target(&self) -> SshTarget {
        let mut target = SshTarget::new(&self.host, &self.user)
            .with_program(&self.ssh_program)
            .with_timeout(self.timeout);

        if let Some(ref key) = self.key {
            target = target.with_key(key);
        }

        target
    }
}

/// Validate CLI arguments
fn validate_args(args: &Args) -> Result<()> {
    let mut errors = Vec::new();

    if args.host.trim().is_empty() {
        errors.push("Missing required <host>".to_string());
    }

    if args.user.trim().is_empty() {
        errors.push("Missing required --user".to_string());
    }

    if args.timeout == 0 {
        errors.push("--timeout must be at least 1 second".to_string());
    }

    if args.ssh_program.trim().is_empty() {
        errors.push("--ssh-program cannot be empty".to_string());
    }

    if !errors.is_empty() {
        return Err(RemoteMgrError::config(errors.join("\n")));
    }

    Ok(())
}
