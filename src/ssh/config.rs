//! SSH target description
//!
//! Everything needed to build one invocation of the external ssh client.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{DEFAULT_SSH_PROGRAM, DEFAULT_TIMEOUT_SECS};

/// Options passed to the client ahead of the destination.
///
/// Host keys are accepted without prompting and batch mode turns off
/// password and keyboard-interactive authentication.
pub const SSH_OPTIONS: [&str; 4] = ["-o", "StrictHostKeyChecking=no", "-o", "BatchMode=yes"];

/// Remote host and client settings for a single call
#[derive(Debug, Clone)]
pub struct SshTarget {
    /// Remote hostname or IP address
    pub host: String,

    /// Username on the remote side
    pub user: String,

    /// Identity file passed with `-i`
    pub key: Option<PathBuf>,

    /// Client binary to spawn
    pub program: String,

    /// Upper bound on the whole invocation
    pub timeout: Duration,
}

impl SshTarget {
    /// Create a target with the default client and timeout
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            key: None,
            program: DEFAULT_SSH_PROGRAM.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Authenticate with the given private key file
    pub fn with_key(mut self, key: impl AsRef<Path>) -> Self {
        self.key = Some(key.as_ref().to_path_buf());
        self
    }

    /// Use a different client binary
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Override the invocation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `user@host`
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Full argument vector for running `command` on this target
    pub fn ssh_args(&self, command: &str) -> Vec<String> {
        let mut args: Vec<String> = SSH_OPTIONS.iter().map(|s| s.to_string()).collect();

        if let Some(ref key) = self.key {
            args.push("-i".to_string());
            args.push(key.display().to_string());
        }

        args.push(self.destination());
        args.push(command.to_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssh_target_builder() {
        let target = SshTarget::new("192.168.1.1", "admin")
            .with_key("/home/admin/.ssh/id_rsa")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(target.host, "192.168.1.1");
        assert_eq!(target.user, "admin");
        assert_eq!(target.key, Some(PathBuf::from("/home/admin/.ssh/id_rsa")));
        assert_eq!(target.program, "ssh");
        assert_eq!(target.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_timeout_is_thirty_seconds() {
        let target = SshTarget::new("host", "root");
        assert_eq!(target.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_ssh_args_without_key() {
        let target = SshTarget::new("server1", "root");
        assert_eq!(
            target.ssh_args("uptime"),
            vec![
                "-o",
                "StrictHostKeyChecking=no",
                "-o",
                "BatchMode=yes",
                "root@server1",
                "uptime"
            ]
        );
    }

    #[test]
    fn test_ssh_args_with_key() {
        let target = SshTarget::new("server1", "deploy").with_key("/keys/id_ed25519");
        assert_eq!(
            target.ssh_args("ls -la /var/log"),
            vec![
                "-o",
                "StrictHostKeyChecking=no",
                "-o",
                "BatchMode=yes",
                "-i",
                "/keys/id_ed25519",
                "deploy@server1",
                "ls -la /var/log"
            ]
        );
    }
}
