//! Command execution through the external ssh client
//!
//! Provides the `ExecutionResult` struct and `execute`, which spawns the
//! client once, waits for it under a timeout and maps the outcome to a
//! result value.

use std::process::{ExitStatus, Stdio};

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::config::SshTarget;
use super::sanitize::clean_output;
use crate::error::{Result, RemoteMgrError};

/// Exit code reported when no real exit code exists (timeout, spawn failure)
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Outcome of one remote command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Whether the remote command exited with code 0
    pub success: bool,

    /// Standard output, trimmed
    pub stdout: String,

    /// Standard error, trimmed
    pub stderr: String,

    /// Exit code of the client, or -1 if it never produced one
    pub exit_code: i32,
}

impl ExecutionResult {
    /// Build a result from a finished process; success follows the exit code
    pub fn from_exit(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: exit_code == 0,
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Build the failure result for an invocation that never completed
    pub fn from_error(err: &RemoteMgrError) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: err.to_string(),
            exit_code: FAILURE_EXIT_CODE,
        }
    }
}

/// Execute `command` on the target host
///
/// Exactly one attempt is made. Timeouts and spawn failures are folded into
/// the returned result with exit code -1; a remote command that runs and
/// fails comes back with its own exit code.
pub async fn execute(target: &SshTarget, command: &str) -> ExecutionResult {
    match run(target, command).await {
        Ok(result) => result,
        Err(e) => {
            warn!(destination = %target.destination(), error = %e, "ssh invocation failed");
            ExecutionResult::from_error(&e)
        }
    }
}

/// Spawn the client and collect its output
///
/// # Returns
/// * `Ok(ExecutionResult)` - The client ran to completion
/// * `Err(RemoteMgrError::Timeout)` - The client was killed after `target.timeout`
/// * `Err(RemoteMgrError::Spawn)` - The client could not be started
async fn run(target: &SshTarget, command: &str) -> Result<ExecutionResult> {
    let args = target.ssh_args(command);

    debug!(
        program = %target.program,
        destination = %target.destination(),
        timeout = ?target.timeout,
        "spawning ssh client"
    );

    let child = Command::new(&target.program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| RemoteMgrError::spawn(&target.program, e))?;

    // Dropping the wait future on timeout drops the child, which kills it.
    let output = match timeout(target.timeout, child.wait_with_output()).await {
        Ok(output) => output?,
        Err(_) => {
            warn!(
                "Command timed out after {:?}, killing ssh client",
                target.timeout
            );
            return Err(RemoteMgrError::Timeout(target.timeout));
        }
    };

    let exit_code = exit_code(&output.status);
    let result = ExecutionResult::from_exit(
        exit_code,
        clean_output(&output.stdout),
        clean_output(&output.stderr),
    );

    debug!(
        "Command completed: exit_code={}, stdout_len={}, stderr_len={}",
        result.exit_code,
        result.stdout.len(),
        result.stderr.len()
    );

    Ok(result)
}

/// Exit code of a finished client; signal deaths map to the negated signal
fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    FAILURE_EXIT_CODE
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_from_exit_success() {
        let result = ExecutionResult::from_exit(0, "hello", "");
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_from_exit_failure() {
        let result = ExecutionResult::from_exit(255, "", "Permission denied (publickey).");
        assert!(!result.success);
        assert_eq!(result.exit_code, 255);
    }

    #[test]
    fn test_from_timeout_error() {
        let result = ExecutionResult::from_error(&RemoteMgrError::Timeout(Duration::from_secs(30)));
        assert_eq!(
            result,
            ExecutionResult {
                success: false,
                stdout: String::new(),
                stderr: "Connection timed out.".to_string(),
                exit_code: -1,
            }
        );
    }

    #[test]
    fn test_json_shape() {
        let result = ExecutionResult::from_exit(2, "out", "err");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": false,
                "stdout": "out",
                "stderr": "err",
                "exit_code": 2
            })
        );
    }

    #[tokio::test]
    async fn test_missing_client_reports_spawn_failure() {
        let target = SshTarget::new("server1", "root")
            .with_program("/nonexistent/remote-mgr-test/ssh");
        let result = execute(&target, "uptime").await;

        assert!(!result.success);
        assert_eq!(result.exit_code, -1);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.starts_with("/nonexistent/remote-mgr-test/ssh: "));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_from_signal() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status for "terminated by SIGKILL"
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_code(&status), -9);

        let status = ExitStatus::from_raw(3 << 8);
        assert_eq!(exit_code(&status), 3);
    }
}
