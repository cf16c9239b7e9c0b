//! Text and JSON reports for the remote-mgr CLI
//!
//! Turns an [`ExecutionResult`] into what the user sees on stdout and into
//! the process exit code.

use std::io::Write;

use crate::error::Result;
use crate::ssh::{ExecutionResult, SshTarget};

/// Exit code used when a failed result carries no usable code of its own
pub const GENERIC_FAILURE_EXIT: i32 = 1;

/// Banner printed before the ssh client is started
pub fn write_connecting<W: Write>(out: &mut W, target: &SshTarget) -> Result<()> {
    writeln!(out, "[remote-mgr] Connecting to {}...", target.destination())?;
    Ok(())
}

/// Human-readable report of a finished invocation
///
/// Success prints the captured stdout under a banner. Failure prints the
/// exit code and whichever of stdout/stderr is non-empty.
pub fn write_report<W: Write>(out: &mut W, host: &str, result: &ExecutionResult) -> Result<()> {
    if result.success {
        writeln!(out, "[SUCCESS] Command executed on {}:\n", host)?;
        writeln!(out, "{}", result.stdout)?;
    } else {
        writeln!(
            out,
            "[ERROR] Failed to execute command on {} (Code: {}):\n",
            host, result.exit_code
        )?;
        if !result.stdout.is_empty() {
            writeln!(out, "STDOUT: {}", result.stdout)?;
        }
        if !result.stderr.is_empty() {
            writeln!(out, "STDERR: {}", result.stderr)?;
        }
    }
    Ok(())
}

/// Single-line JSON report
pub fn write_json<W: Write>(out: &mut W, result: &ExecutionResult) -> Result<()> {
    serde_json::to_writer(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

/// Process exit code for a result, `None` when the process should simply end
pub fn exit_code(result: &ExecutionResult) -> Option<i32> {
    if result.success {
        None
    } else if result.exit_code == 0 {
        Some(GENERIC_FAILURE_EXIT)
    } else {
        Some(result.exit_code)
    }
}
