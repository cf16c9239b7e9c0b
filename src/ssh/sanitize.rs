//! Command validation and output cleanup
//!
//! Helpers applied to what goes into and comes out of the ssh client.

use crate::error::{Result, RemoteMgrError};

/// Validate a command before execution
///
/// Commands that are empty or whitespace-only are rejected. Anything else is
/// accepted as-is: the caller sends the original string, surrounding
/// whitespace included.
///
/// # Examples
/// ```
/// use remote_mgr::ssh::sanitize::validate_command;
///
/// assert!(validate_command("  ls -la  ").is_ok());
/// assert!(validate_command("   ").is_err());
/// ```
pub fn validate_command(command: &str) -> Result<()> {
    if command.trim().is_empty() {
        return Err(RemoteMgrError::invalid_params("Command cannot be empty"));
    }

    Ok(())
}

/// Decode captured client output, replacing invalid UTF-8, and strip
/// leading and trailing whitespace.
///
/// ```
/// use remote_mgr::ssh::sanitize::clean_output;
///
/// assert_eq!(clean_output(b"\n  up 3 days \n"), "up 3 days");
/// ```
pub fn clean_output(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_command_valid() {
        assert!(validate_command("ls -la").is_ok());
    }

    #[test]
    fn test_validate_command_surrounding_whitespace_allowed() {
        assert!(validate_command("\t uptime \n").is_ok());
    }

    #[test]
    fn test_validate_command_empty() {
        let result = validate_command("");
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_command_whitespace_only() {
        let result = validate_command(" \n\t ");
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_clean_output_empty() {
        assert_eq!(clean_output(b""), "");
        assert_eq!(clean_output(b" \n\t"), "");
    }

    #[test]
    fn test_clean_output_keeps_inner_lines() {
        assert_eq!(clean_output(b"line1\nline2\n"), "line1\nline2");
    }

    #[test]
    fn test_clean_output_invalid_utf8() {
        let out = clean_output(&[b'o', b'k', 0xff, b'\n']);
        assert!(out.starts_with("ok"));
        assert!(out.ends_with('\u{FFFD}'));
    }
}
