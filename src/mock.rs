//! Canned SSH responses for offline testing
//!
//! Prints what a successful session would look like without touching the
//! network.

use std::io::{self, Write};

/// Printed when the mocked command is `uptime`
pub const UPTIME_REPORT: &str =
    " 10:00:00 up 10 days,  2:30,  1 user,  load average: 0.00, 0.01, 0.05";

/// Printed for every other command
pub const GENERIC_SUCCESS: &str = "Command executed successfully.";

/// Usage line for too few arguments
pub const USAGE: &str = "Usage: mock-ssh <host> <cmd>";

/// Write the fake session transcript for `command` on `host`
pub fn respond<W: Write>(out: &mut W, host: &str, command: &str) -> io::Result<()> {
    writeln!(out, "[SSH Connected to {}]", host)?;
    writeln!(out, "[Executing]: {}", command)?;

    if command == "uptime" {
        writeln!(out, "{}", UPTIME_REPORT)
    } else {
        writeln!(out, "{}", GENERIC_SUCCESS)
    }
}
