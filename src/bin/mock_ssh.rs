//! mock-ssh - prints a fake SSH session for `<host> <cmd>`
//!
//! Extra arguments are ignored and invalid UTF-8 is replaced. Fewer than
//! two prints the usage line and exits with status 1.

use std::ffi::OsString;
use std::io::Write;

use remote_mgr::mock::{respond, USAGE};

fn main() -> anyhow::Result<()> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let (host, command) = match args.as_slice() {
        [host, command, ..] => (host.to_string_lossy(), command.to_string_lossy()),
        _ => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    respond(&mut stdout, &host, &command)?;
    stdout.flush()?;

    Ok(())
}
