//! remote-mgr - Entry point
//!
//! Parses CLI arguments, validates configuration, runs the command on the
//! remote host and reports the outcome. A failed remote command ends the
//! process with its exit code; success falls through to exit code 0.

use std::io::Write;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use remote_mgr::config::{Args, Config};
use remote_mgr::error::Result;
use remote_mgr::{report, ssh};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing/logging to stderr (stdout is for the report)
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    // Validate and create config
    let config = Config::from_args(args)?;
    let target = config.target();

    info!(
        "remote-mgr v{}: {} via {} (timeout {}s)",
        env!("CARGO_PKG_VERSION"),
        target.destination(),
        target.program,
        target.timeout.as_secs()
    );

    let mut stdout = std::io::stdout();

    if !config.json {
        report::write_connecting(&mut stdout, &target)?;
        stdout.flush()?;
    }

    let result = ssh::execute(&target, &config.command).await;

    if config.json {
        report::write_json(&mut stdout, &result)?;
    } else {
        report::write_report(&mut stdout, &config.host, &result)?;
    }
    stdout.flush()?;

    if let Some(code) = report::exit_code(&result) {
        info!("Exiting with code {}", code);
        std::process::exit(code);
    }

    Ok(())
}
