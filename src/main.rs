//! Entry point for the `aws-relay` CLI.
//!
//! Loads the system relay configuration, forwards every argument to the AWS
//! CLI once, and maps the outcome to the process exit code.

use aws_relay::cli;
use aws_relay::config::{RelayConfig, SYSTEM_CONFIG_PATH};
use aws_relay::error::Result;
use aws_relay::logging;
use aws_relay::relay::CommandRelay;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logging is best effort; the relay works without a subscriber.
    let _ = logging::init();

    match run() {
        Ok(code) => exit(code),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            exit(err.exit_code())
        }
    }
}

fn run() -> Result<i32> {
    let config = RelayConfig::load_or_default(SYSTEM_CONFIG_PATH)?;
    tracing::debug!(
        binary = %config.binary.display(),
        region = %config.region,
        "loaded relay config"
    );

    let relay = CommandRelay::new(config);
    let mut stdout = io::stdout().lock();
    let code = cli::run(&relay, std::env::args_os(), &mut stdout)?;
    stdout.flush()?;
    Ok(code)
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(code as u8)
}
