//! Logging setup using tracing.
//!
//! Diagnostics always go to stderr; stdout belongs to the relayed AWS CLI
//! output.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive (e.g. `aws_relay=debug`).
pub const LOG_ENV: &str = "AWS_RELAY_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize the global subscriber.
///
/// `AWS_RELAY_LOG` selects the filter and falls back to `warn`. It only
/// affects diagnostics on stderr, never the child or its environment.
pub fn init() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
