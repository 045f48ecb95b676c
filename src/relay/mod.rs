//! Command relay: run the AWS CLI with a sanitized environment and relay
//! its result.
//!
//! Every call builds a fresh `Invocation` (absolute binary path, caller
//! arguments verbatim, caller environment with `PATH` and
//! `AWS_DEFAULT_REGION` pinned), hands it to a `ProcessRunner`, and blocks
//! until the child exits. There is no timeout and no retry.
//!
//! # Example
//!
//! ```no_run
//! use aws_relay::config::RelayConfig;
//! use aws_relay::relay::CommandRelay;
//!
//! let relay = CommandRelay::new(RelayConfig::default());
//! let args = vec!["sts".into(), "get-caller-identity".into()];
//! if !relay.execute(&args, &mut std::io::stdout().lock())? {
//!     std::process::exit(1);
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::config::RelayConfig;
use crate::environment::ExecutionEnvironment;
use crate::error::{RelayError, Result};
use crate::runner::{Invocation, ProcessOutput, ProcessRunner, SystemRunner};
use std::ffi::OsString;
use std::io::{self, Write};
use std::time::Instant;


/// Runs AWS CLI commands through a `ProcessRunner`.
#[derive(Debug, Clone)]
pub struct CommandRelay<R = SystemRunner> {
    config: RelayConfig,
    runner: R,
}

impl CommandRelay<SystemRunner> {
    /// Create a relay that spawns real processes.
    pub fn new(config: RelayConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: ProcessRunner> CommandRelay<R> {
    /// Create a relay with a custom runner.
    pub fn with_runner(config: RelayConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Build the child command for `args` from the current process environment.
    pub fn invocation(&self, args: &[OsString]) -> Result<Invocation> {
        Ok(Invocation {
            program: self.config.binary.clone(),
            args: args.to_vec(),
            env: ExecutionEnvironment::from_current(&self.config)?,
        })
    }

    /// Run the AWS CLI once and wait for it.
    ///
    /// # Returns
    ///
    /// * `Ok(ProcessOutput)` - The process exited with status 0
    /// * `Err(RelayError::CommandFailed)` - The process exited non-zero or was killed;
    ///   carries the trimmed stderr
    /// * `Err(RelayError::Launch)` - The process could not be started
    pub fn run(&self, args: &[OsString]) -> Result<ProcessOutput> {
        let invocation = self.invocation(args)?;

        // Argument and environment values can carry secrets; log only their sizes.
        tracing::debug!(
            program = %invocation.program.display(),
            args = invocation.args.len(),
            env_vars = invocation.env.len(),
            "invoking AWS CLI"
        );

        let start = Instant::now();
        let output = self.runner.run(&invocation).map_err(|source| {
            tracing::warn!(
                program = %invocation.program.display(),
                error = %source,
                "failed to launch AWS CLI"
            );
            RelayError::Launch {
                program: invocation.program.clone(),
                source,
            }
        })?;

        tracing::debug!(
            status = ?output.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "AWS CLI exited"
        );

        if output.success() {
            Ok(output)
        } else {
            Err(RelayError::CommandFailed {
                program: invocation.program,
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            })
        }
    }

    /// Run the AWS CLI and relay the outcome to `out`.
    ///
    /// - success: trimmed stdout, if any
    /// - non-zero exit: `Error: <trimmed stderr>`
    /// - launch failure: `Exception: <description>`
    ///
    /// Returns whether the command succeeded. An `Err` only means writing to
    /// `out` failed.
    pub fn execute<W: Write>(&self, args: &[OsString], out: &mut W) -> io::Result<bool> {
        match self.run(args) {
            Ok(output) => {
                let stdout = output.stdout.trim();
                if !stdout.is_empty() {
                    writeln!(out, "{}", stdout)?;
                }
                Ok(true)
            }
            Err(RelayError::CommandFailed { stderr, .. }) => {
                writeln!(out, "Error: {}", stderr)?;
                Ok(false)
            }
            Err(err) => {
                writeln!(out, "Exception: {}", err)?;
                Ok(false)
            }
        }
    }
}
