//! CLI argument handling for aws-relay.
//!
//! The relay has no options of its own: every token after the program name
//! belongs to the AWS CLI and is forwarded untouched, including `--help`,
//! `--version`, `-v` and `--`. Tokens are kept as `OsString` so arguments
//! that are not valid UTF-8 survive the trip.

use crate::error::{RelayError, Result};
use crate::exit_codes;
use crate::relay::CommandRelay;
use crate::runner::ProcessRunner;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};

/// Name the usage message refers to.
pub const BIN_NAME: &str = "aws-relay";

/// Run AWS CLI commands with a sanitized environment.
#[derive(Parser, Debug)]
#[command(name = "aws-relay")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// AWS CLI command and arguments, e.g. `sts get-caller-identity`.
    #[arg(value_name = "AWS_ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse a full argv (first item is the program name).
    ///
    /// A `--` is placed after the program name so clap treats every caller
    /// token as a value, including a caller-supplied `--`.
    pub fn from_argv<I>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_else(|| BIN_NAME.into());

        Self::try_parse_from(
            std::iter::once(program)
                .chain(std::iter::once(OsString::from("--")))
                .chain(argv),
        )
        .map_err(|e| RelayError::Arguments(e.to_string()))
    }

    /// Whether there is anything to forward to the AWS CLI.
    pub fn has_command(&self) -> bool {
        !self.args.is_empty()
    }
}

/// Print the two-line usage message.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: {} <aws-command> [args...]", BIN_NAME)?;
    writeln!(out, "Example: {} sts get-caller-identity", BIN_NAME)
}

/// Relay one command line and return the process exit code.
///
/// With no forwarded arguments the usage message is written to `out` and no
/// process is spawned.
pub fn run<R, I, W>(relay: &CommandRelay<R>, argv: I, out: &mut W) -> Result<i32>
where
    R: ProcessRunner,
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let cli = Cli::from_argv(argv)?;

    if !cli.has_command() {
        write_usage(out)?;
        return Ok(exit_codes::FAILURE);
    }

    if relay.execute(&cli.args, out)? {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::FAILURE)
    }
}
