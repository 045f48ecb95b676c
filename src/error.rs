//! Error types for the aws-relay CLI.
//!
//! Uses thiserror for derive macros. Launch failures and non-zero exits are
//! separate variants so callers never have to parse message prefixes.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for relay operations.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The AWS CLI could not be started at all (missing binary, permissions, ...).
    #[error("failed to launch {}: {source}", .program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The AWS CLI ran but did not exit successfully.
    ///
    /// `status` is `None` when the process was terminated by a signal.
    #[error("{} exited with {}: {stderr}", .program.display(), describe_status(.status))]
    CommandFailed {
        program: PathBuf,
        status: Option<i32>,
        stderr: String,
    },

    /// The command line could not be collected.
    #[error("{0}")]
    Arguments(String),

    /// Configuration could not be read, parsed, or validated.
    #[error("{0}")]
    Config(String),

    /// Relayed output could not be written to the caller.
    #[error("failed to write relayed output: {0}")]
    Output(#[from] std::io::Error),
}

impl RelayError {
    /// Returns the process exit code for this error.
    ///
    /// Every failure maps to the same status; the variants only matter for
    /// how the failure is reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            RelayError::Launch { .. }
            | RelayError::CommandFailed { .. }
            | RelayError::Arguments(_)
            | RelayError::Config(_)
            | RelayError::Output(_) => exit_codes::FAILURE,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match *status {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
