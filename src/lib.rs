//! aws-relay: run AWS CLI commands with a sanitized environment.
//!
//! The AWS CLI is started directly from a fixed absolute path (never through
//! a shell) with `PATH` and `AWS_DEFAULT_REGION` pinned, and its output and
//! success are relayed back to the caller. See [`relay::CommandRelay`].

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod relay;
pub mod runner;

#[cfg(test)]
mod test_support;
