//! Exit code constants for the aws-relay CLI.
//!
//! The relay only distinguishes two outcomes:
//! - 0: The AWS CLI ran and exited successfully
//! - 1: Anything else (usage error, bad config, launch failure, non-zero exit)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error, config error, launch failure, or the AWS CLI exited non-zero.
pub const FAILURE: i32 = 1;
