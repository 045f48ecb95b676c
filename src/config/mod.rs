//! Relay configuration.
//!
//! This module defines `RelayConfig`: the absolute path of the AWS CLI, the
//! PATH handed to it, and the region it runs in. Values come from the fixed
//! system file `/etc/aws-relay/config.yaml` when it exists; anything the file
//! leaves out falls back to the built-in defaults, and unknown fields are
//! ignored.

mod model;
mod operations;


pub use model::{
    DEFAULT_BINARY, DEFAULT_REGION, DEFAULT_SEARCH_PATH, RelayConfig, SYSTEM_CONFIG_PATH,
};
