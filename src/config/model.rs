//! RelayConfig struct definition and defaults.

use serde::Deserialize;
use std::path::PathBuf;

/// Absolute location of the AWS CLI.
pub const DEFAULT_BINARY: &str = "/opt/homebrew/bin/aws";

/// Directories placed on the child's PATH, in search order.
pub const DEFAULT_SEARCH_PATH: &[&str] = &[
    "/usr/bin",
    "/bin",
    "/usr/sbin",
    "/sbin",
    "/opt/homebrew/bin",
];

/// System-wide config file. Only an administrator can change it; nothing in
/// the caller's environment or argv selects a different file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/aws-relay/config.yaml";

/// Value forced into `AWS_DEFAULT_REGION`.
pub const DEFAULT_REGION: &str = "af-south-1";

/// Configuration for a `CommandRelay`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Absolute path to the AWS CLI executable.
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Directories joined into the child's `PATH`.
    #[serde(default = "default_search_path")]
    pub search_path: Vec<PathBuf>,

    /// Region written to `AWS_DEFAULT_REGION`.
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            search_path: default_search_path(),
            region: default_region(),
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from(DEFAULT_BINARY)
}

fn default_search_path() -> Vec<PathBuf> {
    DEFAULT_SEARCH_PATH.iter().map(PathBuf::from).collect()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}
