//! Config loading and validation.

use super::model::RelayConfig;
use crate::error::{RelayError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

impl RelayConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(RelayConfig)` - Successfully loaded and validated config
    /// * `Err(RelayError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RelayError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if the file exists, otherwise use the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Missing fields take their defaults; unknown fields are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RelayConfig = serde_yaml::from_str(yaml)
            .map_err(|e| RelayError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Builder-style override of the AWS CLI location.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Builder-style override of the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `binary` must be an absolute path
    /// - `region` must be non-empty
    /// - `search_path` must be non-empty and joinable into a single PATH value
    pub fn validate(&self) -> Result<()> {
        if !self.binary.is_absolute() {
            return Err(RelayError::Config(format!(
                "config validation failed: binary must be an absolute path (found '{}')",
                self.binary.display()
            )));
        }

        if self.region.trim().is_empty() {
            return Err(RelayError::Config(
                "config validation failed: region must be non-empty".to_string(),
            ));
        }

        if self.search_path.is_empty() {
            return Err(RelayError::Config(
                "config validation failed: search_path must list at least one directory"
                    .to_string(),
            ));
        }

        self.joined_search_path()?;
        Ok(())
    }

    /// The `PATH` value handed to the child, in `search_path` order.
    pub fn joined_search_path(&self) -> Result<OsString> {
        std::env::join_paths(&self.search_path).map_err(|e| {
            RelayError::Config(format!("config validation failed: search_path: {}", e))
        })
    }
}
