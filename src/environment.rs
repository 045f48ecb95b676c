//! Execution environment for the AWS CLI child process.
//!
//! The child sees the caller's environment with exactly two keys replaced:
//! `PATH` and `AWS_DEFAULT_REGION`. The environment is rebuilt for every
//! invocation and never cached.

use crate::config::RelayConfig;
use crate::error::Result;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Search-path variable overridden for the child.
pub const PATH_VAR: &str = "PATH";

/// Region variable overridden for the child.
pub const REGION_VAR: &str = "AWS_DEFAULT_REGION";

/// Variable mapping handed to the child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionEnvironment {
    vars: BTreeMap<OsString, OsString>,
}

impl ExecutionEnvironment {
    /// Copy `inherited` and overwrite the path and region entries from `config`.
    pub fn build<I>(inherited: I, config: &RelayConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut vars: BTreeMap<OsString, OsString> = inherited.into_iter().collect();
        vars.insert(PATH_VAR.into(), config.joined_search_path()?);
        vars.insert(REGION_VAR.into(), config.region.clone().into());
        Ok(Self { vars })
    }

    /// Build from a fresh snapshot of this process's environment.
    pub fn from_current(config: &RelayConfig) -> Result<Self> {
        Self::build(std::env::vars_os(), config)
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}
