//! Process runner for the relay.
//!
//! `ProcessRunner` is the seam between relay logic and the operating system:
//! it takes a fully-built `Invocation` and returns the captured result.
//! `SystemRunner` is the real implementation; tests substitute a fake.

use crate::environment::ExecutionEnvironment;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// A fully-built child command: program, argument vector, environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Absolute path of the executable.
    pub program: PathBuf,
    /// Arguments after the program, passed verbatim.
    pub args: Vec<OsString>,
    /// The complete child environment.
    pub env: ExecutionEnvironment,
}

impl Invocation {
    /// The argument vector as the child sees it, program first.
    ///
    /// Lossy; for display and assertions only.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub status: Option<i32>,
    /// Standard output, decoded as text.
    pub stdout: String,
    /// Standard error, decoded as text.
    pub stderr: String,
}

impl ProcessOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Returns true if the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an `Invocation` to completion.
pub trait ProcessRunner {
    /// Spawn the invocation, wait for it, and capture both output streams.
    ///
    /// An `Err` means the process could not be started or waited on; a
    /// non-zero exit is an `Ok` with the status recorded.
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        (**self).run(invocation)
    }
}

/// Runs invocations with `std::process::Command`.
///
/// No shell is involved: the program is executed directly and every argument
/// reaches it as a single argv element. The child environment is cleared and
/// repopulated from the invocation, and stdin is inherited so the AWS CLI can
/// still prompt (e.g. for an MFA code). The call blocks until the child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .env_clear()
            .envs(invocation.env.iter())
            .stdin(Stdio::inherit())
            .output()?;

        Ok(ProcessOutput::from_output(&output))
    }
}
