use crate::runner::{Invocation, ProcessOutput, ProcessRunner};
use std::cell::RefCell;
use std::io;
#[cfg(unix)]
use std::path::{Path, PathBuf};

/// Runner that records every invocation and replays a canned result.
pub(crate) struct FakeRunner {
    response: FakeResponse,
    calls: RefCell<Vec<Invocation>>,
}

enum FakeResponse {
    Exit(ProcessOutput),
    LaunchFailure(io::ErrorKind),
}

impl FakeRunner {
    pub(crate) fn exiting(status: i32, stdout: &str, stderr: &str) -> Self {
        Self::new(FakeResponse::Exit(ProcessOutput {
            status: Some(status),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }))
    }

    pub(crate) fn killed() -> Self {
        Self::new(FakeResponse::Exit(ProcessOutput::default()))
    }

    pub(crate) fn failing_to_launch(kind: io::ErrorKind) -> Self {
        Self::new(FakeResponse::LaunchFailure(kind))
    }

    fn new(response: FakeResponse) -> Self {
        Self {
            response,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        match &self.response {
            FakeResponse::Exit(output) => Ok(output.clone()),
            FakeResponse::LaunchFailure(kind) => Err(io::Error::from(*kind)),
        }
    }
}

/// Write an executable `/bin/sh` script named `aws` into `dir`.
#[cfg(unix)]
pub(crate) fn write_stub_executable(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("aws");
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
