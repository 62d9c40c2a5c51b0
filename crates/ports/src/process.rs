// crates/ports/src/process.rs
use std::path::Path;

use toolchain_shared_kernel::Result;

/// How an external program finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Code(i32),
    /// Terminated without an exit code, e.g. by a signal.
    Terminated,
}

impl ExitStatus {
    pub fn success(self) -> bool {
        self == Self::Code(0)
    }

    pub fn describe(self) -> String {
        match self {
            Self::Code(code) => format!("exit code {code}"),
            Self::Terminated => "terminated by signal".to_string(),
        }
    }
}

/// Captured result of running a program to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOutput {
    pub stdout: String,
    pub status: ExitStatus,
}

impl ProgramOutput {
    pub fn new(stdout: impl Into<String>, status: ExitStatus) -> Self {
        Self { stdout: stdout.into(), status }
    }
}

/// Port for executing a case script.
///
/// A non-zero exit is reported through [`ProgramOutput::status`], not as an error;
/// errors are reserved for programs that could not be started at all.
pub trait ProgramRunner {
    fn run(&self, script: &Path) -> Result<ProgramOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_code_zero_is_success() {
        assert!(ExitStatus::Code(0).success());
        assert!(!ExitStatus::Code(1).success());
        assert!(!ExitStatus::Terminated.success());
        assert_eq!(ExitStatus::Code(3).describe(), "exit code 3");
    }
}
