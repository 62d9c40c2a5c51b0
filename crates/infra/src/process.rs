// crates/infra/src/process.rs
use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use toolchain_ports::process::{ExitStatus, ProgramOutput, ProgramRunner};
use toolchain_shared_kernel::{ConfigError, InfrastructureError, Result};
use tracing::debug;

/// Interpreter used for `.py` case inputs unless configured otherwise.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Runs a case script through an interpreter, capturing standard output.
///
/// The script runs from its own directory so relative paths inside it resolve
/// against the case. Standard error is passed through to the user.
#[derive(Debug, Clone)]
pub struct InterpreterRunner {
    interpreter: OsString,
}

impl InterpreterRunner {
    pub fn new(interpreter: impl Into<OsString>) -> Self {
        Self { interpreter: interpreter.into() }
    }
}

impl ProgramRunner for InterpreterRunner {
    fn run(&self, script: &Path) -> Result<ProgramOutput> {
        let script = std::path::absolute(script)
            .map_err(|source| InfrastructureError::ResolvePath { path: script.to_path_buf(), source })?;

        let mut command = Command::new(&self.interpreter);
        command.arg(&script).stdin(Stdio::null()).stderr(Stdio::inherit());
        if let Some(dir) = script.parent() {
            command.current_dir(dir);
        }

        debug!(interpreter = ?self.interpreter, script = %script.display(), "running case script");
        let output = command.output().map_err(|source| ConfigError::ScriptLaunch {
            path: script.clone(),
            program: self.interpreter.to_string_lossy().into_owned(),
            source,
        })?;

        let status = output.status.code().map_or(ExitStatus::Terminated, ExitStatus::Code);
        debug!(status = %status.describe(), stdout_bytes = output.stdout.len(), "case script finished");

        Ok(ProgramOutput::new(String::from_utf8_lossy(&output.stdout), status))
    }
}
