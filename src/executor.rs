//! Process execution for the tdtool executable
//!
//! The repository only needs "run this program with these arguments and hand
//! back what it printed". [`CommandExecutor`] is that seam; the system
//! implementation blocks until the child exits.

use crate::error::{Result, TelldusError};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Captured result of one finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout
    pub fn success<S: Into<String>>(stdout: S) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr
    pub fn failure<S: Into<String>>(status: i32, stderr: S) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }

    /// Human-readable exit status
    pub fn status_text(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs an external program and captures its output
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args`, blocking until it exits
    fn execute(&self, program: &Path, args: &[String]) -> Result<CommandOutput>;
}

/// [`CommandExecutor`] backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        debug!(program = %program.display(), ?args, "Running command");

        let output = Command::new(program).args(args).output().map_err(|e| {
            TelldusError::execution(format!(
                "Failed to run {}: {}",
                program.display(),
                e
            ))
        })?;

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            TelldusError::parsing(format!(
                "Invalid UTF-8 in output of {}: {}",
                program.display(),
                e
            ))
        })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_helpers() {
        let ok = CommandOutput::success("done");
        assert!(ok.is_success());
        assert_eq!(ok.stdout, "done");

        let failed = CommandOutput::failure(2, "boom");
        assert!(!failed.is_success());
        assert_eq!(failed.status_text(), "2");

        let killed = CommandOutput {
            status: None,
            ..Default::default()
        };
        assert!(!killed.is_success());
        assert_eq!(killed.status_text(), "terminated by signal");
    }

    #[test]
    fn test_missing_executable_is_execution_error() {
        let err = SystemCommandExecutor
            .execute(Path::new("/nonexistent/tdtool-binary"), &[])
            .unwrap_err();
        assert!(matches!(err, TelldusError::Execution(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_and_status() {
        let args = ["-c".to_string(), "printf 'id=1\\tname=A'; exit 3".to_string()];
        let output = SystemCommandExecutor.execute(Path::new("sh"), &args).unwrap();
        assert_eq!(output.status, Some(3));
        assert_eq!(output.stdout, "id=1\tname=A");
    }
}
