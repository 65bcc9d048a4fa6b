//! Error types for the Telldus tdtool adapter
//!
//! Every failure surfaced by this crate is a [`TelldusError`]. Each variant
//! carries a human-readable message describing which command or parse step
//! failed; there is no deeper cause chain.

use thiserror::Error;

/// Result type alias for Telldus operations
pub type Result<T> = std::result::Result<T, TelldusError>;

/// Error types for tdtool invocations and output parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelldusError {
    /// The executable could not be started or waited on
    #[error("Execution error: {0}")]
    Execution(String),

    /// The executable ran but exited unsuccessfully
    #[error("Command `{command}` failed with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Tool output did not match the expected format
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// The state of a device could not be determined
    #[error("State error: {0}")]
    StateUnknown(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TelldusError {
    /// Create an execution error
    pub fn execution<S: Into<String>>(msg: S) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a parsing error
    pub fn parsing<S: Into<String>>(msg: S) -> Self {
        Self::Parsing(msg.into())
    }

    /// Create a state error
    pub fn state_unknown<S: Into<String>>(msg: S) -> Self {
        Self::StateUnknown(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a failed-command error from the exit status and captured stderr
    pub fn command_failed<C, S, E>(command: C, status: S, stderr: E) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        E: Into<String>,
    {
        Self::CommandFailed {
            command: command.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Check if the error comes from tool output that could not be understood
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TelldusError::Parsing(_))
    }

    /// Check if the error comes from running the executable
    pub fn is_command_failure(&self) -> bool {
        matches!(
            self,
            TelldusError::Execution(_) | TelldusError::CommandFailed { .. }
        )
    }

    /// Short machine-readable name of the error kind
    pub fn error_type(&self) -> &'static str {
        match self {
            TelldusError::Execution(_) => "execution_error",
            TelldusError::CommandFailed { .. } => "command_failed",
            TelldusError::Parsing(_) => "parsing_error",
            TelldusError::StateUnknown(_) => "state_unknown",
            TelldusError::Config(_) => "config_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = TelldusError::parsing("could not extract dim result");
        let error_string = error.to_string();
        assert!(error_string.contains("Parsing error"));
        assert!(error_string.contains("could not extract dim result"));
    }

    #[test]
    fn test_command_failed_display() {
        let error = TelldusError::command_failed("tdtool --on 3", "1", "device not found");
        assert_eq!(
            error.to_string(),
            "Command `tdtool --on 3` failed with status 1: device not found"
        );
        assert!(error.is_command_failure());
        assert!(!error.is_parse_error());
    }

    #[test]
    fn test_error_classification() {
        assert_eq!(TelldusError::execution("x").error_type(), "execution_error");
        assert_eq!(TelldusError::state_unknown("x").error_type(), "state_unknown");
        assert_eq!(TelldusError::config("x").error_type(), "config_error");
        assert!(TelldusError::execution("spawn").is_command_failure());
        assert!(TelldusError::parsing("bad").is_parse_error());
    }

    #[test]
    fn test_error_type_names() {
        assert_eq!(
            TelldusError::command_failed("tdtool --list-devices", "1", "").error_type(),
            "command_failed"
        );
        assert_eq!(TelldusError::parsing("x").error_type(), "parsing_error");
    }
}
