//! Mock implementations for testing
//!
//! This module provides a scripted tdtool stand-in so repository logic can be
//! exercised without the real executable.

use crate::error::{Result, TelldusError};
use crate::executor::{CommandExecutor, CommandOutput};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Scripted executor answering from canned outputs keyed by argument list
#[derive(Debug, Default)]
pub struct MockTdtool {
    responses: HashMap<Vec<String>, CommandOutput>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockTdtool {
    /// Create new mock executor with no scripted responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `args` with a successful run printing `stdout`
    pub fn with_output(self, args: &[&str], stdout: &str) -> Self {
        self.with_response(args, CommandOutput::success(stdout))
    }

    /// Answer `args` with an arbitrary output
    pub fn with_response(mut self, args: &[&str], output: CommandOutput) -> Self {
        self.responses
            .insert(args.iter().map(|a| a.to_string()).collect(), output);
        self
    }

    /// Argument lists received so far, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.lock_calls().clone()
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<Vec<String>>> {
        // Poisoned by a panicking test thread; the recorded calls are still valid
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CommandExecutor for MockTdtool {
    fn execute(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        self.lock_calls().push(args.to_vec());

        self.responses.get(args).cloned().ok_or_else(|| {
            TelldusError::execution(format!(
                "No scripted response for {} {}",
                program.display(),
                args.join(" ")
            ))
        })
    }
}
