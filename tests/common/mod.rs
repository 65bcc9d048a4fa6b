//! Common test utilities
//!
//! Canned tdtool output, a mockall executor and environment helpers shared by
//! the integration tests.

#![allow(dead_code)]

pub mod test_fixtures;

use mockall::mock;
use std::path::Path;
use telldus_cli::executor::{CommandExecutor, CommandOutput};
use telldus_cli::Result;

mock! {
    pub Executor {}

    impl CommandExecutor for Executor {
        fn execute(&self, program: &Path, args: &[String]) -> Result<CommandOutput>;
    }
}

/// Executor expecting exactly one call with `expected_args`, answering `stdout`
pub fn expect_single_call(
    expected_args: &'static [&'static str],
    stdout: &'static str,
) -> MockExecutor {
    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .withf(move |program, args| program == Path::new("tdtool") && args == expected_args)
        .times(1)
        .returning(move |_, _| Ok(CommandOutput::success(stdout)));
    executor
}
