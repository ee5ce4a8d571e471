//! Operation dispatch
//!
//! Turns `(descriptor, operation, packages)` into one concrete invocation of the
//! manager binary. At most one process is spawned per call and nothing is
//! retried.

use crate::backends::config::ManagerDescriptor;
use crate::core::{ExecutionResult, Operation};
use crate::error::{PkgxError, Result};
use crate::ui;

mod command_exec;

pub use command_exec::{CommandRunner, SystemRunner, exit_code_of};

/// Executes operations against a selected manager.
pub struct Dispatcher<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Dispatcher<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Run (or, with `dry_run`, describe) one operation.
    ///
    /// Failures are folded into the result: unsupported operations and spawn
    /// failures report exit code 1 with a message on `stderr`.
    pub fn execute(
        &self,
        descriptor: &ManagerDescriptor,
        operation: Operation,
        packages: &[String],
        dry_run: bool,
    ) -> ExecutionResult {
        match self.try_execute(descriptor, operation, packages, dry_run) {
            Ok(result) => result,
            Err(e) => ExecutionResult::failure(e.to_string()),
        }
    }

    /// Same as [`execute`](Self::execute) but keeps the typed error.
    pub fn try_execute(
        &self,
        descriptor: &ManagerDescriptor,
        operation: Operation,
        packages: &[String],
        dry_run: bool,
    ) -> Result<ExecutionResult> {
        let args = descriptor.args_for(operation, packages).ok_or_else(|| {
            PkgxError::UnsupportedOperation {
                manager: descriptor.name.to_string(),
                operation,
            }
        })?;

        let rendered = descriptor.render_command(&args);

        if dry_run {
            ui::verbose(&format!("dry-run: not spawning '{}'", rendered));
            return Ok(ExecutionResult::dry_run(rendered));
        }

        ui::verbose(&format!("Spawning: {}", rendered));
        let code = self.runner.run_interactive(descriptor.command, &args)?;
        Ok(ExecutionResult::from_exit_code(code))
    }
}

#[cfg(test)]
mod tests;
