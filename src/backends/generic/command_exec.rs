use crate::error::{PkgxError, Result};
use crate::utils::platform::build_program_command;
use std::process::{ExitStatus, Stdio};

/// Spawns a package-manager process and waits for it.
pub trait CommandRunner {
    /// Run `program args...` attached to the caller's terminal and return its
    /// exit code.
    fn run_interactive(&self, program: &str, args: &[String]) -> Result<i32>;
}

/// Runner that spawns real processes.
///
/// No timeout is applied: the child runs until it exits or is signalled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_interactive(&self, program: &str, args: &[String]) -> Result<i32> {
        let mut cmd = build_program_command(program, args);
        let cmd_debug = format!("{:?}", cmd);

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| PkgxError::SpawnFailed {
            command: program.to_string(),
            source: e,
        })?;

        crate::ui::verbose(&format!("{} finished with {}", cmd_debug, status));
        Ok(exit_code_of(status))
    }
}

/// Translate a child's status into a shell-style exit code.
///
/// A child killed by a signal reports `128 + signal`, so an interrupted
/// manager surfaces as 130.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
