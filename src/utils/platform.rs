use std::fmt;
use std::process::Command;

/// Operating system family used for manager preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Darwin,
    Linux,
    Other(String),
}

impl OsFamily {
    /// Family of the host this binary was built for.
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Map an OS identifier (`std::env::consts::OS` or `uname`-style) to a family.
    pub fn from_identifier(id: &str) -> Self {
        match id.to_ascii_lowercase().as_str() {
            "windows" => Self::Windows,
            "macos" | "darwin" => Self::Darwin,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("windows"),
            Self::Darwin => f.write_str("darwin"),
            Self::Linux => f.write_str("linux"),
            Self::Other(id) => f.write_str(id),
        }
    }
}

/// Build a direct program invocation (no shell in between).
///
/// Arguments are passed verbatim, so package names never go through shell
/// word splitting.
pub fn build_program_command(program: &str, args: &[String]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd
}
