use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// High-level operations every package manager is asked to perform.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Install,
    Remove,
    Update,
    Upgrade,
    Search,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Install,
        Operation::Remove,
        Operation::Update,
        Operation::Upgrade,
        Operation::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Remove => "remove",
            Self::Update => "update",
            Self::Upgrade => "upgrade",
            Self::Search => "search",
        }
    }

    /// Operations that refuse to run without at least one package/query.
    pub fn requires_packages(&self) -> bool {
        matches!(self, Self::Install | Self::Remove | Self::Search)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

/// Outcome of one dispatched operation.
///
/// When the child inherits the terminal, `stdout`/`stderr` stay empty: only
/// synthetic results (dry-run, refusals) carry text here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn dry_run(rendered: String) -> Self {
        Self {
            exit_code: 0,
            stdout: format!("Would run: {}", rendered),
            stderr: String::new(),
        }
    }

    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Self::default()
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            exit_code: 1,
            stdout: String::new(),
            stderr: message,
        }
    }
}
