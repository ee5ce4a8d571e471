use crate::core::Operation;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code reported for every failure that is not a propagated child code.
pub const EXIT_FAILURE: i32 = 1;

/// Conventional exit code for SIGINT (128 + 2).
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Error, Debug)]
pub enum PkgxError {
    #[error("No package manager found on this system")]
    NoManagerAvailable { supported: Vec<String> },

    #[error("Package manager '{0}' not found or not available")]
    UnknownManager(String),

    #[error("Operation '{operation}' is not supported by {manager}")]
    UnsupportedOperation {
        manager: String,
        operation: Operation,
    },

    #[error("Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("Invalid search query: {0}")]
    InvalidSearchQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),

    #[error("{0}")]
    Other(String),
}

impl PkgxError {
    /// Process exit code for this failure.
    ///
    /// An interrupt maps to 130; everything else is a generic failure. A
    /// manager's own non-zero code is not an error and never reaches here.
    pub fn exit_code(&self) -> i32 {
        match self {
            PkgxError::Interrupted => EXIT_INTERRUPTED,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, PkgxError>;
