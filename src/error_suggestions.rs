//! Error suggestions and helpful messages
//!
//! Provides actionable suggestions for common error scenarios

use crate::error::PkgxError;
use crate::project_identity;
use colored::Colorize;

/// Extension trait to add suggestions to errors
pub trait ErrorSuggestions {
    /// Get a helpful suggestion for this error
    fn suggestion(&self) -> Option<String>;

    /// Display the error with its suggestion
    fn display_with_suggestion(&self) -> String;
}

impl ErrorSuggestions for PkgxError {
    fn suggestion(&self) -> Option<String> {
        match self {
            PkgxError::NoManagerAvailable { supported } => Some(format!(
                "Supported package managers: {}",
                supported.join(", ")
            )),
            PkgxError::UnknownManager(_) => Some(format!(
                "Use '{}' to see available managers",
                format!("{} list-managers", project_identity::BINARY_NAME).cyan()
            )),
            PkgxError::UnsupportedOperation { .. } => Some(format!(
                "Pick another manager with {} if one is installed",
                "--manager <NAME>".cyan()
            )),
            PkgxError::SpawnFailed { .. } => Some(format!(
                "The manager may have been removed since detection; run '{}' again",
                format!("{} list-managers", project_identity::BINARY_NAME).cyan()
            )),
            PkgxError::InvalidPackageName(_) => Some(
                "Package names cannot be empty, contain whitespace or start with '-'".to_string(),
            ),
            PkgxError::InvalidSearchQuery(_) => Some(
                "Search queries cannot be empty, contain control characters or start with '-'"
                    .to_string(),
            ),
            PkgxError::ConfigError(_) => Some(format!(
                "Check the settings file, or point {} at another one",
                project_identity::config_env_key().cyan()
            )),
            _ => None,
        }
    }

    fn display_with_suggestion(&self) -> String {
        match self.suggestion() {
            Some(hint) => format!("{}\n{}", self, hint),
            None => self.to_string(),
        }
    }
}
