//! Settings Module
//!
//! Optional user settings read from a KDL file:
//!
//! ```kdl
//! manager "apk"
//! color "never"
//! verbose #true
//! ```
//!
//! Keys may also be wrapped in a `settings { ... }` block.

use crate::error::{PkgxError, Result};
use crate::ui::ColorMode;
use crate::utils::paths;
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::Path;

const VALID_KEYS: [&str; 3] = ["manager", "color", "verbose"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Manager used instead of auto-detection
    pub manager: Option<String>,
    pub color: ColorMode,
    pub verbose: bool,
}

impl Settings {
    /// Load settings from the default location; a missing file means defaults.
    pub fn load() -> Result<Self> {
        let path = paths::settings_file()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PkgxError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| match e {
            PkgxError::ConfigError(msg) => {
                PkgxError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse settings from KDL text.
    pub fn parse(content: &str) -> Result<Self> {
        let doc: KdlDocument = content
            .parse()
            .map_err(|e: kdl::KdlError| PkgxError::ConfigError(format!("KDL parse error: {}", e)))?;

        let mut settings = Self::default();
        for node in doc.nodes() {
            if node.name().value() == "settings" {
                if let Some(children) = node.children() {
                    for child in children.nodes() {
                        settings.apply(child)?;
                    }
                }
            } else {
                settings.apply(node)?;
            }
        }

        Ok(settings)
    }

    fn apply(&mut self, node: &KdlNode) -> Result<()> {
        let key = node.name().value();
        match key {
            "manager" => {
                let name = string_arg(node)?;
                if name.trim().is_empty() {
                    return Err(PkgxError::ConfigError(
                        "Setting 'manager' cannot be empty".to_string(),
                    ));
                }
                self.manager = Some(name);
            }
            "color" => {
                self.color = string_arg(node)?
                    .parse()
                    .map_err(PkgxError::ConfigError)?;
            }
            "verbose" => {
                self.verbose = node
                    .entries()
                    .first()
                    .and_then(|entry| entry.value().as_bool())
                    .ok_or_else(|| {
                        PkgxError::ConfigError(
                            "Setting 'verbose' expects #true or #false".to_string(),
                        )
                    })?;
            }
            other => {
                return Err(PkgxError::ConfigError(format!(
                    "Unknown setting: '{}'. Valid settings: {}",
                    other,
                    VALID_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

fn string_arg(node: &KdlNode) -> Result<String> {
    node.entries()
        .first()
        .and_then(|entry| entry.value().as_string())
        .map(str::to_string)
        .ok_or_else(|| {
            PkgxError::ConfigError(format!(
                "Setting '{}' expects a string value",
                node.name().value()
            ))
        })
}
