//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const BINARY_NAME: &str = "pkgx";
pub const CONFIG_DIR_NAME: &str = "pkgx";
pub const ENV_PREFIX: &str = "PKGX";
pub const SETTINGS_FILE_BASENAME: &str = "settings.kdl";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

/// Environment variable naming a default manager (`PKGX_MANAGER`).
pub fn manager_env_key() -> String {
    env_key("MANAGER")
}

/// Environment variable overriding the settings file path (`PKGX_CONFIG`).
pub fn config_env_key() -> String {
    env_key("CONFIG")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_share_project_prefix() {
        assert_eq!(manager_env_key(), "PKGX_MANAGER");
        assert_eq!(config_env_key(), "PKGX_CONFIG");
    }
}
