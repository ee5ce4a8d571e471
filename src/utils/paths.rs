use crate::error::{PkgxError, Result};
use crate::project_identity;
use directories::ProjectDirs;
use std::path::PathBuf;

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(
        "com",
        project_identity::CONFIG_DIR_NAME,
        project_identity::CONFIG_DIR_NAME,
    )
    .ok_or_else(|| PkgxError::Other("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

/// Settings file location; `PKGX_CONFIG` wins over the platform default.
pub fn settings_file() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(project_identity::config_env_key())
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join(project_identity::SETTINGS_FILE_BASENAME))
}
