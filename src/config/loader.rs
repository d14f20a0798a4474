//! Configuration file loading.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScoutError};

use super::schema::McpConfig;

/// Default configuration file name, relative to the project root.
pub const CONFIG_FILE: &str = "mcp-config.json";

/// Package manifest the server packages are installed against.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Resolve the configuration path for a project root, honoring an
/// explicit override.
pub fn config_path(project_root: &Path, override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => project_root.join(path),
        None => project_root.join(CONFIG_FILE),
    }
}

/// Load and parse the configuration file.
///
/// A missing file is [`ScoutError::ConfigNotFound`]; a present but
/// malformed file is [`ScoutError::ConfigParseError`] with the serde
/// diagnostic preserved.
pub fn load_config(path: &Path) -> Result<McpConfig> {
    if !path.exists() {
        return Err(ScoutError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|err| ScoutError::ConfigParseError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Load the configuration if the file exists; `None` when it does not.
///
/// Used where a missing config only degrades output (the readiness check
/// reports it through a probe instead of aborting). A malformed file is
/// still an error.
pub fn load_config_if_present(path: &Path) -> Result<Option<McpConfig>> {
    match load_config(path) {
        Ok(config) => Ok(Some(config)),
        Err(ScoutError::ConfigNotFound { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
