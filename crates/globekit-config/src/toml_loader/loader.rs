//! Core TOML config loading: read from path or platform default.

use crate::schema::{GlobekitConfig, CONFIG_SCHEMA_VERSION};
use crate::validation;
use globekit_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Out-of-range values are reset to their defaults one field at a time,
/// with a warning for each; everything else is kept as written.
pub fn load_from_path(path: &Path) -> Result<GlobekitConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let mut config: GlobekitConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if config.schema_version > CONFIG_SCHEMA_VERSION {
        warn!(
            "{} declares schema_version {}, newer than {CONFIG_SCHEMA_VERSION}; unknown keys are ignored",
            path.display(),
            config.schema_version
        );
    }

    for problem in validation::sanitize(&mut config) {
        warn!("{problem}, using the default");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/globekit/config.toml`
/// On Linux: `~/.config/globekit/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<GlobekitConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(GlobekitConfig::default())
        }
        Err(e) => Err(e),
    }
}
