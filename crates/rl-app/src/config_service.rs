//! Configuration file services.

use crate::error::{AppError, AppResult};
use rl_config::{ReactorConfig, validate_config};
use std::fs;
use std::path::Path;

/// Load and validate a run configuration.
pub fn load_config(path: &Path) -> AppResult<ReactorConfig> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ReactorConfig =
        serde_yaml::from_str(&content).map_err(|err| AppError::Config(err.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Write a configuration back to disk.
pub fn save_config(path: &Path, config: &ReactorConfig) -> AppResult<()> {
    let content =
        serde_yaml::to_string(config).map_err(|err| AppError::Config(err.to_string()))?;
    fs::write(path, content).map_err(|source| AppError::ConfigFileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
