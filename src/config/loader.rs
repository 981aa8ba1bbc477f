use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults::CONFIG_FILES;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BuildError, BuildResult};

/// Load build configuration.
///
/// An explicit `config_file` must exist. Without one, the first of
/// `mdpress.yml` / `mdpress.yaml` found in `base_dir` is used, and plain
/// defaults apply when neither exists.
pub fn load_config<P: AsRef<Path>>(base_dir: P, config_file: Option<&Path>) -> BuildResult<Config> {
    let config_path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config_file(base_dir.as_ref()),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Check a configuration after command line overrides have been applied
pub fn finalize_config(config: Config) -> BuildResult<Config> {
    validation::validate_config(&config)?;
    Ok(config)
}

fn find_default_config_file(base_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.join(name))
        .find(|path| path.is_file())
}

fn parse_config_file(path: &Path) -> BuildResult<Config> {
    if !path.exists() {
        return Err(BuildError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        BuildError::Config(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // An empty file is a valid "all defaults" configuration
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|e| {
        BuildError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}
