use std::collections::HashSet;

use log::info;

use crate::config::Config;
use crate::utils::error::{BuildError, BuildResult};
use crate::utils::path::normalize_path;

/// Validate the configuration
pub fn validate_config(config: &Config) -> BuildResult<()> {
    validate_directories(config)?;
    validate_jobs(config)?;
    validate_asset_kinds(config)?;
    Ok(())
}

fn validate_directories(config: &Config) -> BuildResult<()> {
    if normalize_path(&config.source) == normalize_path(&config.destination) {
        return Err(BuildError::Config(format!(
            "Source and destination are the same directory: {}",
            config.source.display()
        )));
    }

    if config.destination.exists() && !config.destination.is_dir() {
        return Err(BuildError::Config(format!(
            "Destination path is not a directory: {}",
            config.destination.display()
        )));
    }

    if config.page_pattern.trim().is_empty() {
        return Err(BuildError::Config("page_pattern must not be empty".to_string()));
    }

    info!("Source directory: {}", config.source.display());
    info!("Destination directory: {}", config.destination.display());
    Ok(())
}

fn validate_jobs(config: &Config) -> BuildResult<()> {
    if config.jobs == Some(0) {
        return Err(BuildError::Config("jobs must be at least 1".to_string()));
    }
    Ok(())
}

fn validate_asset_kinds(config: &Config) -> BuildResult<()> {
    let mut seen_extensions = HashSet::new();

    for kind in &config.assets {
        if kind.directory.trim().is_empty() {
            return Err(BuildError::Config(format!(
                "Asset kind '{}' has an empty output directory",
                kind.name
            )));
        }

        if kind.extensions().next().is_none() {
            return Err(BuildError::Config(format!(
                "Asset kind '{}' lists no extensions",
                kind.name
            )));
        }

        for ext in kind.extensions() {
            if ext == "md" {
                return Err(BuildError::Config(format!(
                    "Asset kind '{}' claims Markdown sources",
                    kind.name
                )));
            }
            if !seen_extensions.insert(ext.to_string()) {
                return Err(BuildError::Config(format!(
                    "Extension '{}' belongs to more than one asset kind",
                    ext
                )));
            }
        }
    }

    Ok(())
}
