mod build;
mod clean;

pub use build::handle_build_command;
pub use clean::handle_clean_command;

use std::path::PathBuf;

use crate::cli::types::Cli;
use crate::config::{self, Config};
use crate::utils::error::BuildResult;

/// Load the configuration and apply the global command line overrides
fn resolve_config(cli: &Cli) -> BuildResult<Config> {
    let mut config = config::load_config(PathBuf::from("."), cli.config.as_deref())?;

    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(destination) = &cli.destination {
        config.destination = destination.clone();
    }

    Ok(config)
}
