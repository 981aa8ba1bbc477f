use std::process::ExitCode;

use log::{error, info};

use crate::builder;
use crate::cli::types::Cli;

/// Handle the clean command
pub fn handle_clean_command(cli: &Cli) -> ExitCode {
    let config = match super::resolve_config(cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Cleaning site at {}", config.destination.display());
    match builder::clean_site(&config) {
        Ok(_) => {
            info!("Site cleaned successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to clean site: {}", e);
            ExitCode::FAILURE
        }
    }
}
