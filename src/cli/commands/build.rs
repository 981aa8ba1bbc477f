use std::process::ExitCode;

use log::{error, info, warn};

use crate::builder::{self, BuildReport};
use crate::cli::types::{Cli, Commands};
use crate::config;

/// Handle the build command
pub fn handle_build_command(command: &Commands, cli: &Cli) -> ExitCode {
    let Commands::Build { jobs, strict, clean } = command else {
        return ExitCode::FAILURE;
    };

    let mut config = match super::resolve_config(cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Command line options take precedence over the config file
    if jobs.is_some() {
        config.jobs = *jobs;
    }
    if *strict {
        config.strict = true;
    }

    let config = match config::finalize_config(config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Building site...");
    let result = if *clean {
        builder::rebuild_site(&config)
    } else {
        builder::build_site(&config)
    };
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to build site: {}", e);
            return ExitCode::FAILURE;
        }
    };

    report.log_summary();
    if build_succeeded(&report, config.strict) {
        if report.is_clean() {
            info!("Site built successfully at {}", config.destination.display());
        } else {
            warn!("Site built with errors at {}", config.destination.display());
        }
        ExitCode::SUCCESS
    } else {
        error!("Build failed: {} file(s) could not be built", report.failures.len());
        ExitCode::FAILURE
    }
}

/// Per-file failures only fail the command in strict mode
fn build_succeeded(report: &BuildReport, strict: bool) -> bool {
    report.is_clean() || !strict
}
