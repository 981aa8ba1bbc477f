pub mod types;
pub mod commands;
pub mod logging;

use std::process::ExitCode;

use clap::Parser;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    logging::init_logging(logging::log_level(cli.debug, cli.quiet));
    logging::configure_backtrace(cli.trace);

    match cli.command.clone().unwrap_or_default() {
        command @ types::Commands::Build { .. } => commands::handle_build_command(&command, &cli),
        types::Commands::Clean {} => commands::handle_clean_command(&cli),
    }
}
