use std::process::ExitCode;

// Module declarations
mod builder;
mod cli;
mod config;
mod front_matter;
mod layout;
mod liquid;
mod markdown;
mod utils;

fn main() -> ExitCode {
    cli::run()
}
