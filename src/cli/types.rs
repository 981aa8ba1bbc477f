use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "mdpress")]
#[command(about = "Minimal static site generator: Markdown pages, one layout, static assets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory (defaults to ./src)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination directory (defaults to ./dist)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Configuration file (defaults to ./mdpress.yml when present)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long, default_value_t = false, conflicts_with = "debug")]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build your site (the default)
    #[command(alias = "b")]
    Build {
        /// Worker threads (defaults to one per CPU)
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,

        /// Exit with an error if any page or asset failed
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Remove the destination directory before building
        #[arg(long, default_value_t = false)]
        clean: bool,
    },

    /// Remove the destination directory without building
    Clean {},
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Build {
            jobs: None,
            strict: false,
            clean: false,
        }
    }
}
