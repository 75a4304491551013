//! sheetsite CLI - render spreadsheet workbooks as a static HTML site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::build::BuildArgs;

#[derive(Parser)]
#[command(name = "sheetsite")]
#[command(about = "Render spreadsheet workbooks as a static HTML site")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    build: BuildArgs,

    /// Path to sheetsite.toml config file
    #[arg(short, long, default_value = "sheetsite.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default sheetsite.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Some(Commands::Init { yes }) => {
            commands::init::run(&cli.config, yes)?;
        }
        None => {
            commands::build::run(&cli.config, cli.build)?;
        }
    }

    Ok(())
}
