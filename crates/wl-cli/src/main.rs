use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use wl_cli::commands::{check, report, sheet};
use wl_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so report output stays pipeable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(Commands::Report(args)) => report::run(&mut stdout, args, &config)?,
        Some(Commands::Sheet(args)) => sheet::run(&mut stdout, args, &config)?,
        Some(Commands::Check(args)) => check::run(&mut stdout, args, &config)?,
        None => {
            // No subcommand, show help
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
