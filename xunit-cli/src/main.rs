//! xunit-run - runs the xunit self-test suite and prints its summary

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::{error, info};

mod commands;
mod config;

use commands::*;
use config::CliConfig;

/// Run xunit test suites and print "N run, M failed"
#[derive(Parser)]
#[command(name = "xunit-run")]
#[command(about = "Run xunit test suites and print a one-line summary")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Never colour the summary
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the framework's own test suite (the default)
    SelfTest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose, &config)?;

    // Execute command
    let result = match cli.command.unwrap_or(Commands::SelfTest) {
        Commands::SelfTest => test_command(config.color && !cli.no_color),
    };

    match result {
        Ok(result) if result.was_successful() => {
            info!("Command completed successfully");
            Ok(())
        }
        Ok(result) => {
            info!(failed = result.error_count(), "Some tests failed");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool, config: &CliConfig) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        config.level()
    };

    // stdout carries only the summary line
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
