//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{scan_cmd, validate_cmd};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "docinv")]
#[command(author, version, about = "Index documentation files across a collection of repositories")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to docinv.toml in this or a parent directory)
    #[arg(long, short = 'c', global = true, env = "DOCINV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Runs `scan` with configured settings when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan repositories and write the documentation inventory
    Scan(scan_cmd::ScanArgs),

    /// Check that an inventory file can be read and queried
    Validate(validate_cmd::ValidateArgs),

    /// Print the effective configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    match &config.source {
        Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
        None => output.verbose_ctx("config", "Using built-in defaults"),
    }

    match cli.command.unwrap_or_else(|| Commands::Scan(scan_cmd::ScanArgs::default())) {
        Commands::Scan(args) => scan_cmd::run(args, &config, &output)?,
        Commands::Validate(args) => validate_cmd::run(args, &config, &output)?,
        Commands::Config => show_config(&config, &output)?,
    }

    Ok(())
}

fn show_config(config: &Config, output: &Output) -> Result<()> {
    if output.is_json() {
        output.data(&serde_json::json!({
            "source": config.source.as_ref().map(|p| p.display().to_string()),
            "config": config,
        }));
    } else {
        match &config.source {
            Some(path) => println!("# Loaded from {}", path.display()),
            None => println!("# Built-in defaults"),
        }
        print!("{}", config.to_toml()?);
    }

    Ok(())
}
