//! `gh-shorthand` command line entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::config::{cmd_config, ConfigAction};
use commands::resolve::{cmd_items, cmd_resolve};

#[derive(Parser)]
#[command(name = "gh-shorthand", about = "Expand GitHub shorthand for launcher workflows")]
struct Cli {
    /// Config file to use instead of ~/.config/gh-shorthand/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve shorthand and print the match as JSON
    Resolve {
        /// Shorthand input, e.g. "zw 42", "owner/name /pulls", "gh"
        #[arg(value_name = "INPUT", default_value = "")]
        input: String,
    },

    /// Resolve shorthand and print Alfred script-filter items
    Items {
        /// Shorthand input, e.g. "zw 42", "owner/name /pulls", "gh"
        #[arg(value_name = "INPUT", default_value = "")]
        input: String,
    },

    /// Manage shorthand configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("GH_SHORTHAND_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Resolve { input } => cmd_resolve(config_path, &input)?,
        Commands::Items { input } => cmd_items(config_path, &input)?,
        Commands::Config { action } => cmd_config(config_path, action)?,
    }

    Ok(())
}
