//! coge - template toolkit
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use coge::cli::{Cli, Commands};
use coge::config::ConfigManager;
use coge::error::{CogeError, CogeResult};
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CogeResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    // Find local config unless --no-local is set
    let local_config_path = if cli.no_local {
        None
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| CogeError::io("getting current directory", e))?;
        ConfigManager::find_local_config(&cwd)
    };

    let config = config_manager
        .load_merged(local_config_path.as_deref())
        .await?;

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("coge=warn"),
        1 => EnvFilter::new("coge=info"),
        _ => EnvFilter::new("coge=debug"),
    };

    if config.general.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init();
    }

    if let Some(ref path) = local_config_path {
        debug!("Using local config: {}", path.display());
    }

    coge::ui::init_theme();

    match cli.command {
        Commands::User(args) => coge::cli::commands::user(args, &config).await,
        Commands::Install(args) => coge::cli::commands::install(args, &config).await,
        Commands::Config(args) => {
            coge::cli::commands::config(args, &config, &config_manager).await
        }
    }
}
