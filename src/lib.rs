//! rShopTrace library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! trajectory pipeline (`core`) with its loaders and exporters.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, conf_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, conf_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, conf_path),
        Commands::Validate { .. } => cli::commands::validate::handle(&cli.command, cfg),
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
        Commands::Visits { .. } => cli::commands::visits::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let conf_path = cli.conf.clone().unwrap_or_else(Config::config_file);

    // `init` must work even when an old file is broken
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load_from(&conf_path)?,
    };

    log::debug!("configuration from {}", conf_path.display());

    dispatch(&cli, &cfg, &conf_path)
}
