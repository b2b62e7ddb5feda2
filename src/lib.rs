//! ludoview library root.
//! Exposes the data model, the view logic, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Items { .. } => cli::commands::items::handle(cli, cfg),
        Commands::Users { .. } => cli::commands::users::handle(cli, cfg),
        Commands::Late => cli::commands::late::handle(cli, cfg),
        Commands::Ledger { .. } => cli::commands::ledger::handle(cli, cfg),
        Commands::History { .. } => cli::commands::history::handle(cli, cfg),
        Commands::Stats => cli::commands::stats::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Diagnostics on stderr, filtered by `LUDOVIEW_LOG` (default: warn).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LUDOVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut cfg = Config::load()?;

    // --data wins over the configured snapshot
    if let Some(data) = &cli.data {
        cfg.snapshot = data.clone();
    }

    tracing::debug!(snapshot = %cfg.snapshot_path().display(), test = cli.test, "starting");

    dispatch(&cli, &cfg)
}
